//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: HTTP endpoints, business logic, data
//! access and the image host client. The backend uses Axum as the web framework and
//! SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic, transactions and upload orchestration
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, image host, upload bounds)
//! - **Startup** (`startup`) - Tracing, database, session and HTTP client initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Image host** (`image_host/`) - Remote image storage behind the `ImageHost` trait
//! - **Utilities** (`util/`) - Slugs, decimal parsing, text normalization and multipart forms
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** resolves the session user and checks permissions
//! 3. **Controller** converts DTOs to params, calls service
//! 4. **Service** validates references, uploads images, runs the transaction
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod image_host;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
