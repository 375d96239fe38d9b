//! HTTP request handlers.
//!
//! Controllers check access through `AuthGuard`, convert DTOs into params, call a
//! service and convert the result back into a DTO. Every handler carries a
//! `utoipa::path` annotation that feeds the generated OpenAPI document.

pub mod auth;
pub mod catalog;
pub mod destination;
pub mod health;
pub mod image;
