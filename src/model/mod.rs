//! Request and response DTOs shared by the HTTP layer.
//!
//! Everything in here is plain serde data with OpenAPI schemas attached. Domain
//! models in `server::model` convert to and from these types at the controller
//! boundary.

pub mod api;
pub mod auth;
pub mod catalog;
pub mod destination;
pub mod health;
pub mod image;
