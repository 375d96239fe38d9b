//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They validate
//! cross-entity rules, own transaction boundaries and talk to the image host, while
//! working with domain models rather than DTOs or entity models.

pub mod auth;
pub mod catalog;
pub mod destination;
pub mod health;
pub mod image;
pub mod user;

#[cfg(test)]
mod test;
