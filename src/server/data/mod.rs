//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the data layer separate from business logic. Repositories are
//! generic over `ConnectionTrait` so the same code runs on a pooled connection or inside
//! a `DatabaseTransaction`.

pub mod catalog;
pub mod destination;
pub mod image;
pub mod user;

#[cfg(test)]
mod test;
