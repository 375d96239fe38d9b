//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the
//! fields they care about. Each entity has a `Factory` builder for customization and
//! a `create_*` shortcut for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let hotel = factory::create_accommodation_type(&db).await?;
//!     let destination = factory::create_destination(&db).await?;
//!
//!     let (destination, attraction) =
//!         factory::helpers::create_destination_with_attraction(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let destination = factory::destination::DestinationFactory::new(&db)
//!     .name("Sylhet")
//!     .region("Sylhet Division")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `catalog` - Accommodation, transport and activity type references
//! - `destination` - Destinations, attractions and their images
//! - `user` - User accounts
//! - `helpers` - Counter and convenience methods for entities with dependencies

pub mod catalog;
pub mod destination;
pub mod helpers;
pub mod user;

pub use catalog::{create_accommodation_type, create_activity_type, create_transport_type};
pub use destination::{
    create_attraction, create_attraction_image, create_destination, create_destination_image,
};
pub use user::create_user;
