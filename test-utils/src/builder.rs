use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Destination, DestinationImage};
///
/// let test = TestBuilder::new()
///     .with_table(Destination)
///     .with_table(DestinationImage)
///     .build()
///     .await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables should be added in dependency order (tables with foreign
    /// keys after the tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user account table.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User)
    }

    /// Adds the three type reference registries.
    ///
    /// - AccommodationTypeRef
    /// - TransportTypeRef
    /// - ActivityTypeRef
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(AccommodationTypeRef)
            .with_table(TransportTypeRef)
            .with_table(ActivityTypeRef)
    }

    /// Adds every table a destination aggregate touches, catalogs included.
    ///
    /// Use this when testing destination creation, listing, detail reads, deletion or
    /// image attachment.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_destination_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_destination_tables(self) -> Self {
        self.with_catalog_tables()
            .with_table(Destination)
            .with_table(DestinationAccommodationType)
            .with_table(DestinationTransportOption)
            .with_table(DestinationActivity)
            .with_table(DestinationSignatureDish)
            .with_table(Accommodation)
            .with_table(Attraction)
            .with_table(Restaurant)
            .with_table(DestinationImage)
            .with_table(AttractionImage)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
