//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Monotonically increasing across all factories, so names built from it never
/// collide on unique columns.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a destination holding a single attraction.
///
/// # Returns
/// - `Ok((destination, attraction))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_destination_with_attraction(
    db: &DatabaseConnection,
) -> Result<(entity::destination::Model, entity::attraction::Model), DbErr> {
    let destination = crate::factory::destination::create_destination(db).await?;
    let attraction = crate::factory::destination::create_attraction(db, destination.id).await?;

    Ok((destination, attraction))
}

/// Creates one type reference of each catalog kind.
///
/// # Returns
/// - `Ok((accommodation_type, transport_type, activity_type))`
/// - `Err(DbErr)` - Database error during creation
pub async fn create_catalog(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::accommodation_type_ref::Model,
        entity::transport_type_ref::Model,
        entity::activity_type_ref::Model,
    ),
    DbErr,
> {
    let accommodation = crate::factory::catalog::create_accommodation_type(db).await?;
    let transport = crate::factory::catalog::create_transport_type(db).await?;
    let activity = crate::factory::catalog::create_activity_type(db).await?;

    Ok((accommodation, transport, activity))
}
