pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_user_table;
mod m20251001_000002_create_accommodation_type_ref_table;
mod m20251001_000003_create_transport_type_ref_table;
mod m20251001_000004_create_activity_type_ref_table;
mod m20251001_000005_create_destination_table;
mod m20251001_000006_create_destination_accommodation_type_table;
mod m20251001_000007_create_destination_transport_option_table;
mod m20251001_000008_create_destination_activity_table;
mod m20251001_000009_create_destination_signature_dish_table;
mod m20251001_000010_create_accommodation_table;
mod m20251001_000011_create_attraction_table;
mod m20251001_000012_create_restaurant_table;
mod m20251001_000013_create_destination_image_table;
mod m20251001_000014_create_attraction_image_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_user_table::Migration),
            Box::new(m20251001_000002_create_accommodation_type_ref_table::Migration),
            Box::new(m20251001_000003_create_transport_type_ref_table::Migration),
            Box::new(m20251001_000004_create_activity_type_ref_table::Migration),
            Box::new(m20251001_000005_create_destination_table::Migration),
            Box::new(m20251001_000006_create_destination_accommodation_type_table::Migration),
            Box::new(m20251001_000007_create_destination_transport_option_table::Migration),
            Box::new(m20251001_000008_create_destination_activity_table::Migration),
            Box::new(m20251001_000009_create_destination_signature_dish_table::Migration),
            Box::new(m20251001_000010_create_accommodation_table::Migration),
            Box::new(m20251001_000011_create_attraction_table::Migration),
            Box::new(m20251001_000012_create_restaurant_table::Migration),
            Box::new(m20251001_000013_create_destination_image_table::Migration),
            Box::new(m20251001_000014_create_attraction_image_table::Migration),
        ]
    }
}
