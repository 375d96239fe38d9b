use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251001_000005_create_destination_table::Destination,
    m20251001_000006_create_destination_accommodation_type_table::DestinationAccommodationType,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Accommodation::Table)
                    .if_not_exists()
                    .col(pk_auto(Accommodation::Id))
                    .col(integer(Accommodation::DestinationId))
                    .col(integer_null(Accommodation::AccommodationTypeId))
                    .col(string(Accommodation::Name))
                    .col(string(Accommodation::PriceRange))
                    .col(string_null(Accommodation::Rating))
                    .col(string_null(Accommodation::Distance))
                    .col(string(Accommodation::Region))
                    .col(string_null(Accommodation::Longitude))
                    .col(string_null(Accommodation::Latitude))
                    .col(string_null(Accommodation::Phone))
                    .col(string_null(Accommodation::Email))
                    .col(string_null(Accommodation::Website))
                    .col(timestamp_with_time_zone(Accommodation::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_accommodation_destination_id")
                            .from(Accommodation::Table, Accommodation::DestinationId)
                            .to(Destination::Table, Destination::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_accommodation_accommodation_type_id")
                            .from(Accommodation::Table, Accommodation::AccommodationTypeId)
                            .to(
                                DestinationAccommodationType::Table,
                                DestinationAccommodationType::Id,
                            )
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Accommodation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Accommodation {
    Table,
    Id,
    DestinationId,
    AccommodationTypeId,
    Name,
    PriceRange,
    Rating,
    Distance,
    Region,
    Longitude,
    Latitude,
    Phone,
    Email,
    Website,
    CreatedAt,
}
