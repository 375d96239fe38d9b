use sea_orm_migration::{prelude::*, schema::*};

use super::m20251001_000005_create_destination_table::Destination;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Restaurant::Table)
                    .if_not_exists()
                    .col(pk_auto(Restaurant::Id))
                    .col(integer(Restaurant::DestinationId))
                    .col(string(Restaurant::Name))
                    .col(string_null(Restaurant::Rating))
                    .col(string_null(Restaurant::PriceRange))
                    .col(json(Restaurant::SignatureDishes))
                    .col(json(Restaurant::CuisineType))
                    .col(string_null(Restaurant::Contact))
                    .col(string_null(Restaurant::OpeningHours))
                    .col(boolean(Restaurant::AcceptsReservation).default(false))
                    .col(boolean(Restaurant::IsRecommended).default(false))
                    .col(string(Restaurant::Region))
                    .col(string_null(Restaurant::Longitude))
                    .col(string_null(Restaurant::Latitude))
                    .col(timestamp_with_time_zone(Restaurant::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_destination_id")
                            .from(Restaurant::Table, Restaurant::DestinationId)
                            .to(Destination::Table, Destination::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Restaurant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Restaurant {
    Table,
    Id,
    DestinationId,
    Name,
    Rating,
    PriceRange,
    SignatureDishes,
    CuisineType,
    Contact,
    OpeningHours,
    AcceptsReservation,
    IsRecommended,
    Region,
    Longitude,
    Latitude,
    CreatedAt,
}
