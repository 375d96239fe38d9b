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
                    .table(Attraction::Table)
                    .if_not_exists()
                    .col(pk_auto(Attraction::Id))
                    .col(integer(Attraction::DestinationId))
                    .col(string(Attraction::Name))
                    .col(text_null(Attraction::Description))
                    .col(string_null(Attraction::Tag))
                    .col(string_null(Attraction::EntryFee))
                    .col(string_null(Attraction::OpeningHours))
                    .col(string_null(Attraction::BestTimeToVisit))
                    .col(json(Attraction::AvailableTransports))
                    .col(boolean(Attraction::IsRecommended).default(false))
                    .col(string(Attraction::Region))
                    .col(string_null(Attraction::Longitude))
                    .col(string_null(Attraction::Latitude))
                    .col(timestamp_with_time_zone(Attraction::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attraction_destination_id")
                            .from(Attraction::Table, Attraction::DestinationId)
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
            .drop_table(Table::drop().table(Attraction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Attraction {
    Table,
    Id,
    DestinationId,
    Name,
    Description,
    Tag,
    EntryFee,
    OpeningHours,
    BestTimeToVisit,
    AvailableTransports,
    IsRecommended,
    Region,
    Longitude,
    Latitude,
    CreatedAt,
}
