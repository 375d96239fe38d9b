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
                    .table(DestinationImage::Table)
                    .if_not_exists()
                    .col(pk_auto(DestinationImage::Id))
                    .col(integer(DestinationImage::DestinationId))
                    .col(string(DestinationImage::ImageUrl))
                    .col(string(DestinationImage::PublicId))
                    .col(string_null(DestinationImage::AltText))
                    .col(timestamp_with_time_zone(DestinationImage::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_destination_image_destination_id")
                            .from(DestinationImage::Table, DestinationImage::DestinationId)
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
            .drop_table(Table::drop().table(DestinationImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DestinationImage {
    Table,
    Id,
    DestinationId,
    ImageUrl,
    PublicId,
    AltText,
    CreatedAt,
}
