use sea_orm_migration::{prelude::*, schema::*};

use super::m20251001_000011_create_attraction_table::Attraction;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AttractionImage::Table)
                    .if_not_exists()
                    .col(pk_auto(AttractionImage::Id))
                    .col(integer(AttractionImage::AttractionId))
                    .col(string(AttractionImage::ImageUrl))
                    .col(string(AttractionImage::PublicId))
                    .col(string_null(AttractionImage::AltText))
                    .col(timestamp_with_time_zone(AttractionImage::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attraction_image_attraction_id")
                            .from(AttractionImage::Table, AttractionImage::AttractionId)
                            .to(Attraction::Table, Attraction::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AttractionImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AttractionImage {
    Table,
    Id,
    AttractionId,
    ImageUrl,
    PublicId,
    AltText,
    CreatedAt,
}
