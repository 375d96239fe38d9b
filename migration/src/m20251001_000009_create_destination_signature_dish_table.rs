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
                    .table(DestinationSignatureDish::Table)
                    .if_not_exists()
                    .col(pk_auto(DestinationSignatureDish::Id))
                    .col(integer(DestinationSignatureDish::DestinationId))
                    .col(string(DestinationSignatureDish::Name))
                    .col(json(DestinationSignatureDish::Tags))
                    .col(json(DestinationSignatureDish::DietaryInfo))
                    .col(string_null(DestinationSignatureDish::PriceRange))
                    .col(boolean(DestinationSignatureDish::IsRecommended).default(false))
                    .col(text_null(DestinationSignatureDish::LocalNotes))
                    .col(timestamp_with_time_zone(DestinationSignatureDish::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_destination_signature_dish_destination_id")
                            .from(
                                DestinationSignatureDish::Table,
                                DestinationSignatureDish::DestinationId,
                            )
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
            .drop_table(Table::drop().table(DestinationSignatureDish::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DestinationSignatureDish {
    Table,
    Id,
    DestinationId,
    Name,
    Tags,
    DietaryInfo,
    PriceRange,
    IsRecommended,
    LocalNotes,
    CreatedAt,
}
