use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251001_000004_create_activity_type_ref_table::ActivityTypeRef,
    m20251001_000005_create_destination_table::Destination,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DestinationActivity::Table)
                    .if_not_exists()
                    .col(pk_auto(DestinationActivity::Id))
                    .col(integer(DestinationActivity::DestinationId))
                    .col(integer(DestinationActivity::ActivityRefId))
                    .col(string_null(DestinationActivity::PriceRange))
                    .col(text_null(DestinationActivity::Description))
                    .col(string_null(DestinationActivity::Duration))
                    .col(string_null(DestinationActivity::Difficulty))
                    .col(string_null(DestinationActivity::BestSeason))
                    .col(boolean(DestinationActivity::BookingRequired).default(false))
                    .col(boolean(DestinationActivity::IsPopular).default(false))
                    .col(timestamp_with_time_zone(DestinationActivity::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_destination_activity_destination_id")
                            .from(DestinationActivity::Table, DestinationActivity::DestinationId)
                            .to(Destination::Table, Destination::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_destination_activity_activity_ref_id")
                            .from(DestinationActivity::Table, DestinationActivity::ActivityRefId)
                            .to(ActivityTypeRef::Table, ActivityTypeRef::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_destination_activity_unique")
                            .col(DestinationActivity::DestinationId)
                            .col(DestinationActivity::ActivityRefId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DestinationActivity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DestinationActivity {
    Table,
    Id,
    DestinationId,
    ActivityRefId,
    PriceRange,
    Description,
    Duration,
    Difficulty,
    BestSeason,
    BookingRequired,
    IsPopular,
    CreatedAt,
}
