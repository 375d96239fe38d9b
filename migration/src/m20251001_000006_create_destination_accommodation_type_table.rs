use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251001_000002_create_accommodation_type_ref_table::AccommodationTypeRef,
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
                    .table(DestinationAccommodationType::Table)
                    .if_not_exists()
                    .col(pk_auto(DestinationAccommodationType::Id))
                    .col(integer(DestinationAccommodationType::DestinationId))
                    .col(integer(DestinationAccommodationType::TypeRefId))
                    .col(string(DestinationAccommodationType::PriceRange))
                    .col(string_null(DestinationAccommodationType::Availability))
                    .col(text_null(DestinationAccommodationType::Description))
                    .col(timestamp_with_time_zone(DestinationAccommodationType::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_destination_accommodation_type_destination_id")
                            .from(DestinationAccommodationType::Table, DestinationAccommodationType::DestinationId)
                            .to(Destination::Table, Destination::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_destination_accommodation_type_type_ref_id")
                            .from(DestinationAccommodationType::Table, DestinationAccommodationType::TypeRefId)
                            .to(AccommodationTypeRef::Table, AccommodationTypeRef::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_destination_accommodation_type_unique")
                            .col(DestinationAccommodationType::DestinationId)
                            .col(DestinationAccommodationType::TypeRefId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DestinationAccommodationType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DestinationAccommodationType {
    Table,
    Id,
    DestinationId,
    TypeRefId,
    PriceRange,
    Availability,
    Description,
    CreatedAt,
}
