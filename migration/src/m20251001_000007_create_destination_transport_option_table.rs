use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251001_000003_create_transport_type_ref_table::TransportTypeRef,
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
                    .table(DestinationTransportOption::Table)
                    .if_not_exists()
                    .col(pk_auto(DestinationTransportOption::Id))
                    .col(integer(DestinationTransportOption::DestinationId))
                    .col(integer(DestinationTransportOption::TransportRefId))
                    .col(string(DestinationTransportOption::PriceRange))
                    .col(string_null(DestinationTransportOption::Availability))
                    .col(text_null(DestinationTransportOption::Description))
                    .col(timestamp_with_time_zone(DestinationTransportOption::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_destination_transport_option_destination_id")
                            .from(DestinationTransportOption::Table, DestinationTransportOption::DestinationId)
                            .to(Destination::Table, Destination::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_destination_transport_option_transport_ref_id")
                            .from(DestinationTransportOption::Table, DestinationTransportOption::TransportRefId)
                            .to(TransportTypeRef::Table, TransportTypeRef::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_destination_transport_option_unique")
                            .col(DestinationTransportOption::DestinationId)
                            .col(DestinationTransportOption::TransportRefId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DestinationTransportOption::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DestinationTransportOption {
    Table,
    Id,
    DestinationId,
    TransportRefId,
    PriceRange,
    Availability,
    Description,
    CreatedAt,
}
