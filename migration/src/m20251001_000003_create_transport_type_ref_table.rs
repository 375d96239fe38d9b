use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TransportTypeRef::Table)
                    .if_not_exists()
                    .col(pk_auto(TransportTypeRef::Id))
                    .col(string_uniq(TransportTypeRef::Name))
                    .col(text_null(TransportTypeRef::Description))
                    .col(timestamp_with_time_zone(TransportTypeRef::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TransportTypeRef::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TransportTypeRef {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
}
