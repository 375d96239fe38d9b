use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccommodationTypeRef::Table)
                    .if_not_exists()
                    .col(pk_auto(AccommodationTypeRef::Id))
                    .col(string_uniq(AccommodationTypeRef::Name))
                    .col(text_null(AccommodationTypeRef::Description))
                    .col(timestamp_with_time_zone(AccommodationTypeRef::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccommodationTypeRef::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AccommodationTypeRef {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
}
