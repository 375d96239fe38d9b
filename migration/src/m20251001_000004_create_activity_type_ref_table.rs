use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActivityTypeRef::Table)
                    .if_not_exists()
                    .col(pk_auto(ActivityTypeRef::Id))
                    .col(string_uniq(ActivityTypeRef::Name))
                    .col(text_null(ActivityTypeRef::Description))
                    .col(string_null(ActivityTypeRef::Category))
                    .col(timestamp_with_time_zone(ActivityTypeRef::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActivityTypeRef::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ActivityTypeRef {
    Table,
    Id,
    Name,
    Description,
    Category,
    CreatedAt,
}
