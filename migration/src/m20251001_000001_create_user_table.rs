use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::FirstName))
                    .col(string_null(User::LastName))
                    .col(string_uniq(User::Email))
                    .col(string(User::HashedPassword))
                    .col(string(User::Language).default("en"))
                    .col(string(User::Timezone).default("UTC"))
                    .col(boolean(User::IsAdmin).default(false))
                    .col(boolean(User::IsActive).default(true))
                    .col(timestamp_with_time_zone(User::CreatedAt))
                    .col(timestamp_with_time_zone(User::UpdatedAt))
                    .col(timestamp_with_time_zone_null(User::LastLoginAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    HashedPassword,
    Language,
    Timezone,
    IsAdmin,
    IsActive,
    CreatedAt,
    UpdatedAt,
    LastLoginAt,
}
