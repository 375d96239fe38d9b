use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Destination::Table)
                    .if_not_exists()
                    .col(pk_auto(Destination::Id))
                    .col(string_uniq(Destination::Slug))
                    .col(string(Destination::Name))
                    .col(string(Destination::NameSearch))
                    .col(text_null(Destination::Description))
                    .col(json(Destination::Tags))
                    .col(string_null(Destination::BestTime))
                    .col(string_null(Destination::CostLevel))
                    .col(string_null(Destination::AvgDuration))
                    .col(json(Destination::SuitableFor))
                    .col(json(Destination::PopularFor))
                    .col(string(Destination::Country))
                    .col(string(Destination::Region))
                    .col(string_null(Destination::Longitude))
                    .col(string_null(Destination::Latitude))
                    .col(string(Destination::Timezone).default("UTC"))
                    .col(text_null(Destination::Weather))
                    .col(string_null(Destination::PeakSeason))
                    .col(text_null(Destination::Festivals))
                    .col(json(Destination::Languages))
                    .col(json(Destination::PaymentMethods))
                    .col(text_null(Destination::SafetyTips))
                    .col(text_null(Destination::Customs))
                    .col(text_null(Destination::HowToReach))
                    .col(boolean(Destination::IsActive).default(true))
                    .col(boolean(Destination::IsFeatured).default(false))
                    .col(integer(Destination::ViewCount).default(0))
                    .col(timestamp_with_time_zone(Destination::CreatedAt))
                    .col(timestamp_with_time_zone(Destination::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_destination_name_search")
                    .table(Destination::Table)
                    .col(Destination::NameSearch)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Destination::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Destination {
    Table,
    Id,
    Slug,
    Name,
    NameSearch,
    Description,
    Tags,
    BestTime,
    CostLevel,
    AvgDuration,
    SuitableFor,
    PopularFor,
    Country,
    Region,
    Longitude,
    Latitude,
    Timezone,
    Weather,
    PeakSeason,
    Festivals,
    Languages,
    PaymentMethods,
    SafetyTips,
    Customs,
    HowToReach,
    IsActive,
    IsFeatured,
    ViewCount,
    CreatedAt,
    UpdatedAt,
}
