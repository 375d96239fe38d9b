use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "accommodation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub destination_id: i32,
    /// Destination-specific accommodation type link, not the raw type reference.
    pub accommodation_type_id: Option<i32>,
    pub name: String,
    pub price_range: String,
    pub rating: Option<String>,
    pub distance: Option<String>,
    pub region: String,
    pub longitude: Option<String>,
    pub latitude: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::destination::Entity",
        from = "Column::DestinationId",
        to = "super::destination::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Destination,
    #[sea_orm(
        belongs_to = "super::destination_accommodation_type::Entity",
        from = "Column::AccommodationTypeId",
        to = "super::destination_accommodation_type::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    DestinationAccommodationType,
}

impl Related<super::destination::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Destination.def()
    }
}

impl Related<super::destination_accommodation_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DestinationAccommodationType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
