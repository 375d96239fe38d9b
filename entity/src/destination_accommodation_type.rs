use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "destination_accommodation_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub destination_id: i32,
    pub type_ref_id: i32,
    pub price_range: String,
    pub availability: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::accommodation::Entity")]
    Accommodation,
    #[sea_orm(
        belongs_to = "super::accommodation_type_ref::Entity",
        from = "Column::TypeRefId",
        to = "super::accommodation_type_ref::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AccommodationTypeRef,
    #[sea_orm(
        belongs_to = "super::destination::Entity",
        from = "Column::DestinationId",
        to = "super::destination::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Destination,
}

impl Related<super::accommodation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accommodation.def()
    }
}

impl Related<super::accommodation_type_ref::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccommodationTypeRef.def()
    }
}

impl Related<super::destination::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Destination.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
