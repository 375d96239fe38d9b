use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "accommodation_type_ref")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::destination_accommodation_type::Entity")]
    DestinationAccommodationType,
}

impl Related<super::destination_accommodation_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DestinationAccommodationType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
