use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "transport_type_ref")]
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
    #[sea_orm(has_many = "super::destination_transport_option::Entity")]
    DestinationTransportOption,
}

impl Related<super::destination_transport_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DestinationTransportOption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
