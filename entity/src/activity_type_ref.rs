use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "activity_type_ref")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::destination_activity::Entity")]
    DestinationActivity,
}

impl Related<super::destination_activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DestinationActivity.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
