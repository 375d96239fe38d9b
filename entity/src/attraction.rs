use sea_orm::entity::prelude::*;

use crate::string_list::StringList;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "attraction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub destination_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub tag: Option<String>,
    pub entry_fee: Option<String>,
    pub opening_hours: Option<String>,
    pub best_time_to_visit: Option<String>,
    pub available_transports: StringList,
    pub is_recommended: bool,
    pub region: String,
    pub longitude: Option<String>,
    pub latitude: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::attraction_image::Entity")]
    AttractionImage,
    #[sea_orm(
        belongs_to = "super::destination::Entity",
        from = "Column::DestinationId",
        to = "super::destination::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Destination,
}

impl Related<super::attraction_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AttractionImage.def()
    }
}

impl Related<super::destination::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Destination.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
