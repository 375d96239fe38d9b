use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "attraction_image")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub attraction_id: i32,
    pub image_url: String,
    /// Identifier assigned by the image host, required to delete the remote object.
    pub public_id: String,
    pub alt_text: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::attraction::Entity",
        from = "Column::AttractionId",
        to = "super::attraction::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Attraction,
}

impl Related<super::attraction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attraction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
