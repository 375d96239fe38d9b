use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "destination_activity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub destination_id: i32,
    pub activity_ref_id: i32,
    pub price_range: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub duration: Option<String>,
    pub difficulty: Option<String>,
    pub best_season: Option<String>,
    pub booking_required: bool,
    pub is_popular: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::activity_type_ref::Entity",
        from = "Column::ActivityRefId",
        to = "super::activity_type_ref::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    ActivityTypeRef,
    #[sea_orm(
        belongs_to = "super::destination::Entity",
        from = "Column::DestinationId",
        to = "super::destination::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Destination,
}

impl Related<super::activity_type_ref::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActivityTypeRef.def()
    }
}

impl Related<super::destination::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Destination.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
