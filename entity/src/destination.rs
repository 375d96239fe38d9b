use sea_orm::entity::prelude::*;

use crate::string_list::StringList;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "destination")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    /// Lowercased `name`, matched by listing search.
    pub name_search: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub tags: StringList,
    pub best_time: Option<String>,
    pub cost_level: Option<String>,
    pub avg_duration: Option<String>,
    pub suitable_for: StringList,
    pub popular_for: StringList,
    pub country: String,
    pub region: String,
    pub longitude: Option<String>,
    pub latitude: Option<String>,
    pub timezone: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub weather: Option<String>,
    pub peak_season: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub festivals: Option<String>,
    pub languages: StringList,
    pub payment_methods: StringList,
    #[sea_orm(column_type = "Text", nullable)]
    pub safety_tips: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub customs: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub how_to_reach: Option<String>,
    pub is_active: bool,
    pub is_featured: bool,
    pub view_count: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::accommodation::Entity")]
    Accommodation,
    #[sea_orm(has_many = "super::attraction::Entity")]
    Attraction,
    #[sea_orm(has_many = "super::destination_accommodation_type::Entity")]
    DestinationAccommodationType,
    #[sea_orm(has_many = "super::destination_activity::Entity")]
    DestinationActivity,
    #[sea_orm(has_many = "super::destination_image::Entity")]
    DestinationImage,
    #[sea_orm(has_many = "super::destination_signature_dish::Entity")]
    DestinationSignatureDish,
    #[sea_orm(has_many = "super::destination_transport_option::Entity")]
    DestinationTransportOption,
    #[sea_orm(has_many = "super::restaurant::Entity")]
    Restaurant,
}

impl Related<super::accommodation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accommodation.def()
    }
}

impl Related<super::attraction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attraction.def()
    }
}

impl Related<super::destination_accommodation_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DestinationAccommodationType.def()
    }
}

impl Related<super::destination_activity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DestinationActivity.def()
    }
}

impl Related<super::destination_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DestinationImage.def()
    }
}

impl Related<super::destination_signature_dish::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DestinationSignatureDish.def()
    }
}

impl Related<super::destination_transport_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DestinationTransportOption.def()
    }
}

impl Related<super::restaurant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Restaurant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
