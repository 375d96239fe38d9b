use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Accepts either `"a, b, c"` or `["a", "b", "c"]`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(untagged)]
pub enum StringOrList {
    Text(String),
    List(Vec<String>),
}

// Creation payload

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateDestinationDto {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,

    pub best_time: Option<String>,
    /// One of `Low`, `Medium`, `High` (case-insensitive).
    pub cost_level: Option<String>,
    pub avg_duration: Option<String>,

    #[serde(default)]
    pub suitable_for: Vec<String>,
    #[serde(default)]
    pub popular_for: Vec<String>,

    pub country: String,
    pub region: String,
    pub longitude: Option<String>,
    pub latitude: Option<String>,
    pub timezone: Option<String>,

    pub weather: Option<String>,
    pub peak_season: Option<String>,
    pub festivals: Option<String>,

    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub payment_methods: Vec<String>,

    pub safety_tips: Option<String>,
    pub customs: Option<String>,
    pub how_to_reach: Option<String>,

    #[serde(default)]
    pub accommodation_types: Vec<NewAccommodationTypeLinkDto>,
    #[serde(default)]
    pub transport_options: Vec<NewTransportOptionDto>,
    #[serde(default)]
    pub activities: Vec<NewActivityDto>,
    #[serde(default)]
    pub signature_dishes: Vec<NewSignatureDishDto>,
    #[serde(default)]
    pub accommodations: Vec<NewAccommodationDto>,
    #[serde(default)]
    pub attractions: Vec<NewAttractionDto>,
    #[serde(default)]
    pub restaurants: Vec<NewRestaurantDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct NewAccommodationTypeLinkDto {
    /// Accommodation type reference id.
    pub accommodation_type_id: i32,
    pub price_range: String,
    pub availability: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct NewTransportOptionDto {
    /// Transport type reference id.
    pub transport_type_id: i32,
    pub price_range: String,
    pub availability: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct NewActivityDto {
    /// Activity type reference id.
    pub activity_type_id: i32,
    pub price_range: Option<String>,
    pub duration: Option<String>,
    pub difficulty: Option<String>,
    pub best_season: Option<String>,
    #[serde(default)]
    pub booking_required: bool,
    #[serde(default)]
    pub is_popular: bool,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct NewSignatureDishDto {
    pub name: String,
    pub tags: Option<StringOrList>,
    pub dietary_info: Option<StringOrList>,
    pub price_range: Option<String>,
    #[serde(default)]
    pub is_recommended: bool,
    pub local_notes: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct NewAccommodationDto {
    pub name: String,
    /// Accommodation type reference id, resolved to this destination's link row.
    pub accommodation_type_id: Option<i32>,
    pub price_range: String,
    pub rating: Option<String>,
    pub distance: Option<String>,
    pub region: Option<String>,
    pub longitude: Option<String>,
    pub latitude: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct NewAttractionDto {
    pub name: String,
    pub description: Option<String>,
    /// One of `Nature`, `Historic`, `Culture`, `Adventure`, `Photo Spot`,
    /// `Religious`, `Beach`, `Shopping` (case-insensitive).
    pub tag: Option<String>,
    pub entry_fee: Option<String>,
    pub opening_hours: Option<String>,
    pub best_time_to_visit: Option<String>,
    #[serde(default)]
    pub available_transports: Vec<String>,
    #[serde(default)]
    pub is_recommended: bool,
    pub region: Option<String>,
    pub longitude: Option<String>,
    pub latitude: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct NewRestaurantDto {
    pub name: String,
    pub rating: Option<String>,
    pub price_range: Option<String>,
    #[serde(default)]
    pub signature_dishes: Vec<String>,
    #[serde(default)]
    pub cuisine_type: Vec<String>,
    pub contact: Option<String>,
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub accepts_reservation: bool,
    #[serde(default)]
    pub is_recommended: bool,
    pub region: Option<String>,
    pub longitude: Option<String>,
    pub latitude: Option<String>,
}

// Read model

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ImageDto {
    pub id: i32,
    pub image_url: String,
    pub alt_text: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TypeRefSummaryDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AccommodationTypeLinkDto {
    pub id: i32,
    pub price_range: String,
    pub availability: Option<String>,
    pub description: Option<String>,
    pub type_ref: TypeRefSummaryDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TransportOptionDto {
    pub id: i32,
    pub price_range: String,
    pub availability: Option<String>,
    pub description: Option<String>,
    pub transport_ref: TypeRefSummaryDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ActivityRefDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ActivityDto {
    pub id: i32,
    pub price_range: Option<String>,
    pub duration: Option<String>,
    pub difficulty: Option<String>,
    pub best_season: Option<String>,
    pub booking_required: bool,
    pub is_popular: bool,
    pub description: Option<String>,
    pub activity_ref: ActivityRefDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct SignatureDishDto {
    pub id: i32,
    pub name: String,
    pub tags: Vec<String>,
    pub dietary_info: Vec<String>,
    pub price_range: Option<String>,
    pub is_recommended: bool,
    pub local_notes: Option<String>,
}

/// The destination-specific accommodation type an accommodation points at.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AccommodationTypeRefLinkDto {
    /// Id of the destination's accommodation type link row.
    pub id: i32,
    pub price_range: String,
    pub type_ref: TypeRefSummaryDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AccommodationDto {
    pub id: i32,
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
    pub accommodation_type: Option<AccommodationTypeRefLinkDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AttractionDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub tag: Option<String>,
    pub entry_fee: Option<String>,
    pub opening_hours: Option<String>,
    pub best_time_to_visit: Option<String>,
    pub available_transports: Vec<String>,
    pub is_recommended: bool,
    pub region: String,
    pub longitude: Option<String>,
    pub latitude: Option<String>,
    pub images: Vec<ImageDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct RestaurantDto {
    pub id: i32,
    pub name: String,
    pub rating: Option<String>,
    pub price_range: Option<String>,
    pub signature_dishes: Vec<String>,
    pub cuisine_type: Vec<String>,
    pub contact: Option<String>,
    pub opening_hours: Option<String>,
    pub accepts_reservation: bool,
    pub is_recommended: bool,
    pub region: String,
    pub longitude: Option<String>,
    pub latitude: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct DestinationDetailsDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,

    pub best_time: Option<String>,
    pub cost_level: Option<String>,
    pub avg_duration: Option<String>,

    pub suitable_for: Vec<String>,
    pub popular_for: Vec<String>,

    pub country: String,
    pub region: String,
    pub longitude: Option<String>,
    pub latitude: Option<String>,
    pub timezone: String,

    pub weather: Option<String>,
    pub peak_season: Option<String>,
    pub festivals: Option<String>,

    pub languages: Vec<String>,
    pub payment_methods: Vec<String>,

    pub safety_tips: Option<String>,
    pub customs: Option<String>,
    pub how_to_reach: Option<String>,

    pub is_active: bool,
    pub is_featured: bool,
    pub view_count: i32,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub images: Vec<ImageDto>,
    pub attractions: Vec<AttractionDto>,
    pub transport_options: Vec<TransportOptionDto>,
    pub signature_dishes: Vec<SignatureDishDto>,
    pub accommodation_types: Vec<AccommodationTypeLinkDto>,
    pub accommodations: Vec<AccommodationDto>,
    pub activities: Vec<ActivityDto>,
    pub restaurants: Vec<RestaurantDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct DestinationSummaryDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub images: Vec<ImageDto>,
    pub best_time: Option<String>,
    pub cost_level: Option<String>,
    pub avg_duration: Option<String>,
    pub country: String,
    pub region: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedDestinationsDto {
    pub destinations: Vec<DestinationSummaryDto>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}
