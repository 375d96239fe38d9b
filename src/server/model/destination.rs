//! Destination aggregate models.
//!
//! `CreateDestinationParams` is the validated form of a creation payload; every field
//! check happens in `from_dto` so the service can run the whole pre-write pass before
//! touching the database. `DestinationDetails` is the assembled read-model returned by
//! detail reads and by creation.

use std::collections::HashSet;

use crate::{
    model::destination::{
        AccommodationDto, AccommodationTypeLinkDto, AccommodationTypeRefLinkDto, ActivityDto,
        ActivityRefDto, AttractionDto, CreateDestinationDto, DestinationDetailsDto,
        DestinationSummaryDto, ImageDto, NewAccommodationDto, NewAttractionDto,
        NewRestaurantDto, NewSignatureDishDto, PaginatedDestinationsDto, RestaurantDto,
        SignatureDishDto, TransportOptionDto, TypeRefSummaryDto,
    },
    server::{
        error::AppError,
        model::image::PendingImage,
        util::{decimal, normalize},
    },
};

pub const DEFAULT_TIMEZONE: &str = "UTC";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostLevel {
    Low,
    Medium,
    High,
}

impl CostLevel {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(AppError::Validation(format!(
                "cost_level must be one of Low, Medium, High, got '{}'",
                value
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttractionTag {
    Nature,
    Historic,
    Culture,
    Adventure,
    PhotoSpot,
    Religious,
    Beach,
    Shopping,
}

impl AttractionTag {
    const ALL: [Self; 8] = [
        Self::Nature,
        Self::Historic,
        Self::Culture,
        Self::Adventure,
        Self::PhotoSpot,
        Self::Religious,
        Self::Beach,
        Self::Shopping,
    ];

    /// Case-insensitive; `Photo Spot`, `photo_spot` and `photo-spot` are equivalent.
    pub fn parse(value: &str) -> Result<Self, AppError> {
        let key = value.trim().to_lowercase().replace(['_', '-'], " ");

        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str().to_lowercase() == key)
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "tag must be one of Nature, Historic, Culture, Adventure, Photo Spot, \
                     Religious, Beach, Shopping, got '{}'",
                    value
                ))
            })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nature => "Nature",
            Self::Historic => "Historic",
            Self::Culture => "Culture",
            Self::Adventure => "Adventure",
            Self::PhotoSpot => "Photo Spot",
            Self::Religious => "Religious",
            Self::Beach => "Beach",
            Self::Shopping => "Shopping",
        }
    }
}

fn required(field: &str, value: String) -> Result<String, AppError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(value)
}

/// Rejects a type id that appears twice in one collection.
fn reject_duplicates(kind: &str, ids: impl Iterator<Item = i32>) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(AppError::Validation(format!(
                "{} {} is linked more than once",
                kind, id
            )));
        }
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct NewAccommodationTypeLink {
    pub type_ref_id: i32,
    pub price_range: String,
    pub availability: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewTransportOption {
    pub transport_ref_id: i32,
    pub price_range: String,
    pub availability: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewActivity {
    pub activity_ref_id: i32,
    pub price_range: Option<String>,
    pub duration: Option<String>,
    pub difficulty: Option<String>,
    pub best_season: Option<String>,
    pub booking_required: bool,
    pub is_popular: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewSignatureDish {
    pub name: String,
    pub tags: Vec<String>,
    pub dietary_info: Vec<String>,
    pub price_range: Option<String>,
    pub is_recommended: bool,
    pub local_notes: Option<String>,
}

impl NewSignatureDish {
    fn from_dto(dto: NewSignatureDishDto) -> Result<Self, AppError> {
        Ok(Self {
            name: required("signature dish name", dto.name)?,
            tags: normalize::dish_tags(dto.tags),
            dietary_info: normalize::dietary_info(dto.dietary_info),
            price_range: normalize::optional_text(dto.price_range),
            is_recommended: dto.is_recommended,
            local_notes: normalize::optional_text(dto.local_notes),
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewAccommodation {
    pub name: String,
    /// Type reference id, resolved against this request's accommodation type links.
    pub type_ref_id: Option<i32>,
    pub price_range: String,
    pub rating: Option<String>,
    pub distance: Option<String>,
    pub region: String,
    pub longitude: Option<String>,
    pub latitude: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
}

impl NewAccommodation {
    fn from_dto(dto: NewAccommodationDto, default_region: &str) -> Result<Self, AppError> {
        Ok(Self {
            name: required("accommodation name", dto.name)?,
            type_ref_id: dto.accommodation_type_id,
            price_range: required("accommodation price_range", dto.price_range)?,
            rating: decimal::rating(dto.rating.as_deref())?,
            distance: normalize::optional_text(dto.distance),
            region: normalize::optional_text(dto.region)
                .unwrap_or_else(|| default_region.to_string()),
            longitude: decimal::longitude(dto.longitude.as_deref())?,
            latitude: decimal::latitude(dto.latitude.as_deref())?,
            phone: normalize::optional_text(dto.phone),
            email: normalize::optional_text(dto.email),
            website: normalize::optional_text(dto.website),
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewAttraction {
    pub name: String,
    pub description: Option<String>,
    pub tag: Option<AttractionTag>,
    pub entry_fee: Option<String>,
    pub opening_hours: Option<String>,
    pub best_time_to_visit: Option<String>,
    pub available_transports: Vec<String>,
    pub is_recommended: bool,
    pub region: String,
    pub longitude: Option<String>,
    pub latitude: Option<String>,
}

impl NewAttraction {
    fn from_dto(dto: NewAttractionDto, default_region: &str) -> Result<Self, AppError> {
        let tag = normalize::optional_text(dto.tag)
            .map(|t| AttractionTag::parse(&t))
            .transpose()?;

        Ok(Self {
            name: required("attraction name", dto.name)?,
            description: normalize::optional_text(dto.description),
            tag,
            entry_fee: normalize::optional_text(dto.entry_fee),
            opening_hours: normalize::optional_text(dto.opening_hours),
            best_time_to_visit: normalize::optional_text(dto.best_time_to_visit),
            available_transports: normalize::string_list(dto.available_transports),
            is_recommended: dto.is_recommended,
            region: normalize::optional_text(dto.region)
                .unwrap_or_else(|| default_region.to_string()),
            longitude: decimal::longitude(dto.longitude.as_deref())?,
            latitude: decimal::latitude(dto.latitude.as_deref())?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewRestaurant {
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

impl NewRestaurant {
    fn from_dto(dto: NewRestaurantDto, default_region: &str) -> Result<Self, AppError> {
        Ok(Self {
            name: required("restaurant name", dto.name)?,
            rating: decimal::rating(dto.rating.as_deref())?,
            price_range: normalize::optional_text(dto.price_range),
            signature_dishes: normalize::string_list(dto.signature_dishes),
            cuisine_type: normalize::string_list(dto.cuisine_type),
            contact: normalize::optional_text(dto.contact),
            opening_hours: normalize::optional_text(dto.opening_hours),
            accepts_reservation: dto.accepts_reservation,
            is_recommended: dto.is_recommended,
            region: normalize::optional_text(dto.region)
                .unwrap_or_else(|| default_region.to_string()),
            longitude: decimal::longitude(dto.longitude.as_deref())?,
            latitude: decimal::latitude(dto.latitude.as_deref())?,
        })
    }
}

/// Scalar columns of the destination row.
#[derive(Debug, Clone)]
pub struct NewDestination {
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub best_time: Option<String>,
    pub cost_level: Option<CostLevel>,
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
}

/// Fully validated creation request.
#[derive(Debug, Clone)]
pub struct CreateDestinationParams {
    pub destination: NewDestination,
    pub accommodation_types: Vec<NewAccommodationTypeLink>,
    pub transport_options: Vec<NewTransportOption>,
    pub activities: Vec<NewActivity>,
    pub signature_dishes: Vec<NewSignatureDish>,
    pub accommodations: Vec<NewAccommodation>,
    pub attractions: Vec<NewAttraction>,
    pub restaurants: Vec<NewRestaurant>,
    /// Files uploaded before the transaction opens.
    pub images: Vec<PendingImage>,
}

impl CreateDestinationParams {
    pub fn from_dto(dto: CreateDestinationDto, images: Vec<PendingImage>) -> Result<Self, AppError> {
        let cost_level = normalize::optional_text(dto.cost_level)
            .map(|c| CostLevel::parse(&c))
            .transpose()?;

        let destination = NewDestination {
            name: required("name", dto.name)?,
            description: normalize::optional_text(dto.description),
            tags: normalize::string_list(dto.tags),
            best_time: normalize::optional_text(dto.best_time),
            cost_level,
            avg_duration: normalize::optional_text(dto.avg_duration),
            suitable_for: normalize::string_list(dto.suitable_for),
            popular_for: normalize::string_list(dto.popular_for),
            country: required("country", dto.country)?,
            region: required("region", dto.region)?,
            longitude: decimal::longitude(dto.longitude.as_deref())?,
            latitude: decimal::latitude(dto.latitude.as_deref())?,
            timezone: normalize::optional_text(dto.timezone)
                .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
            weather: normalize::optional_text(dto.weather),
            peak_season: normalize::optional_text(dto.peak_season),
            festivals: normalize::optional_text(dto.festivals),
            languages: normalize::string_list(dto.languages),
            payment_methods: normalize::string_list(dto.payment_methods),
            safety_tips: normalize::optional_text(dto.safety_tips),
            customs: normalize::optional_text(dto.customs),
            how_to_reach: normalize::optional_text(dto.how_to_reach),
        };

        reject_duplicates(
            "Accommodation type",
            dto.accommodation_types.iter().map(|l| l.accommodation_type_id),
        )?;
        reject_duplicates(
            "Transport type",
            dto.transport_options.iter().map(|l| l.transport_type_id),
        )?;
        reject_duplicates(
            "Activity type",
            dto.activities.iter().map(|l| l.activity_type_id),
        )?;

        let accommodation_types = dto
            .accommodation_types
            .into_iter()
            .map(|l| {
                Ok(NewAccommodationTypeLink {
                    type_ref_id: l.accommodation_type_id,
                    price_range: required("accommodation type price_range", l.price_range)?,
                    availability: normalize::optional_text(l.availability),
                    description: normalize::optional_text(l.description),
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        let transport_options = dto
            .transport_options
            .into_iter()
            .map(|t| {
                Ok(NewTransportOption {
                    transport_ref_id: t.transport_type_id,
                    price_range: required("transport option price_range", t.price_range)?,
                    availability: normalize::optional_text(t.availability),
                    description: normalize::optional_text(t.description),
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        let activities = dto
            .activities
            .into_iter()
            .map(|a| NewActivity {
                activity_ref_id: a.activity_type_id,
                price_range: normalize::optional_text(a.price_range),
                duration: normalize::optional_text(a.duration),
                difficulty: normalize::optional_text(a.difficulty),
                best_season: normalize::optional_text(a.best_season),
                booking_required: a.booking_required,
                is_popular: a.is_popular,
                description: normalize::optional_text(a.description),
            })
            .collect();

        let signature_dishes = dto
            .signature_dishes
            .into_iter()
            .map(NewSignatureDish::from_dto)
            .collect::<Result<Vec<_>, _>>()?;

        let region = destination.region.clone();

        let accommodations = dto
            .accommodations
            .into_iter()
            .map(|a| NewAccommodation::from_dto(a, &region))
            .collect::<Result<Vec<_>, _>>()?;

        let attractions = dto
            .attractions
            .into_iter()
            .map(|a| NewAttraction::from_dto(a, &region))
            .collect::<Result<Vec<_>, _>>()?;

        let restaurants = dto
            .restaurants
            .into_iter()
            .map(|r| NewRestaurant::from_dto(r, &region))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            destination,
            accommodation_types,
            transport_options,
            activities,
            signature_dishes,
            accommodations,
            attractions,
            restaurants,
            images,
        })
    }

    /// Type reference ids that must exist before anything is written, per registry.
    ///
    /// Accommodation ids include both the destination links and the type each
    /// accommodation points at.
    pub fn referenced_type_ids(&self) -> ReferencedTypeIds {
        let mut accommodation: Vec<i32> = self
            .accommodation_types
            .iter()
            .map(|l| l.type_ref_id)
            .chain(self.accommodations.iter().filter_map(|a| a.type_ref_id))
            .collect();
        accommodation.sort_unstable();
        accommodation.dedup();

        ReferencedTypeIds {
            accommodation,
            transport: self
                .transport_options
                .iter()
                .map(|t| t.transport_ref_id)
                .collect(),
            activity: self.activities.iter().map(|a| a.activity_ref_id).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferencedTypeIds {
    pub accommodation: Vec<i32>,
    pub transport: Vec<i32>,
    pub activity: Vec<i32>,
}

// Read model

fn image_dto(id: i32, image_url: String, alt_text: Option<String>) -> ImageDto {
    ImageDto {
        id,
        image_url,
        alt_text,
    }
}

fn destination_image_dto(image: entity::destination_image::Model) -> ImageDto {
    image_dto(image.id, image.image_url, image.alt_text)
}

/// Accommodation with the destination link and type reference it points at, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct AccommodationWithType {
    pub accommodation: entity::accommodation::Model,
    pub link: Option<(
        entity::destination_accommodation_type::Model,
        entity::accommodation_type_ref::Model,
    )>,
}

/// A destination with every owned collection and referenced type name joined in.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationDetails {
    pub destination: entity::destination::Model,
    pub images: Vec<entity::destination_image::Model>,
    pub attractions: Vec<(
        entity::attraction::Model,
        Vec<entity::attraction_image::Model>,
    )>,
    pub transport_options: Vec<(
        entity::destination_transport_option::Model,
        entity::transport_type_ref::Model,
    )>,
    pub signature_dishes: Vec<entity::destination_signature_dish::Model>,
    pub accommodation_types: Vec<(
        entity::destination_accommodation_type::Model,
        entity::accommodation_type_ref::Model,
    )>,
    pub accommodations: Vec<AccommodationWithType>,
    pub activities: Vec<(
        entity::destination_activity::Model,
        entity::activity_type_ref::Model,
    )>,
    pub restaurants: Vec<entity::restaurant::Model>,
}

impl DestinationDetails {
    pub fn into_dto(self) -> DestinationDetailsDto {
        let d = self.destination;

        DestinationDetailsDto {
            id: d.id,
            slug: d.slug,
            name: d.name,
            description: d.description,
            tags: d.tags.into_inner(),
            best_time: d.best_time,
            cost_level: d.cost_level,
            avg_duration: d.avg_duration,
            suitable_for: d.suitable_for.into_inner(),
            popular_for: d.popular_for.into_inner(),
            country: d.country,
            region: d.region,
            longitude: d.longitude,
            latitude: d.latitude,
            timezone: d.timezone,
            weather: d.weather,
            peak_season: d.peak_season,
            festivals: d.festivals,
            languages: d.languages.into_inner(),
            payment_methods: d.payment_methods.into_inner(),
            safety_tips: d.safety_tips,
            customs: d.customs,
            how_to_reach: d.how_to_reach,
            is_active: d.is_active,
            is_featured: d.is_featured,
            view_count: d.view_count,
            created_at: d.created_at,
            updated_at: d.updated_at,
            images: self.images.into_iter().map(destination_image_dto).collect(),
            attractions: self
                .attractions
                .into_iter()
                .map(|(a, images)| AttractionDto {
                    id: a.id,
                    name: a.name,
                    description: a.description,
                    tag: a.tag,
                    entry_fee: a.entry_fee,
                    opening_hours: a.opening_hours,
                    best_time_to_visit: a.best_time_to_visit,
                    available_transports: a.available_transports.into_inner(),
                    is_recommended: a.is_recommended,
                    region: a.region,
                    longitude: a.longitude,
                    latitude: a.latitude,
                    images: images
                        .into_iter()
                        .map(|i| image_dto(i.id, i.image_url, i.alt_text))
                        .collect(),
                })
                .collect(),
            transport_options: self
                .transport_options
                .into_iter()
                .map(|(t, r)| TransportOptionDto {
                    id: t.id,
                    price_range: t.price_range,
                    availability: t.availability,
                    description: t.description,
                    transport_ref: TypeRefSummaryDto {
                        id: r.id,
                        name: r.name,
                        description: r.description,
                    },
                })
                .collect(),
            signature_dishes: self
                .signature_dishes
                .into_iter()
                .map(|s| SignatureDishDto {
                    id: s.id,
                    name: s.name,
                    tags: s.tags.into_inner(),
                    dietary_info: s.dietary_info.into_inner(),
                    price_range: s.price_range,
                    is_recommended: s.is_recommended,
                    local_notes: s.local_notes,
                })
                .collect(),
            accommodation_types: self
                .accommodation_types
                .into_iter()
                .map(|(l, r)| AccommodationTypeLinkDto {
                    id: l.id,
                    price_range: l.price_range,
                    availability: l.availability,
                    description: l.description,
                    type_ref: TypeRefSummaryDto {
                        id: r.id,
                        name: r.name,
                        description: r.description,
                    },
                })
                .collect(),
            accommodations: self
                .accommodations
                .into_iter()
                .map(|AccommodationWithType { accommodation: a, link }| AccommodationDto {
                    id: a.id,
                    name: a.name,
                    price_range: a.price_range,
                    rating: a.rating,
                    distance: a.distance,
                    region: a.region,
                    longitude: a.longitude,
                    latitude: a.latitude,
                    phone: a.phone,
                    email: a.email,
                    website: a.website,
                    accommodation_type: link.map(|(l, r)| AccommodationTypeRefLinkDto {
                        id: l.id,
                        price_range: l.price_range,
                        type_ref: TypeRefSummaryDto {
                            id: r.id,
                            name: r.name,
                            description: r.description,
                        },
                    }),
                })
                .collect(),
            activities: self
                .activities
                .into_iter()
                .map(|(a, r)| ActivityDto {
                    id: a.id,
                    price_range: a.price_range,
                    duration: a.duration,
                    difficulty: a.difficulty,
                    best_season: a.best_season,
                    booking_required: a.booking_required,
                    is_popular: a.is_popular,
                    description: a.description,
                    activity_ref: ActivityRefDto {
                        id: r.id,
                        name: r.name,
                        description: r.description,
                        category: r.category,
                    },
                })
                .collect(),
            restaurants: self
                .restaurants
                .into_iter()
                .map(|r| RestaurantDto {
                    id: r.id,
                    name: r.name,
                    rating: r.rating,
                    price_range: r.price_range,
                    signature_dishes: r.signature_dishes.into_inner(),
                    cuisine_type: r.cuisine_type.into_inner(),
                    contact: r.contact,
                    opening_hours: r.opening_hours,
                    accepts_reservation: r.accepts_reservation,
                    is_recommended: r.is_recommended,
                    region: r.region,
                    longitude: r.longitude,
                    latitude: r.latitude,
                })
                .collect(),
        }
    }
}

/// Listing entry: the destination row and its images.
#[derive(Debug, Clone, PartialEq)]
pub struct DestinationSummary {
    pub destination: entity::destination::Model,
    pub images: Vec<entity::destination_image::Model>,
}

impl DestinationSummary {
    pub fn into_dto(self) -> DestinationSummaryDto {
        let d = self.destination;

        DestinationSummaryDto {
            id: d.id,
            slug: d.slug,
            name: d.name,
            description: d.description,
            tags: d.tags.into_inner(),
            images: self.images.into_iter().map(destination_image_dto).collect(),
            best_time: d.best_time,
            cost_level: d.cost_level,
            avg_duration: d.avg_duration,
            country: d.country,
            region: d.region,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedDestinations {
    pub destinations: Vec<DestinationSummary>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl PaginatedDestinations {
    pub fn into_dto(self) -> PaginatedDestinationsDto {
        PaginatedDestinationsDto {
            destinations: self
                .destinations
                .into_iter()
                .map(DestinationSummary::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            page_size: self.page_size,
            total_pages: self.total_pages,
        }
    }
}
