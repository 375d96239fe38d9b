//! Destination aggregate repository.
//!
//! Every method is generic over `ConnectionTrait` so the service can run the staged
//! inserts and the ownership-ordered delete on a single `DatabaseTransaction`. The
//! repository never opens or commits transactions itself.

use chrono::Utc;
use entity::string_list::StringList;
use sea_orm::{
    sea_query::{Expr, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::{
    model::{
        destination::{
            AccommodationWithType, DestinationDetails, DestinationSummary, NewAccommodation,
            NewAccommodationTypeLink, NewActivity, NewAttraction, NewDestination, NewRestaurant,
            NewSignatureDish, NewTransportOption,
        },
        page::PageRequest,
    },
    util::slug,
};

pub struct DestinationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DestinationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Destination::find()
            .filter(entity::destination::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Derives a slug from `name`, appending `-2`, `-3`, ... until it is unused.
    pub async fn unique_slug(&self, name: &str) -> Result<String, DbErr> {
        let base = slug::slugify(name);
        let mut attempt = 1;

        loop {
            let candidate = slug::with_suffix(&base, attempt);
            if !self.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
            attempt += 1;
        }
    }

    pub async fn insert_destination(
        &self,
        destination: &NewDestination,
        slug: String,
    ) -> Result<entity::destination::Model, DbErr> {
        let now = Utc::now();
        let d = destination.clone();

        entity::destination::ActiveModel {
            slug: ActiveValue::Set(slug),
            name_search: ActiveValue::Set(d.name.to_lowercase()),
            name: ActiveValue::Set(d.name),
            description: ActiveValue::Set(d.description),
            tags: ActiveValue::Set(StringList(d.tags)),
            best_time: ActiveValue::Set(d.best_time),
            cost_level: ActiveValue::Set(d.cost_level.map(|c| c.as_str().to_string())),
            avg_duration: ActiveValue::Set(d.avg_duration),
            suitable_for: ActiveValue::Set(StringList(d.suitable_for)),
            popular_for: ActiveValue::Set(StringList(d.popular_for)),
            country: ActiveValue::Set(d.country),
            region: ActiveValue::Set(d.region),
            longitude: ActiveValue::Set(d.longitude),
            latitude: ActiveValue::Set(d.latitude),
            timezone: ActiveValue::Set(d.timezone),
            weather: ActiveValue::Set(d.weather),
            peak_season: ActiveValue::Set(d.peak_season),
            festivals: ActiveValue::Set(d.festivals),
            languages: ActiveValue::Set(StringList(d.languages)),
            payment_methods: ActiveValue::Set(StringList(d.payment_methods)),
            safety_tips: ActiveValue::Set(d.safety_tips),
            customs: ActiveValue::Set(d.customs),
            how_to_reach: ActiveValue::Set(d.how_to_reach),
            is_active: ActiveValue::Set(true),
            is_featured: ActiveValue::Set(false),
            view_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Inserts the accommodation type links.
    ///
    /// # Returns
    /// - `Ok(HashMap<type_ref_id, link_id>)` - Used to resolve accommodations to their link
    pub async fn insert_accommodation_types(
        &self,
        destination_id: i32,
        links: &[NewAccommodationTypeLink],
    ) -> Result<HashMap<i32, i32>, DbErr> {
        let mut link_ids = HashMap::with_capacity(links.len());

        for link in links {
            let row = entity::destination_accommodation_type::ActiveModel {
                destination_id: ActiveValue::Set(destination_id),
                type_ref_id: ActiveValue::Set(link.type_ref_id),
                price_range: ActiveValue::Set(link.price_range.clone()),
                availability: ActiveValue::Set(link.availability.clone()),
                description: ActiveValue::Set(link.description.clone()),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;

            link_ids.insert(link.type_ref_id, row.id);
        }

        Ok(link_ids)
    }

    pub async fn insert_transport_options(
        &self,
        destination_id: i32,
        options: &[NewTransportOption],
    ) -> Result<(), DbErr> {
        for option in options {
            entity::destination_transport_option::ActiveModel {
                destination_id: ActiveValue::Set(destination_id),
                transport_ref_id: ActiveValue::Set(option.transport_ref_id),
                price_range: ActiveValue::Set(option.price_range.clone()),
                availability: ActiveValue::Set(option.availability.clone()),
                description: ActiveValue::Set(option.description.clone()),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    pub async fn insert_activities(
        &self,
        destination_id: i32,
        activities: &[NewActivity],
    ) -> Result<(), DbErr> {
        for activity in activities {
            entity::destination_activity::ActiveModel {
                destination_id: ActiveValue::Set(destination_id),
                activity_ref_id: ActiveValue::Set(activity.activity_ref_id),
                price_range: ActiveValue::Set(activity.price_range.clone()),
                description: ActiveValue::Set(activity.description.clone()),
                duration: ActiveValue::Set(activity.duration.clone()),
                difficulty: ActiveValue::Set(activity.difficulty.clone()),
                best_season: ActiveValue::Set(activity.best_season.clone()),
                booking_required: ActiveValue::Set(activity.booking_required),
                is_popular: ActiveValue::Set(activity.is_popular),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    pub async fn insert_signature_dishes(
        &self,
        destination_id: i32,
        dishes: &[NewSignatureDish],
    ) -> Result<(), DbErr> {
        for dish in dishes {
            entity::destination_signature_dish::ActiveModel {
                destination_id: ActiveValue::Set(destination_id),
                name: ActiveValue::Set(dish.name.clone()),
                tags: ActiveValue::Set(StringList(dish.tags.clone())),
                dietary_info: ActiveValue::Set(StringList(dish.dietary_info.clone())),
                price_range: ActiveValue::Set(dish.price_range.clone()),
                is_recommended: ActiveValue::Set(dish.is_recommended),
                local_notes: ActiveValue::Set(dish.local_notes.clone()),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Inserts accommodations, resolving each type reference id through `link_ids`.
    ///
    /// A type reference that was not linked in the same request stores a null link.
    pub async fn insert_accommodations(
        &self,
        destination_id: i32,
        accommodations: &[NewAccommodation],
        link_ids: &HashMap<i32, i32>,
    ) -> Result<(), DbErr> {
        for a in accommodations {
            let link_id = a.type_ref_id.and_then(|id| link_ids.get(&id).copied());

            entity::accommodation::ActiveModel {
                destination_id: ActiveValue::Set(destination_id),
                accommodation_type_id: ActiveValue::Set(link_id),
                name: ActiveValue::Set(a.name.clone()),
                price_range: ActiveValue::Set(a.price_range.clone()),
                rating: ActiveValue::Set(a.rating.clone()),
                distance: ActiveValue::Set(a.distance.clone()),
                region: ActiveValue::Set(a.region.clone()),
                longitude: ActiveValue::Set(a.longitude.clone()),
                latitude: ActiveValue::Set(a.latitude.clone()),
                phone: ActiveValue::Set(a.phone.clone()),
                email: ActiveValue::Set(a.email.clone()),
                website: ActiveValue::Set(a.website.clone()),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    pub async fn insert_attractions(
        &self,
        destination_id: i32,
        attractions: &[NewAttraction],
    ) -> Result<(), DbErr> {
        for a in attractions {
            entity::attraction::ActiveModel {
                destination_id: ActiveValue::Set(destination_id),
                name: ActiveValue::Set(a.name.clone()),
                description: ActiveValue::Set(a.description.clone()),
                tag: ActiveValue::Set(a.tag.map(|t| t.as_str().to_string())),
                entry_fee: ActiveValue::Set(a.entry_fee.clone()),
                opening_hours: ActiveValue::Set(a.opening_hours.clone()),
                best_time_to_visit: ActiveValue::Set(a.best_time_to_visit.clone()),
                available_transports: ActiveValue::Set(StringList(a.available_transports.clone())),
                is_recommended: ActiveValue::Set(a.is_recommended),
                region: ActiveValue::Set(a.region.clone()),
                longitude: ActiveValue::Set(a.longitude.clone()),
                latitude: ActiveValue::Set(a.latitude.clone()),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    pub async fn insert_restaurants(
        &self,
        destination_id: i32,
        restaurants: &[NewRestaurant],
    ) -> Result<(), DbErr> {
        for r in restaurants {
            entity::restaurant::ActiveModel {
                destination_id: ActiveValue::Set(destination_id),
                name: ActiveValue::Set(r.name.clone()),
                rating: ActiveValue::Set(r.rating.clone()),
                price_range: ActiveValue::Set(r.price_range.clone()),
                signature_dishes: ActiveValue::Set(StringList(r.signature_dishes.clone())),
                cuisine_type: ActiveValue::Set(StringList(r.cuisine_type.clone())),
                contact: ActiveValue::Set(r.contact.clone()),
                opening_hours: ActiveValue::Set(r.opening_hours.clone()),
                accepts_reservation: ActiveValue::Set(r.accepts_reservation),
                is_recommended: ActiveValue::Set(r.is_recommended),
                region: ActiveValue::Set(r.region.clone()),
                longitude: ActiveValue::Set(r.longitude.clone()),
                latitude: ActiveValue::Set(r.latitude.clone()),
                created_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Destination::find_by_id(id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn find_id_by_slug(&self, slug: &str) -> Result<Option<i32>, DbErr> {
        entity::prelude::Destination::find()
            .select_only()
            .column(entity::destination::Column::Id)
            .filter(entity::destination::Column::Slug.eq(slug))
            .into_tuple::<i32>()
            .one(self.db)
            .await
    }

    /// Assembles the full read-model for one destination.
    ///
    /// Every collection is ordered by id, i.e. insertion order.
    ///
    /// # Returns
    /// - `Ok(Some(DestinationDetails))` - Destination with all collections
    /// - `Ok(None)` - No destination with that id
    pub async fn get_details(&self, id: i32) -> Result<Option<DestinationDetails>, DbErr> {
        let Some(destination) = entity::prelude::Destination::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let images = entity::prelude::DestinationImage::find()
            .filter(entity::destination_image::Column::DestinationId.eq(id))
            .order_by_asc(entity::destination_image::Column::Id)
            .all(self.db)
            .await?;

        let attraction_rows = entity::prelude::Attraction::find()
            .filter(entity::attraction::Column::DestinationId.eq(id))
            .order_by_asc(entity::attraction::Column::Id)
            .all(self.db)
            .await?;

        let attraction_ids: Vec<i32> = attraction_rows.iter().map(|a| a.id).collect();
        let mut attraction_images: HashMap<i32, Vec<entity::attraction_image::Model>> =
            HashMap::new();
        if !attraction_ids.is_empty() {
            for image in entity::prelude::AttractionImage::find()
                .filter(entity::attraction_image::Column::AttractionId.is_in(attraction_ids))
                .order_by_asc(entity::attraction_image::Column::Id)
                .all(self.db)
                .await?
            {
                attraction_images
                    .entry(image.attraction_id)
                    .or_default()
                    .push(image);
            }
        }

        let attractions = attraction_rows
            .into_iter()
            .map(|a| {
                let images = attraction_images.remove(&a.id).unwrap_or_default();
                (a, images)
            })
            .collect();

        let transport_options = entity::prelude::DestinationTransportOption::find()
            .filter(entity::destination_transport_option::Column::DestinationId.eq(id))
            .order_by_asc(entity::destination_transport_option::Column::Id)
            .find_also_related(entity::prelude::TransportTypeRef)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(option, type_ref)| type_ref.map(|r| (option, r)))
            .collect();

        let signature_dishes = entity::prelude::DestinationSignatureDish::find()
            .filter(entity::destination_signature_dish::Column::DestinationId.eq(id))
            .order_by_asc(entity::destination_signature_dish::Column::Id)
            .all(self.db)
            .await?;

        let accommodation_types: Vec<_> = entity::prelude::DestinationAccommodationType::find()
            .filter(entity::destination_accommodation_type::Column::DestinationId.eq(id))
            .order_by_asc(entity::destination_accommodation_type::Column::Id)
            .find_also_related(entity::prelude::AccommodationTypeRef)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(link, type_ref)| type_ref.map(|r| (link, r)))
            .collect();

        let links_by_id: HashMap<i32, _> = accommodation_types
            .iter()
            .map(|(link, type_ref)| (link.id, (link.clone(), type_ref.clone())))
            .collect();

        let accommodations = entity::prelude::Accommodation::find()
            .filter(entity::accommodation::Column::DestinationId.eq(id))
            .order_by_asc(entity::accommodation::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(|accommodation| {
                let link = accommodation
                    .accommodation_type_id
                    .and_then(|link_id| links_by_id.get(&link_id).cloned());
                AccommodationWithType {
                    accommodation,
                    link,
                }
            })
            .collect();

        let activities = entity::prelude::DestinationActivity::find()
            .filter(entity::destination_activity::Column::DestinationId.eq(id))
            .order_by_asc(entity::destination_activity::Column::Id)
            .find_also_related(entity::prelude::ActivityTypeRef)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(activity, type_ref)| type_ref.map(|r| (activity, r)))
            .collect();

        let restaurants = entity::prelude::Restaurant::find()
            .filter(entity::restaurant::Column::DestinationId.eq(id))
            .order_by_asc(entity::restaurant::Column::Id)
            .all(self.db)
            .await?;

        Ok(Some(DestinationDetails {
            destination,
            images,
            attractions,
            transport_options,
            signature_dishes,
            accommodation_types,
            accommodations,
            activities,
            restaurants,
        }))
    }

    /// Gets a page of destination summaries ordered by name, then id.
    ///
    /// The search term matches anywhere in the lowercased name column; the total
    /// is counted over the same predicate.
    ///
    /// # Returns
    /// - `Ok((summaries, total))` - Page of summaries with their images
    pub async fn get_paginated(
        &self,
        request: &PageRequest,
    ) -> Result<(Vec<DestinationSummary>, u64), DbErr> {
        let mut query = entity::prelude::Destination::find();

        if let Some(pattern) = request.like_pattern() {
            query = query.filter(
                Expr::col(entity::destination::Column::NameSearch)
                    .like(LikeExpr::new(pattern).escape('\\')),
            );
        }

        let paginator = query
            .order_by_asc(entity::destination::Column::Name)
            .order_by_asc(entity::destination::Column::Id)
            .paginate(self.db, request.page_size);

        let total = paginator.num_items().await?;
        let destinations = paginator.fetch_page(request.index()).await?;

        let ids: Vec<i32> = destinations.iter().map(|d| d.id).collect();
        let mut images: HashMap<i32, Vec<entity::destination_image::Model>> = HashMap::new();
        if !ids.is_empty() {
            for image in entity::prelude::DestinationImage::find()
                .filter(entity::destination_image::Column::DestinationId.is_in(ids))
                .order_by_asc(entity::destination_image::Column::Id)
                .all(self.db)
                .await?
            {
                images.entry(image.destination_id).or_default().push(image);
            }
        }

        let summaries = destinations
            .into_iter()
            .map(|destination| {
                let images = images.remove(&destination.id).unwrap_or_default();
                DestinationSummary {
                    destination,
                    images,
                }
            })
            .collect();

        Ok((summaries, total))
    }

    /// Deletes a destination and every row it owns, children first.
    ///
    /// Must run on a transaction. The image host objects are left in place.
    ///
    /// # Returns
    /// - `Ok(public_ids)` - Host identifiers of the image rows that were removed
    pub async fn delete_aggregate(&self, id: i32) -> Result<Vec<String>, DbErr> {
        let attraction_ids: Vec<i32> = entity::prelude::Attraction::find()
            .select_only()
            .column(entity::attraction::Column::Id)
            .filter(entity::attraction::Column::DestinationId.eq(id))
            .into_tuple::<i32>()
            .all(self.db)
            .await?;

        let mut public_ids: Vec<String> = Vec::new();

        if !attraction_ids.is_empty() {
            public_ids.extend(
                entity::prelude::AttractionImage::find()
                    .select_only()
                    .column(entity::attraction_image::Column::PublicId)
                    .filter(
                        entity::attraction_image::Column::AttractionId.is_in(attraction_ids.clone()),
                    )
                    .into_tuple::<String>()
                    .all(self.db)
                    .await?,
            );

            entity::prelude::AttractionImage::delete_many()
                .filter(entity::attraction_image::Column::AttractionId.is_in(attraction_ids))
                .exec(self.db)
                .await?;
        }

        entity::prelude::Attraction::delete_many()
            .filter(entity::attraction::Column::DestinationId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Accommodation::delete_many()
            .filter(entity::accommodation::Column::DestinationId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::DestinationAccommodationType::delete_many()
            .filter(entity::destination_accommodation_type::Column::DestinationId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::DestinationTransportOption::delete_many()
            .filter(entity::destination_transport_option::Column::DestinationId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::DestinationActivity::delete_many()
            .filter(entity::destination_activity::Column::DestinationId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::DestinationSignatureDish::delete_many()
            .filter(entity::destination_signature_dish::Column::DestinationId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Restaurant::delete_many()
            .filter(entity::restaurant::Column::DestinationId.eq(id))
            .exec(self.db)
            .await?;

        public_ids.extend(
            entity::prelude::DestinationImage::find()
                .select_only()
                .column(entity::destination_image::Column::PublicId)
                .filter(entity::destination_image::Column::DestinationId.eq(id))
                .into_tuple::<String>()
                .all(self.db)
                .await?,
        );

        entity::prelude::DestinationImage::delete_many()
            .filter(entity::destination_image::Column::DestinationId.eq(id))
            .exec(self.db)
            .await?;

        entity::prelude::Destination::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(public_ids)
    }
}
