//! Factories for destinations, attractions and their images.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::string_list::StringList;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test destinations.
///
/// Inserts a bare destination row without any nested collections; use the
/// destination service when a test needs the full aggregate.
///
/// # Example
///
/// ```rust,ignore
/// let destination = DestinationFactory::new(&db)
///     .name("Cox's Bazar")
///     .slug("coxs-bazar")
///     .build()
///     .await?;
/// ```
pub struct DestinationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: String,
    country: String,
    region: String,
    tags: Vec<String>,
}

impl<'a> DestinationFactory<'a> {
    /// Creates a new DestinationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Destination {id}"`
    /// - slug: `"destination-{id}"`
    /// - country: `"Bangladesh"`
    /// - region: `"Chittagong"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Destination {}", id),
            slug: format!("destination-{}", id),
            country: "Bangladesh".to_string(),
            region: "Chittagong".to_string(),
            tags: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Builds and inserts the destination entity into the database.
    pub async fn build(self) -> Result<entity::destination::Model, DbErr> {
        let now = Utc::now();
        entity::destination::ActiveModel {
            slug: ActiveValue::Set(self.slug),
            name_search: ActiveValue::Set(self.name.to_lowercase()),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            tags: ActiveValue::Set(StringList(self.tags)),
            best_time: ActiveValue::Set(None),
            cost_level: ActiveValue::Set(None),
            avg_duration: ActiveValue::Set(None),
            suitable_for: ActiveValue::Set(StringList::default()),
            popular_for: ActiveValue::Set(StringList::default()),
            country: ActiveValue::Set(self.country),
            region: ActiveValue::Set(self.region),
            longitude: ActiveValue::Set(None),
            latitude: ActiveValue::Set(None),
            timezone: ActiveValue::Set("UTC".to_string()),
            weather: ActiveValue::Set(None),
            peak_season: ActiveValue::Set(None),
            festivals: ActiveValue::Set(None),
            languages: ActiveValue::Set(StringList::default()),
            payment_methods: ActiveValue::Set(StringList::default()),
            safety_tips: ActiveValue::Set(None),
            customs: ActiveValue::Set(None),
            how_to_reach: ActiveValue::Set(None),
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
}

/// Creates a destination with default values.
pub async fn create_destination(
    db: &DatabaseConnection,
) -> Result<entity::destination::Model, DbErr> {
    DestinationFactory::new(db).build().await
}

/// Creates an attraction named `"Attraction {id}"` for the given destination.
pub async fn create_attraction(
    db: &DatabaseConnection,
    destination_id: i32,
) -> Result<entity::attraction::Model, DbErr> {
    entity::attraction::ActiveModel {
        destination_id: ActiveValue::Set(destination_id),
        name: ActiveValue::Set(format!("Attraction {}", next_id())),
        description: ActiveValue::Set(None),
        tag: ActiveValue::Set(None),
        entry_fee: ActiveValue::Set(None),
        opening_hours: ActiveValue::Set(None),
        best_time_to_visit: ActiveValue::Set(None),
        available_transports: ActiveValue::Set(StringList::default()),
        is_recommended: ActiveValue::Set(false),
        region: ActiveValue::Set("Chittagong".to_string()),
        longitude: ActiveValue::Set(None),
        latitude: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a destination image pointing at a fake hosted URL.
pub async fn create_destination_image(
    db: &DatabaseConnection,
    destination_id: i32,
) -> Result<entity::destination_image::Model, DbErr> {
    let id = next_id();
    entity::destination_image::ActiveModel {
        destination_id: ActiveValue::Set(destination_id),
        image_url: ActiveValue::Set(format!("https://images.test/destination-{}.jpg", id)),
        public_id: ActiveValue::Set(format!("tourtoise/destination-{}", id)),
        alt_text: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an attraction image pointing at a fake hosted URL.
pub async fn create_attraction_image(
    db: &DatabaseConnection,
    attraction_id: i32,
) -> Result<entity::attraction_image::Model, DbErr> {
    let id = next_id();
    entity::attraction_image::ActiveModel {
        attraction_id: ActiveValue::Set(attraction_id),
        image_url: ActiveValue::Set(format!("https://images.test/attraction-{}.jpg", id)),
        public_id: ActiveValue::Set(format!("tourtoise/attraction-{}", id)),
        alt_text: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_destination_with_attraction_and_images() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_destination_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (destination, attraction) =
            crate::factory::helpers::create_destination_with_attraction(db).await?;
        let image = create_destination_image(db, destination.id).await?;
        let attraction_image = create_attraction_image(db, attraction.id).await?;

        assert_eq!(attraction.destination_id, destination.id);
        assert_eq!(image.destination_id, destination.id);
        assert_eq!(attraction_image.attraction_id, attraction.id);
        assert!(destination.slug.starts_with("destination-"));

        Ok(())
    }
}
