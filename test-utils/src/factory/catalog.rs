//! Factories for the accommodation, transport and activity type registries.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating type references of any catalog kind.
///
/// # Example
///
/// ```rust,ignore
/// let hotel = TypeRefFactory::new(&db).name("Hotel").accommodation().await?;
/// let trekking = TypeRefFactory::new(&db)
///     .name("Trekking")
///     .category("Adventure")
///     .activity()
///     .await?;
/// ```
pub struct TypeRefFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    category: Option<String>,
}

impl<'a> TypeRefFactory<'a> {
    /// Creates a new factory named `"Type {id}"` with no description or category.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Type {}", next_id()),
            description: None,
            category: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the category; only stored by `activity()`.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Inserts the configured values as an accommodation type reference.
    pub async fn accommodation(self) -> Result<entity::accommodation_type_ref::Model, DbErr> {
        entity::accommodation_type_ref::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Inserts the configured values as a transport type reference.
    pub async fn transport(self) -> Result<entity::transport_type_ref::Model, DbErr> {
        entity::transport_type_ref::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Inserts the configured values as an activity type reference.
    pub async fn activity(self) -> Result<entity::activity_type_ref::Model, DbErr> {
        entity::activity_type_ref::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            category: ActiveValue::Set(self.category),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_accommodation_type(
    db: &DatabaseConnection,
) -> Result<entity::accommodation_type_ref::Model, DbErr> {
    TypeRefFactory::new(db).accommodation().await
}

pub async fn create_transport_type(
    db: &DatabaseConnection,
) -> Result<entity::transport_type_ref::Model, DbErr> {
    TypeRefFactory::new(db).transport().await
}

pub async fn create_activity_type(
    db: &DatabaseConnection,
) -> Result<entity::activity_type_ref::Model, DbErr> {
    TypeRefFactory::new(db).activity().await
}
