//! Repository for the destination and attraction image tables.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::collections::HashSet;

use crate::server::model::image::{ImageTarget, NewImageRow};

pub struct ImageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ImageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the ids from `ids` with no row in the target table, deduplicated.
    pub async fn find_missing_targets(
        &self,
        target: ImageTarget,
        ids: &[i32],
    ) -> Result<Vec<i32>, DbErr> {
        let wanted: Vec<i32> = ids
            .iter()
            .copied()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        if wanted.is_empty() {
            return Ok(Vec::new());
        }

        let found: HashSet<i32> = match target {
            ImageTarget::Destination => entity::prelude::Destination::find()
                .select_only()
                .column(entity::destination::Column::Id)
                .filter(entity::destination::Column::Id.is_in(wanted.clone()))
                .into_tuple::<i32>()
                .all(self.db)
                .await?,
            ImageTarget::Attraction => entity::prelude::Attraction::find()
                .select_only()
                .column(entity::attraction::Column::Id)
                .filter(entity::attraction::Column::Id.is_in(wanted.clone()))
                .into_tuple::<i32>()
                .all(self.db)
                .await?,
        }
        .into_iter()
        .collect();

        let mut missing: Vec<i32> = wanted.into_iter().filter(|id| !found.contains(id)).collect();
        missing.sort_unstable();

        Ok(missing)
    }

    /// Batch inserts destination image rows. No-op for an empty slice.
    pub async fn insert_destination_images(&self, rows: &[NewImageRow]) -> Result<(), DbErr> {
        if rows.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let models = rows.iter().map(|row| entity::destination_image::ActiveModel {
            destination_id: ActiveValue::Set(row.target_id),
            image_url: ActiveValue::Set(row.image.url.clone()),
            public_id: ActiveValue::Set(row.image.public_id.clone()),
            alt_text: ActiveValue::Set(row.image.alt_text.clone()),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::DestinationImage::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Batch inserts attraction image rows. No-op for an empty slice.
    pub async fn insert_attraction_images(&self, rows: &[NewImageRow]) -> Result<(), DbErr> {
        if rows.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let models = rows.iter().map(|row| entity::attraction_image::ActiveModel {
            attraction_id: ActiveValue::Set(row.target_id),
            image_url: ActiveValue::Set(row.image.url.clone()),
            public_id: ActiveValue::Set(row.image.public_id.clone()),
            alt_text: ActiveValue::Set(row.image.alt_text.clone()),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::AttractionImage::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn get_destination_images(
        &self,
        destination_id: i32,
    ) -> Result<Vec<entity::destination_image::Model>, DbErr> {
        entity::prelude::DestinationImage::find()
            .filter(entity::destination_image::Column::DestinationId.eq(destination_id))
            .order_by_asc(entity::destination_image::Column::Id)
            .all(self.db)
            .await
    }
}
