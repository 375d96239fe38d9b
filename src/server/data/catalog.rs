//! Repository for the accommodation, transport and activity type registries.
//!
//! The three registries share one shape, so a single repository dispatches on
//! `CatalogKind` and converts every row into a `TypeRef`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::collections::HashSet;

use crate::{
    model::catalog::CatalogKind,
    server::model::catalog::{CreateTypeRefParams, TypeRef},
};

pub struct CatalogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CatalogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTypeRefParams) -> Result<TypeRef, DbErr> {
        let now = Utc::now();

        let type_ref = match params.kind {
            CatalogKind::Accommodation => TypeRef::from_accommodation(
                entity::accommodation_type_ref::ActiveModel {
                    name: ActiveValue::Set(params.name),
                    description: ActiveValue::Set(params.description),
                    created_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?,
            ),
            CatalogKind::Transport => TypeRef::from_transport(
                entity::transport_type_ref::ActiveModel {
                    name: ActiveValue::Set(params.name),
                    description: ActiveValue::Set(params.description),
                    created_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?,
            ),
            CatalogKind::Activity => TypeRef::from_activity(
                entity::activity_type_ref::ActiveModel {
                    name: ActiveValue::Set(params.name),
                    description: ActiveValue::Set(params.description),
                    category: ActiveValue::Set(params.category),
                    created_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?,
            ),
        };

        Ok(type_ref)
    }

    /// Lists every entry of a registry in insertion order.
    pub async fn list(&self, kind: CatalogKind) -> Result<Vec<TypeRef>, DbErr> {
        let refs = match kind {
            CatalogKind::Accommodation => entity::prelude::AccommodationTypeRef::find()
                .order_by_asc(entity::accommodation_type_ref::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(TypeRef::from_accommodation)
                .collect(),
            CatalogKind::Transport => entity::prelude::TransportTypeRef::find()
                .order_by_asc(entity::transport_type_ref::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(TypeRef::from_transport)
                .collect(),
            CatalogKind::Activity => entity::prelude::ActivityTypeRef::find()
                .order_by_asc(entity::activity_type_ref::Column::Id)
                .all(self.db)
                .await?
                .into_iter()
                .map(TypeRef::from_activity)
                .collect(),
        };

        Ok(refs)
    }

    pub async fn find_by_id(&self, kind: CatalogKind, id: i32) -> Result<Option<TypeRef>, DbErr> {
        let type_ref = match kind {
            CatalogKind::Accommodation => entity::prelude::AccommodationTypeRef::find_by_id(id)
                .one(self.db)
                .await?
                .map(TypeRef::from_accommodation),
            CatalogKind::Transport => entity::prelude::TransportTypeRef::find_by_id(id)
                .one(self.db)
                .await?
                .map(TypeRef::from_transport),
            CatalogKind::Activity => entity::prelude::ActivityTypeRef::find_by_id(id)
                .one(self.db)
                .await?
                .map(TypeRef::from_activity),
        };

        Ok(type_ref)
    }

    /// Returns the ids from `ids` that have no row in the registry, in input order.
    pub async fn find_missing(&self, kind: CatalogKind, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let found: HashSet<i32> = match kind {
            CatalogKind::Accommodation => entity::prelude::AccommodationTypeRef::find()
                .select_only()
                .column(entity::accommodation_type_ref::Column::Id)
                .filter(entity::accommodation_type_ref::Column::Id.is_in(ids.to_vec()))
                .into_tuple::<i32>()
                .all(self.db)
                .await?,
            CatalogKind::Transport => entity::prelude::TransportTypeRef::find()
                .select_only()
                .column(entity::transport_type_ref::Column::Id)
                .filter(entity::transport_type_ref::Column::Id.is_in(ids.to_vec()))
                .into_tuple::<i32>()
                .all(self.db)
                .await?,
            CatalogKind::Activity => entity::prelude::ActivityTypeRef::find()
                .select_only()
                .column(entity::activity_type_ref::Column::Id)
                .filter(entity::activity_type_ref::Column::Id.is_in(ids.to_vec()))
                .into_tuple::<i32>()
                .all(self.db)
                .await?,
        }
        .into_iter()
        .collect();

        Ok(ids.iter().copied().filter(|id| !found.contains(id)).collect())
    }
}
