use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::catalog::CatalogKind,
    server::{
        data::catalog::CatalogRepository,
        error::AppError,
        model::catalog::{CreateTypeRefParams, TypeRef},
    },
};

/// Accommodation, transport and activity type registries.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new type reference.
    ///
    /// # Returns
    /// - `Ok(TypeRef)` - Created type
    /// - `Err(AppError::Conflict)` - A type of this kind already has that name
    pub async fn create(&self, params: CreateTypeRefParams) -> Result<TypeRef, AppError> {
        let kind = params.kind;
        let name = params.name.clone();

        match CatalogRepository::new(self.db).create(params).await {
            Ok(type_ref) => Ok(type_ref),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::Conflict(format!(
                    "{} '{}' already exists",
                    kind.label(),
                    name
                )))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Lists every type of `kind` in insertion order.
    pub async fn list(&self, kind: CatalogKind) -> Result<Vec<TypeRef>, AppError> {
        Ok(CatalogRepository::new(self.db).list(kind).await?)
    }

    pub async fn get_by_id(&self, kind: CatalogKind, id: i32) -> Result<TypeRef, AppError> {
        CatalogRepository::new(self.db)
            .find_by_id(kind, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} {} not found", kind.label(), id)))
    }
}
