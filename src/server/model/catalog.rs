//! Type reference domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::catalog::{CatalogKind, CreateTypeRefDto, TypeRefDto},
    server::{error::AppError, util::normalize::optional_text},
};

/// Entry of one of the three type registries.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeRef {
    pub id: i32,
    pub kind: CatalogKind,
    pub name: String,
    pub description: Option<String>,
    /// Only populated for activity types.
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TypeRef {
    pub fn into_dto(self) -> TypeRefDto {
        TypeRefDto {
            id: self.id,
            kind: self.kind,
            name: self.name,
            description: self.description,
            category: self.category,
            created_at: self.created_at,
        }
    }

    pub fn from_accommodation(entity: entity::accommodation_type_ref::Model) -> Self {
        Self {
            id: entity.id,
            kind: CatalogKind::Accommodation,
            name: entity.name,
            description: entity.description,
            category: None,
            created_at: entity.created_at,
        }
    }

    pub fn from_transport(entity: entity::transport_type_ref::Model) -> Self {
        Self {
            id: entity.id,
            kind: CatalogKind::Transport,
            name: entity.name,
            description: entity.description,
            category: None,
            created_at: entity.created_at,
        }
    }

    pub fn from_activity(entity: entity::activity_type_ref::Model) -> Self {
        Self {
            id: entity.id,
            kind: CatalogKind::Activity,
            name: entity.name,
            description: entity.description,
            category: entity.category,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTypeRefParams {
    pub kind: CatalogKind,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl CreateTypeRefParams {
    /// Trims the name and drops `category` for kinds that do not store it.
    pub fn from_dto(kind: CatalogKind, dto: CreateTypeRefDto) -> Result<Self, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation(format!(
                "{} name is required",
                kind.label()
            )));
        }

        let category = match kind {
            CatalogKind::Activity => optional_text(dto.category),
            _ => None,
        };

        Ok(Self {
            kind,
            name,
            description: optional_text(dto.description),
            category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_category_outside_activity_types() {
        let dto = CreateTypeRefDto {
            name: " Hotel ".to_string(),
            description: None,
            category: Some("Outdoor".to_string()),
        };

        let params = CreateTypeRefParams::from_dto(CatalogKind::Accommodation, dto.clone()).unwrap();
        assert_eq!(params.name, "Hotel");
        assert_eq!(params.category, None);

        let params = CreateTypeRefParams::from_dto(CatalogKind::Activity, dto).unwrap();
        assert_eq!(params.category.as_deref(), Some("Outdoor"));
    }

    #[test]
    fn rejects_blank_name() {
        let dto = CreateTypeRefDto {
            name: "   ".to_string(),
            description: None,
            category: None,
        };

        assert!(matches!(
            CreateTypeRefParams::from_dto(CatalogKind::Transport, dto),
            Err(AppError::Validation(_))
        ));
    }
}
