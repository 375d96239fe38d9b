use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Which type reference registry a request addresses.
///
/// Serialized as the URL segment used by the catalog routes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, ToSchema)]
pub enum CatalogKind {
    #[serde(rename = "accommodation-types")]
    Accommodation,
    #[serde(rename = "transport-types")]
    Transport,
    #[serde(rename = "activity-types")]
    Activity,
}

impl CatalogKind {
    /// Human readable label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Accommodation => "Accommodation type",
            Self::Transport => "Transport type",
            Self::Activity => "Activity type",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CreateTypeRefDto {
    pub name: String,
    pub description: Option<String>,
    /// Only stored for activity types.
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct TypeRefDto {
    pub id: i32,
    pub kind: CatalogKind,
    pub name: String,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}
