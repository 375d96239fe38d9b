use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct HealthDto {
    /// `healthy` or `degraded`
    pub status: String,
    pub version: String,
    pub database: bool,
    pub timestamp: DateTime<Utc>,
}
