use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::model::health::HealthDto;

pub struct HealthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HealthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reports `healthy` when the database answers a ping, `degraded` otherwise.
    pub async fn check(&self) -> HealthDto {
        let database = match self.db.ping().await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("Database health check failed: {}", err);
                false
            }
        };

        HealthDto {
            status: if database { "healthy" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database,
            timestamp: Utc::now(),
        }
    }
}
