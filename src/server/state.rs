//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. Every field is cheap to clone.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{config::UploadSettings, image_host::ImageHost};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Remote image storage used by destination creation and image uploads.
    pub image_host: Arc<dyn ImageHost>,

    /// Timeout and concurrency bounds for upload fan-outs.
    pub upload: UploadSettings,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        image_host: Arc<dyn ImageHost>,
        upload: UploadSettings,
    ) -> Self {
        Self {
            db,
            image_host,
            upload,
        }
    }
}
