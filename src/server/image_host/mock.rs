use async_trait::async_trait;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use crate::server::{
    error::upload::UploadError,
    image_host::{ImageFile, ImageHost, UploadedImage},
};

/// In-memory image host that records calls and can be told to fail.
#[derive(Default)]
pub struct MockImageHost {
    uploads: AtomicUsize,
    fail_file: Option<String>,
    deleted: Mutex<Vec<String>>,
}

impl MockImageHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects any upload whose file name equals `file_name`.
    pub fn failing_on(file_name: impl Into<String>) -> Self {
        Self {
            fail_file: Some(file_name.into()),
            ..Self::default()
        }
    }

    pub fn upload_count(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted
            .lock()
            .map(|d| d.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ImageHost for MockImageHost {
    async fn upload(&self, file: ImageFile) -> Result<UploadedImage, UploadError> {
        let n = self.uploads.fetch_add(1, Ordering::SeqCst) + 1;

        if self.fail_file.as_deref() == Some(file.file_name.as_str()) {
            return Err(UploadError::Rejected {
                status: 400,
                message: format!("rejected {}", file.file_name),
            });
        }

        Ok(UploadedImage {
            url: format!("https://images.test/{}/{}", n, file.file_name),
            public_id: format!("test/{}-{}", n, file.file_name),
            width: None,
            height: None,
            format: None,
        })
    }

    async fn delete(&self, public_id: &str) -> Result<bool, UploadError> {
        if let Ok(mut deleted) = self.deleted.lock() {
            deleted.push(public_id.to_string());
        }
        Ok(true)
    }
}
