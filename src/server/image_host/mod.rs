//! Remote image storage.
//!
//! Services depend on the `ImageHost` trait only; production wires in
//! `CloudinaryClient`, tests substitute `MockImageHost`.

pub mod cloudinary;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use bytes::Bytes;

use crate::server::error::upload::UploadError;

/// Raw file received from a client, ready to be pushed to the host.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

/// Result of a confirmed upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub url: String,
    pub public_id: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub format: Option<String>,
}

#[async_trait]
pub trait ImageHost: Send + Sync {
    /// Stores the file and returns its public location.
    async fn upload(&self, file: ImageFile) -> Result<UploadedImage, UploadError>;

    /// Removes a previously uploaded object. Returns whether the host reported it deleted.
    async fn delete(&self, public_id: &str) -> Result<bool, UploadError>;
}
