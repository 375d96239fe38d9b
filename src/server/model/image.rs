//! Image upload models.

use crate::{
    model::image::ImageRecordDto,
    server::{
        error::AppError,
        image_host::ImageFile,
        util::{multipart::IndexedPart, normalize::optional_text},
    },
};

/// Which table an uploaded image is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageTarget {
    Destination,
    Attraction,
}

impl ImageTarget {
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value.trim().to_lowercase().as_str() {
            "destination" => Ok(Self::Destination),
            "attraction" => Ok(Self::Attraction),
            other => Err(AppError::Validation(format!(
                "Image type must be 'destination' or 'attraction', got '{}'",
                other
            ))),
        }
    }
}

/// A file attached to a destination creation request.
#[derive(Debug, Clone)]
pub struct PendingImage {
    pub file: ImageFile,
    pub alt_text: Option<String>,
}

impl PendingImage {
    /// Builds from the `images[i].*` parts of a creation form.
    pub fn from_part(index: usize, part: IndexedPart) -> Result<Self, AppError> {
        let alt_text = optional_text(part.text("alt_text").map(str::to_string));
        let Some(file) = part.file else {
            return Err(AppError::Validation(format!(
                "images[{}] is missing its file",
                index
            )));
        };

        Ok(Self { file, alt_text })
    }
}

/// A file to upload and attach to an existing destination or attraction.
#[derive(Debug, Clone)]
pub struct PendingUpload {
    pub target: ImageTarget,
    pub target_id: i32,
    pub image: PendingImage,
}

impl PendingUpload {
    /// Builds from the `images[i].file`, `.type`, `.target_id` and `.alt_text` parts.
    pub fn from_part(index: usize, part: IndexedPart) -> Result<Self, AppError> {
        let target = ImageTarget::parse(part.text("type").ok_or_else(|| {
            AppError::Validation(format!("images[{}].type is required", index))
        })?)?;

        let target_id = part
            .text("target_id")
            .and_then(|id| id.trim().parse::<i32>().ok())
            .ok_or_else(|| {
                AppError::Validation(format!("images[{}].target_id must be an integer", index))
            })?;

        Ok(Self {
            target,
            target_id,
            image: PendingImage::from_part(index, part)?,
        })
    }
}

/// An image confirmed by the host, ready to be written to the database.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredImage {
    pub url: String,
    pub public_id: String,
    pub alt_text: Option<String>,
}

/// Row for one of the image tables.
#[derive(Debug, Clone, PartialEq)]
pub struct NewImageRow {
    pub target: ImageTarget,
    pub target_id: i32,
    pub image: StoredImage,
}

/// Persisted image as returned to callers.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    pub url: String,
    pub alt_text: Option<String>,
}

impl ImageRecord {
    pub fn into_dto(self) -> ImageRecordDto {
        ImageRecordDto {
            url: self.url,
            alt_text: self.alt_text,
        }
    }
}
