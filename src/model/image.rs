use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Image persisted after a confirmed remote upload.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ImageRecordDto {
    pub url: String,
    pub alt_text: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UploadImagesResponseDto {
    pub images: Vec<ImageRecordDto>,
}
