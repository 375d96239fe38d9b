use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        image::{ImageRecordDto, UploadImagesResponseDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::image::{ImageRecord, PendingUpload},
        service::image::ImageService,
        state::AppState,
        util::multipart::read_form,
    },
};

/// Tag for grouping image endpoints in OpenAPI documentation
pub static IMAGE_TAG: &str = "image";

/// Upload images and attach them to destinations or attractions.
///
/// Multipart form with `images[i].file`, `images[i].type` (`destination` or
/// `attraction`), `images[i].target_id` and optional `images[i].alt_text` parts.
/// All uploads must succeed before anything is stored.
///
/// # Access Control
/// - Logged-in users
///
/// # Returns
/// - `201 Created` - Stored images in request order
/// - `400 Bad Request` - Malformed form or unknown target id
/// - `401 Unauthorized` - Not logged in
/// - `502 Bad Gateway` - Image host failure or timeout
#[utoipa::path(
    post,
    path = "/api/images",
    tag = IMAGE_TAG,
    request_body(content_type = "multipart/form-data", description = "Indexed `images[i].*` parts"),
    responses(
        (status = 201, description = "Images stored", body = UploadImagesResponseDto),
        (status = 400, description = "Invalid upload request", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto),
        (status = 502, description = "Image upload failed", body = ErrorDto)
    ),
)]
pub async fn upload_images(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let form = read_form(multipart, "images").await?;

    let uploads = form
        .indexed
        .into_parts()
        .map(|(index, part)| PendingUpload::from_part(index, part))
        .collect::<Result<Vec<_>, _>>()?;

    let images = ImageService::new(&state.db, state.image_host.as_ref(), state.upload)
        .upload_images(uploads)
        .await?;

    let images: Vec<ImageRecordDto> = images.into_iter().map(ImageRecord::into_dto).collect();

    Ok((StatusCode::CREATED, Json(UploadImagesResponseDto { images })))
}
