use axum::{
    extract::{FromRequest, Multipart, Path, Query, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PageQuery},
        destination::{CreateDestinationDto, DestinationDetailsDto, PaginatedDestinationsDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            destination::CreateDestinationParams, image::PendingImage, page::PageRequest,
        },
        service::destination::DestinationService,
        state::AppState,
        util::multipart::read_form,
    },
};

/// Tag for grouping destination endpoints in OpenAPI documentation
pub static DESTINATION_TAG: &str = "destination";

/// Multipart part holding the JSON creation payload.
const PAYLOAD_PART: &str = "payload";
/// Prefix of the indexed image parts, e.g. `images[0].file`.
const IMAGES_PREFIX: &str = "images";

/// Creation request read from either a JSON body or a multipart form.
///
/// The multipart form carries the same JSON in a `payload` part, plus any number of
/// `images[i].file` / `images[i].alt_text` parts.
pub struct CreateDestinationRequest {
    pub payload: CreateDestinationDto,
    pub images: Vec<PendingImage>,
}

impl<S> FromRequest<S> for CreateDestinationRequest
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        if !is_multipart {
            let Json(payload) = Json::<CreateDestinationDto>::from_request(req, state).await?;
            return Ok(Self {
                payload,
                images: Vec::new(),
            });
        }

        let multipart = Multipart::from_request(req, state).await?;
        let mut form = read_form(multipart, IMAGES_PREFIX).await?;

        let Some(raw) = form.fields.remove(PAYLOAD_PART) else {
            return Err(AppError::BadRequest(format!(
                "Multipart request is missing the '{}' part",
                PAYLOAD_PART
            )));
        };

        let payload = serde_json::from_str::<CreateDestinationDto>(&raw)
            .map_err(|e| AppError::BadRequest(format!("Invalid '{}' JSON: {}", PAYLOAD_PART, e)))?;

        let images = form
            .indexed
            .into_parts()
            .map(|(index, part)| PendingImage::from_part(index, part))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { payload, images })
    }
}

/// Create a destination with all of its nested collections.
///
/// Accepts `application/json`, or `multipart/form-data` with a `payload` JSON part
/// and `images[i].file` / `images[i].alt_text` parts. Referenced type ids are checked
/// first, images are uploaded next, and every row is written in one transaction.
///
/// # Access Control
/// - Logged-in users
///
/// # Returns
/// - `201 Created` - The created destination as read back after commit
/// - `400 Bad Request` - Invalid payload or unknown type reference
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Write failed and was rolled back
/// - `502 Bad Gateway` - Image host failure
#[utoipa::path(
    post,
    path = "/api/destinations",
    tag = DESTINATION_TAG,
    request_body(content = CreateDestinationDto, description = "JSON body, or the `payload` part of a multipart form"),
    responses(
        (status = 201, description = "Destination created", body = DestinationDetailsDto),
        (status = 400, description = "Invalid destination data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Destination could not be created", body = ErrorDto),
        (status = 502, description = "Image upload failed", body = ErrorDto)
    ),
)]
pub async fn create_destination(
    State(state): State<AppState>,
    session: Session,
    request: CreateDestinationRequest,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreateDestinationParams::from_dto(request.payload, request.images)?;

    let details = DestinationService::new(&state.db, state.image_host.as_ref(), state.upload)
        .create(params)
        .await?;

    Ok((StatusCode::CREATED, Json(details.into_dto())))
}

/// List destinations ordered by name.
///
/// `search` matches case-insensitively anywhere in the name. Pages past the end are
/// empty.
#[utoipa::path(
    get,
    path = "/api/destinations",
    tag = DESTINATION_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of destinations", body = PaginatedDestinationsDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_destinations(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let request = PageRequest::from_query(query)?;

    let page = DestinationService::new(&state.db, state.image_host.as_ref(), state.upload)
        .list(request)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Get a destination with every nested collection.
#[utoipa::path(
    get,
    path = "/api/destinations/{id}",
    tag = DESTINATION_TAG,
    params(
        ("id" = i32, Path, description = "Destination id")
    ),
    responses(
        (status = 200, description = "Destination details", body = DestinationDetailsDto),
        (status = 404, description = "Destination not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_destination(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let details = DestinationService::new(&state.db, state.image_host.as_ref(), state.upload)
        .get_detail(id)
        .await?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}

/// Get a destination by its slug.
#[utoipa::path(
    get,
    path = "/api/destinations/slug/{slug}",
    tag = DESTINATION_TAG,
    params(
        ("slug" = String, Path, description = "Destination slug")
    ),
    responses(
        (status = 200, description = "Destination details", body = DestinationDetailsDto),
        (status = 404, description = "Destination not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_destination_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let details = DestinationService::new(&state.db, state.image_host.as_ref(), state.upload)
        .get_detail_by_slug(&slug)
        .await?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}

/// Delete a destination and everything it owns.
///
/// Images stay on the image host.
///
/// # Access Control
/// - `Admin` - Only admins can delete destinations
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `404 Not Found` - Destination not found
#[utoipa::path(
    delete,
    path = "/api/destinations/{id}",
    tag = DESTINATION_TAG,
    params(
        ("id" = i32, Path, description = "Destination id")
    ),
    responses(
        (status = 204, description = "Destination deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Destination not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_destination(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    DestinationService::new(&state.db, state.image_host.as_ref(), state.upload)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
