use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        catalog::{CatalogKind, CreateTypeRefDto, TypeRefDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::catalog::{CreateTypeRefParams, TypeRef},
        service::catalog::CatalogService,
        state::AppState,
    },
};

/// Tag for grouping catalog endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "catalog";

/// Register a type reference.
///
/// `kind` is one of `accommodation-types`, `transport-types` or `activity-types`.
/// `category` is only stored for activity types.
///
/// # Access Control
/// - Logged-in users
///
/// # Returns
/// - `201 Created` - Created type
/// - `400 Bad Request` - Empty name or unknown kind
/// - `401 Unauthorized` - Not logged in
/// - `409 Conflict` - Name already taken in this registry
#[utoipa::path(
    post,
    path = "/api/catalog/{kind}",
    tag = CATALOG_TAG,
    params(
        ("kind" = CatalogKind, Path, description = "Registry to write to")
    ),
    request_body = CreateTypeRefDto,
    responses(
        (status = 201, description = "Type created", body = TypeRefDto),
        (status = 400, description = "Invalid type data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 409, description = "Name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_type(
    State(state): State<AppState>,
    session: Session,
    Path(kind): Path<CatalogKind>,
    Json(payload): Json<CreateTypeRefDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreateTypeRefParams::from_dto(kind, payload)?;

    let type_ref = CatalogService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(type_ref.into_dto())))
}

/// List every type in a registry in insertion order.
#[utoipa::path(
    get,
    path = "/api/catalog/{kind}",
    tag = CATALOG_TAG,
    params(
        ("kind" = CatalogKind, Path, description = "Registry to read")
    ),
    responses(
        (status = 200, description = "All types of this kind", body = Vec<TypeRefDto>),
        (status = 400, description = "Unknown kind", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_types(
    State(state): State<AppState>,
    Path(kind): Path<CatalogKind>,
) -> Result<impl IntoResponse, AppError> {
    let types = CatalogService::new(&state.db).list(kind).await?;

    let dtos: Vec<TypeRefDto> = types.into_iter().map(TypeRef::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single type by id.
#[utoipa::path(
    get,
    path = "/api/catalog/{kind}/{id}",
    tag = CATALOG_TAG,
    params(
        ("kind" = CatalogKind, Path, description = "Registry to read"),
        ("id" = i32, Path, description = "Type id")
    ),
    responses(
        (status = 200, description = "The type", body = TypeRefDto),
        (status = 404, description = "No type with this id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_type(
    State(state): State<AppState>,
    Path((kind, id)): Path<(CatalogKind, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let type_ref = CatalogService::new(&state.db).get_by_id(kind, id).await?;

    Ok((StatusCode::OK, Json(type_ref.into_dto())))
}
