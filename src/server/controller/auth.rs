use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PageQuery},
        auth::{LoginDto, PaginatedUsersDto, RegisterDto, UpdateProfileDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            session::AuthSession,
        },
        model::{
            page::PageRequest,
            user::{RegisterParams, UpdateUserParams},
        },
        service::{auth::AuthService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates the account and logs it in. The first account ever registered is made an
/// admin.
///
/// # Returns
/// - `201 Created` - The new user
/// - `400 Bad Request` - Missing name, invalid email or short password
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created and logged in", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = RegisterParams::from_dto(payload)?;

    let user = AuthService::new(&state.db).register(params).await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - The authenticated user
/// - `401 Unauthorized` - Invalid email or password
/// - `403 Forbidden` - Account disabled
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 403, description = "Account disabled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.email, payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out and clear the session.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the logged-in user's profile.
#[utoipa::path(
    get,
    path = "/api/auth/profile",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update the logged-in user's profile.
///
/// Only `first_name`, `last_name`, `language` and `timezone` can be changed. Absent
/// fields are left untouched and an empty `last_name` clears it.
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - Empty first name
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    patch,
    path = "/api/auth/profile",
    tag = AUTH_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = UserDto),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = UpdateUserParams::from_dto(payload)?;

    let user = UserService::new(&state.db)
        .update_profile(user.id, params)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// List all accounts.
///
/// # Access Control
/// - `Admin` - Only admins can list accounts
///
/// # Returns
/// - `200 OK` - One page of users ordered by email
/// - `400 Bad Request` - Page or page size out of range
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    get,
    path = "/api/auth/users",
    tag = AUTH_TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of users", body = PaginatedUsersDto),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let request = PageRequest::from_query(query)?;

    let users = UserService::new(&state.db).list(request).await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}
