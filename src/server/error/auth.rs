use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session.
    #[error("No user in session")]
    UserNotInSession,

    /// Session refers to a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks a required permission.
    ///
    /// Second field is the reason, logged server-side only.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Email unknown or password mismatch. Deliberately does not say which.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Account exists but has been deactivated.
    #[error("User {0} is inactive")]
    AccountInactive(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` / `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` / `AccountInactive` → 403 Forbidden
///
/// Details are logged at debug level while client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
            Self::AccountInactive(_) => (StatusCode::FORBIDDEN, "This account has been disabled"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
