//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod destination;
pub mod internal;
pub mod upload;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::JsonRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, destination::DestinationError,
        internal::InternalError, upload::UploadError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors like `AuthError` handle
/// their own response mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Destination lookup or aggregate write error.
    #[error(transparent)]
    DestinationErr(#[from] DestinationError),

    /// Remote image host failure. Results in 502 Bad Gateway.
    #[error(transparent)]
    UploadErr(#[from] UploadError),

    /// Bug or invariant violation inside the application.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Server socket could not be bound or served.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Payload failed domain validation (unknown reference id, bad decimal,
    /// unknown enumeration value, bad pagination).
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    Validation(String),

    /// Request could not be read (malformed JSON or multipart body).
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Unique value already taken.
    ///
    /// Results in 409 Conflict with the provided message.
    #[error("{0}")]
    Conflict(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation` and `BadRequest`
/// - 404 Not Found - For `NotFound` and unknown destinations
/// - 409 Conflict - For `Conflict`
/// - 502 Bad Gateway - For `UploadErr`
/// - 500 Internal Server Error - For all other error types (DbErr, SessionErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation(msg) | Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::DestinationErr(
                err @ (DestinationError::NotFound(_) | DestinationError::SlugNotFound(_)),
            ) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            Self::DestinationErr(err @ DestinationError::CreateFailed { .. }) => {
                tracing::error!("{}", error_chain(&err));
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::UploadErr(err) => {
                tracing::error!("{}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: "Image upload failed".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Renders an error followed by every `source()` in its chain.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn maps_error_kinds_to_status_codes() {
        assert_eq!(
            status_of(AppError::Validation("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::NotFound("gone".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::Conflict("taken".into())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(DestinationError::NotFound(3).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AuthError::UserNotInSession.into()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AuthError::AccessDenied(1, "not admin".into()).into()),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(
                UploadError::Rejected {
                    status: 401,
                    message: "bad signature".into()
                }
                .into()
            ),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_of(
                DestinationError::CreateFailed {
                    source: sea_orm::DbErr::Custom("boom".into())
                }
                .into()
            ),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(sea_orm::DbErr::Custom("boom".into()).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn error_chain_includes_sources() {
        let err = DestinationError::CreateFailed {
            source: sea_orm::DbErr::Custom("forced failure".into()),
        };

        let rendered = error_chain(&err);

        assert!(rendered.starts_with("Failed to create destination"));
        assert!(rendered.contains("forced failure"));
    }
}
