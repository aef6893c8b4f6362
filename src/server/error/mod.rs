//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the top-level
//! error type and implements `IntoResponse` so handlers can simply return
//! `Result<impl IntoResponse, AppError>`.
//!
//! Status mapping follows the API's three-tier contract:
//! - storage failures answer 501 Not Implemented
//! - unknown documents answer 401 Unauthorized (the API's long-standing "not found")
//! - any other handler failure answers 500 Internal Server Error

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, validation::ValidationError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Signup or login rejected.
    ///
    /// Delegates to `AuthError::into_response()` (401 Unauthorized).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Request body failed the required-field contract.
    ///
    /// Results in 400 Bad Request naming the offending field.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 501 Not Implemented with a generic message; details are logged.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Password hashing or verification failure.
    #[error(transparent)]
    HashErr(#[from] bcrypt::BcryptError),

    /// A blocking task (password hashing) panicked or was cancelled.
    #[error(transparent)]
    TaskErr(#[from] tokio::task::JoinError),

    /// Socket bind or serve failure at startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body or path segment could not be parsed.
    ///
    /// Results in 400 Bad Request with the extractor's rejection message.
    #[error("{0}")]
    BadRequest(String),

    /// Requested document does not exist.
    ///
    /// Results in 401 Unauthorized with the provided message. Clients of this API have
    /// always received 401 for unknown identifiers, so the status is kept.
    ///
    /// # Fields
    /// - Message naming the identifier that was not found (e.g. "Invalid composerId")
    #[error("{0}")]
    NotFound(String),

}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `Validation` and `BadRequest`
/// - 401 Unauthorized - For `NotFound`, and `AuthErr` via `AuthError::into_response()`
/// - 501 Not Implemented - For `DbErr`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::UNAUTHORIZED, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Validation(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::DbErr(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::NOT_IMPLEMENTED,
                    Json(ErrorDto {
                        error: "Database exception".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Server exception" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Server exception".to_string(),
            }),
        )
            .into_response()
    }
}
