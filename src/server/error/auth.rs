use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// A user with the requested user name already exists.
    ///
    /// Raised both by the signup pre-query and when the unique index rejects an insert
    /// that raced past the pre-query.
    #[error("User name '{0}' is already in use")]
    UserNameTaken(String),

    /// Unknown user name or password mismatch.
    ///
    /// Both cases share one variant so responses never reveal which user names exist.
    #[error("Invalid credentials for user '{0}'")]
    InvalidCredentials(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant maps to 401 Unauthorized with the fixed client-facing message the API
/// has always returned for that case. Details are logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::UserNameTaken(_) => "Username is Already in use.",
            Self::InvalidCredentials(_) => "Invalid username and/or Password",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
