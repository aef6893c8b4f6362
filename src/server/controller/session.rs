use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, SignupDto, UserDto},
    },
    server::{
        error::AppError,
        model::user::{LoginParam, SignupParam},
        service::session::SessionService,
        state::AppState,
    },
};

/// Tag for grouping signup and login endpoints in OpenAPI documentation
pub static SESSION_TAG: &str = "Session";

/// Register a new user.
///
/// The password is stored as a bcrypt hash and never returned.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - User name, password and one or more email addresses
///
/// # Returns
/// - `200 OK` - The stored user without its password
/// - `400 Bad Request` - userName or password missing
/// - `401 Unauthorized` - User name already in use
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    post,
    path = "/api/signup",
    tag = SESSION_TAG,
    request_body = SignupDto,
    responses(
        (status = 200, description = "User registered", body = UserDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 401, description = "Username is Already in use.", body = ErrorDto),
        (status = 500, description = "Server exception", body = ErrorDto),
        (status = 501, description = "Database exception", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = SessionService::new(&state.db);

    let user = service.signup(SignupParam::from(payload)).await?;

    Ok(Json(user.into_dto()))
}

/// Check a user name and password.
///
/// No session or token is issued; the response only reports whether the credentials
/// matched.
///
/// # Returns
/// - `200 OK` - "User logged in"
/// - `401 Unauthorized` - Unknown user name or wrong password
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    post,
    path = "/api/login",
    tag = SESSION_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "User logged in", body = String, content_type = "text/plain"),
        (status = 401, description = "Invalid username and/or Password", body = ErrorDto),
        (status = 500, description = "Server exception", body = ErrorDto),
        (status = 501, description = "Database exception", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = SessionService::new(&state.db);

    let user = service.login(LoginParam::from(payload)).await?;

    tracing::debug!("User {} logged in", user.user_name);

    Ok("User logged in")
}
