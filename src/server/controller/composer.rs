use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        composer::{ComposerDto, CreateComposerDto, DeletedComposerDto, UpdateComposerDto},
    },
    server::{
        error::AppError,
        model::composer::{CreateComposerParam, UpdateComposerParam},
        service::composer::ComposerService,
        state::AppState,
    },
};

/// Tag for grouping composer endpoints in OpenAPI documentation
pub static COMPOSER_TAG: &str = "Composers";

/// List all composers.
///
/// # Returns
/// - `200 OK` - Every stored composer in insertion order
/// - `500 Internal Server Error` - Unexpected handler failure
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    get,
    path = "/api/composers",
    tag = COMPOSER_TAG,
    responses(
        (status = 200, description = "Array of composer documents", body = Vec<ComposerDto>),
        (status = 500, description = "Server exception", body = ErrorDto),
        (status = 501, description = "Database exception", body = ErrorDto)
    ),
)]
pub async fn get_composers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = ComposerService::new(&state.db);

    let composers = service.get_all().await?;

    Ok(Json(
        composers
            .into_iter()
            .map(|composer| composer.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Get a single composer.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Composer ID
///
/// # Returns
/// - `200 OK` - The composer document
/// - `401 Unauthorized` - No composer has that ID
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    get,
    path = "/api/composers/{id}",
    tag = COMPOSER_TAG,
    params(
        ("id" = i32, Path, description = "Composer ID")
    ),
    responses(
        (status = 200, description = "Composer document", body = ComposerDto),
        (status = 401, description = "Invalid composerId", body = ErrorDto),
        (status = 500, description = "Server exception", body = ErrorDto),
        (status = 501, description = "Database exception", body = ErrorDto)
    ),
)]
pub async fn get_composer_by_id(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let service = ComposerService::new(&state.db);

    let composer = service.get_by_id(id).await?;

    Ok(Json(composer.into_dto()))
}

/// Create a composer.
///
/// # Returns
/// - `200 OK` - The persisted composer including its ID
/// - `400 Bad Request` - firstName or lastName missing
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    post,
    path = "/api/composers",
    tag = COMPOSER_TAG,
    request_body = CreateComposerDto,
    responses(
        (status = 200, description = "Composer document", body = ComposerDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 500, description = "Server exception", body = ErrorDto),
        (status = 501, description = "Database exception", body = ErrorDto)
    ),
)]
pub async fn create_composer(
    State(state): State<AppState>,
    payload: Result<Json<CreateComposerDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = ComposerService::new(&state.db);

    let composer = service.create(CreateComposerParam::from(payload)).await?;

    Ok(Json(composer.into_dto()))
}

/// Update a composer's names.
///
/// Both fields are optional; omitted fields keep their stored value. The response is
/// sent only after the update has been written.
///
/// # Returns
/// - `200 OK` - "Composer updated"
/// - `400 Bad Request` - A provided field is blank
/// - `401 Unauthorized` - No composer has that ID
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    put,
    path = "/api/composers/{id}",
    tag = COMPOSER_TAG,
    params(
        ("id" = i32, Path, description = "Composer ID")
    ),
    request_body = UpdateComposerDto,
    responses(
        (status = 200, description = "Composer updated", body = String, content_type = "text/plain"),
        (status = 400, description = "Blank field", body = ErrorDto),
        (status = 401, description = "Invalid composerId", body = ErrorDto),
        (status = 500, description = "Server exception", body = ErrorDto),
        (status = 501, description = "Database exception", body = ErrorDto)
    ),
)]
pub async fn update_composer(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateComposerDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let service = ComposerService::new(&state.db);

    service
        .update(id, UpdateComposerParam::from(payload))
        .await?;

    Ok("Composer updated")
}

/// Delete a composer.
///
/// # Returns
/// - `200 OK` - Confirmation carrying the removed composer
/// - `401 Unauthorized` - No composer has that ID
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    delete,
    path = "/api/composers/{id}",
    tag = COMPOSER_TAG,
    params(
        ("id" = i32, Path, description = "Composer ID")
    ),
    responses(
        (status = 200, description = "Composer deleted", body = DeletedComposerDto),
        (status = 401, description = "Invalid composerId", body = ErrorDto),
        (status = 500, description = "Server exception", body = ErrorDto),
        (status = 501, description = "Database exception", body = ErrorDto)
    ),
)]
pub async fn delete_composer(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let service = ComposerService::new(&state.db);

    let composer = service.delete(id).await?;

    Ok(Json(DeletedComposerDto {
        message: "Composer Document".to_string(),
        deleted: composer.into_dto(),
    }))
}
