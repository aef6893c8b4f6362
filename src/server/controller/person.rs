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
        person::{CreatePersonDto, PersonDto},
    },
    server::{
        error::AppError, model::person::CreatePersonParam, service::person::PersonService,
        state::AppState,
    },
};

pub static PERSON_TAG: &str = "Persons";

#[utoipa::path(
    get,
    path = "/api/persons",
    tag = PERSON_TAG,
    responses(
        (status = 200, description = "Array of person documents", body = Vec<PersonDto>),
        (status = 500, description = "Server exception", body = ErrorDto),
        (status = 501, description = "Database exception", body = ErrorDto)
    ),
)]
pub async fn get_persons(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PersonService::new(&state.db);

    let persons = service.get_all().await?;

    Ok(Json(
        persons
            .into_iter()
            .map(|person| person.into_dto())
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/persons/{id}",
    tag = PERSON_TAG,
    params(
        ("id" = i32, Path, description = "Person ID")
    ),
    responses(
        (status = 200, description = "Person document", body = PersonDto),
        (status = 401, description = "Invalid personId", body = ErrorDto),
        (status = 500, description = "Server exception", body = ErrorDto),
        (status = 501, description = "Database exception", body = ErrorDto)
    ),
)]
pub async fn get_person_by_id(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let service = PersonService::new(&state.db);

    let person = service.get_by_id(id).await?;

    Ok(Json(person.into_dto()))
}

/// Create a person with optional roles and dependents.
#[utoipa::path(
    post,
    path = "/api/persons",
    tag = PERSON_TAG,
    request_body = CreatePersonDto,
    responses(
        (status = 200, description = "Person document", body = PersonDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 500, description = "Server exception", body = ErrorDto),
        (status = 501, description = "Database exception", body = ErrorDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<CreatePersonDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = PersonService::new(&state.db);

    let person = service.create(CreatePersonParam::from(payload)).await?;

    Ok(Json(person.into_dto()))
}
