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
        team::{
            CreateTeamDto, DeletedTeamDto, PlayerDto, PlayerEnvelopeDto, PlayerListDto,
            TeamEnvelopeDto, TeamListDto,
        },
    },
    server::{
        error::AppError,
        model::team::{CreateTeamParam, Player},
        service::team::TeamService,
        state::AppState,
    },
};

/// Tag for grouping team endpoints in OpenAPI documentation
pub static TEAM_TAG: &str = "Teams";

/// List all teams.
///
/// # Returns
/// - `200 OK` - `{message, team}` wrapper around every stored team
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Array of team documents", body = TeamListDto),
        (status = 500, description = "Server exception", body = ErrorDto),
        (status = 501, description = "Database exception", body = ErrorDto)
    ),
)]
pub async fn get_teams(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = TeamService::new(&state.db, &state.locks);

    let teams = service.get_all().await?;

    Ok(Json(TeamListDto {
        message: "Array of team Documents".to_string(),
        team: teams.into_iter().map(|team| team.into_dto()).collect(),
    }))
}

/// Create a team with an empty roster.
///
/// # Returns
/// - `200 OK` - `{message, team}` wrapper around the persisted team
/// - `400 Bad Request` - name or mascot missing
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 200, description = "Team document", body = TeamEnvelopeDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 500, description = "Server exception", body = ErrorDto),
        (status = 501, description = "Database exception", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    payload: Result<Json<CreateTeamDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = TeamService::new(&state.db, &state.locks);

    let team = service.create(CreateTeamParam::from(payload)).await?;

    Ok(Json(TeamEnvelopeDto {
        message: "Team Document".to_string(),
        team: team.into_dto(),
    }))
}

/// Get a single team with its roster.
///
/// # Arguments
/// - `state` - Application state containing the database connection and document locks
/// - `id` - Team ID
///
/// # Returns
/// - `200 OK` - `{message, team}` wrapper around the requested team
/// - `401 Unauthorized` - No team has that ID
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team document", body = TeamEnvelopeDto),
        (status = 401, description = "Invalid teamId", body = ErrorDto),
        (status = 500, description = "Server exception", body = ErrorDto),
        (status = 501, description = "Database exception", body = ErrorDto)
    ),
)]
pub async fn get_team_by_id(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let service = TeamService::new(&state.db, &state.locks);

    let team = service.get_by_id(id).await?;

    Ok(Json(TeamEnvelopeDto {
        message: "Team Document".to_string(),
        team: team.into_dto(),
    }))
}

/// Delete a team together with its roster.
///
/// # Returns
/// - `200 OK` - Confirmation carrying the removed team
/// - `401 Unauthorized` - No team has that ID
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Team deleted", body = DeletedTeamDto),
        (status = 401, description = "Invalid teamId", body = ErrorDto),
        (status = 500, description = "Server exception", body = ErrorDto),
        (status = 501, description = "Database exception", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let service = TeamService::new(&state.db, &state.locks);

    let team = service.delete(id).await?;

    Ok(Json(DeletedTeamDto {
        message: "Team Document".to_string(),
        deleted: team.into_dto(),
    }))
}

/// Append a player to a team's roster.
///
/// The response is sent after the updated roster has been written. Concurrent
/// appends to the same team are serialized, so none are lost.
///
/// # Arguments
/// - `state` - Application state containing the database connection and document locks
/// - `id` - Team ID
/// - `payload` - The player to add
///
/// # Returns
/// - `200 OK` - `{message, player}` with the added player
/// - `400 Bad Request` - firstName, lastName or salary missing
/// - `401 Unauthorized` - No team has that ID
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    post,
    path = "/api/teams/{id}/players",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    request_body = PlayerDto,
    responses(
        (status = 200, description = "Player added", body = PlayerEnvelopeDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 401, description = "Invalid teamId", body = ErrorDto),
        (status = 500, description = "Server exception", body = ErrorDto),
        (status = 501, description = "Database exception", body = ErrorDto)
    ),
)]
pub async fn create_player(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<PlayerDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let service = TeamService::new(&state.db, &state.locks);

    let player = service.add_player(id, Player::from(payload)).await?;

    Ok(Json(PlayerEnvelopeDto {
        message: "Player Added Document".to_string(),
        player: player.into_dto(),
    }))
}

/// List the players of a team.
///
/// # Returns
/// - `200 OK` - `{message, players}` with the roster in the order players were added
/// - `401 Unauthorized` - No team has that ID
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    get,
    path = "/api/teams/{id}/players",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Array of player documents", body = PlayerListDto),
        (status = 401, description = "Invalid teamId", body = ErrorDto),
        (status = 500, description = "Server exception", body = ErrorDto),
        (status = 501, description = "Database exception", body = ErrorDto)
    ),
)]
pub async fn get_players(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    let service = TeamService::new(&state.db, &state.locks);

    let players = service.get_players(id).await?;

    Ok(Json(PlayerListDto {
        message: "Array of player Documents".to_string(),
        players: players.into_iter().map(|player| player.into_dto()).collect(),
    }))
}
