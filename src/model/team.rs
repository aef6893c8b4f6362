use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeamDto {
    #[serde(rename = "_id")]
    pub id: i32,
    pub name: String,
    pub mascot: String,
    pub players: Vec<PlayerDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateTeamDto {
    pub name: String,
    pub mascot: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
}

/// `{message, team}` wrapper around every team listing.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeamListDto {
    pub message: String,
    pub team: Vec<TeamDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TeamEnvelopeDto {
    pub message: String,
    pub team: TeamDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DeletedTeamDto {
    pub message: String,
    pub deleted: TeamDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerEnvelopeDto {
    pub message: String,
    pub player: PlayerDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlayerListDto {
    pub message: String,
    pub players: Vec<PlayerDto>,
}
