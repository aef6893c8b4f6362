//! Domain & parameter models for team operations

use crate::{
    model::team::{CreateTeamDto, PlayerDto, TeamDto},
    server::{
        error::validation::ValidationError,
        util::validate::{require_number, require_text, Validate},
    },
};

/// The team domain model with its embedded roster
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub mascot: String,
    pub players: Vec<Player>,
}

impl Team {
    pub fn from_entity(entity: entity::team::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            mascot: entity.mascot,
            players: entity.players.0.into_iter().map(Player::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            id: self.id,
            name: self.name,
            mascot: self.mascot,
            players: self.players.into_iter().map(Player::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
}

impl Player {
    pub fn from_entity(entity: entity::team::Player) -> Self {
        Self {
            first_name: entity.first_name,
            last_name: entity.last_name,
            salary: entity.salary,
        }
    }

    pub fn into_entity(self) -> entity::team::Player {
        entity::team::Player {
            first_name: self.first_name,
            last_name: self.last_name,
            salary: self.salary,
        }
    }

    pub fn into_dto(self) -> PlayerDto {
        PlayerDto {
            first_name: self.first_name,
            last_name: self.last_name,
            salary: self.salary,
        }
    }
}

impl From<PlayerDto> for Player {
    fn from(dto: PlayerDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            salary: dto.salary,
        }
    }
}

impl Validate for Player {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("firstName", &self.first_name)?;
        require_text("lastName", &self.last_name)?;
        require_number("salary", self.salary)
    }
}

/// Parameters for creating a new team
///
/// New teams always start with an empty roster.
#[derive(Debug, Clone)]
pub struct CreateTeamParam {
    pub name: String,
    pub mascot: String,
}

impl From<CreateTeamDto> for CreateTeamParam {
    fn from(dto: CreateTeamDto) -> Self {
        Self {
            name: dto.name,
            mascot: dto.mascot,
        }
    }
}

impl Validate for CreateTeamParam {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_text("mascot", &self.mascot)
    }
}
