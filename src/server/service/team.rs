//! Team service including roster management.

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::team::TeamRepository,
    error::AppError,
    model::team::{CreateTeamParam, Player, Team},
    service::lock::DocumentLocks,
    util::validate::Validate,
};

const NOT_FOUND: &str = "Invalid teamId";

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a DocumentLocks,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a DocumentLocks) -> Self {
        Self { db, locks }
    }

    pub async fn get_all(&self) -> Result<Vec<Team>, AppError> {
        let repo = TeamRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Team, AppError> {
        let repo = TeamRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    /// Validates and stores a new team with an empty roster
    pub async fn create(&self, param: CreateTeamParam) -> Result<Team, AppError> {
        param.validate()?;

        let repo = TeamRepository::new(self.db);

        Ok(repo.create(param).await?)
    }

    /// Appends a player to a team's roster
    ///
    /// Runs under the team's document lock and returns after the roster is persisted.
    ///
    /// # Returns
    /// - `Ok(Player)` - The player as added
    /// - `Err(AppError::Validation)` - The player is missing a required field
    /// - `Err(AppError::NotFound)` - The team does not exist or was deleted meanwhile
    /// - `Err(AppError::DbErr)` - Database error during lookup or write
    pub async fn add_player(&self, team_id: i32, player: Player) -> Result<Player, AppError> {
        player.validate()?;

        let _guard = self.locks.acquire(&format!("teams/{}", team_id)).await;

        let repo = TeamRepository::new(self.db);
        let team = repo
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

        let mut players = team.players;
        players.push(player.clone());

        match repo.save_players(team_id, players).await {
            Ok(_) => Ok(player),
            Err(DbErr::RecordNotUpdated) => Err(AppError::NotFound(NOT_FOUND.to_string())),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn get_players(&self, team_id: i32) -> Result<Vec<Player>, AppError> {
        Ok(self.get_by_id(team_id).await?.players)
    }

    /// Deletes a team and returns the removed document
    ///
    /// Takes the team's document lock so a delete never interleaves with a roster append.
    pub async fn delete(&self, id: i32) -> Result<Team, AppError> {
        let _guard = self.locks.acquire(&format!("teams/{}", id)).await;

        let repo = TeamRepository::new(self.db);

        repo.delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }
}
