//! Team data repository for database operations
//!
//! Provides the `TeamRepository` for managing team documents and their embedded
//! player rosters.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::team::{CreateTeamParam, Player, Team};

/// Repository providing database operations for team documents.
pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    /// Creates a new TeamRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every team in insertion order
    ///
    /// # Returns
    /// - `Ok(Vec<Team>)` - All stored teams with their rosters
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Team>, DbErr> {
        let entities = entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Team::from_entity).collect())
    }

    /// Finds a team by ID
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - The requested team if found
    /// - `Ok(None)` - No team has that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Creates a new team with an empty roster
    ///
    /// # Returns
    /// - `Ok(Team)` - The persisted team including its generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateTeamParam) -> Result<Team, DbErr> {
        let entity = entity::team::ActiveModel {
            name: ActiveValue::Set(param.name),
            mascot: ActiveValue::Set(param.mascot),
            players: ActiveValue::Set(entity::team::Players::default()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(entity))
    }

    /// Replaces the embedded roster of a team
    ///
    /// # Returns
    /// - `Ok(Team)` - The team as persisted after the write
    /// - `Err(DbErr::RecordNotUpdated)` - The team no longer exists
    /// - `Err(DbErr)` - Database error during update
    pub async fn save_players(&self, id: i32, players: Vec<Player>) -> Result<Team, DbErr> {
        let players = players.into_iter().map(Player::into_entity).collect();

        let entity = entity::team::ActiveModel {
            id: ActiveValue::Unchanged(id),
            players: ActiveValue::Set(entity::team::Players(players)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Team::from_entity(entity))
    }

    /// Deletes the team with the provided ID
    ///
    /// # Returns
    /// - `Ok(Some(Team))` - The team that was removed, roster included
    /// - `Ok(None)` - No team has that ID, nothing was removed
    /// - `Err(DbErr)` - Database error during lookup or delete
    pub async fn delete(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let Some(existing) = entity::prelude::Team::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let result = entity::prelude::Team::delete_by_id(id).exec(self.db).await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(Team::from_entity(existing)))
    }
}
