//! Team factory for creating test team documents.

use crate::factory::helpers::next_id;
use entity::team::{Player, Players};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams with customizable fields and an embedded roster.
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    mascot: String,
    players: Vec<Player>,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Team {id}"`
    /// - mascot: `"Mascot {id}"`
    /// - players: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Team {}", id),
            mascot: format!("Mascot {}", id),
            players: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn mascot(mut self, mascot: impl Into<String>) -> Self {
        self.mascot = mascot.into();
        self
    }

    /// Appends a player to the team's roster.
    pub fn player(
        mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        salary: f64,
    ) -> Self {
        self.players.push(Player {
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary,
        });
        self
    }

    /// Inserts the team into the database.
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            name: ActiveValue::Set(self.name),
            mascot: ActiveValue::Set(self.mascot),
            players: ActiveValue::Set(Players(self.players)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values and an empty roster.
pub async fn create_team(db: &DatabaseConnection) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db).build().await
}
