//! Composer factory for creating test composer documents.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test composers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let composer = ComposerFactory::new(&db)
///     .first_name("Johann")
///     .last_name("Bach")
///     .build()
///     .await?;
/// ```
pub struct ComposerFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
}

impl<'a> ComposerFactory<'a> {
    /// Creates a new ComposerFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Composer"`
    /// - last_name: `"Number {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Composer".to_string(),
            last_name: format!("Number {}", id),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    /// Inserts the composer into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted composer entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::composer::Model, DbErr> {
        entity::composer::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a composer with default values.
pub async fn create_composer(db: &DatabaseConnection) -> Result<entity::composer::Model, DbErr> {
    ComposerFactory::new(db).build().await
}
