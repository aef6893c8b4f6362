//! Composer data repository for database operations
//!
//! Provides the `ComposerRepository` for listing, fetching, creating, updating, and
//! deleting composer documents.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

use crate::server::model::composer::{Composer, CreateComposerParam, UpdateComposerParam};

/// Repository providing database operations for composer documents.
pub struct ComposerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComposerRepository<'a> {
    /// Creates a new ComposerRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every composer in insertion order
    ///
    /// # Returns
    /// - `Ok(Vec<Composer>)` - All stored composers, empty if none exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<Composer>, DbErr> {
        let entities = entity::prelude::Composer::find()
            .order_by_asc(entity::composer::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Composer::from_entity).collect())
    }

    /// Finds a composer by ID
    ///
    /// # Returns
    /// - `Ok(Some(Composer))` - The requested composer if found
    /// - `Ok(None)` - No composer has that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Composer>, DbErr> {
        let entity = entity::prelude::Composer::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Composer::from_entity))
    }

    /// Creates a new composer
    ///
    /// # Returns
    /// - `Ok(Composer)` - The persisted composer including its generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateComposerParam) -> Result<Composer, DbErr> {
        let entity = entity::composer::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Composer::from_entity(entity))
    }

    /// Applies the provided fields to an existing composer
    ///
    /// Fields left as `None` in the parameters are not written.
    ///
    /// # Returns
    /// - `Ok(Some(Composer))` - The composer as persisted after the update
    /// - `Ok(None)` - No composer has that ID
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn update(
        &self,
        id: i32,
        param: UpdateComposerParam,
    ) -> Result<Option<Composer>, DbErr> {
        let Some(existing) = entity::prelude::Composer::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = existing.into_active_model();
        if let Some(first_name) = param.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = param.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Composer::from_entity(entity)))
    }

    /// Deletes the composer with the provided ID
    ///
    /// # Returns
    /// - `Ok(Some(Composer))` - The composer that was removed
    /// - `Ok(None)` - No composer has that ID, nothing was removed
    /// - `Err(DbErr)` - Database error during lookup or delete
    pub async fn delete(&self, id: i32) -> Result<Option<Composer>, DbErr> {
        let Some(existing) = entity::prelude::Composer::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let result = entity::prelude::Composer::delete_by_id(id)
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(Composer::from_entity(existing)))
    }
}
