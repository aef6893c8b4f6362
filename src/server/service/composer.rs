use sea_orm::DatabaseConnection;

use crate::server::{
    data::composer::ComposerRepository,
    error::AppError,
    model::composer::{Composer, CreateComposerParam, UpdateComposerParam},
    util::validate::Validate,
};

const NOT_FOUND: &str = "Invalid composerId";

pub struct ComposerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ComposerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all composers
    pub async fn get_all(&self) -> Result<Vec<Composer>, AppError> {
        let repo = ComposerRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets a composer by ID, failing with `NotFound` when it does not exist
    pub async fn get_by_id(&self, id: i32) -> Result<Composer, AppError> {
        let repo = ComposerRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    /// Validates and stores a new composer
    pub async fn create(&self, param: CreateComposerParam) -> Result<Composer, AppError> {
        param.validate()?;

        let repo = ComposerRepository::new(self.db);

        Ok(repo.create(param).await?)
    }

    /// Applies a partial update, returning once the change is persisted
    pub async fn update(&self, id: i32, param: UpdateComposerParam) -> Result<Composer, AppError> {
        param.validate()?;

        let repo = ComposerRepository::new(self.db);

        repo.update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }

    /// Deletes a composer and returns the removed document
    pub async fn delete(&self, id: i32) -> Result<Composer, AppError> {
        let repo = ComposerRepository::new(self.db);

        repo.delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
    }
}
