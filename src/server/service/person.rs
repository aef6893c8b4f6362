use sea_orm::DatabaseConnection;

use crate::server::{
    data::person::PersonRepository,
    error::AppError,
    model::person::{CreatePersonParam, Person},
    util::validate::Validate,
};

pub struct PersonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Person>, AppError> {
        let repo = PersonRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Person, AppError> {
        let repo = PersonRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Invalid personId".to_string()))
    }

    /// Validates the person and its embedded roles and dependents, then stores it
    pub async fn create(&self, param: CreatePersonParam) -> Result<Person, AppError> {
        param.validate()?;

        let repo = PersonRepository::new(self.db);

        Ok(repo.create(param).await?)
    }
}
