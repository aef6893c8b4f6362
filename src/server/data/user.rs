//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for storing registered users and looking
//! them up by user name. The `user_name` column carries a unique index, so a second
//! insert with the same name fails with a unique-constraint violation.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::model::user::{CreateUserParam, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by user name.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found, including the stored password hash
    /// - `Ok(None)` - No user registered under that name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_name(&self, user_name: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::UserName.eq(user_name))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Inserts a new user with an already hashed password.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert, including a unique-constraint
    ///   violation when the user name is already taken
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            user_name: ActiveValue::Set(param.user_name),
            password: ActiveValue::Set(param.password_hash),
            email_address: ActiveValue::Set(entity::user::EmailAddresses(param.email_address)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }
}
