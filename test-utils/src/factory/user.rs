//! User factory for creating test user documents.
//!
//! The factory stores whatever password hash it is given; it never hashes. Tests that
//! need a verifiable credential should sign up through the session service instead.

use crate::factory::helpers::next_id;
use entity::user::EmailAddresses;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    user_name: String,
    password: String,
    email_address: Vec<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - user_name: `"user_{id}"`
    /// - password: a placeholder that is not a valid bcrypt hash
    /// - email_address: `["user_{id}@example.com"]`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_name: format!("user_{}", id),
            password: "not-a-hash".to_string(),
            email_address: vec![format!("user_{}@example.com", id)],
        }
    }

    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    /// Sets the stored password hash verbatim.
    pub fn password_hash(mut self, hash: impl Into<String>) -> Self {
        self.password = hash.into();
        self
    }

    /// Inserts the user into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            user_name: ActiveValue::Set(self.user_name),
            password: ActiveValue::Set(self.password),
            email_address: ActiveValue::Set(EmailAddresses(self.email_address)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
