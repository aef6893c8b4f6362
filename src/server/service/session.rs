//! Signup and login.
//!
//! Passwords are hashed with bcrypt. Hashing and verification are CPU bound, so both
//! run on the blocking thread pool instead of a runtime worker.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, LoginParam, SignupParam, User},
    util::validate::Validate,
};

/// bcrypt work factor for stored password hashes.
const PASSWORD_HASH_COST: u32 = 10;

pub struct SessionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SessionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// Rejects the signup when the user name is taken, either by the pre-query or by the
    /// unique index when a concurrent signup for the same name won the race.
    ///
    /// # Arguments
    /// - `param` - User name, plain password and email addresses
    ///
    /// # Returns
    /// - `Ok(User)` - The stored user
    /// - `Err(AppError::Validation)` - User name or password missing
    /// - `Err(AppError::AuthErr(AuthError::UserNameTaken))` - User name already registered
    /// - `Err(AppError::DbErr)` - Database error during lookup or insert
    pub async fn signup(&self, param: SignupParam) -> Result<User, AppError> {
        param.validate()?;

        let repo = UserRepository::new(self.db);

        if repo.find_by_user_name(&param.user_name).await?.is_some() {
            return Err(AuthError::UserNameTaken(param.user_name).into());
        }

        let password = param.password;
        let password_hash =
            tokio::task::spawn_blocking(move || bcrypt::hash(password, PASSWORD_HASH_COST))
                .await??;

        let user_name = param.user_name.clone();
        let result = repo
            .create(CreateUserParam {
                user_name: param.user_name,
                password_hash,
                email_address: param.email_address,
            })
            .await;

        match result {
            Ok(user) => {
                tracing::info!("Registered user {}", user.user_name);
                Ok(user)
            }
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(AuthError::UserNameTaken(user_name).into())
                }
                _ => Err(err.into()),
            },
        }
    }

    /// Checks a user name and password against the stored hash.
    ///
    /// Unknown users and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials matched
    /// - `Err(AppError::AuthErr(AuthError::InvalidCredentials))` - No match
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn login(&self, param: LoginParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_user_name(&param.user_name).await? else {
            return Err(AuthError::InvalidCredentials(param.user_name).into());
        };

        let password = param.password;
        let hash = user.password_hash.clone();
        let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await?;

        // A malformed stored hash is treated as a mismatch rather than a server error.
        match verified {
            Ok(true) => Ok(user),
            Ok(false) => Err(AuthError::InvalidCredentials(param.user_name).into()),
            Err(err) => {
                tracing::warn!("Stored hash for user {} is unusable: {}", user.user_name, err);
                Err(AuthError::InvalidCredentials(param.user_name).into())
            }
        }
    }
}
