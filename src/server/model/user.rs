//! User domain models and parameters.
//!
//! The domain model carries the stored password hash for credential checks; it is
//! dropped when converting to `UserDto`.

use crate::{
    model::user::{LoginDto, SignupDto, UserDto},
    server::{
        error::validation::ValidationError,
        util::validate::{require_text, Validate},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub user_name: String,
    /// bcrypt hash of the user's password.
    pub password_hash: String,
    pub email_address: Vec<String>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            user_name: entity.user_name,
            password_hash: entity.password,
            email_address: entity.email_address.0,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            user_name: self.user_name,
            email_address: self.email_address,
        }
    }
}

/// Parameters for registering a user, holding the plain password until it is hashed.
#[derive(Debug, Clone)]
pub struct SignupParam {
    pub user_name: String,
    pub password: String,
    pub email_address: Vec<String>,
}

impl From<SignupDto> for SignupParam {
    fn from(dto: SignupDto) -> Self {
        Self {
            user_name: dto.user_name,
            password: dto.password,
            email_address: dto.email_address,
        }
    }
}

impl Validate for SignupParam {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("userName", &self.user_name)?;
        require_text("password", &self.password)?;

        for (index, address) in self.email_address.iter().enumerate() {
            require_text(format!("emailAddress[{index}]"), address)?;
        }

        Ok(())
    }
}

/// Parameters for storing a newly registered user once the password is hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub user_name: String,
    pub password_hash: String,
    pub email_address: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct LoginParam {
    pub user_name: String,
    pub password: String,
}

impl From<LoginDto> for LoginParam {
    fn from(dto: LoginDto) -> Self {
        Self {
            user_name: dto.user_name,
            password: dto.password,
        }
    }
}
