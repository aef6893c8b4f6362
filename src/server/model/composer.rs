//! Domain & parameter models for composer operations

use crate::{
    model::composer::{ComposerDto, CreateComposerDto, UpdateComposerDto},
    server::{
        error::validation::ValidationError,
        util::validate::{require_text, Validate},
    },
};

/// The composer domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Composer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl Composer {
    /// Converts an entity model to the composer domain model
    pub fn from_entity(entity: entity::composer::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
        }
    }

    /// Converts the composer domain model to a DTO for API responses
    pub fn into_dto(self) -> ComposerDto {
        ComposerDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

/// Parameters for creating a new composer
#[derive(Debug, Clone)]
pub struct CreateComposerParam {
    pub first_name: String,
    pub last_name: String,
}

impl From<CreateComposerDto> for CreateComposerParam {
    fn from(dto: CreateComposerDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}

impl Validate for CreateComposerParam {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("firstName", &self.first_name)?;
        require_text("lastName", &self.last_name)
    }
}

/// Parameters for updating an existing composer
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateComposerParam {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<UpdateComposerDto> for UpdateComposerParam {
    fn from(dto: UpdateComposerDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}

impl Validate for UpdateComposerParam {
    fn validate(&self) -> Result<(), ValidationError> {
        if let Some(first_name) = &self.first_name {
            require_text("firstName", first_name)?;
        }
        if let Some(last_name) = &self.last_name {
            require_text("lastName", last_name)?;
        }
        Ok(())
    }
}
