//! Domain & parameter models for person operations

use crate::{
    model::person::{CreatePersonDto, DependentDto, PersonDto, RoleDto},
    server::{
        error::validation::ValidationError,
        util::validate::{require_text, Validate},
    },
};

/// The person domain model
///
/// Roles and dependents are embedded lists and may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub roles: Vec<Role>,
    pub dependents: Vec<Dependent>,
}

impl Person {
    pub fn from_entity(entity: entity::person::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            birth_date: entity.birth_date,
            roles: entity
                .roles
                .0
                .into_iter()
                .map(|role| Role { text: role.text })
                .collect(),
            dependents: entity
                .dependents
                .0
                .into_iter()
                .map(|dependent| Dependent {
                    first_name: dependent.first_name,
                    last_name: dependent.last_name,
                })
                .collect(),
        }
    }

    pub fn into_dto(self) -> PersonDto {
        PersonDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            roles: self
                .roles
                .into_iter()
                .map(|role| RoleDto { text: role.text })
                .collect(),
            dependents: self
                .dependents
                .into_iter()
                .map(|dependent| DependentDto {
                    first_name: dependent.first_name,
                    last_name: dependent.last_name,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dependent {
    pub first_name: String,
    pub last_name: String,
}

/// Parameters for creating a new person
#[derive(Debug, Clone)]
pub struct CreatePersonParam {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub roles: Vec<Role>,
    pub dependents: Vec<Dependent>,
}

impl From<CreatePersonDto> for CreatePersonParam {
    fn from(dto: CreatePersonDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            birth_date: dto.birth_date,
            roles: dto
                .roles
                .into_iter()
                .map(|role| Role { text: role.text })
                .collect(),
            dependents: dto
                .dependents
                .into_iter()
                .map(|dependent| Dependent {
                    first_name: dependent.first_name,
                    last_name: dependent.last_name,
                })
                .collect(),
        }
    }
}

impl Validate for CreatePersonParam {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("firstName", &self.first_name)?;
        require_text("lastName", &self.last_name)?;
        require_text("birthDate", &self.birth_date)?;

        for (index, role) in self.roles.iter().enumerate() {
            require_text(format!("roles[{index}].text"), &role.text)?;
        }
        for (index, dependent) in self.dependents.iter().enumerate() {
            require_text(format!("dependents[{index}].firstName"), &dependent.first_name)?;
            require_text(format!("dependents[{index}].lastName"), &dependent.last_name)?;
        }

        Ok(())
    }
}
