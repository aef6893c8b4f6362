//! Person factory for creating test person documents.

use crate::factory::helpers::next_id;
use entity::person::{Dependent, Dependents, Role, Roles};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test persons with customizable fields.
pub struct PersonFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    birth_date: String,
    roles: Vec<Role>,
    dependents: Vec<Dependent>,
}

impl<'a> PersonFactory<'a> {
    /// Creates a new PersonFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Person"`
    /// - last_name: `"Number {id}"`
    /// - birth_date: `"1990-01-01"`
    /// - roles, dependents: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Person".to_string(),
            last_name: format!("Number {}", id),
            birth_date: "1990-01-01".to_string(),
            roles: Vec::new(),
            dependents: Vec::new(),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn role(mut self, text: impl Into<String>) -> Self {
        self.roles.push(Role { text: text.into() });
        self
    }

    pub fn dependent(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.dependents.push(Dependent {
            first_name: first_name.into(),
            last_name: last_name.into(),
        });
        self
    }

    /// Inserts the person into the database.
    pub async fn build(self) -> Result<entity::person::Model, DbErr> {
        entity::person::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            birth_date: ActiveValue::Set(self.birth_date),
            roles: ActiveValue::Set(Roles(self.roles)),
            dependents: ActiveValue::Set(Dependents(self.dependents)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a person with default values.
pub async fn create_person(db: &DatabaseConnection) -> Result<entity::person::Model, DbErr> {
    PersonFactory::new(db).build().await
}
