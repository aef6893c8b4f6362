//! Person data repository for database operations

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::server::model::person::{CreatePersonParam, Person};

/// Repository providing database operations for person documents.
pub struct PersonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every person in insertion order
    pub async fn get_all(&self) -> Result<Vec<Person>, DbErr> {
        let entities = entity::prelude::Person::find()
            .order_by_asc(entity::person::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Person::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Person>, DbErr> {
        let entity = entity::prelude::Person::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Person::from_entity))
    }

    /// Creates a new person along with the embedded roles and dependents
    pub async fn create(&self, param: CreatePersonParam) -> Result<Person, DbErr> {
        let roles = param
            .roles
            .into_iter()
            .map(|role| entity::person::Role { text: role.text })
            .collect();
        let dependents = param
            .dependents
            .into_iter()
            .map(|dependent| entity::person::Dependent {
                first_name: dependent.first_name,
                last_name: dependent.last_name,
            })
            .collect();

        let entity = entity::person::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            birth_date: ActiveValue::Set(param.birth_date),
            roles: ActiveValue::Set(entity::person::Roles(roles)),
            dependents: ActiveValue::Set(entity::person::Dependents(dependents)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Person::from_entity(entity))
    }
}
