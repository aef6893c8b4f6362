use sea_orm::{entity::prelude::*, FromJsonQueryResult};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub mascot: String,
    #[sea_orm(column_type = "Json")]
    pub players: Players,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Roster embedded in a team document, in signing order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Players(pub Vec<Player>);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
}
