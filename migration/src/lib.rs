pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_composer_table;
mod m20260101_000002_create_customer_table;
mod m20260101_000003_create_person_table;
mod m20260101_000004_create_team_table;
mod m20260101_000005_create_user_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_composer_table::Migration),
            Box::new(m20260101_000002_create_customer_table::Migration),
            Box::new(m20260101_000003_create_person_table::Migration),
            Box::new(m20260101_000004_create_team_table::Migration),
            Box::new(m20260101_000005_create_user_table::Migration),
        ]
    }
}
