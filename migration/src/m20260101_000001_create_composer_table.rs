use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Composer::Table)
                    .if_not_exists()
                    .col(pk_auto(Composer::Id))
                    .col(string(Composer::FirstName))
                    .col(string(Composer::LastName))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Composer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Composer {
    Table,
    Id,
    FirstName,
    LastName,
}
