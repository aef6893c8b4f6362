//! Customer data repository for database operations
//!
//! Customers are looked up by their user name, which is not unique; the oldest
//! matching customer wins. Invoices are embedded and saved by rewriting the whole list.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::customer::{CreateCustomerParam, Customer, Invoice};

/// Repository providing database operations for customer documents.
pub struct CustomerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CustomerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every customer in insertion order
    pub async fn get_all(&self) -> Result<Vec<Customer>, DbErr> {
        let entities = entity::prelude::Customer::find()
            .order_by_asc(entity::customer::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Customer::from_entity).collect())
    }

    /// Creates a new customer with no invoices
    pub async fn create(&self, param: CreateCustomerParam) -> Result<Customer, DbErr> {
        let entity = entity::customer::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            user_name: ActiveValue::Set(param.user_name),
            invoices: ActiveValue::Set(entity::customer::Invoices::default()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Customer::from_entity(entity))
    }

    /// Finds the oldest customer with the provided user name
    ///
    /// # Returns
    /// - `Ok(Some(Customer))` - The first customer registered under that user name
    /// - `Ok(None)` - No customer uses that user name
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_user_name(&self, user_name: &str) -> Result<Option<Customer>, DbErr> {
        let entity = entity::prelude::Customer::find()
            .filter(entity::customer::Column::UserName.eq(user_name))
            .order_by_asc(entity::customer::Column::Id)
            .one(self.db)
            .await?;

        Ok(entity.map(Customer::from_entity))
    }

    /// Replaces the embedded invoice list of a customer
    ///
    /// # Returns
    /// - `Ok(Customer)` - The customer as persisted after the write
    /// - `Err(DbErr::RecordNotUpdated)` - The customer no longer exists
    /// - `Err(DbErr)` - Database error during update
    pub async fn save_invoices(&self, id: i32, invoices: Vec<Invoice>) -> Result<Customer, DbErr> {
        let invoices = invoices.into_iter().map(Invoice::into_entity).collect();

        let entity = entity::customer::ActiveModel {
            id: ActiveValue::Unchanged(id),
            invoices: ActiveValue::Set(entity::customer::Invoices(invoices)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Customer::from_entity(entity))
    }
}
