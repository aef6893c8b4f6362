//! Customer service including invoice appends.

use sea_orm::{DatabaseConnection, DbErr};

use crate::server::{
    data::customer::CustomerRepository,
    error::AppError,
    model::customer::{CreateCustomerParam, Customer, Invoice},
    service::lock::DocumentLocks,
    util::validate::Validate,
};

const NOT_FOUND: &str = "Invalid userName";

pub struct CustomerService<'a> {
    db: &'a DatabaseConnection,
    locks: &'a DocumentLocks,
}

impl<'a> CustomerService<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a DocumentLocks) -> Self {
        Self { db, locks }
    }

    pub async fn get_all(&self) -> Result<Vec<Customer>, AppError> {
        let repo = CustomerRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Validates and stores a new customer with no invoices
    pub async fn create(&self, param: CreateCustomerParam) -> Result<Customer, AppError> {
        param.validate()?;

        let repo = CustomerRepository::new(self.db);

        Ok(repo.create(param).await?)
    }

    /// Appends an invoice to the customer registered under `user_name`
    ///
    /// The lookup, append and write happen under the customer's document lock, so
    /// concurrent appends to the same customer are all kept. Returns after the write has
    /// been persisted.
    ///
    /// # Returns
    /// - `Ok(Customer)` - The customer with the new invoice at the end of its list
    /// - `Err(AppError::Validation)` - The invoice is missing a required field
    /// - `Err(AppError::NotFound)` - No customer uses that user name
    /// - `Err(AppError::DbErr)` - Database error during lookup or write
    pub async fn add_invoice(&self, user_name: &str, invoice: Invoice) -> Result<Customer, AppError> {
        invoice.validate()?;

        let _guard = self.locks.acquire(&format!("customers/{}", user_name)).await;

        let repo = CustomerRepository::new(self.db);
        let customer = repo
            .find_by_user_name(user_name)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

        let mut invoices = customer.invoices;
        invoices.push(invoice);

        match repo.save_invoices(customer.id, invoices).await {
            Ok(customer) => Ok(customer),
            Err(DbErr::RecordNotUpdated) => Err(AppError::NotFound(NOT_FOUND.to_string())),
            Err(err) => Err(err.into()),
        }
    }

    /// Gets the invoices of the customer registered under `user_name`
    pub async fn get_invoices(&self, user_name: &str) -> Result<Vec<Invoice>, AppError> {
        let repo = CustomerRepository::new(self.db);

        let customer = repo
            .find_by_user_name(user_name)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

        Ok(customer.invoices)
    }
}
