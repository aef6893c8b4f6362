//! Customer factory for creating test customer documents.

use crate::factory::helpers::next_id;
use entity::customer::{Invoice, Invoices, LineItem};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test customers with customizable fields and embedded invoices.
///
/// # Example
///
/// ```rust,ignore
/// let customer = CustomerFactory::new(&db)
///     .user_name("shopper")
///     .invoice(invoice_with_subtotal(10.0))
///     .build()
///     .await?;
/// ```
pub struct CustomerFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    user_name: String,
    invoices: Vec<Invoice>,
}

impl<'a> CustomerFactory<'a> {
    /// Creates a new CustomerFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Customer"`
    /// - last_name: `"Number {id}"`
    /// - user_name: `"customer_{id}"`
    /// - invoices: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Customer".to_string(),
            last_name: format!("Number {}", id),
            user_name: format!("customer_{}", id),
            invoices: Vec::new(),
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    /// Appends an invoice to the customer's embedded invoice list.
    pub fn invoice(mut self, invoice: Invoice) -> Self {
        self.invoices.push(invoice);
        self
    }

    /// Inserts the customer into the database.
    pub async fn build(self) -> Result<entity::customer::Model, DbErr> {
        entity::customer::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            user_name: ActiveValue::Set(self.user_name),
            invoices: ActiveValue::Set(Invoices(self.invoices)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a customer with default values and no invoices.
pub async fn create_customer(db: &DatabaseConnection) -> Result<entity::customer::Model, DbErr> {
    CustomerFactory::new(db).build().await
}

/// Builds a single-line invoice whose subtotal equals `subtotal`.
pub fn invoice_with_subtotal(subtotal: f64) -> Invoice {
    Invoice {
        subtotal,
        tax: subtotal * 0.1,
        date_created: "2022-05-01".to_string(),
        date_shipped: "2022-05-03".to_string(),
        line_items: vec![LineItem {
            name: "Widget".to_string(),
            price: subtotal,
            quantity: 1.0,
        }],
    }
}
