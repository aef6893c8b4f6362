use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    #[serde(rename = "_id")]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub invoices: Vec<InvoiceDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerDto {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
}

/// Invoice as posted by clients and as listed back from a customer.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDto {
    pub subtotal: f64,
    pub tax: f64,
    pub date_created: String,
    pub date_shipped: String,
    #[serde(default)]
    pub line_items: Vec<LineItemDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LineItemDto {
    pub name: String,
    pub price: f64,
    pub quantity: f64,
}
