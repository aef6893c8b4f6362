use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        customer::{CreateCustomerDto, CustomerDto, InvoiceDto},
    },
    server::{
        error::AppError,
        model::customer::{CreateCustomerParam, Invoice},
        service::customer::CustomerService,
        state::AppState,
    },
};

/// Tag for grouping customer endpoints in OpenAPI documentation
pub static CUSTOMER_TAG: &str = "Customers";

/// List all customers with their invoices.
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    responses(
        (status = 200, description = "Array of customer documents", body = Vec<CustomerDto>),
        (status = 500, description = "Server exception", body = ErrorDto),
        (status = 501, description = "Database exception", body = ErrorDto)
    ),
)]
pub async fn get_customers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db, &state.locks);

    let customers = service.get_all().await?;

    Ok(Json(
        customers
            .into_iter()
            .map(|customer| customer.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Create a customer.
///
/// New customers start with no invoices.
///
/// # Returns
/// - `200 OK` - The persisted customer
/// - `400 Bad Request` - firstName, lastName or userName missing
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    request_body = CreateCustomerDto,
    responses(
        (status = 200, description = "Customer document", body = CustomerDto),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 500, description = "Server exception", body = ErrorDto),
        (status = 501, description = "Database exception", body = ErrorDto)
    ),
)]
pub async fn create_customer(
    State(state): State<AppState>,
    payload: Result<Json<CreateCustomerDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = CustomerService::new(&state.db, &state.locks);

    let customer = service.create(CreateCustomerParam::from(payload)).await?;

    Ok(Json(customer.into_dto()))
}

/// Append an invoice to a customer.
///
/// The customer is looked up by user name. The response is sent after the updated
/// invoice list has been written.
///
/// # Arguments
/// - `state` - Application state containing the database connection and document locks
/// - `user_name` - User name of the customer receiving the invoice
/// - `payload` - The invoice with its line items
///
/// # Returns
/// - `200 OK` - "Customer added"
/// - `400 Bad Request` - The invoice or a line item is missing a required field
/// - `401 Unauthorized` - No customer uses that user name
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    post,
    path = "/api/customers/{userName}/invoices",
    tag = CUSTOMER_TAG,
    params(
        ("userName" = String, Path, description = "Customer user name")
    ),
    request_body = InvoiceDto,
    responses(
        (status = 200, description = "Customer added", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing required field", body = ErrorDto),
        (status = 401, description = "Invalid userName", body = ErrorDto),
        (status = 500, description = "Server exception", body = ErrorDto),
        (status = 501, description = "Database exception", body = ErrorDto)
    ),
)]
pub async fn create_invoice(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
    payload: Result<Json<InvoiceDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = CustomerService::new(&state.db, &state.locks);

    service
        .add_invoice(&user_name, Invoice::from(payload))
        .await?;

    Ok("Customer added")
}

/// List the invoices of a customer.
///
/// # Returns
/// - `200 OK` - The customer's invoices in the order they were added
/// - `401 Unauthorized` - No customer uses that user name
/// - `501 Not Implemented` - Database error
#[utoipa::path(
    get,
    path = "/api/customers/{userName}/invoices",
    tag = CUSTOMER_TAG,
    params(
        ("userName" = String, Path, description = "Customer user name")
    ),
    responses(
        (status = 200, description = "Array of invoices", body = Vec<InvoiceDto>),
        (status = 401, description = "Invalid userName", body = ErrorDto),
        (status = 500, description = "Server exception", body = ErrorDto),
        (status = 501, description = "Database exception", body = ErrorDto)
    ),
)]
pub async fn get_invoices(
    State(state): State<AppState>,
    Path(user_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomerService::new(&state.db, &state.locks);

    let invoices = service.get_invoices(&user_name).await?;

    Ok(Json(
        invoices
            .into_iter()
            .map(|invoice| invoice.into_dto())
            .collect::<Vec<_>>(),
    ))
}
