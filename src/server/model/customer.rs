//! Domain & parameter models for customer operations
//!
//! A customer owns an ordered list of embedded invoices, each carrying its own ordered
//! line items. Invoices have no identity of their own and are only ever appended.

use crate::{
    model::customer::{CreateCustomerDto, CustomerDto, InvoiceDto, LineItemDto},
    server::{
        error::validation::ValidationError,
        util::validate::{require_number, require_text, Validate},
    },
};

/// The customer domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub invoices: Vec<Invoice>,
}

impl Customer {
    /// Converts an entity model to the customer domain model
    pub fn from_entity(entity: entity::customer::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            user_name: entity.user_name,
            invoices: entity.invoices.0.into_iter().map(Invoice::from_entity).collect(),
        }
    }

    /// Converts the customer domain model to a DTO for API responses
    pub fn into_dto(self) -> CustomerDto {
        CustomerDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            user_name: self.user_name,
            invoices: self.invoices.into_iter().map(Invoice::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub subtotal: f64,
    pub tax: f64,
    pub date_created: String,
    pub date_shipped: String,
    pub line_items: Vec<LineItem>,
}

impl Invoice {
    pub fn from_entity(entity: entity::customer::Invoice) -> Self {
        Self {
            subtotal: entity.subtotal,
            tax: entity.tax,
            date_created: entity.date_created,
            date_shipped: entity.date_shipped,
            line_items: entity.line_items.into_iter().map(LineItem::from_entity).collect(),
        }
    }

    pub fn into_entity(self) -> entity::customer::Invoice {
        entity::customer::Invoice {
            subtotal: self.subtotal,
            tax: self.tax,
            date_created: self.date_created,
            date_shipped: self.date_shipped,
            line_items: self.line_items.into_iter().map(LineItem::into_entity).collect(),
        }
    }

    pub fn into_dto(self) -> InvoiceDto {
        InvoiceDto {
            subtotal: self.subtotal,
            tax: self.tax,
            date_created: self.date_created,
            date_shipped: self.date_shipped,
            line_items: self.line_items.into_iter().map(LineItem::into_dto).collect(),
        }
    }
}

impl From<InvoiceDto> for Invoice {
    fn from(dto: InvoiceDto) -> Self {
        Self {
            subtotal: dto.subtotal,
            tax: dto.tax,
            date_created: dto.date_created,
            date_shipped: dto.date_shipped,
            line_items: dto.line_items.into_iter().map(LineItem::from).collect(),
        }
    }
}

impl Validate for Invoice {
    fn validate(&self) -> Result<(), ValidationError> {
        require_number("subtotal", self.subtotal)?;
        require_number("tax", self.tax)?;
        require_text("dateCreated", &self.date_created)?;
        require_text("dateShipped", &self.date_shipped)?;

        for (index, item) in self.line_items.iter().enumerate() {
            require_text(format!("lineItems[{index}].name"), &item.name)?;
            require_number(format!("lineItems[{index}].price"), item.price)?;
            require_number(format!("lineItems[{index}].quantity"), item.quantity)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub name: String,
    pub price: f64,
    pub quantity: f64,
}

impl LineItem {
    fn from_entity(entity: entity::customer::LineItem) -> Self {
        Self {
            name: entity.name,
            price: entity.price,
            quantity: entity.quantity,
        }
    }

    fn into_entity(self) -> entity::customer::LineItem {
        entity::customer::LineItem {
            name: self.name,
            price: self.price,
            quantity: self.quantity,
        }
    }

    fn into_dto(self) -> LineItemDto {
        LineItemDto {
            name: self.name,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

impl From<LineItemDto> for LineItem {
    fn from(dto: LineItemDto) -> Self {
        Self {
            name: dto.name,
            price: dto.price,
            quantity: dto.quantity,
        }
    }
}

/// Parameters for creating a new customer
///
/// New customers always start without invoices.
#[derive(Debug, Clone)]
pub struct CreateCustomerParam {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
}

impl From<CreateCustomerDto> for CreateCustomerParam {
    fn from(dto: CreateCustomerDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            user_name: dto.user_name,
        }
    }
}

impl Validate for CreateCustomerParam {
    fn validate(&self) -> Result<(), ValidationError> {
        require_text("firstName", &self.first_name)?;
        require_text("lastName", &self.last_name)?;
        require_text("userName", &self.user_name)
    }
}
