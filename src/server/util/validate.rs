//! Shared required-field contract applied to every document before persistence.
//!
//! Each create/update parameter type implements [`Validate`] by listing its required
//! fields through [`require_text`] and [`require_number`]. Nested sub-documents are
//! reported with a dotted path such as `lineItems[1].name`.

use crate::server::error::validation::ValidationError;

/// Document parameters that can be checked before they reach the store.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Fails when a required text field is empty or only whitespace.
pub fn require_text(field: impl Into<String>, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field.into()));
    }

    Ok(())
}

/// Fails when a required numeric field is NaN or infinite.
pub fn require_number(field: impl Into<String>, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite(field.into()));
    }

    Ok(())
}
