use thiserror::Error;

/// A document failed the shared required-field contract before persistence.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace only.
    #[error("{0} is required")]
    MissingField(String),

    /// A numeric field is NaN or infinite.
    #[error("{0} must be a finite number")]
    NotFinite(String),
}
