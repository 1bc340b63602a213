use crate::domain::product::ProductId;
use thiserror::Error;

/// Failures a repository operation can report. Neither variant is fatal:
/// the operation that produced it had no effect on the collection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductError {
    /// A required field was missing or empty.
    #[error("invalid product field: {field} must not be empty")]
    Validation { field: &'static str },
    #[error("product not found: {0}")]
    NotFound(ProductId),
}

impl ProductError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProductError::NotFound(_))
    }
}
