//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Domain-level error.
///
/// Keep this focused on deterministic validation and lookup failures. The
/// domain never logs or prints; the console layer renders each kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A product name was empty or whitespace-only.
    #[error("invalid name: name cannot be empty")]
    InvalidName,

    /// A price was non-finite or negative.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// A quantity was negative.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Raw user text could not be parsed as a number at the input boundary,
    /// before domain validation runs.
    #[error("invalid numeric input: {0}")]
    InvalidNumericInput(String),

    /// No product matched the queried name. Carries the original,
    /// non-normalized query string for display.
    #[error("product not found: '{0}'")]
    ProductNotFound(String),
}

impl InventoryError {
    pub fn invalid_price(msg: impl Into<String>) -> Self {
        Self::InvalidPrice(msg.into())
    }

    pub fn invalid_quantity(msg: impl Into<String>) -> Self {
        Self::InvalidQuantity(msg.into())
    }

    pub fn invalid_numeric_input(msg: impl Into<String>) -> Self {
        Self::InvalidNumericInput(msg.into())
    }

    pub fn not_found(query: impl Into<String>) -> Self {
        Self::ProductNotFound(query.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_preserves_query_string() {
        let err = InventoryError::not_found("Laptop Dell");
        assert_eq!(err, InventoryError::ProductNotFound("Laptop Dell".to_string()));
        assert_eq!(err.to_string(), "product not found: 'Laptop Dell'");
    }

    #[test]
    fn display_messages_name_the_failed_field() {
        assert_eq!(
            InventoryError::InvalidName.to_string(),
            "invalid name: name cannot be empty"
        );
        assert_eq!(
            InventoryError::invalid_price("price cannot be negative").to_string(),
            "invalid price: price cannot be negative"
        );
        assert_eq!(
            InventoryError::invalid_quantity("quantity cannot be negative").to_string(),
            "invalid quantity: quantity cannot be negative"
        );
        assert_eq!(
            InventoryError::invalid_numeric_input("'abc' is not a number").to_string(),
            "invalid numeric input: 'abc' is not a number"
        );
    }
}
