//! Numeric input conversion at the console boundary.
//!
//! Raw user text that fails to parse is `InvalidNumericInput`, surfaced
//! before any domain validation runs. Sign and finiteness checks belong to
//! the domain ([`stockbook_inventory::Product`]).

use stockbook_core::{InventoryError, InventoryResult};

/// Parse user-entered price text as a real number.
pub fn parse_price(text: &str) -> InventoryResult<f64> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| InventoryError::invalid_numeric_input(format!("'{trimmed}' is not a number")))
}

/// Parse user-entered quantity text as an integer. Fractional text like
/// "7.5" fails here, before the domain's non-negativity check.
pub fn parse_quantity(text: &str) -> InventoryResult<i64> {
    let trimmed = text.trim();
    trimmed.parse::<i64>().map_err(|_| {
        InventoryError::invalid_numeric_input(format!("'{trimmed}' is not an integer"))
    })
}
