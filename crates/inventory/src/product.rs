use core::fmt;

use serde::{Deserialize, Serialize};

use stockbook_core::{InventoryError, InventoryResult};

/// A validated catalog entry: name, unit price, quantity on hand.
///
/// All three fields are validated at construction. Price and quantity may be
/// replaced later through [`Product::update_price`] and
/// [`Product::update_quantity`], which re-validate; a failed update leaves the
/// prior value intact. Deserialization funnels through [`Product::new`] so a
/// decoded product upholds the same invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProduct")]
pub struct Product {
    name: String,
    price: f64,
    quantity: u64,
}

/// Unvalidated wire shape; only exists to route deserialization through the
/// validating constructor.
#[derive(Deserialize)]
struct RawProduct {
    name: String,
    price: f64,
    quantity: i64,
}

impl TryFrom<RawProduct> for Product {
    type Error = InventoryError;

    fn try_from(raw: RawProduct) -> InventoryResult<Self> {
        Product::new(raw.name, raw.price, raw.quantity)
    }
}

impl Product {
    /// Validate and construct a product.
    ///
    /// The name is trimmed; original casing is preserved for display. The
    /// quantity parameter is signed so a negative input is rejected with
    /// `InvalidQuantity` instead of being unrepresentable at the call site.
    pub fn new(name: impl Into<String>, price: f64, quantity: i64) -> InventoryResult<Self> {
        let name = validate_name(&name.into())?;
        let price = validate_price(price)?;
        let quantity = validate_quantity(quantity)?;
        Ok(Self {
            name,
            price,
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Replace the stored price after validating the new value.
    pub fn update_price(&mut self, new_price: f64) -> InventoryResult<()> {
        self.price = validate_price(new_price)?;
        Ok(())
    }

    /// Replace the stored quantity after validating the new value.
    pub fn update_quantity(&mut self, new_quantity: i64) -> InventoryResult<()> {
        self.quantity = validate_quantity(new_quantity)?;
        Ok(())
    }

    /// `price * quantity`, unrounded. Two-decimal formatting is a
    /// presentation concern, not a storage one.
    pub fn total_value(&self) -> f64 {
        self.price * self.quantity as f64
    }

    /// Fold another entry into this one: quantities sum (saturating), the
    /// incoming price wins, the stored display name stays. The incoming
    /// product was validated at construction, so this cannot fail.
    pub(crate) fn merge(&mut self, incoming: &Product) {
        self.quantity = self.quantity.saturating_add(incoming.quantity);
        self.price = incoming.price;
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product {{ name: '{}', price: ${:.2}, quantity: {}, total: ${:.2} }}",
            self.name,
            self.price,
            self.quantity,
            self.total_value()
        )
    }
}

fn validate_name(name: &str) -> InventoryResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(InventoryError::InvalidName);
    }
    Ok(trimmed.to_string())
}

fn validate_price(price: f64) -> InventoryResult<f64> {
    if !price.is_finite() {
        return Err(InventoryError::invalid_price("price must be a finite number"));
    }
    if price < 0.0 {
        return Err(InventoryError::invalid_price("price cannot be negative"));
    }
    Ok(price)
}

fn validate_quantity(quantity: i64) -> InventoryResult<u64> {
    u64::try_from(quantity)
        .map_err(|_| InventoryError::invalid_quantity("quantity cannot be negative"))
}
