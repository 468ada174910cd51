use serde::Serialize;

use stockbook_core::{InventoryError, InventoryResult};

use crate::product::Product;

/// An insertion-ordered collection of products, keyed by normalized name.
///
/// The key is the trimmed, case-folded form of the product name; no two
/// entries normalize to the same key. Lookup is linear: collections are small
/// and human-entered.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a product, or merge it into the entry whose normalized name
    /// matches: quantities sum, the incoming price wins, the first-inserted
    /// display casing stays. Never fails; the product was validated at
    /// construction.
    pub fn add_product(&mut self, product: Product) {
        let key = normalized_key(product.name());
        match self.position(&key) {
            Some(idx) => self.products[idx].merge(&product),
            None => self.products.push(product),
        }
    }

    /// Case-insensitive lookup. A blank query is `InvalidName`; an absent key
    /// is `ProductNotFound` carrying the exact query string.
    pub fn find_product(&self, name: &str) -> InventoryResult<&Product> {
        let key = query_key(name)?;
        match self.position(&key) {
            Some(idx) => Ok(&self.products[idx]),
            None => Err(InventoryError::not_found(name)),
        }
    }

    /// [`Inventory::find_product`], mutable. The console's update-price and
    /// update-quantity flows reach a stored product through this.
    pub fn find_product_mut(&mut self, name: &str) -> InventoryResult<&mut Product> {
        let key = query_key(name)?;
        match self.position(&key) {
            Some(idx) => Ok(&mut self.products[idx]),
            None => Err(InventoryError::not_found(name)),
        }
    }

    /// Sum of [`Product::total_value`] over all entries; 0.0 when empty.
    pub fn total_value(&self) -> f64 {
        self.products.iter().map(Product::total_value).sum()
    }

    /// All products in first-insertion order (merges update entries in
    /// place, they do not reorder). Restartable; reflects current state.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.products
            .iter()
            .position(|p| normalized_key(p.name()) == key)
    }
}

/// Trimmed, case-folded comparison key. Display casing is untouched.
fn normalized_key(name: &str) -> String {
    name.trim().to_lowercase()
}

fn query_key(name: &str) -> InventoryResult<String> {
    let key = normalized_key(name);
    if key.is_empty() {
        return Err(InventoryError::InvalidName);
    }
    Ok(key)
}
