//! Inventory domain module.
//!
//! This crate contains the product and inventory business rules, implemented
//! purely as deterministic domain logic (no IO, no logging, no storage).

pub mod inventory;
pub mod product;

pub use inventory::Inventory;
pub use product::Product;
