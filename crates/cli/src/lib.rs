//! Interactive console for the inventory manager.
//!
//! All IO lives here: prompting, numeric input conversion, rendering results
//! and errors. The domain crates stay pure and never print.

pub mod input;
pub mod menu;
