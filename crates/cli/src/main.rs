//! Console entry point.

use std::io;

use anyhow::Result;

use stockbook_inventory::Inventory;

fn main() -> Result<()> {
    stockbook_observability::init();

    let mut inventory = Inventory::new();
    tracing::info!("inventory console started");
    stockbook_cli::menu::run(&mut inventory, io::stdin().lock(), io::stdout().lock())?;
    tracing::info!(entries = inventory.len(), "inventory console stopped");
    Ok(())
}
