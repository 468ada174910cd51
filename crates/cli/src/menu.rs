//! The interactive menu loop.
//!
//! Mirrors the console flows: add, find, list, aggregate valuation, and the
//! two update flows that reach a stored product through
//! `Inventory::find_product_mut`.

use std::io::{self, BufRead, Write};

use stockbook_core::{InventoryError, InventoryResult};
use stockbook_inventory::{Inventory, Product};

use crate::input::{parse_price, parse_quantity};

const MENU: &str = "\
============================================================
                   STOCKBOOK INVENTORY
============================================================
1. Add product
2. Find product
3. List products
4. Total inventory value
5. Update product price
6. Update product quantity
0. Exit
============================================================";

/// Drive the interactive menu until the user exits or input ends.
///
/// Generic over reader/writer so tests can script a session. Domain errors
/// render as single lines and never abort the loop; only IO errors propagate.
pub fn run<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    loop {
        writeln!(output, "\n{MENU}")?;
        let Some(choice) = prompt(&mut input, &mut output, "Select an option: ")? else {
            break;
        };
        match choice.trim() {
            "0" => {
                writeln!(output, "Goodbye.")?;
                break;
            }
            "1" => add_product(inventory, &mut input, &mut output)?,
            "2" => find_product(inventory, &mut input, &mut output)?,
            "3" => list_products(inventory, &mut output)?,
            "4" => total_value(inventory, &mut output)?,
            "5" => update_price(inventory, &mut input, &mut output)?,
            "6" => update_quantity(inventory, &mut input, &mut output)?,
            other => writeln!(output, "Unknown option '{other}'. Try again.")?,
        }
    }
    Ok(())
}

fn add_product<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "\n[Add product]")?;
    let Some(name) = prompt(input, output, "Name: ")? else {
        return Ok(());
    };
    let Some(price_text) = prompt(input, output, "Price: $")? else {
        return Ok(());
    };
    let Some(quantity_text) = prompt(input, output, "Quantity: ")? else {
        return Ok(());
    };

    match build_product(&name, &price_text, &quantity_text) {
        Ok(product) => {
            let stored_name = product.name().to_string();
            inventory.add_product(product);
            tracing::info!(product = %stored_name, "product added");
            // After a merge the stored entry carries the combined state.
            if let Ok(stored) = inventory.find_product(&stored_name) {
                writeln!(output, "Added: {stored}")?;
            }
        }
        Err(err) => render_error(output, &err)?,
    }
    Ok(())
}

/// Convert the three user-supplied strings and construct a product. Numeric
/// conversion failures surface before domain validation runs.
fn build_product(name: &str, price_text: &str, quantity_text: &str) -> InventoryResult<Product> {
    let price = parse_price(price_text)?;
    let quantity = parse_quantity(quantity_text)?;
    Product::new(name, price, quantity)
}

fn find_product<R: BufRead, W: Write>(
    inventory: &Inventory,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "\n[Find product]")?;
    let Some(name) = prompt(input, output, "Name to find: ")? else {
        return Ok(());
    };
    match inventory.find_product(&name) {
        Ok(product) => writeln!(output, "Found: {product}")?,
        Err(err) => render_error(output, &err)?,
    }
    Ok(())
}

fn list_products<W: Write>(inventory: &Inventory, output: &mut W) -> io::Result<()> {
    writeln!(output, "\n[List products]")?;
    if inventory.is_empty() {
        writeln!(output, "Inventory is empty.")?;
        return Ok(());
    }
    for product in inventory.products() {
        writeln!(output, "{product}")?;
    }
    Ok(())
}

fn total_value<W: Write>(inventory: &Inventory, output: &mut W) -> io::Result<()> {
    writeln!(
        output,
        "\nTotal inventory value: ${:.2}",
        inventory.total_value()
    )
}

fn update_price<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "\n[Update price]")?;
    let Some(name) = prompt(input, output, "Product name: ")? else {
        return Ok(());
    };
    let Some(price_text) = prompt(input, output, "New price: $")? else {
        return Ok(());
    };

    let outcome = parse_price(&price_text).and_then(|price| {
        let product = inventory.find_product_mut(&name)?;
        product.update_price(price)?;
        Ok(product.to_string())
    });
    match outcome {
        Ok(line) => {
            tracing::info!(product = %name, "price updated");
            writeln!(output, "Price updated: {line}")?;
        }
        Err(err) => render_error(output, &err)?,
    }
    Ok(())
}

fn update_quantity<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "\n[Update quantity]")?;
    let Some(name) = prompt(input, output, "Product name: ")? else {
        return Ok(());
    };
    let Some(quantity_text) = prompt(input, output, "New quantity: ")? else {
        return Ok(());
    };

    let outcome = parse_quantity(&quantity_text).and_then(|quantity| {
        let product = inventory.find_product_mut(&name)?;
        product.update_quantity(quantity)?;
        Ok(product.to_string())
    });
    match outcome {
        Ok(line) => {
            tracing::info!(product = %name, "quantity updated");
            writeln!(output, "Quantity updated: {line}")?;
        }
        Err(err) => render_error(output, &err)?,
    }
    Ok(())
}

fn render_error<W: Write>(output: &mut W, err: &InventoryError) -> io::Result<()> {
    tracing::warn!(%err, "operation rejected");
    writeln!(output, "Error: {err}")
}

/// Write a prompt label, then read one line. `None` means end of input.
/// Only the line terminator is stripped; queries keep their exact text.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(script: &str) -> (Inventory, String) {
        let mut inventory = Inventory::new();
        let mut output = Vec::new();
        run(&mut inventory, Cursor::new(script), &mut output).unwrap();
        (inventory, String::from_utf8(output).unwrap())
    }

    #[test]
    fn add_list_total_exit() {
        let script = "1\nLaptop Dell\n1200.50\n5\n1\nMouse\n25.0\n100\n3\n4\n0\n";
        let (inventory, output) = run_session(script);

        assert_eq!(inventory.len(), 2);
        assert!(output.contains("Added: Product { name: 'Laptop Dell'"));
        assert!(output.contains("Total inventory value: $8502.50"));
        assert!(output.contains("Goodbye."));
    }

    #[test]
    fn adding_the_same_name_again_merges_instead_of_duplicating() {
        let script = "1\nLaptop Dell\n1200.50\n5\n1\nlaptop dell\n0\n3\n0\n";
        let (inventory, output) = run_session(script);

        assert_eq!(inventory.len(), 1);
        let stored = inventory.find_product("laptop dell").unwrap();
        assert_eq!(stored.name(), "Laptop Dell");
        assert_eq!(stored.quantity(), 8);
        assert_eq!(stored.price(), 0.0);
        assert!(output.contains("quantity: 8"));
    }

    #[test]
    fn non_numeric_price_is_rejected_and_the_loop_continues() {
        let script = "1\nMouse\nabc\n10\n3\n0\n";
        let (inventory, output) = run_session(script);

        assert!(inventory.is_empty());
        assert!(output.contains("Error: invalid numeric input: 'abc' is not a number"));
        assert!(output.contains("Inventory is empty."));
    }

    #[test]
    fn negative_price_is_rejected_by_domain_validation() {
        let script = "1\nMouse\n-5\n10\n0\n";
        let (inventory, output) = run_session(script);

        assert!(inventory.is_empty());
        assert!(output.contains("Error: invalid price: price cannot be negative"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let script = "1\n   \n10\n5\n0\n";
        let (inventory, output) = run_session(script);

        assert!(inventory.is_empty());
        assert!(output.contains("Error: invalid name: name cannot be empty"));
    }

    #[test]
    fn finding_an_absent_product_reports_the_exact_query() {
        let script = "2\nKeyboard\n0\n";
        let (_, output) = run_session(script);

        assert!(output.contains("Error: product not found: 'Keyboard'"));
    }

    #[test]
    fn update_price_flow_changes_the_stored_entry() {
        let script = "1\nMouse\n25.0\n100\n5\nmouse\n19.99\n0\n";
        let (inventory, output) = run_session(script);

        assert_eq!(inventory.find_product("Mouse").unwrap().price(), 19.99);
        assert!(output.contains("Price updated:"));
    }

    #[test]
    fn rejected_quantity_update_leaves_the_entry_unchanged() {
        let script = "1\nMouse\n25.0\n100\n6\nmouse\n-4\n6\nmouse\n42\n0\n";
        let (inventory, output) = run_session(script);

        assert_eq!(inventory.find_product("Mouse").unwrap().quantity(), 42);
        assert!(output.contains("Error: invalid quantity: quantity cannot be negative"));
        assert!(output.contains("Quantity updated:"));
    }

    #[test]
    fn unknown_option_is_reported() {
        let script = "9\n0\n";
        let (_, output) = run_session(script);

        assert!(output.contains("Unknown option '9'. Try again."));
    }

    #[test]
    fn end_of_input_ends_the_loop() {
        let script = "3\n";
        let (inventory, output) = run_session(script);

        assert!(inventory.is_empty());
        assert!(output.contains("Inventory is empty."));
        assert!(!output.contains("Goodbye."));
    }
}
