//! Cart State
//!
//! Reactive store for the staged purchase plus the pure math behind totals
//! and change. Cart contents live in view state only and are never persisted.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{CartLine, Product};
use crate::money::Money;

/// Cart contents with field-level reactivity.
#[derive(Clone, Debug, Default, Store)]
pub struct CartState {
    pub lines: Vec<CartLine>,
}

pub type CartStore = Store<CartState>;

/// Get the cart store from context.
pub fn use_cart() -> CartStore {
    expect_context::<CartStore>()
}

// ========================
// Pure cart math
// ========================

pub fn line_total(line: &CartLine) -> Money {
    line.unit_price * Money::from(line.quantity)
}

pub fn cart_total(lines: &[CartLine]) -> Money {
    lines.iter().map(line_total).sum()
}

/// Change due on a cash payment. May be negative when the customer has not
/// handed over enough; display-only, never validated.
pub fn change_due(amount_paid: Money, total: Money) -> Money {
    amount_paid - total
}

/// Stage one more unit of a product. Merges into an existing line and clamps
/// the staged quantity to the available stock.
pub fn add_to_lines(lines: &mut Vec<CartLine>, product: &Product) {
    if let Some(line) = lines.iter_mut().find(|l| l.product_id == product.id) {
        if i64::from(line.quantity) < product.stock {
            line.quantity += 1;
        }
    } else if product.stock > 0 {
        lines.push(CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
        });
    }
}

/// Set a line's quantity; zero removes the line.
pub fn set_line_quantity(lines: &mut Vec<CartLine>, product_id: &str, quantity: u32) {
    if quantity == 0 {
        lines.retain(|l| l.product_id != product_id);
    } else if let Some(line) = lines.iter_mut().find(|l| l.product_id == product_id) {
        line.quantity = quantity;
    }
}

// ========================
// Store helper functions
// ========================

pub fn cart_add_product(store: &CartStore, product: &Product) {
    let lines_field = store.lines();
    let mut lines = lines_field.write();
    add_to_lines(&mut lines, product);
}

pub fn cart_set_quantity(store: &CartStore, product_id: &str, quantity: u32) {
    let lines_field = store.lines();
    let mut lines = lines_field.write();
    set_line_quantity(&mut lines, product_id, quantity);
}

pub fn cart_remove_line(store: &CartStore, product_id: &str) {
    store.lines().write().retain(|l| l.product_id != product_id);
}

pub fn cart_clear(store: &CartStore) {
    store.lines().write().clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: &str, unit_price: Money, quantity: u32) -> CartLine {
        CartLine {
            product_id: product_id.to_string(),
            name: format!("Produk {product_id}"),
            unit_price,
            quantity,
        }
    }

    fn product(id: &str, price: Money, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Produk {id}"),
            description: None,
            price,
            stock,
            category_id: None,
            image_url: None,
            barcode: None,
            is_active: true,
            created_at: None,
            updated_at: None,
            category: None,
        }
    }

    #[test]
    fn test_cart_total_and_change() {
        // 2 x 10000 + 1 x 5000 = 25000; paid 30000 => change 5000
        let lines = vec![line("a", 10000, 2), line("b", 5000, 1)];
        let total = cart_total(&lines);
        assert_eq!(total, 25000);
        assert_eq!(change_due(30000, total), 5000);
    }

    #[test]
    fn test_change_may_go_negative() {
        assert_eq!(change_due(20000, 25000), -5000);
    }

    #[test]
    fn test_add_merges_existing_line() {
        let mut lines = Vec::new();
        let p = product("a", 10000, 5);
        add_to_lines(&mut lines, &p);
        add_to_lines(&mut lines, &p);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 2);
    }

    #[test]
    fn test_add_clamps_to_stock() {
        let mut lines = Vec::new();
        let p = product("a", 10000, 2);
        for _ in 0..5 {
            add_to_lines(&mut lines, &p);
        }
        assert_eq!(lines[0].quantity, 2);

        let empty = product("b", 5000, 0);
        add_to_lines(&mut lines, &empty);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_zero_quantity_removes_line() {
        let mut lines = vec![line("a", 10000, 2), line("b", 5000, 1)];
        set_line_quantity(&mut lines, "a", 0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product_id, "b");

        set_line_quantity(&mut lines, "b", 4);
        assert_eq!(lines[0].quantity, 4);
    }
}
