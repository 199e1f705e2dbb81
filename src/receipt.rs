//! Receipt Rendering
//!
//! Pure text rendering of a completed sale. No backend interaction.

use crate::cart::{cart_total, change_due, line_total};
use crate::models::{CartLine, PaymentMethod, StoreProfile};
use crate::money::{format_rupiah, Money};

const RECEIPT_WIDTH: usize = 32;

/// Snapshot of the cart taken at checkout. The receipt renders from this,
/// not from the live cart.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub lines: Vec<CartLine>,
    pub method: PaymentMethod,
    pub amount_paid: Money,
}

/// Render a printable receipt for a sale.
pub fn render_receipt(profile: &StoreProfile, sale: &Sale) -> String {
    let total = cart_total(&sale.lines);
    let rule = "-".repeat(RECEIPT_WIDTH);

    let mut out = String::new();
    out.push_str(&profile.name);
    out.push('\n');
    out.push_str(&profile.address);
    out.push('\n');
    out.push_str(&format!("Telp: {}\n", profile.phone));
    out.push_str(&rule);
    out.push('\n');

    for line in &sale.lines {
        let label = format!("{} x{}", line.name, line.quantity);
        out.push_str(&row(&label, &format_rupiah(line_total(line))));
    }

    out.push_str(&rule);
    out.push('\n');
    out.push_str(&row("Total", &format_rupiah(total)));
    out.push_str(&row("Metode", sale.method.label()));
    if sale.method == PaymentMethod::Cash {
        out.push_str(&row("Dibayar", &format_rupiah(sale.amount_paid)));
        out.push_str(&row("Kembalian", &format_rupiah(change_due(sale.amount_paid, total))));
    }
    out
}

fn row(left: &str, right: &str) -> String {
    if left.len() + right.len() + 1 >= RECEIPT_WIDTH {
        format!("{left} {right}\n")
    } else {
        let pad = RECEIPT_WIDTH - left.len() - right.len();
        format!("{left}{}{right}\n", " ".repeat(pad))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> StoreProfile {
        StoreProfile {
            name: "Toko Kelontong Barokah".into(),
            address: "Jl. Mawar No. 123, Jakarta".into(),
            phone: "021-12345678".into(),
            email: "tokobarokah@email.com".into(),
        }
    }

    fn lines() -> Vec<CartLine> {
        vec![
            CartLine {
                product_id: "a".into(),
                name: "Susu Kotak".into(),
                unit_price: 10000,
                quantity: 2,
            },
            CartLine {
                product_id: "b".into(),
                name: "Roti Tawar".into(),
                unit_price: 5000,
                quantity: 1,
            },
        ]
    }

    #[test]
    fn test_cash_receipt_shows_paid_and_change() {
        let sale = Sale { lines: lines(), method: PaymentMethod::Cash, amount_paid: 30000 };
        let text = render_receipt(&profile(), &sale);

        assert!(text.starts_with("Toko Kelontong Barokah\n"));
        assert!(text.contains("Telp: 021-12345678"));
        assert!(text.contains("Susu Kotak x2"));
        assert!(text.contains("Rp 20.000"));
        assert!(text.contains("Rp 25.000")); // total
        assert!(text.contains("Tunai"));
        assert!(text.contains("Dibayar"));
        assert!(text.contains("Rp 30.000"));
        assert!(text.contains("Kembalian"));
        assert!(text.contains("Rp 5.000"));
    }

    #[test]
    fn test_non_cash_receipt_omits_change() {
        let sale = Sale { lines: lines(), method: PaymentMethod::Qris, amount_paid: 0 };
        let text = render_receipt(&profile(), &sale);

        assert!(text.contains("QRIS"));
        assert!(!text.contains("Dibayar"));
        assert!(!text.contains("Kembalian"));
    }

    #[test]
    fn test_rows_are_padded_to_receipt_width() {
        let sale = Sale { lines: lines(), method: PaymentMethod::Cash, amount_paid: 30000 };
        let text = render_receipt(&profile(), &sale);
        let total_row = text.lines().find(|l| l.starts_with("Total")).unwrap();
        assert_eq!(total_row.len(), RECEIPT_WIDTH);
        assert!(total_row.ends_with("Rp 25.000"));
    }
}
