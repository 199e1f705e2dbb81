//! Currency Arithmetic
//!
//! All amounts are i64 minor units (whole rupiah; IDR has no subunit in
//! practice). Keeps totals and change exact instead of drifting through
//! floats.

use serde::{Deserialize, Deserializer};

pub type Money = i64;

/// Format an amount as `Rp 25.000` with id-ID dot grouping.
pub fn format_rupiah(amount: Money) -> String {
    format!("Rp {}", group_thousands(amount))
}

fn group_thousands(amount: Money) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Parse a user-typed amount ("30000", "30.000", "Rp 30.000") into minor
/// units. Returns None for anything that is not a plain amount.
pub fn parse_amount(input: &str) -> Option<Money> {
    let cleaned: String = input
        .trim()
        .trim_start_matches("Rp")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Deserialize a backend numeric column into minor units. The REST layer may
/// serialize a numeric as either an integer or a float.
pub fn de_minor_units<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;
    if let Some(i) = number.as_i64() {
        Ok(i)
    } else if let Some(f) = number.as_f64() {
        Ok(f.round() as Money)
    } else {
        Err(serde::de::Error::custom("amount out of range"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah_grouping() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(500), "Rp 500");
        assert_eq!(format_rupiah(5000), "Rp 5.000");
        assert_eq!(format_rupiah(25000), "Rp 25.000");
        assert_eq!(format_rupiah(1_000_000), "Rp 1.000.000");
    }

    #[test]
    fn test_format_rupiah_negative() {
        assert_eq!(format_rupiah(-5000), "Rp -5.000");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("30000"), Some(30000));
        assert_eq!(parse_amount("30.000"), Some(30000));
        assert_eq!(parse_amount("Rp 30.000"), Some(30000));
        assert_eq!(parse_amount("  15000 "), Some(15000));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
    }

    #[test]
    fn test_de_minor_units_accepts_ints_and_floats() {
        #[derive(Deserialize)]
        struct Priced {
            #[serde(deserialize_with = "de_minor_units")]
            price: Money,
        }

        let from_int: Priced = serde_json::from_str(r#"{"price": 5000}"#).unwrap();
        assert_eq!(from_int.price, 5000);
        let from_float: Priced = serde_json::from_str(r#"{"price": 5000.0}"#).unwrap();
        assert_eq!(from_float.price, 5000);
        let rounded: Priced = serde_json::from_str(r#"{"price": 4999.6}"#).unwrap();
        assert_eq!(rounded.price, 5000);
    }
}
