//! Lenient monetary-amount parsing
//!
//! Damage estimates arrive from extraction as JSON numbers or as strings
//! like `"$18,500"`. Amounts stay decimal end to end; float arithmetic
//! never touches them. Unparsable input is treated as absent, never as
//! a hard error.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Currency symbols stripped before numeric parsing.
const CURRENCY_SYMBOLS: [char; 3] = ['$', '\u{20ac}', '\u{a3}'];

/// Parses a monetary amount from a string.
///
/// Strips currency symbols, digit-group commas, and all whitespace,
/// then parses the remainder as a decimal. Scientific notation is
/// accepted. Returns `None` when nothing numeric remains.
pub fn parse_lenient_amount(value: &str) -> Option<Decimal> {
    let cleaned: String = value
        .chars()
        .filter(|c| !CURRENCY_SYMBOLS.contains(c) && *c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()
}

/// Converts a JSON scalar to a decimal amount when possible.
///
/// Numbers go through their canonical string form so integer and float
/// encodings land on the same decimal value. Strings use the lenient
/// parser. Everything else is `None`.
pub fn amount_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => {
            let text = n.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .ok()
        }
        Value::String(s) => parse_lenient_amount(s),
        _ => None,
    }
}

/// Serde helper for optional amount fields fed by extraction output.
///
/// Accepts a JSON number or a currency-formatted string. Null, absent,
/// and unparsable values all deserialize to `None`.
pub fn lenient_amount_opt<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(amount_from_value))
}
