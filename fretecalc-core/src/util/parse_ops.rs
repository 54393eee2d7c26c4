use rust_decimal::Decimal;
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// parses a decimal from free-form form-field text. tolerates surrounding
/// whitespace and the Brazilian comma decimal separator, with or without
/// dot thousands separators ("1.234,56" and "1234.56" both parse).
///
/// # Arguments
///
/// * `text` - raw field text as typed by a user
///
/// # Returns
///
/// the parsed value, or None when the text is not numeric
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.contains(',') {
        // comma is the decimal separator; any dots are thousands separators
        let normalized = trimmed.replace('.', "").replace(',', ".");
        Decimal::from_str(&normalized).ok()
    } else {
        Decimal::from_str(trimmed).ok()
    }
}

/// reads a JSON value as a decimal, accepting both number and string
/// representations. returns None for null, non-numeric text, and any
/// non-scalar value.
pub fn decimal_from_value(value: &serde_json::Value) -> Option<Decimal> {
    match value {
        serde_json::Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        serde_json::Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

/// the engine-wide "parse with default" policy: absent or non-numeric
/// monetary and rate inputs degrade to zero rather than raising, because
/// partial input is the normal transient state of an interactive form.
pub fn decimal_or_zero(value: &serde_json::Value) -> Decimal {
    decimal_from_value(value).unwrap_or_default()
}

/// serde adapter applying the zero-default policy to a struct field.
/// numbers and numeric strings parse; null and non-numeric text become
/// zero. arrays and objects in a numeric position are a structural
/// error, not a value to degrade.
pub fn deserialize_lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match &value {
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => Err(D::Error::custom(
            "expected a number, numeric string or null",
        )),
        _ => Ok(decimal_or_zero(&value)),
    }
}

/// serde adapter as above, but preserving absence: null and non-numeric
/// text deserialize to None so callers can distinguish "not provided"
/// from an explicit zero.
pub fn deserialize_lenient_decimal_opt<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match &value {
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => Err(D::Error::custom(
            "expected a number, numeric string or null",
        )),
        _ => Ok(decimal_from_value(&value)),
    }
}
