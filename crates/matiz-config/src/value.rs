//! Scalar setting values.

use serde::{Deserialize, Serialize};
use toml::Value;

/// A single setting value as stored in a preset or a preferences document.
///
/// Settings are flat scalars: color scheme names are strings, font sizes are
/// numbers, and toggles are booleans. An unset setting is represented by the
/// absence of its key rather than by a null variant, since TOML has no null.
///
/// # Example
///
/// ```rust
/// use matiz_config::SettingValue;
///
/// let scheme = SettingValue::from("Monokai");
/// let size = SettingValue::from(13);
///
/// assert_eq!(scheme.as_str(), Some("Monokai"));
/// assert_eq!(size.as_int(), Some(13));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// Boolean toggle.
    Bool(bool),
    /// Integer value (font sizes, margins).
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// String value (scheme names, font faces).
    Str(String),
}

impl SettingValue {
    /// View the value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// View the value as an integer, if it is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            SettingValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// View the value as a float. Integers are widened.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            SettingValue::Float(f) => Some(*f),
            SettingValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// View the value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Convert a raw TOML value into a setting value.
    ///
    /// Returns `None` for non-scalar TOML (tables, arrays, datetimes);
    /// preset payloads are flat scalar records.
    pub fn from_toml(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(SettingValue::Str(s.clone())),
            Value::Integer(i) => Some(SettingValue::Int(*i)),
            Value::Float(f) => Some(SettingValue::Float(*f)),
            Value::Boolean(b) => Some(SettingValue::Bool(*b)),
            _ => None,
        }
    }

    /// Convert the setting value into a raw TOML value.
    pub fn to_toml(&self) -> Value {
        match self {
            SettingValue::Str(s) => Value::String(s.clone()),
            SettingValue::Int(i) => Value::Integer(*i),
            SettingValue::Float(f) => Value::Float(*f),
            SettingValue::Bool(b) => Value::Boolean(*b),
        }
    }
}

impl From<&str> for SettingValue {
    fn from(s: &str) -> Self {
        SettingValue::Str(s.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(s: String) -> Self {
        SettingValue::Str(s)
    }
}

impl From<i64> for SettingValue {
    fn from(i: i64) -> Self {
        SettingValue::Int(i)
    }
}

impl From<f64> for SettingValue {
    fn from(f: f64) -> Self {
        SettingValue::Float(f)
    }
}

impl From<bool> for SettingValue {
    fn from(b: bool) -> Self {
        SettingValue::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(SettingValue::from("Solarized").as_str(), Some("Solarized"));
        assert_eq!(SettingValue::from(12).as_int(), Some(12));
        assert_eq!(SettingValue::from(1.5).as_float(), Some(1.5));
        assert_eq!(SettingValue::from(true).as_bool(), Some(true));
    }

    #[test]
    fn test_int_widens_to_float() {
        assert_eq!(SettingValue::from(12).as_float(), Some(12.0));
    }

    #[test]
    fn test_wrong_kind_accessor_is_none() {
        assert_eq!(SettingValue::from(12).as_str(), None);
        assert_eq!(SettingValue::from("x").as_int(), None);
        assert_eq!(SettingValue::from("x").as_bool(), None);
    }

    #[test]
    fn test_toml_roundtrip() {
        let values = [
            SettingValue::from("Monokai"),
            SettingValue::from(13),
            SettingValue::from(0.75),
            SettingValue::from(false),
        ];

        for value in values {
            let raw = value.to_toml();
            assert_eq!(SettingValue::from_toml(&raw), Some(value));
        }
    }

    #[test]
    fn test_non_scalar_toml_rejected() {
        let table = Value::Table(toml::Table::new());
        assert_eq!(SettingValue::from_toml(&table), None);

        let array = Value::Array(vec![]);
        assert_eq!(SettingValue::from_toml(&array), None);
    }

    #[test]
    fn test_untagged_serde() {
        #[derive(serde::Deserialize)]
        struct Doc {
            scheme: SettingValue,
            size: SettingValue,
        }

        let doc: Doc = toml::from_str("scheme = \"Monokai\"\nsize = 13").unwrap();
        assert_eq!(doc.scheme, SettingValue::from("Monokai"));
        assert_eq!(doc.size, SettingValue::from(13));
    }
}
