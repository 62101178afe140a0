// --- File: crates/scheduler_tables/src/attribute.rs ---
//! Typed attribute values as they appear on the wire, e.g. `{"S": "VENUE"}`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One stored item: attribute name to value.
pub type Item = HashMap<String, AttributeValue>;

/// Attribute value with its type tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    S(String),
    /// Numbers travel as strings to keep their precision
    N(String),
    #[serde(rename = "BOOL")]
    Bool(bool),
    #[serde(rename = "NULL")]
    Null(bool),
    M(HashMap<String, AttributeValue>),
    L(Vec<AttributeValue>),
    #[serde(rename = "SS")]
    StringSet(Vec<String>),
    #[serde(rename = "NS")]
    NumberSet(Vec<String>),
    /// Base64 encoded binary
    B(String),
}

impl AttributeValue {
    pub fn string(value: impl Into<String>) -> Self {
        AttributeValue::S(value.into())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::S(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::S(s) | AttributeValue::N(s) | AttributeValue::B(s) => f.write_str(s),
            AttributeValue::Bool(b) => write!(f, "{}", b),
            AttributeValue::Null(_) => f.write_str("null"),
            AttributeValue::StringSet(values) | AttributeValue::NumberSet(values) => {
                write!(f, "{{{}}}", values.join(", "))
            }
            AttributeValue::L(values) => {
                let parts: Vec<String> = values.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            AttributeValue::M(map) => {
                let mut parts: Vec<String> = map.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();
                parts.sort();
                write!(f, "{{{}}}", parts.join(", "))
            }
        }
    }
}

/// Builds the `PK`/`SK` composite key of an item.
pub fn composite_key(pk: impl Into<String>, sk: impl Into<String>) -> Item {
    HashMap::from([
        ("PK".to_string(), AttributeValue::S(pk.into())),
        ("SK".to_string(), AttributeValue::S(sk.into())),
    ])
}

/// Read helpers for items.
pub trait ItemExt {
    /// String attribute, if present and of type `S`.
    fn str_attr(&self, name: &str) -> Option<&str>;

    /// Any attribute rendered for display; `None` if absent.
    fn display_attr(&self, name: &str) -> Option<String>;

    /// Like [`ItemExt::display_attr`] but falls back to `default`.
    fn display_or(&self, name: &str, default: &str) -> String {
        self.display_attr(name).unwrap_or_else(|| default.to_string())
    }

    /// The `(PK, SK)` pair, if both are strings.
    fn primary_key(&self) -> Option<(&str, &str)> {
        Some((self.str_attr("PK")?, self.str_attr("SK")?))
    }
}

impl ItemExt for Item {
    fn str_attr(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttributeValue::as_str)
    }

    fn display_attr(&self, name: &str) -> Option<String> {
        self.get(name).map(ToString::to_string)
    }
}
