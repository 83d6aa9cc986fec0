//! Inline style mappings.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::kebab_case;

/// A single inline style value.
///
/// Values are opaque to merging; numbers only matter when the style is
/// written out as CSS (see [`to_css`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Integer(n) => write!(f, "{}", n),
            StyleValue::Float(n) => write!(f, "{}", n),
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for StyleValue {
    fn from(n: i64) -> Self {
        StyleValue::Integer(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Integer(n.into())
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Float(n)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

impl From<StyleValue> for serde_json::Value {
    fn from(value: StyleValue) -> Self {
        match value {
            StyleValue::Integer(n) => n.into(),
            // Non-finite floats have no JSON form
            StyleValue::Float(n) => serde_json::Number::from_f64(n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            StyleValue::Text(s) => s.into(),
        }
    }
}

/// Style property name to value.
pub type Style = BTreeMap<String, StyleValue>;

/// Build a style from `(property, value)` pairs.
pub fn style<K, V, I>(pairs: I) -> Style
where
    K: Into<String>,
    V: Into<StyleValue>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Shallow-merge `top` onto a copy of `base`; `top` wins on collisions.
pub fn overlay(base: &Style, top: &Style) -> Style {
    let mut merged = base.clone();
    merged.extend(top.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}

/// CSS properties whose numeric values carry no unit.
const UNITLESS: &[&str] = &[
    "flex",
    "flex-grow",
    "flex-shrink",
    "font-weight",
    "line-height",
    "opacity",
    "order",
    "z-index",
    "zoom",
];

/// Write a style as CSS declarations (`padding: 8px; color: red`).
///
/// Property names are converted to kebab-case. Numeric values get a `px`
/// suffix unless the property is unitless or the value is zero.
pub fn to_css(style: &Style) -> String {
    style
        .iter()
        .map(|(name, value)| {
            let property = kebab_case(name);
            let value = match value {
                StyleValue::Text(s) => s.clone(),
                StyleValue::Integer(0) => "0".to_string(),
                StyleValue::Float(n) if *n == 0.0 => "0".to_string(),
                number if UNITLESS.contains(&property.as_str()) => number.to_string(),
                number => format!("{}px", number),
            };
            format!("{}: {}", property, value)
        })
        .collect::<Vec<_>>()
        .join("; ")
}
