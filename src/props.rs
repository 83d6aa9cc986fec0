//! Per-render properties and the element description handed to a rendering host.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::style::Style;
use crate::theme::ElementType;

/// Reserved property key for the caller's own class name.
pub const CLASS_NAME: &str = "className";

/// Reserved property key for the caller's own inline style.
pub const STYLE: &str = "style";

/// Properties passed to a single render call.
///
/// JSON shape:
/// ```json
/// { "className": "extra", "style": { "margin": 4 }, "active": true, "children": ["text"] }
/// ```
/// Every key other than `children`, `className` and `style` lands in `attrs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Props {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,

    #[serde(
        default,
        rename = "className",
        skip_serializing_if = "Option::is_none"
    )]
    pub class_name: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,

    #[serde(flatten)]
    pub attrs: BTreeMap<String, Value>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, returning the props for chaining.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(Value::String(class.into()));
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Remove a property by key, reserved keys included.
    ///
    /// Returns `None` if the property was not passed at all. A present
    /// reserved key is reported as its JSON value.
    pub fn take(&mut self, key: &str) -> Option<Value> {
        match key {
            CLASS_NAME => self.class_name.take(),
            STYLE => self.style.take().map(|style| {
                Value::Object(style.into_iter().map(|(k, v)| (k, v.into())).collect())
            }),
            _ => self.attrs.remove(key),
        }
    }

    /// The caller's class name as a string, or `""` when absent or falsy.
    pub fn class_name_str(&self) -> String {
        match &self.class_name {
            Some(Value::String(s)) => s.clone(),
            Some(value) if is_truthy(value) => value.to_string(),
            _ => String::new(),
        }
    }
}

/// A child of a rendered element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Element(Box<RenderedElement>),
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<RenderedElement> for Node {
    fn from(element: RenderedElement) -> Self {
        Node::Element(Box::new(element))
    }
}

/// Everything a host needs to draw one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedElement {
    pub element: ElementType,
    pub class_name: String,
    #[serde(default)]
    pub style: Style,
    #[serde(default)]
    pub attrs: BTreeMap<String, Value>,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// JavaScript truthiness of a property value.
///
/// `null`, `false`, `0`, `NaN` and `""` are falsy; arrays and objects are
/// always truthy, even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
