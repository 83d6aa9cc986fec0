use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::style::Style;

/// An opaque reference to a renderable element or component (`"div"`, `"Card"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementType(String);

impl ElementType {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementType {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ElementType {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Class names, inline styles, and element substitutions keyed by block name.
///
/// A missing key means "no override for that block". Themes are never mutated
/// by merging or rendering; [`crate::merge`] always builds a fresh value.
///
/// File format (TOML shown, JSON uses the same keys):
/// ```toml
/// [classNames]
/// card = "card shadow"
///
/// [styles.card]
/// padding = 8
///
/// [elements]
/// card = "section"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default)]
    pub class_names: BTreeMap<String, String>,

    #[serde(default)]
    pub styles: BTreeMap<String, Style>,

    #[serde(default)]
    pub elements: BTreeMap<String, ElementType>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class name for a block, returning the theme for chaining.
    pub fn class_name(mut self, block: impl Into<String>, class: impl Into<String>) -> Self {
        self.class_names.insert(block.into(), class.into());
        self
    }

    /// Set the inline style for a block, returning the theme for chaining.
    pub fn style(mut self, block: impl Into<String>, style: Style) -> Self {
        self.styles.insert(block.into(), style);
        self
    }

    /// Set the element substitution for a block, returning the theme for chaining.
    pub fn element(mut self, block: impl Into<String>, element: impl Into<ElementType>) -> Self {
        self.elements.insert(block.into(), element.into());
        self
    }

    /// Load a theme from a `.json` or `.toml` file and validate it.
    ///
    /// Files without a `.json` extension are parsed as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let theme: Theme = if is_json {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };

        theme.validate()?;

        tracing::info!(
            path = %path.display(),
            class_names = theme.class_names.len(),
            styles = theme.styles.len(),
            elements = theme.elements.len(),
            "theme loaded"
        );

        Ok(theme)
    }

    /// Check block names and values that typed deserialization cannot catch.
    pub fn validate(&self) -> Result<()> {
        let blocks = self
            .class_names
            .keys()
            .chain(self.styles.keys())
            .chain(self.elements.keys());

        for block in blocks {
            if block.is_empty() {
                return Err(invalid(block, "block name is empty"));
            }
            if block.chars().any(char::is_whitespace) {
                return Err(invalid(block, "block name contains whitespace"));
            }
        }

        for (block, element) in &self.elements {
            if element.as_str().trim().is_empty() {
                return Err(invalid(block, "element type is empty"));
            }
        }

        for (block, style) in &self.styles {
            if style.keys().any(|property| property.is_empty()) {
                return Err(invalid(block, "style property name is empty"));
            }
        }

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.class_names.is_empty() && self.styles.is_empty() && self.elements.is_empty()
    }
}

fn invalid(block: &str, reason: &str) -> Error {
    Error::InvalidTheme {
        block: block.to_string(),
        reason: reason.to_string(),
    }
}
