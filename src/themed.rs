//! Themed element factory.
//!
//! A [`ThemedComponent`] resolves a list of block names against a theme once,
//! at construction, into a [`ResolvedBase`]. Each render starts from that base,
//! switches in extra blocks for truthy mapped properties, and layers the
//! caller's own class name and style on top.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::props::{Props, RenderedElement, is_truthy};
use crate::style::{self, Style};
use crate::theme::{ElementType, Theme};

/// Token placed between the base class names and those of active extra blocks.
pub const MODIFIER_MARKER: &str = "asd";

/// An ordered list of block names.
///
/// Accepts a single name wherever a list is expected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OneOrMany")]
pub struct BlockNames(Vec<String>);

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for BlockNames {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(name) => Self(vec![name]),
            OneOrMany::Many(names) => Self(names),
        }
    }
}

impl BlockNames {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for BlockNames {
    fn from(name: &str) -> Self {
        Self(vec![name.to_string()])
    }
}

impl From<String> for BlockNames {
    fn from(name: String) -> Self {
        Self(vec![name])
    }
}

impl From<Vec<String>> for BlockNames {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

impl From<Vec<&str>> for BlockNames {
    fn from(names: Vec<&str>) -> Self {
        names.as_slice().into()
    }
}

impl From<&[&str]> for BlockNames {
    fn from(names: &[&str]) -> Self {
        Self(names.iter().map(|n| n.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for BlockNames {
    fn from(names: [&str; N]) -> Self {
        names.as_slice().into()
    }
}

/// Property key to block name, in insertion order.
///
/// The order decides the order of active extra blocks at render time, and
/// so which element substitution wins. Deserializing keeps document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropThemeMap(IndexMap<String, String>);

impl PropThemeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `prop` to `block`, returning the map for chaining.
    ///
    /// Re-mapping an existing property keeps its first position.
    pub fn map(mut self, prop: impl Into<String>, block: impl Into<String>) -> Self {
        self.insert(prop, block);
        self
    }

    pub fn insert(&mut self, prop: impl Into<String>, block: impl Into<String>) {
        self.0.insert(prop.into(), block.into());
    }

    pub fn get(&self, prop: &str) -> Option<&str> {
        self.0.get(prop).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropThemeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(prop, block)| (prop.into(), block.into()))
                .collect(),
        )
    }
}

/// Values resolved once from the theme and the component's block names.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBase {
    pub element: ElementType,
    pub class_name: String,
    pub style: Style,
}

impl ResolvedBase {
    pub fn resolve(element: ElementType, theme: &Theme, names: &[String]) -> Self {
        Self {
            element: reduce_element(element, theme, names),
            class_name: map_class_names(theme, names),
            style: reduce_style(Style::new(), theme, names),
        }
    }
}

/// Class name of each block (the block name itself if the theme has none), space-joined.
pub fn map_class_names(theme: &Theme, names: &[String]) -> String {
    names
        .iter()
        .map(|name| {
            theme
                .class_names
                .get(name)
                .filter(|class| !class.is_empty())
                .unwrap_or(name)
                .as_str()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shallow-merge each block's style onto `base`, in order.
pub fn reduce_style(base: Style, theme: &Theme, names: &[String]) -> Style {
    names.iter().fold(base, |acc, name| match theme.styles.get(name) {
        Some(block) => style::overlay(&acc, block),
        None => acc,
    })
}

/// The element of the last block with a substitution, else `element`.
pub fn reduce_element(element: ElementType, theme: &Theme, names: &[String]) -> ElementType {
    names
        .iter()
        .fold(element, |current, name| match theme.elements.get(name) {
            Some(substitute) if !substitute.as_str().is_empty() => substitute.clone(),
            _ => current,
        })
}

/// Resolve one render of a themed element.
///
/// Mapped properties that are present are always removed from `props`; the
/// truthy ones switch their block in on top of `base`. The caller's own
/// `className` and `style` are applied last.
pub fn render(
    theme: &Theme,
    base: &ResolvedBase,
    prop_map: Option<&PropThemeMap>,
    mut props: Props,
) -> RenderedElement {
    let children = std::mem::take(&mut props.children);

    let mut style = base.style.clone();
    let mut class_name = base.class_name.clone();
    let mut element = base.element.clone();

    if let Some(prop_map) = prop_map {
        let mut extra = Vec::new();
        for (prop, block) in prop_map.iter() {
            if let Some(value) = props.take(prop) {
                if is_truthy(&value) {
                    extra.push(block.to_string());
                }
            }
        }

        if !extra.is_empty() {
            tracing::trace!(blocks = ?extra, "applying mapped blocks");

            class_name = format!(
                "{} {} {}",
                base.class_name,
                MODIFIER_MARKER,
                map_class_names(theme, &extra)
            );
            style = reduce_style(style, theme, &extra);
            element = reduce_element(base.element.clone(), theme, &extra);
        }
    }

    let class_name = format!("{} {}", class_name, props.class_name_str());
    let style = match props.style.take() {
        Some(own) => style::overlay(&style, &own),
        None => style,
    };

    RenderedElement {
        element,
        class_name,
        style,
        attrs: props.attrs,
        children,
    }
}

/// A themed element definition: base values resolved once, rendered many times.
///
/// The theme is shared, so a component is cheap to clone and can be rendered
/// from several threads at once.
#[derive(Debug, Clone)]
pub struct ThemedComponent {
    theme: Arc<Theme>,
    names: BlockNames,
    base: ResolvedBase,
    prop_map: Option<PropThemeMap>,
}

impl ThemedComponent {
    pub fn new(
        element: impl Into<ElementType>,
        theme: impl Into<Arc<Theme>>,
        names: impl Into<BlockNames>,
        prop_map: Option<PropThemeMap>,
    ) -> Self {
        let theme = theme.into();
        let names = names.into();
        let base = ResolvedBase::resolve(element.into(), &theme, names.as_slice());

        tracing::debug!(
            names = ?names.as_slice(),
            element = %base.element,
            class_name = %base.class_name,
            "resolved themed component"
        );

        Self {
            theme,
            names,
            base,
            prop_map: prop_map.filter(|map| !map.is_empty()),
        }
    }

    pub fn render(&self, props: Props) -> RenderedElement {
        render(&self.theme, &self.base, self.prop_map.as_ref(), props)
    }

    pub fn base(&self) -> &ResolvedBase {
        &self.base
    }

    pub fn names(&self) -> &BlockNames {
        &self.names
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn prop_map(&self) -> Option<&PropThemeMap> {
        self.prop_map.as_ref()
    }
}

/// Free-function form of [`ThemedComponent::new`].
pub fn create_themed_component(
    element: impl Into<ElementType>,
    theme: impl Into<Arc<Theme>>,
    names: impl Into<BlockNames>,
    prop_map: Option<PropThemeMap>,
) -> ThemedComponent {
    ThemedComponent::new(element, theme, names, prop_map)
}
