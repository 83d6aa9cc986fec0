//! Combining themes.
//!
//! Class names are appended, styles are shallow-merged and element
//! substitutions are overridden. The overlay always wins on collisions and
//! nothing only present in the base is ever dropped.

use crate::style;
use crate::theme::Theme;

/// Merge `overlay` on top of `base`, producing a new theme.
///
/// For a block present in both themes the class names are joined as
/// `"{base} {overlay}"` and the style mappings are overlaid key by key.
/// Element substitutions from `overlay` replace those of `base`.
pub fn merge(base: &Theme, overlay: &Theme) -> Theme {
    let mut class_names = base.class_names.clone();
    for (name, class) in &overlay.class_names {
        let merged = match class_names.get(name) {
            Some(existing) if !existing.is_empty() => format!("{} {}", existing, class),
            _ => class.clone(),
        };
        class_names.insert(name.clone(), merged);
    }

    let mut styles = base.styles.clone();
    for (name, top) in &overlay.styles {
        let merged = match styles.get(name) {
            Some(existing) => style::overlay(existing, top),
            None => top.clone(),
        };
        styles.insert(name.clone(), merged);
    }

    let mut elements = base.elements.clone();
    elements.extend(
        overlay
            .elements
            .iter()
            .map(|(name, element)| (name.clone(), element.clone())),
    );

    tracing::debug!(
        class_names = class_names.len(),
        styles = styles.len(),
        elements = elements.len(),
        "merged themes"
    );

    Theme {
        class_names,
        styles,
        elements,
    }
}

/// Fold [`merge`] over `themes` from left to right, starting from an empty theme.
pub fn merge_all<'a, I>(themes: I) -> Theme
where
    I: IntoIterator<Item = &'a Theme>,
{
    themes
        .into_iter()
        .fold(Theme::default(), |acc, theme| merge(&acc, theme))
}

impl Theme {
    /// Shorthand for [`merge(self, overlay)`](merge).
    pub fn merge(&self, overlay: &Theme) -> Theme {
        merge(self, overlay)
    }
}
