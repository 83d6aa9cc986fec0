//! Theme merging and themed element resolution.
//!
//! A [`Theme`] maps block names to class names, inline styles and element
//! substitutions. Themes are combined with [`merge`], and a
//! [`ThemedComponent`] turns a theme plus a list of block names into a
//! function from per-render [`Props`] to a [`RenderedElement`] description.
//!
//! ```
//! use downstyle::{Props, PropThemeMap, Theme, ThemedComponent, style::style};
//!
//! let theme = Theme::new()
//!     .class_name("card", "card")
//!     .style("card", style([("padding", 8)]))
//!     .element("card", "section")
//!     .class_name("activeCard", "active");
//!
//! let card = ThemedComponent::new(
//!     "div",
//!     theme,
//!     "card",
//!     Some(PropThemeMap::new().map("active", "activeCard")),
//! );
//!
//! let rendered = card.render(Props::new().attr("active", true));
//! assert_eq!(rendered.element.as_str(), "section");
//! assert_eq!(rendered.class_name, "card asd active ");
//! assert!(!rendered.attrs.contains_key("active"));
//! ```

pub mod config;
pub mod error;
pub mod html;
pub mod merge;
pub mod props;
pub mod style;
pub mod theme;
pub mod themed;
mod util;

pub use error::{Error, Result};
pub use merge::{merge, merge_all};
pub use props::{Node, Props, RenderedElement};
pub use style::{Style, StyleValue};
pub use theme::{ElementType, Theme};
pub use themed::{
    BlockNames, MODIFIER_MARKER, PropThemeMap, ResolvedBase, ThemedComponent,
    create_themed_component,
};
