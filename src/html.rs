//! HTML rendering host for resolved element descriptions.

use serde_json::Value;

use crate::props::{Node, RenderedElement};
use crate::style;
use crate::util::{escape_html, is_markup_name, normalize_class};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Render an element description, and its children, as HTML markup.
pub fn render(element: &RenderedElement) -> String {
    let mut out = String::new();
    write_element(&mut out, element);
    out
}

fn write_element(out: &mut String, element: &RenderedElement) {
    let tag = element.element.as_str();

    if !is_markup_name(tag) {
        tracing::warn!(tag, "invalid tag name, rendering children only");
        write_children(out, &element.children);
        return;
    }

    out.push('<');
    out.push_str(tag);

    let class = normalize_class(&element.class_name);
    if !class.is_empty() {
        write_attr(out, "class", &class);
    }

    let css = style::to_css(&element.style);
    if !css.is_empty() {
        write_attr(out, "style", &css);
    }

    for (name, value) in &element.attrs {
        if !is_markup_name(name) {
            tracing::warn!(name = %name, "skipping invalid attribute name");
            continue;
        }

        match value {
            Value::Null | Value::Bool(false) => {}
            Value::Bool(true) => {
                out.push(' ');
                out.push_str(name);
            }
            Value::String(s) => write_attr(out, name, s),
            other => write_attr(out, name, &other.to_string()),
        }
    }

    out.push('>');

    if VOID_ELEMENTS.contains(&tag) {
        if !element.children.is_empty() {
            tracing::warn!(tag, "dropping children of void element");
        }
        return;
    }

    write_children(out, &element.children);

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn write_children(out: &mut String, children: &[Node]) {
    for child in children {
        match child {
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Element(inner) => write_element(out, inner),
        }
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::Props;
    use crate::style::style;
    use crate::theme::Theme;
    use crate::themed::{PropThemeMap, ThemedComponent};
    use serde_json::json;

    fn card() -> ThemedComponent {
        let theme = Theme::new()
            .class_name("card", "card")
            .style("card", style([("padding", 8)]))
            .element("card", "section")
            .class_name("activeCard", "active");
        let map = PropThemeMap::new().map("active", "activeCard");
        ThemedComponent::new("div", theme, "card", Some(map))
    }

    #[test]
    fn renders_base_element() {
        let html = render(&card().render(Props::new().child("Hello")));
        assert_eq!(html, r#"<section class="card" style="padding: 8px">Hello</section>"#);
    }

    #[test]
    fn renders_attributes_without_mapped_props() {
        let rendered = card().render(
            Props::new()
                .attr("active", true)
                .attr("id", "main")
                .attr("hidden", true)
                .attr("draggable", false)
                .attr("tabindex", 0),
        );

        let html = render(&rendered);

        assert_eq!(
            html,
            r#"<section class="card asd active" style="padding: 8px" hidden id="main" tabindex="0"></section>"#
        );
    }

    #[test]
    fn escapes_text_and_attributes() {
        let rendered = card().render(Props::new().attr("title", "a \"b\"").child("<b>"));

        let html = render(&rendered);

        assert!(html.contains(r#"title="a &quot;b&quot;""#));
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn renders_nested_children() {
        let label = ThemedComponent::new("span", Theme::new(), "label", None)
            .render(Props::new().child("Title"));
        let rendered = card().render(Props::new().child(label));

        let html = render(&rendered);

        assert!(html.ends_with(r#"<span class="label">Title</span></section>"#));
    }

    #[test]
    fn skips_attribute_names_that_break_markup() {
        let rendered = card().render(
            Props::new()
                .attr("x\"><script>alert(1)</script><i a=\"", "y")
                .attr("data-id", "7"),
        );

        let html = render(&rendered);

        assert_eq!(
            html,
            r#"<section class="card" style="padding: 8px" data-id="7"></section>"#
        );
    }

    #[test]
    fn invalid_tag_renders_children_only() {
        let rendered = ThemedComponent::new("div onload=x", Theme::new(), "box", None)
            .render(Props::new().child("<text>"));

        assert_eq!(render(&rendered), "&lt;text&gt;");
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let input = ThemedComponent::new("input", Theme::new(), "field", None)
            .render(Props::new().attr("value", json!("x")));

        assert_eq!(render(&input), r#"<input class="field" value="x">"#);
    }
}
