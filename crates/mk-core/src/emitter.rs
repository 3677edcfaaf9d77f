//! Emitter: element list → markup text.
//!
//! One `<div>` per element, in store order, each carrying an inline
//! `style` attribute built from the style map in insertion order. Text
//! content is written verbatim; it is not escaped.

use crate::model::{Element, ElementKind, StyleMap};
use std::fmt::Write;

/// Render every element as markup, one fragment per line.
#[must_use]
pub fn serialize(elements: &[Element]) -> String {
    let mut out = String::with_capacity(elements.len() * 160);
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        emit_element(&mut out, element);
    }
    out
}

/// The `key: value;` list for one style map.
#[must_use]
pub fn style_attribute(style: &StyleMap) -> String {
    let mut out = String::new();
    write_style(&mut out, style);
    out
}

fn emit_element(out: &mut String, element: &Element) {
    out.push_str("<div style=\"");
    write_style(out, &element.style);
    out.push_str("\">");
    match &element.kind {
        ElementKind::Rectangle => {}
        ElementKind::Text { content } => out.push_str(content),
    }
    out.push_str("</div>");
}

fn write_style(out: &mut String, style: &StyleMap) {
    for (i, (key, value)) in style.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{key}: {value};");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementType;
    use crate::store::ElementStore;
    use crate::style::StylePatch;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_store_emits_nothing() {
        assert_eq!(serialize(&[]), "");
    }

    #[test]
    fn rectangle_fragment() {
        let mut store = ElementStore::new();
        store.add_element(ElementType::Rectangle);
        assert_eq!(
            serialize(store.elements()),
            "<div style=\"width: 100px; height: 100px; backgroundColor: #db9b9b; \
             borderRadius: 0px; border: 1px solid #000000; \
             boxShadow: 0px 0px 0px #000000;\"></div>"
        );
    }

    #[test]
    fn text_fragment_carries_content_unescaped() {
        let mut store = ElementStore::new();
        let id = store.add_element(ElementType::Text);
        store.update_content(id, "a < b & <i>c</i>");
        let out = serialize(store.elements());
        assert!(out.ends_with("\">a < b & <i>c</i></div>"), "{out}");
        assert!(out.starts_with("<div style=\"width: 100px; height: 100px; fontSize: 16px;"));
    }

    #[test]
    fn fragments_follow_store_order_and_join_with_newlines() {
        let mut store = ElementStore::new();
        let a = store.add_element(ElementType::Text);
        let b = store.add_element(ElementType::Text);
        store.update_content(a, "first");
        store.update_content(b, "second");
        let out = serialize(store.elements());
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(">first</div>"));
        assert!(lines[1].ends_with(">second</div>"));
    }

    #[test]
    fn new_keys_append_after_defaults() {
        let mut store = ElementStore::new();
        let id = store.add_element(ElementType::Rectangle);
        store.update_style(id, &StylePatch::single("opacity", "0.5"));
        let style = style_attribute(&store.elements()[0].style);
        assert!(style.ends_with("boxShadow: 0px 0px 0px #000000; opacity: 0.5;"));
    }
}
