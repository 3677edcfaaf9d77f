//! Integration tests: store mutations → emitted markup.
//!
//! Exercises the public surface the way the editor crate does: build a
//! store, mutate it through style patches, and check the markup.

use mk_core::emitter::serialize;
use mk_core::geometry::{Geometry, MIN_ELEMENT_SIZE, ResizeDirection};
use mk_core::model::*;
use mk_core::store::ElementStore;
use mk_core::style::StylePatch;
use pretty_assertions::assert_eq;

fn style_text(store: &ElementStore, id: mk_core::ElementId, name: &str) -> Option<String> {
    store
        .style(id)
        .and_then(|s| s.get_by_name(name))
        .map(ToString::to_string)
}

#[test]
fn serialize_is_idempotent() {
    let mut store = ElementStore::new();
    let a = store.add_element(ElementType::Rectangle);
    let t = store.add_element(ElementType::Text);
    store.update_content(t, "hello");
    store.update_style(a, &StylePatch::single("box-shadow-x", "2px"));

    let first = serialize(store.elements());
    let second = serialize(store.elements());
    assert_eq!(first, second);
}

#[test]
fn rectangle_defaults_appear_once_in_order() {
    let mut store = ElementStore::new();
    store.add_element(ElementType::Rectangle);
    let out = serialize(store.elements());

    let keys = [
        "width:",
        "height:",
        "backgroundColor:",
        "borderRadius:",
        "border:",
        "boxShadow:",
    ];
    let mut cursor = 0;
    for key in keys {
        let needle = format!(" {key}");
        let haystack = format!(" {}", &out["<div style=\"".len()..]);
        assert_eq!(
            haystack.matches(&needle).count(),
            1,
            "{key} should appear exactly once in {out}"
        );
        let pos = haystack.find(&needle).unwrap_or(0);
        assert!(pos >= cursor, "{key} out of order in {out}");
        cursor = pos;
    }
}

#[test]
fn border_width_edit_leaves_no_component_key() {
    let mut store = ElementStore::new();
    let id = store.add_element(ElementType::Rectangle);
    // Start from an element with no explicit border at all.
    let mut bare = StyleMap::new();
    bare.set_text(StyleKey::Width, "100px");
    let merged = mk_core::merge(&bare, &StylePatch::single("border-width", "3px"));
    assert_eq!(
        merged.get(&StyleKey::Border).map(ToString::to_string).as_deref(),
        Some("3px solid #000000")
    );

    store.update_style(id, &StylePatch::single("border-width", "3px"));
    assert_eq!(
        style_text(&store, id, "border").as_deref(),
        Some("3px solid #000000")
    );
    assert_eq!(style_text(&store, id, "border-width"), None);
    assert!(!serialize(store.elements()).contains("border-width"));
}

#[test]
fn shadow_y_reflects_latest_edit_only() {
    let mut store = ElementStore::new();
    let id = store.add_element(ElementType::Rectangle);
    store.update_style(id, &StylePatch::single("box-shadow-x", "4px"));
    store.update_style(id, &StylePatch::single("box-shadow-y", "5px"));
    store.update_style(id, &StylePatch::single("box-shadow-y", "8px"));
    assert_eq!(
        style_text(&store, id, "boxShadow").as_deref(),
        Some("4px 8px 0px #000000")
    );
}

#[test]
fn removing_absent_id_keeps_markup() {
    let mut store = ElementStore::new();
    store.add_element(ElementType::Rectangle);
    store.add_element(ElementType::Text);
    let before = serialize(store.elements());
    store.remove_element(mk_core::ElementId::from_raw(1_000));
    assert_eq!(serialize(store.elements()), before);
}

#[test]
fn resize_through_patch_updates_markup() {
    let mut store = ElementStore::new();
    let id = store.add_element(ElementType::Rectangle);
    let start = store.style(id).map(Geometry::from_style);
    let next = start.map(|g| g.resized(ResizeDirection::TopLeft, -20.0, -20.0, MIN_ELEMENT_SIZE));
    if let Some(next) = next {
        store.update_style(id, &next.to_patch());
    }
    let out = serialize(store.elements());
    assert!(out.contains("width: 120px;"), "{out}");
    assert!(out.contains("height: 120px;"), "{out}");
    assert!(out.contains("top: -20px;"), "{out}");
    assert!(out.contains("left: -20px;"), "{out}");
}

#[test]
fn snapshot_serializes_as_json() {
    let mut store = ElementStore::new();
    let id = store.add_element(ElementType::Text);
    store.update_content(id, "hi");
    store.set_selected(Some(id));
    let json = serde_json::to_value(&store).expect("store snapshot");
    assert_eq!(json["selected"], serde_json::json!(id.raw()));
    assert_eq!(json["elements"][0]["kind"]["type"], "text");
    assert_eq!(json["elements"][0]["kind"]["content"], "hi");
    assert_eq!(json["elements"][0]["style"][2], serde_json::json!(["fontSize", "16px"]));

    let element: Element =
        serde_json::from_value(json["elements"][0].clone()).expect("element roundtrip");
    assert_eq!(Some(&element), store.get(id));
}
