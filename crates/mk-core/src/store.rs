//! The ordered element collection.
//!
//! Selection lives here as a single optional id rather than a flag per
//! element, so "at most one selected" holds by construction.

use crate::id::{ElementId, IdAllocator};
use crate::model::{Element, ElementKind, ElementType, StyleMap};
use crate::style::{StylePatch, default_style, merge};
use serde::Serialize;

/// Snapshots serialize for display collaborators; the id counter is
/// private to the live store.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ElementStore {
    elements: Vec<Element>,
    selected: Option<ElementId>,
    #[serde(skip)]
    ids: IdAllocator,
}

impl ElementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new element with the default style for `ty`.
    pub fn add_element(&mut self, ty: ElementType) -> ElementId {
        let id = self.ids.next_id();
        self.elements.push(Element {
            id,
            kind: ElementKind::new(ty),
            style: default_style(ty),
        });
        log::debug!("add {ty:?} {id}");
        id
    }

    /// Remove an element. Absent ids are ignored. Removing the selected
    /// element clears the selection.
    pub fn remove_element(&mut self, id: ElementId) -> Option<Element> {
        let pos = self.position(id)?;
        if self.selected == Some(id) {
            self.selected = None;
        }
        log::debug!("remove {id}");
        Some(self.elements.remove(pos))
    }

    /// Merge `patch` into the element's style. No-op for absent ids.
    pub fn update_style(&mut self, id: ElementId, patch: &StylePatch) {
        if let Some(element) = self.get_mut(id) {
            element.style = merge(&element.style, patch);
        }
    }

    /// Replace the content of a text element. Rectangles and absent ids
    /// are left alone. Returns whether anything changed.
    pub fn update_content(&mut self, id: ElementId, text: &str) -> bool {
        match self.get_mut(id).map(|element| &mut element.kind) {
            Some(ElementKind::Text { content }) => {
                if *content == text {
                    return false;
                }
                *content = text.to_string();
                true
            }
            _ => false,
        }
    }

    /// Select exactly `id`, or nothing. Selecting an absent id clears the
    /// selection.
    pub fn set_selected(&mut self, id: Option<ElementId>) {
        let next = id.filter(|id| self.contains(*id));
        if next != self.selected {
            log::debug!("select {next:?}");
        }
        self.selected = next;
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Derived per-element view of the selection.
    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected == Some(id)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    pub fn style(&self, id: ElementId) -> Option<&StyleMap> {
        self.get(id).map(|e| &e.style)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.position(id).is_some()
    }

    fn position(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    /// Elements in store (paint and emit) order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StyleKey;

    #[test]
    fn add_appends_in_order_with_unique_ids() {
        let mut store = ElementStore::new();
        let a = store.add_element(ElementType::Rectangle);
        let b = store.add_element(ElementType::Text);
        assert_ne!(a, b);
        let ids: Vec<_> = store.elements().iter().map(|e| e.id).collect();
        assert_eq!(ids, [a, b]);
        assert!(!store.is_selected(a));
        assert_eq!(store.get(b).map(Element::content), Some(""));
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut store = ElementStore::new();
        let a = store.add_element(ElementType::Rectangle);
        store.remove_element(a);
        let b = store.add_element(ElementType::Rectangle);
        assert_ne!(a, b);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut store = ElementStore::new();
        let a = store.add_element(ElementType::Rectangle);
        assert!(store.remove_element(ElementId::from_raw(99)).is_none());
        assert_eq!(store.len(), 1);
        assert!(store.contains(a));
    }

    #[test]
    fn removing_selected_clears_selection() {
        let mut store = ElementStore::new();
        let a = store.add_element(ElementType::Rectangle);
        store.set_selected(Some(a));
        store.remove_element(a);
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn selection_is_exclusive() {
        let mut store = ElementStore::new();
        let a = store.add_element(ElementType::Rectangle);
        let b = store.add_element(ElementType::Rectangle);
        store.set_selected(Some(a));
        store.set_selected(Some(b));
        assert!(!store.is_selected(a));
        assert!(store.is_selected(b));
        store.set_selected(None);
        assert!(!store.is_selected(b));
    }

    #[test]
    fn selecting_absent_id_clears() {
        let mut store = ElementStore::new();
        let a = store.add_element(ElementType::Rectangle);
        store.set_selected(Some(a));
        store.set_selected(Some(ElementId::from_raw(42)));
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn update_style_on_absent_id_is_noop() {
        let mut store = ElementStore::new();
        store.update_style(ElementId::from_raw(3), &StylePatch::single("width", "1px"));
        assert!(store.is_empty());
    }

    #[test]
    fn update_style_merges() {
        let mut store = ElementStore::new();
        let a = store.add_element(ElementType::Rectangle);
        store.update_style(a, &StylePatch::single("border-width", "3px"));
        let border = store
            .style(a)
            .and_then(|s| s.get(&StyleKey::Border))
            .map(ToString::to_string);
        assert_eq!(border.as_deref(), Some("3px solid #000000"));
    }

    #[test]
    fn content_only_changes_for_text() {
        let mut store = ElementStore::new();
        let rect = store.add_element(ElementType::Rectangle);
        let text = store.add_element(ElementType::Text);
        assert!(!store.update_content(rect, "nope"));
        assert!(store.update_content(text, "hello"));
        assert_eq!(store.get(rect).map(Element::content), Some(""));
        assert_eq!(store.get(text).map(Element::content), Some("hello"));
    }
}
