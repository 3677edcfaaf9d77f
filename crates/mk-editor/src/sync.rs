//! Sync engine: element store → live markup.
//!
//! Tools and the property panel describe changes as [`Mutation`]s. The
//! engine applies them to the store and marks the markup dirty; the text
//! is re-emitted lazily the next time someone asks for it, so a burst of
//! pointer moves costs one serialization.

use crate::config::EditorConfig;
use mk_core::emitter::serialize;
use mk_core::{Element, ElementId, ElementStore, ElementType, Geometry, ResizeDirection, StylePatch};

/// A change to the element store.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    RemoveElement {
        id: ElementId,
    },
    SetStyle {
        id: ElementId,
        patch: StylePatch,
    },
    SetContent {
        id: ElementId,
        content: String,
    },
    Select {
        id: Option<ElementId>,
    },
    /// Incremental handle drag; geometry is recomputed from the current
    /// style.
    Resize {
        id: ElementId,
        direction: ResizeDirection,
        dx: f32,
        dy: f32,
    },
    /// Incremental body drag.
    Move {
        id: ElementId,
        dx: f32,
        dy: f32,
    },
}

/// Holds the authoritative element store and the markup derived from it.
pub struct SyncEngine {
    store: ElementStore,
    text: String,
    text_dirty: bool,
    config: EditorConfig,
}

impl Default for SyncEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SyncEngine {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            store: ElementStore::new(),
            text: String::new(),
            text_dirty: false,
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn add_element(&mut self, ty: ElementType) -> ElementId {
        let id = self.store.add_element(ty);
        self.text_dirty = true;
        id
    }

    /// Apply one mutation. Mutations addressed at missing elements are
    /// dropped.
    pub fn apply_mutation(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::RemoveElement { id } => {
                if self.store.remove_element(id).is_some() {
                    self.text_dirty = true;
                }
            }
            Mutation::SetStyle { id, patch } => {
                if self.store.contains(id) {
                    self.store.update_style(id, &patch);
                    self.text_dirty = true;
                }
            }
            Mutation::SetContent { id, content } => {
                if self.store.update_content(id, &content) {
                    self.text_dirty = true;
                }
            }
            Mutation::Select { id } => {
                // Selection is not part of the markup.
                self.store.set_selected(id);
            }
            Mutation::Resize {
                id,
                direction,
                dx,
                dy,
            } => {
                if let Some(style) = self.store.style(id) {
                    let next = Geometry::from_style(style).resized(
                        direction,
                        dx,
                        dy,
                        self.config.min_size,
                    );
                    log::trace!("resize {id} {} -> {next:?}", direction.name());
                    self.store.update_style(id, &next.to_patch());
                    self.text_dirty = true;
                }
            }
            Mutation::Move { id, dx, dy } => {
                if let Some(style) = self.store.style(id) {
                    let next = Geometry::from_style(style).translated(dx, dy);
                    log::trace!("move {id} -> ({}, {})", next.left, next.top);
                    self.store.update_style(id, &next.position_patch());
                    self.text_dirty = true;
                }
            }
        }
    }

    pub fn apply_all(&mut self, mutations: impl IntoIterator<Item = Mutation>) {
        for mutation in mutations {
            self.apply_mutation(mutation);
        }
    }

    /// Re-emit the markup if the store changed since the last emit.
    pub fn flush_to_text(&mut self) {
        if self.text_dirty {
            self.text = serialize(self.store.elements());
            self.text_dirty = false;
            log::trace!("re-emit {} bytes", self.text.len());
        }
    }

    pub fn current_text(&mut self) -> &str {
        self.flush_to_text();
        &self.text
    }

    pub fn store(&self) -> &ElementStore {
        &self.store
    }

    pub fn elements(&self) -> &[Element] {
        self.store.elements()
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.store.selected()
    }
}
