//! The editor controller.
//!
//! Holds the sync engine and the interaction tools. Every host interaction
//! (pointer, keyboard, panel edits) goes through this struct, which turns
//! it into mutations and keeps the tool state consistent with the store.

use crate::config::EditorConfig;
use crate::input::{InputEvent, PointerTarget};
use crate::panel::{PanelEntry, PanelField, panel_entries};
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use crate::sync::{Mutation, SyncEngine};
use crate::tools::{MoveTool, ResizeEngine, SelectionController, Tool};
use mk_core::guides::guides_excluding;
use mk_core::{Element, ElementId, ElementType, Guide};
use serde::Serialize;

pub struct Editor {
    engine: SyncEngine,
    selection: SelectionController,
    resize: ResizeEngine,
    move_tool: MoveTool,
    /// Text element whose content input has focus.
    editing_text: Option<ElementId>,
}

/// Everything a display collaborator needs to draw one frame.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSnapshot<'a> {
    pub elements: &'a [Element],
    pub selected: Option<ElementId>,
    pub editing_text: Option<ElementId>,
    pub markup: String,
    pub panel: Vec<PanelEntry>,
    pub guides: Vec<Guide>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            engine: SyncEngine::with_config(config),
            selection: SelectionController::new(),
            resize: ResizeEngine::new(),
            move_tool: MoveTool::new(),
            editing_text: None,
        }
    }

    pub fn engine(&self) -> &SyncEngine {
        &self.engine
    }

    pub fn elements(&self) -> &[Element] {
        self.engine.elements()
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.engine.selected()
    }

    pub fn editing_text(&self) -> Option<ElementId> {
        self.editing_text
    }

    pub fn is_resizing(&self) -> bool {
        self.resize.is_active()
    }

    pub fn dragging(&self) -> Option<ElementId> {
        self.move_tool.dragging()
    }

    /// The live markup.
    pub fn markup(&mut self) -> &str {
        self.engine.current_text()
    }

    // ─── Input ───────────────────────────────────────────────────────────

    /// Handle one input event. Returns true if the store changed.
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::PointerDown { target, .. } => self.pointer_down(event, *target),
            InputEvent::PointerMove { .. } => {
                let mutations = if self.resize.is_active() {
                    self.resize.handle(event, self.engine.store())
                } else {
                    self.move_tool.handle(event, self.engine.store())
                };
                self.apply(mutations)
            }
            InputEvent::PointerUp { .. } => {
                self.resize.handle(event, self.engine.store());
                self.move_tool.handle(event, self.engine.store());
                false
            }
            InputEvent::DoubleClick {
                target: PointerTarget::Element(id),
            } => self.edit_text(*id),
            InputEvent::DoubleClick { .. } => false,
            InputEvent::Key { key, modifiers } => {
                if self.editing_text.is_some() {
                    // Keys belong to the focused text input.
                    return false;
                }
                match ShortcutMap::resolve(key, modifiers) {
                    Some(action) => self.dispatch_action(action),
                    None => false,
                }
            }
        }
    }

    fn pointer_down(&mut self, event: &InputEvent, target: PointerTarget) -> bool {
        if let Some(editing) = self.editing_text
            && target != PointerTarget::Element(editing)
        {
            self.finish_text_edit();
        }

        // Handles win over everything underneath them.
        self.resize.handle(event, self.engine.store());
        if self.resize.is_active() {
            return false;
        }

        let mut mutations = self.selection.handle(event, self.engine.store());
        if self.editing_text.is_none() {
            mutations.extend(self.move_tool.handle(event, self.engine.store()));
        }
        self.apply(mutations)
    }

    pub fn dispatch_action(&mut self, action: ShortcutAction) -> bool {
        match action {
            ShortcutAction::AddRectangle => {
                self.add_element(ElementType::Rectangle);
                true
            }
            ShortcutAction::AddText => {
                self.add_element(ElementType::Text);
                true
            }
            ShortcutAction::Delete => self.delete_selected(),
            ShortcutAction::Deselect => {
                let mutations = self.selection.deselect(self.engine.store());
                self.apply(mutations)
            }
        }
    }

    // ─── Element API ─────────────────────────────────────────────────────

    pub fn add_element(&mut self, ty: ElementType) -> ElementId {
        self.engine.add_element(ty)
    }

    /// Remove the selected element. Returns false with no selection.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.engine.selected() else {
            return false;
        };
        self.apply(vec![Mutation::RemoveElement { id }])
    }

    /// Select `id`, or clear the selection.
    pub fn select(&mut self, id: Option<ElementId>) {
        let mutations = match id {
            Some(id) => self.selection.select(id, self.engine.store()),
            None => self.selection.deselect(self.engine.store()),
        };
        self.apply(mutations);
    }

    // ─── Text editing ────────────────────────────────────────────────────

    /// Give the content input of a text element focus. Rectangles and
    /// unknown ids are ignored, and so is everything while a resize runs.
    pub fn edit_text(&mut self, id: ElementId) -> bool {
        if self.resize.is_active() || !self.engine.store().get(id).is_some_and(Element::is_text) {
            return false;
        }
        let mutations = self.selection.select(id, self.engine.store());
        self.apply(mutations);
        self.editing_text = Some(id);
        log::debug!("edit text {id}");
        true
    }

    /// Replace the content of the text element being edited.
    pub fn set_text_content(&mut self, content: &str) -> bool {
        let Some(id) = self.editing_text else {
            return false;
        };
        self.apply(vec![Mutation::SetContent {
            id,
            content: content.to_string(),
        }])
    }

    /// Blur: leave text editing mode.
    pub fn finish_text_edit(&mut self) {
        if let Some(id) = self.editing_text.take() {
            log::debug!("finish text {id}");
        }
    }

    /// What the canvas draws inside an element. Empty text shows the
    /// placeholder; the markup keeps the real, empty content.
    pub fn display_content(&self, id: ElementId) -> Option<&str> {
        let element = self.engine.store().get(id)?;
        if !element.is_text() {
            return None;
        }
        match element.content() {
            "" => Some(self.engine.config().text_placeholder.as_str()),
            content => Some(content),
        }
    }

    // ─── Property panel ──────────────────────────────────────────────────

    /// Panel rows for the selected element; empty with no selection.
    pub fn panel(&self) -> Vec<PanelEntry> {
        self.engine
            .store()
            .selected_element()
            .map(panel_entries)
            .unwrap_or_default()
    }

    /// Apply a panel edit to the selected element. Refused while a resize
    /// is running.
    pub fn edit_field(&mut self, field: PanelField, value: &str) -> bool {
        if self.resize.is_active() {
            return false;
        }
        let Some(element) = self.engine.store().selected_element() else {
            return false;
        };
        if !field.applies_to(element.element_type()) {
            return false;
        }
        let id = element.id;
        self.apply(vec![Mutation::SetStyle {
            id,
            patch: field.patch(value),
        }])
    }

    // ─── Display ─────────────────────────────────────────────────────────

    /// Alignment guides from every element except the one being dragged.
    /// Empty when nothing is being dragged.
    pub fn guides(&self) -> Vec<Guide> {
        match self.move_tool.dragging() {
            Some(id) => guides_excluding(self.engine.elements(), id),
            None => vec![],
        }
    }

    pub fn snapshot(&mut self) -> EditorSnapshot<'_> {
        let markup = self.engine.current_text().to_string();
        EditorSnapshot {
            elements: self.engine.elements(),
            selected: self.engine.selected(),
            editing_text: self.editing_text,
            markup,
            panel: self.panel(),
            guides: self.guides(),
        }
    }

    pub fn snapshot_json(&mut self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.snapshot())
    }

    // ─── Internal ────────────────────────────────────────────────────────

    fn apply(&mut self, mutations: Vec<Mutation>) -> bool {
        if mutations.is_empty() {
            return false;
        }
        let changes_markup = mutations
            .iter()
            .any(|m| !matches!(m, Mutation::Select { .. }));
        self.engine.apply_all(mutations);
        if let Some(id) = self.editing_text
            && !self.engine.store().contains(id)
        {
            self.editing_text = None;
        }
        if let Some(id) = self.move_tool.dragging()
            && !self.engine.store().contains(id)
        {
            self.move_tool.cancel();
        }
        changes_markup
    }
}
