//! Tool system for canvas interactions.
//!
//! Each tool reads the store, interprets input events, and returns
//! `Mutation`s for the `SyncEngine` to apply. Tools never write to the
//! store themselves.
//!
//! | Tool | Pointer down | Pointer move | Pointer up |
//! |------|--------------|--------------|------------|
//! | **Select** | element → select, outside → deselect | — | — |
//! | **Move** | element → start drag | offset `top`/`left` | end |
//! | **Resize** | handle → begin | resize selected | end |

use crate::input::{InputEvent, PointerTarget};
use crate::sync::Mutation;
use mk_core::{ElementId, ElementStore, ResizeDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    Select,
    Move,
    Resize,
}

/// Trait for tools that handle input and produce mutations.
pub trait Tool {
    fn kind(&self) -> ToolKind;

    /// Handle an input event, returning zero or more mutations.
    fn handle(&mut self, event: &InputEvent, store: &ElementStore) -> Vec<Mutation>;
}

// ─── Selection ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Selected(ElementId),
}

/// Drives the selection. The store's `selected` id is the only record of
/// it; the controller decides transitions and reads its state from there.
#[derive(Debug, Default)]
pub struct SelectionController;

impl SelectionController {
    pub fn new() -> Self {
        Self
    }

    pub fn state(&self, store: &ElementStore) -> SelectionState {
        match store.selected() {
            Some(id) => SelectionState::Selected(id),
            None => SelectionState::Idle,
        }
    }

    /// Select `id` if it exists. Switching between elements goes straight
    /// from one `Selected` to the next.
    pub fn select(&self, id: ElementId, store: &ElementStore) -> Vec<Mutation> {
        if !store.contains(id) || store.selected() == Some(id) {
            return vec![];
        }
        vec![Mutation::Select { id: Some(id) }]
    }

    pub fn deselect(&self, store: &ElementStore) -> Vec<Mutation> {
        if store.selected().is_none() {
            return vec![];
        }
        vec![Mutation::Select { id: None }]
    }
}

impl Tool for SelectionController {
    fn kind(&self) -> ToolKind {
        ToolKind::Select
    }

    fn handle(&mut self, event: &InputEvent, store: &ElementStore) -> Vec<Mutation> {
        match event {
            InputEvent::PointerDown { target, .. } => match target {
                PointerTarget::Element(id) => self.select(*id, store),
                PointerTarget::Outside => self.deselect(store),
                // Empty canvas, the panel, and handles keep the selection.
                PointerTarget::Canvas | PointerTarget::Panel | PointerTarget::ResizeHandle(_) => {
                    vec![]
                }
            },
            _ => vec![],
        }
    }
}

// ─── Resize ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ResizeState {
    #[default]
    Inactive,
    Active {
        /// The element selected when the resize began.
        target: ElementId,
        direction: ResizeDirection,
        anchor_x: f32,
        anchor_y: f32,
    },
}

/// Turns handle drags into incremental resizes of the selected element.
#[derive(Debug, Default)]
pub struct ResizeEngine {
    state: ResizeState,
}

impl ResizeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ResizeState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, ResizeState::Active { .. })
    }

    /// Start resizing the selected element. Returns `false` when there is
    /// no selection or a resize is already running.
    pub fn begin(&mut self, store: &ElementStore, direction: ResizeDirection, x: f32, y: f32) -> bool {
        if self.is_active() {
            return false;
        }
        let Some(target) = store.selected() else {
            return false;
        };
        self.state = ResizeState::Active {
            target,
            direction,
            anchor_x: x,
            anchor_y: y,
        };
        true
    }

    /// Resize by the delta since the last step and move the anchor to the
    /// pointer. Only the element the resize began on is touched, and only
    /// while it is still the selected one.
    pub fn step(&mut self, store: &ElementStore, x: f32, y: f32) -> Option<Mutation> {
        let ResizeState::Active {
            target,
            direction,
            anchor_x,
            anchor_y,
        } = self.state
        else {
            return None;
        };
        if store.selected() != Some(target) {
            return None;
        }
        self.state = ResizeState::Active {
            target,
            direction,
            anchor_x: x,
            anchor_y: y,
        };
        Some(Mutation::Resize {
            id: target,
            direction,
            dx: x - anchor_x,
            dy: y - anchor_y,
        })
    }

    pub fn end(&mut self) {
        self.state = ResizeState::Inactive;
    }
}

impl Tool for ResizeEngine {
    fn kind(&self) -> ToolKind {
        ToolKind::Resize
    }

    fn handle(&mut self, event: &InputEvent, store: &ElementStore) -> Vec<Mutation> {
        match event {
            InputEvent::PointerDown {
                x,
                y,
                target: PointerTarget::ResizeHandle(direction),
            } => {
                self.begin(store, *direction, *x, *y);
                vec![]
            }
            InputEvent::PointerMove { x, y } => self.step(store, *x, *y).into_iter().collect(),
            InputEvent::PointerUp { .. } => {
                self.end();
                vec![]
            }
            _ => vec![],
        }
    }
}

// ─── Move ────────────────────────────────────────────────────────────────

/// Drags an element body around the canvas.
#[derive(Debug, Default)]
pub struct MoveTool {
    dragging: Option<ElementId>,
    last_x: f32,
    last_y: f32,
}

impl MoveTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// The element being dragged, if any.
    pub fn dragging(&self) -> Option<ElementId> {
        self.dragging
    }

    /// Drop the drag without emitting anything.
    pub fn cancel(&mut self) {
        self.dragging = None;
    }
}

impl Tool for MoveTool {
    fn kind(&self) -> ToolKind {
        ToolKind::Move
    }

    fn handle(&mut self, event: &InputEvent, store: &ElementStore) -> Vec<Mutation> {
        match event {
            InputEvent::PointerDown {
                x,
                y,
                target: PointerTarget::Element(id),
            } if store.contains(*id) => {
                self.dragging = Some(*id);
                self.last_x = *x;
                self.last_y = *y;
                vec![]
            }
            InputEvent::PointerMove { x, y } => {
                let Some(id) = self.dragging.filter(|id| store.contains(*id)) else {
                    return vec![];
                };
                let dx = x - self.last_x;
                let dy = y - self.last_y;
                self.last_x = *x;
                self.last_y = *y;
                if dx == 0.0 && dy == 0.0 {
                    return vec![];
                }
                vec![Mutation::Move { id, dx, dy }]
            }
            InputEvent::PointerUp { .. } => {
                self.dragging = None;
                vec![]
            }
            _ => vec![],
        }
    }
}
