//! Input abstraction layer.
//!
//! The host (a webview, a native window) does the hit testing and hands
//! over pointer events already tagged with what was under the pointer.

use mk_core::{ElementId, ResizeDirection};

/// Keyboard modifier state at the time of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Ctrl or ⌘ held.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The body of an element.
    Element(ElementId),
    /// One of the resize handles drawn around the selected element.
    ResizeHandle(ResizeDirection),
    /// Empty canvas surface.
    Canvas,
    /// The property panel.
    Panel,
    /// Anywhere outside both the canvas and the panel.
    Outside,
}

/// A normalized input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown {
        x: f32,
        y: f32,
        target: PointerTarget,
    },
    /// Only the latest position matters; hosts may coalesce moves.
    PointerMove { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    DoubleClick { target: PointerTarget },
    Key { key: String, modifiers: Modifiers },
}

impl InputEvent {
    pub fn pointer_down(x: f32, y: f32, target: PointerTarget) -> Self {
        Self::PointerDown { x, y, target }
    }

    pub fn pointer_move(x: f32, y: f32) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn pointer_up(x: f32, y: f32) -> Self {
        Self::PointerUp { x, y }
    }

    pub fn key(key: &str) -> Self {
        Self::Key {
            key: key.to_string(),
            modifiers: Modifiers::NONE,
        }
    }

    /// Extract position if this is a pointer event.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Self::PointerDown { x, y, .. } | Self::PointerMove { x, y } | Self::PointerUp { x, y } => {
                Some((*x, *y))
            }
            _ => None,
        }
    }
}
