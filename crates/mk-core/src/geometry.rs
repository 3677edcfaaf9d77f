//! Direct geometry: `width`, `height`, `top`, `left` in pixels.
//!
//! There is no layout solver; an element's box is exactly what its style
//! says. Resize math works on the numeric part of those four properties
//! and writes them back as `px` lengths.

use crate::model::{Length, StyleKey, StyleMap};
use crate::style::StylePatch;
use serde::{Deserialize, Serialize};

/// Smallest width or height a resize can produce.
pub const MIN_ELEMENT_SIZE: f32 = 50.0;

/// Size assumed when `width`/`height` are missing or unparseable.
pub const DEFAULT_ELEMENT_SIZE: f32 = 100.0;

/// Which handle is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeDirection {
    Right,
    Left,
    Bottom,
    Top,
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

impl ResizeDirection {
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::Right,
        ResizeDirection::Bottom,
        ResizeDirection::Left,
        ResizeDirection::Top,
        ResizeDirection::BottomRight,
        ResizeDirection::BottomLeft,
        ResizeDirection::TopLeft,
        ResizeDirection::TopRight,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "right" => ResizeDirection::Right,
            "left" => ResizeDirection::Left,
            "bottom" => ResizeDirection::Bottom,
            "top" => ResizeDirection::Top,
            "bottom-right" => ResizeDirection::BottomRight,
            "bottom-left" => ResizeDirection::BottomLeft,
            "top-right" => ResizeDirection::TopRight,
            "top-left" => ResizeDirection::TopLeft,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            ResizeDirection::Right => "right",
            ResizeDirection::Left => "left",
            ResizeDirection::Bottom => "bottom",
            ResizeDirection::Top => "top",
            ResizeDirection::BottomRight => "bottom-right",
            ResizeDirection::BottomLeft => "bottom-left",
            ResizeDirection::TopRight => "top-right",
            ResizeDirection::TopLeft => "top-left",
        }
    }

    fn moves_left_edge(self) -> bool {
        matches!(
            self,
            ResizeDirection::Left | ResizeDirection::BottomLeft | ResizeDirection::TopLeft
        )
    }

    fn moves_right_edge(self) -> bool {
        matches!(
            self,
            ResizeDirection::Right | ResizeDirection::BottomRight | ResizeDirection::TopRight
        )
    }

    fn moves_top_edge(self) -> bool {
        matches!(
            self,
            ResizeDirection::Top | ResizeDirection::TopRight | ResizeDirection::TopLeft
        )
    }

    fn moves_bottom_edge(self) -> bool {
        matches!(
            self,
            ResizeDirection::Bottom | ResizeDirection::BottomRight | ResizeDirection::BottomLeft
        )
    }
}

/// An element's box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub width: f32,
    pub height: f32,
    pub top: f32,
    pub left: f32,
}

impl Geometry {
    /// Read the box from a style, defaulting missing or unparseable sizes to
    /// 100 and positions to 0.
    pub fn from_style(style: &StyleMap) -> Self {
        Self {
            width: style
                .number(&StyleKey::Width)
                .unwrap_or(DEFAULT_ELEMENT_SIZE),
            height: style
                .number(&StyleKey::Height)
                .unwrap_or(DEFAULT_ELEMENT_SIZE),
            top: style.number(&StyleKey::Top).unwrap_or(0.0),
            left: style.number(&StyleKey::Left).unwrap_or(0.0),
        }
    }

    /// Apply an incremental pointer delta to the given handle.
    ///
    /// Sizes are floored at `min_size`. Positions follow the unclamped
    /// delta, so the dragged edge keeps tracking the pointer.
    #[must_use]
    pub fn resized(self, direction: ResizeDirection, dx: f32, dy: f32, min_size: f32) -> Self {
        let mut next = self;
        if direction.moves_right_edge() {
            next.width = (self.width + dx).max(min_size);
        }
        if direction.moves_left_edge() {
            next.width = (self.width - dx).max(min_size);
            next.left = self.left + dx;
        }
        if direction.moves_bottom_edge() {
            next.height = (self.height + dy).max(min_size);
        }
        if direction.moves_top_edge() {
            next.height = (self.height - dy).max(min_size);
            next.top = self.top + dy;
        }
        next
    }

    /// Offset the box without changing its size.
    #[must_use]
    pub fn translated(self, dx: f32, dy: f32) -> Self {
        Self {
            top: self.top + dy,
            left: self.left + dx,
            ..self
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.top + self.height / 2.0
    }

    /// All four properties as a style patch, in `width, height, top, left`
    /// order.
    pub fn to_patch(&self) -> StylePatch {
        let mut patch = StylePatch::new();
        patch.set(StyleKey::Width, Length::px(self.width).to_string());
        patch.set(StyleKey::Height, Length::px(self.height).to_string());
        patch.set(StyleKey::Top, Length::px(self.top).to_string());
        patch.set(StyleKey::Left, Length::px(self.left).to_string());
        patch
    }

    /// Only the position, for moves.
    pub fn position_patch(&self) -> StylePatch {
        let mut patch = StylePatch::new();
        patch.set(StyleKey::Top, Length::px(self.top).to_string());
        patch.set(StyleKey::Left, Length::px(self.left).to_string());
        patch
    }
}
