//! Smart guides: edge and center lines of every element, for snapping
//! feedback while dragging.

use crate::geometry::Geometry;
use crate::id::ElementId;
use crate::model::Element;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideAxis {
    /// A vertical line at some x.
    Vertical,
    /// A horizontal line at some y.
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Guide {
    pub axis: GuideAxis,
    pub position: f32,
    /// The element the line was taken from.
    pub source: ElementId,
}

/// Guides for every element, in store order: horizontal center, vertical
/// center, then left, right, top and bottom edges.
pub fn guides(elements: &[Element]) -> Vec<Guide> {
    let mut out = Vec::with_capacity(elements.len() * 6);
    for element in elements {
        let b = Geometry::from_style(&element.style);
        let source = element.id;
        let line = |axis, position| Guide {
            axis,
            position,
            source,
        };
        out.push(line(GuideAxis::Vertical, b.center_x()));
        out.push(line(GuideAxis::Horizontal, b.center_y()));
        out.push(line(GuideAxis::Vertical, b.left));
        out.push(line(GuideAxis::Vertical, b.right()));
        out.push(line(GuideAxis::Horizontal, b.top));
        out.push(line(GuideAxis::Horizontal, b.bottom()));
    }
    out
}

/// Guides from every element except `moving`, so a dragged element does
/// not snap to itself.
pub fn guides_excluding(elements: &[Element], moving: ElementId) -> Vec<Guide> {
    guides(elements)
        .into_iter()
        .filter(|g| g.source != moving)
        .collect()
}
