//! Screen-space geometry and the usable-area (boundary) model.

mod rect;

pub use rect::Rect;

use serde::{Deserialize, Serialize};

use crate::types::Edges;

/// Raw size of the host window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Usable area of `viewport` once `insets` (safe areas, screen-edge margins)
/// are reserved.
pub fn boundary(viewport: Viewport, insets: Edges) -> Rect {
    Rect::from_size(viewport.width, viewport.height).shrink(insets)
}

/// Whether a boundary has a positive, finite area to position against.
pub fn is_usable(boundary: &Rect) -> bool {
    boundary.x.is_finite()
        && boundary.y.is_finite()
        && boundary.width.is_finite()
        && boundary.height.is_finite()
        && !boundary.is_empty()
}
