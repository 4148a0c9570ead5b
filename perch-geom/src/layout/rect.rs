use serde::{Deserialize, Serialize};

use crate::types::{Axis, Edges};

/// Screen-space rectangle in host layout units.
///
/// Immutable value type: every transformation returns a new `Rect`.
/// Negative sizes are stored as given.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub const fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub const fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Get the center point of this rectangle.
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Start coordinate along `axis` (left or top).
    pub const fn start(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// End coordinate along `axis` (right or bottom).
    pub fn end(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.right(),
            Axis::Vertical => self.bottom(),
        }
    }

    /// Extent along `axis` (width or height).
    pub const fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Copy of this rect with its start along `axis` moved to `value`.
    pub const fn with_start(self, axis: Axis, value: f32) -> Self {
        match axis {
            Axis::Horizontal => Self { x: value, ..self },
            Axis::Vertical => Self { y: value, ..self },
        }
    }

    /// Shrink by `edges`. Unlike integer cells, the result may end up with a
    /// negative size when the edges exceed the rect.
    pub fn shrink(self, edges: Edges) -> Self {
        Self {
            x: self.x + edges.left,
            y: self.y + edges.top,
            width: self.width - edges.horizontal_total(),
            height: self.height - edges.vertical_total(),
        }
    }

    /// True when `other` lies fully inside this rect (edges may touch).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }

    /// How far this rect extends past each edge of `boundary`.
    ///
    /// Every component is zero or positive; a rect fully inside the boundary
    /// yields `Edges::default()`.
    pub fn overflow(&self, boundary: &Rect) -> Edges {
        Edges {
            top: (boundary.top() - self.top()).max(0.0),
            right: (self.right() - boundary.right()).max(0.0),
            bottom: (self.bottom() - boundary.bottom()).max(0.0),
            left: (boundary.left() - self.left()).max(0.0),
        }
    }
}
