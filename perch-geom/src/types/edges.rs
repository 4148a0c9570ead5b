use serde::{Deserialize, Serialize};

use super::Side;

/// Per-edge amounts: insets reserved from a viewport, or overflow past a
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Edges {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Edges {
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Amount on the edge facing `side`.
    pub const fn get(&self, side: Side) -> f32 {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    pub fn horizontal_total(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical_total(&self) -> f32 {
        self.top + self.bottom
    }

    pub fn total(&self) -> f32 {
        self.horizontal_total() + self.vertical_total()
    }
}
