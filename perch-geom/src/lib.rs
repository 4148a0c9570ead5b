pub mod anchor;
pub mod collision;
pub mod layout;
pub mod types;

pub use anchor::resolve;
pub use collision::{
    adjust, arrow_offset, best_fit, compute_position, Candidate, PlacementOptions, PositionResult,
    DEFAULT_OFFSET,
};
pub use layout::{boundary, is_usable, Rect, Viewport};
pub use types::*;
