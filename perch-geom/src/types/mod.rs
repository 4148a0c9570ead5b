mod edges;
mod enums;

pub use edges::Edges;
pub use enums::{Alignment, Axis, ParsePlacementError, Placement, Side};
