//! Anchor resolver: places content next to a trigger.
//!
//! The result is only a candidate. It may extend past the boundary; the
//! collision engine decides what to do about that.

use crate::layout::Rect;
use crate::types::{Alignment, Axis, Side};

/// Position `content` adjacent to `trigger` on `side`, pushed `offset` units
/// away from the trigger and aligned on the cross axis per `alignment`.
///
/// Only the size of `content` is used; its origin is ignored.
pub fn resolve(
    trigger: Rect,
    content: Rect,
    side: Side,
    alignment: Alignment,
    offset: f32,
) -> Rect {
    let primary = match side {
        Side::Bottom => trigger.bottom() + offset,
        Side::Top => trigger.top() - offset - content.height,
        Side::Right => trigger.right() + offset,
        Side::Left => trigger.left() - offset - content.width,
    };

    let cross_axis = side.axis().cross();
    let cross = align(trigger, content, cross_axis, alignment);

    match side.axis() {
        Axis::Vertical => Rect::new(cross, primary, content.width, content.height),
        Axis::Horizontal => Rect::new(primary, cross, content.width, content.height),
    }
}

fn align(trigger: Rect, content: Rect, axis: Axis, alignment: Alignment) -> f32 {
    match alignment {
        Alignment::Start => trigger.start(axis),
        Alignment::Center => {
            trigger.start(axis) + trigger.extent(axis) / 2.0 - content.extent(axis) / 2.0
        }
        Alignment::End => trigger.end(axis) - content.extent(axis),
    }
}
