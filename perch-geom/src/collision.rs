//! Collision handling: flip, fallback and slide.
//!
//! Everything here is a pure function of its inputs. Calling [`adjust`] twice
//! with the same arguments yields the same [`PositionResult`].

use log::trace;
use serde::{Deserialize, Serialize};

use crate::anchor::resolve;
use crate::layout::Rect;
use crate::types::{Alignment, Axis, Placement, Side};

/// Default gap between trigger and content.
pub const DEFAULT_OFFSET: f32 = 8.0;

/// Placement policy for one anchored element.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementOptions {
    /// Placement tried first.
    pub preferred: Placement,
    /// Alternatives evaluated in order once the preferred side overflows.
    pub fallback_order: Vec<Placement>,
    /// Gap between trigger and content along the primary axis.
    pub offset: f32,
    /// Allow switching sides when the preferred side overflows.
    pub flip: bool,
    /// Allow translating along the cross axis to stay inside the boundary.
    pub slide: bool,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self::new(Placement::bottom())
    }
}

impl PlacementOptions {
    /// Options for `preferred` with its default fallback order.
    pub fn new(preferred: Placement) -> Self {
        Self {
            preferred,
            fallback_order: preferred.default_fallbacks(),
            offset: DEFAULT_OFFSET,
            flip: true,
            slide: true,
        }
    }

    pub fn offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    pub fn fallback_order(mut self, order: impl IntoIterator<Item = Placement>) -> Self {
        self.fallback_order = order.into_iter().collect();
        self
    }

    pub fn flip(mut self, enabled: bool) -> Self {
        self.flip = enabled;
        self
    }

    pub fn slide(mut self, enabled: bool) -> Self {
        self.slide = enabled;
        self
    }
}

/// Final output of one resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionResult {
    /// Left edge of the content.
    pub x: f32,
    /// Top edge of the content.
    pub y: f32,
    /// Side actually used.
    pub side: Side,
    /// Alignment actually used.
    pub alignment: Alignment,
    /// True when `side` differs from the preferred side.
    pub did_flip: bool,
}

impl PositionResult {
    pub const fn placement(&self) -> Placement {
        Placement::new(self.side, self.alignment)
    }

    /// The content rectangle at the resolved position.
    pub const fn rect(&self, content: Rect) -> Rect {
        Rect::new(self.x, self.y, content.width, content.height)
    }
}

/// A placement together with its resolved rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub placement: Placement,
    pub rect: Rect,
}

impl Candidate {
    pub fn resolve(placement: Placement, trigger: Rect, content: Rect, offset: f32) -> Self {
        Self {
            placement,
            rect: resolve(
                trigger,
                content,
                placement.side,
                placement.alignment,
                offset,
            ),
        }
    }

    /// Overflow past the boundary edge the content is being pushed toward.
    pub fn primary_overflow(&self, boundary: &Rect) -> f32 {
        self.rect.overflow(boundary).get(self.placement.side)
    }

    /// Overflow summed over all four edges.
    pub fn total_overflow(&self, boundary: &Rect) -> f32 {
        self.rect.overflow(boundary).total()
    }

    fn into_result(self, did_flip: bool) -> PositionResult {
        PositionResult {
            x: self.rect.x,
            y: self.rect.y,
            side: self.placement.side,
            alignment: self.placement.alignment,
            did_flip,
        }
    }
}

/// Index of the candidate with the least total overflow.
///
/// Ties go to the earliest candidate. Returns `None` for an empty slice.
pub fn best_fit(candidates: &[Candidate], boundary: &Rect) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let overflow = candidate.total_overflow(boundary);
        match best {
            Some((_, least)) if overflow >= least => {}
            _ => best = Some((index, overflow)),
        }
    }
    best.map(|(index, _)| index)
}

/// Validate `candidate` (the resolved preferred placement) against `boundary`
/// and flip, fall back or slide as `options` allow.
///
/// Never fails: when nothing fits, the least-overflowing placement is used
/// and the residual overflow is accepted.
pub fn adjust(
    candidate: Rect,
    boundary: Rect,
    trigger: Rect,
    content: Rect,
    options: &PlacementOptions,
) -> PositionResult {
    let preferred = Candidate {
        placement: options.preferred,
        rect: candidate,
    };

    // Fits as is: nothing to flip or slide
    if boundary.contains_rect(&candidate) {
        return preferred.into_result(false);
    }

    let chosen = if !options.flip || preferred.primary_overflow(&boundary) <= 0.0 {
        preferred
    } else {
        choose_alternative(preferred, &boundary, trigger, content, options)
    };

    let rect = if options.slide {
        slide(chosen.rect, &boundary, chosen.placement.side.axis().cross())
    } else {
        chosen.rect
    };

    let did_flip = chosen.placement.side != options.preferred.side;
    if did_flip {
        trace!(
            "Placement {} overflowed, using {}",
            options.preferred,
            chosen.placement
        );
    }

    Candidate { rect, ..chosen }.into_result(did_flip)
}

/// Resolve the preferred placement and run it through [`adjust`].
pub fn compute_position(
    trigger: Rect,
    content: Rect,
    boundary: Rect,
    options: &PlacementOptions,
) -> PositionResult {
    let preferred = options.preferred;
    let candidate = resolve(
        trigger,
        content,
        preferred.side,
        preferred.alignment,
        options.offset,
    );
    adjust(candidate, boundary, trigger, content, options)
}

/// Distance from the content's cross-axis start to the trigger's center,
/// clamped into the content. Used to point a caret at the trigger.
pub fn arrow_offset(result: &PositionResult, trigger: Rect, content: Rect) -> f32 {
    let axis = result.side.axis().cross();
    let rect = result.rect(content);
    let (center_x, center_y) = trigger.center();
    let center = match axis {
        Axis::Horizontal => center_x,
        Axis::Vertical => center_y,
    };
    (center - rect.start(axis))
        .max(0.0)
        .min(rect.extent(axis).max(0.0))
}

fn choose_alternative(
    preferred: Candidate,
    boundary: &Rect,
    trigger: Rect,
    content: Rect,
    options: &PlacementOptions,
) -> Candidate {
    let flipped = Candidate::resolve(
        preferred.placement.flipped(),
        trigger,
        content,
        options.offset,
    );
    if flipped.primary_overflow(boundary) <= 0.0 {
        return flipped;
    }

    let fallbacks: Vec<Candidate> = options
        .fallback_order
        .iter()
        .map(|&placement| Candidate::resolve(placement, trigger, content, options.offset))
        .collect();

    if let Some(fits) = fallbacks
        .iter()
        .find(|candidate| candidate.primary_overflow(boundary) <= 0.0)
    {
        return *fits;
    }

    let mut pool = Vec::with_capacity(fallbacks.len() + 1);
    pool.push(preferred);
    pool.extend(fallbacks);
    best_fit(&pool, boundary)
        .map(|index| pool[index])
        .unwrap_or(preferred)
}

/// Move `rect` along `axis` by the least amount that keeps it inside
/// `boundary`. Content larger than the boundary is pinned to its start.
fn slide(rect: Rect, boundary: &Rect, axis: Axis) -> Rect {
    let extent = rect.extent(axis);
    let min = boundary.start(axis);

    let start = if extent > boundary.extent(axis) {
        min
    } else {
        let max = boundary.end(axis) - extent;
        rect.start(axis).max(min).min(max)
    };

    rect.with_start(axis, start)
}
