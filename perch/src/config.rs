//! Controller configuration.

use std::time::Duration;

use perch_geom::{Edges, Placement, PlacementOptions};
use thiserror::Error;

/// Default number of recomputation frames per second.
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Per-overlay configuration for a [`PositionController`](crate::PositionController).
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerConfig {
    /// Placement policy handed to the collision engine.
    pub placement: PlacementOptions,

    /// Space reserved at the viewport edges (safe areas, screen margin).
    pub insets: Edges,

    /// Upper bound on recomputations per second.
    pub frame_rate: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            placement: PlacementOptions::default(),
            insets: Edges::default(),
            frame_rate: DEFAULT_FRAME_RATE,
        }
    }
}

impl ControllerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preferred placement.
    ///
    /// The fallback order is reset to the default order for `placement`.
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement.preferred = placement;
        self.placement.fallback_order = placement.default_fallbacks();
        self
    }

    /// Replace the fallback order.
    pub fn fallback_order(mut self, order: impl IntoIterator<Item = Placement>) -> Self {
        self.placement = self.placement.fallback_order(order);
        self
    }

    pub fn offset(mut self, offset: f32) -> Self {
        self.placement.offset = offset;
        self
    }

    pub fn flip(mut self, enabled: bool) -> Self {
        self.placement.flip = enabled;
        self
    }

    pub fn slide(mut self, enabled: bool) -> Self {
        self.placement.slide = enabled;
        self
    }

    pub fn insets(mut self, insets: Edges) -> Self {
        self.insets = insets;
        self
    }

    pub fn frame_rate(mut self, fps: u32) -> Self {
        self.frame_rate = fps;
        self
    }

    /// Length of one frame at the configured rate.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.frame_rate.max(1) as f64)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_placement(&self.placement)?;
        validate_insets(self.insets)?;
        if self.frame_rate == 0 {
            return Err(ConfigError::InvalidFrameRate);
        }
        Ok(())
    }
}

pub(crate) fn validate_placement(options: &PlacementOptions) -> Result<(), ConfigError> {
    if !options.offset.is_finite() {
        return Err(ConfigError::InvalidOffset(options.offset));
    }
    Ok(())
}

pub(crate) fn validate_insets(insets: Edges) -> Result<(), ConfigError> {
    let values = [insets.top, insets.right, insets.bottom, insets.left];
    if values.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return Err(ConfigError::InvalidInsets(insets));
    }
    Ok(())
}

/// Errors for configuration rejected by the controller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Offset must be a finite number, got {0}")]
    InvalidOffset(f32),

    #[error("Insets must be finite and non-negative, got {0:?}")]
    InvalidInsets(Edges),

    #[error("Frame rate must be at least 1")]
    InvalidFrameRate,
}
