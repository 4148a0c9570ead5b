//! Anchored-overlay positioning.
//!
//! [`perch_geom`] holds the pure geometry (resolver and collision engine);
//! this crate adds the stateful side: a [`PositionController`] per overlay
//! and a [`FrameDriver`] that recomputes at most once per frame.
//!
//! ```ignore
//! let (controller, wakeups) = PositionController::new(ControllerConfig::new())?;
//! let driver = FrameDriver::new(&controller, wakeups).spawn(cancel.clone());
//!
//! // from host layout callbacks
//! controller.set_viewport(Viewport::new(390.0, 844.0));
//! controller.set_trigger(trigger_rect);
//! controller.set_content(content_rect);
//!
//! // in the view layer
//! let mut positions = controller.subscribe();
//! positions.changed().await?;
//! ```

pub mod config;
pub mod controller;
pub mod driver;
pub mod wakeup;

pub use config::{ConfigError, ControllerConfig, DEFAULT_FRAME_RATE};
pub use controller::PositionController;
pub use driver::{FrameDriver, StopReason};

pub use perch_geom as geom;

pub mod prelude {
    pub use crate::config::{ConfigError, ControllerConfig};
    pub use crate::controller::PositionController;
    pub use crate::driver::{FrameDriver, StopReason};
    pub use perch_geom::{
        Alignment, Edges, Placement, PlacementOptions, PositionResult, Rect, Side, Viewport,
    };
}
