//! JSON scenario files.
//!
//! A scenario describes one overlay: its configuration, initial
//! measurements, and an optional list of updates replayed through a
//! [`PositionController`]. `"frame"` entries mark frame boundaries; every
//! update between two frames is coalesced into one recomputation.
//!
//! ```json
//! {
//!   "viewport": { "width": 400, "height": 400 },
//!   "placement": "bottom",
//!   "trigger": { "x": 350, "y": 350, "width": 20, "height": 20 },
//!   "content": { "x": 0, "y": 0, "width": 100, "height": 40 },
//!   "updates": [
//!     { "trigger": { "x": 10, "y": 10, "width": 20, "height": 20 } },
//!     "frame"
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use log::{debug, info};
use perch::geom::{Edges, Placement, PositionResult, Rect, Viewport, DEFAULT_OFFSET};
use perch::{ControllerConfig, PositionController};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub viewport: Viewport,
    #[serde(default)]
    pub insets: Edges,
    #[serde(default)]
    pub placement: Placement,
    #[serde(default = "default_offset")]
    pub offset: f32,
    /// Overrides the default fallback order for `placement`.
    #[serde(default)]
    pub fallback: Option<Vec<Placement>>,
    #[serde(default = "enabled")]
    pub flip: bool,
    #[serde(default = "enabled")]
    pub slide: bool,
    pub trigger: Rect,
    pub content: Rect,
    #[serde(default)]
    pub updates: Vec<Update>,
}

fn default_offset() -> f32 {
    DEFAULT_OFFSET
}

fn enabled() -> bool {
    true
}

/// One replayed host event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Update {
    Trigger(Rect),
    Content(Rect),
    Viewport(Viewport),
    Insets(Edges),
    /// Frame boundary: flush pending work.
    Frame,
    /// Synchronous recompute.
    Force,
    Dismiss,
}

/// A result published while replaying, tagged with the frame it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Published {
    pub frame: u64,
    #[serde(flatten)]
    pub result: PositionResult,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn config(&self) -> ControllerConfig {
        let config = ControllerConfig::new()
            .placement(self.placement)
            .offset(self.offset)
            .flip(self.flip)
            .slide(self.slide)
            .insets(self.insets);

        match &self.fallback {
            Some(order) => config.fallback_order(order.iter().copied()),
            None => config,
        }
    }

    /// Replay the scenario and collect every published result.
    ///
    /// The initial measurements count as frame 0; the scenario always ends
    /// with an implicit frame so trailing updates are flushed.
    pub fn replay(&self) -> Result<Vec<Published>, CliError> {
        // Frames are simulated, so the driver's wakeups are not needed
        let (controller, _wakeups) = PositionController::new(self.config())?;

        controller.set_viewport(self.viewport);
        controller.set_trigger(self.trigger);
        controller.set_content(self.content);

        let mut published = Vec::new();
        let mut frame = 0;
        let mut record = |frame: u64, result: Option<PositionResult>| {
            if let Some(result) = result {
                published.push(Published { frame, result });
            }
        };

        record(frame, controller.flush());

        for update in &self.updates {
            debug!("Replaying {:?}", update);
            match *update {
                Update::Trigger(rect) => controller.set_trigger(rect),
                Update::Content(rect) => controller.set_content(rect),
                Update::Viewport(viewport) => controller.set_viewport(viewport),
                Update::Insets(insets) => controller.set_insets(insets)?,
                Update::Force => record(frame, controller.force_recompute()),
                Update::Dismiss => controller.dismiss(),
                Update::Frame => {
                    frame += 1;
                    record(frame, controller.flush());
                }
            }
        }

        if controller.is_pending() {
            frame += 1;
            record(frame, controller.flush());
        }

        info!(
            "Replayed {} updates, {} results published",
            self.updates.len(),
            controller.revision()
        );
        Ok(published)
    }
}

#[cfg(test)]
mod tests {
    use perch::geom::Side;

    use super::*;

    const FLIP: &str = r#"{
        "viewport": { "width": 400, "height": 400 },
        "trigger": { "x": 350, "y": 350, "width": 20, "height": 20 },
        "content": { "x": 0, "y": 0, "width": 100, "height": 40 }
    }"#;

    #[test]
    fn test_defaults_applied() {
        let scenario = Scenario::parse(FLIP).unwrap();

        assert_eq!(scenario.placement, Placement::bottom());
        assert_eq!(scenario.offset, 8.0);
        assert!(scenario.flip && scenario.slide);
        assert!(scenario.updates.is_empty());
    }

    #[test]
    fn test_replay_initial_frame() {
        let published = Scenario::parse(FLIP).unwrap().replay().unwrap();

        assert_eq!(published.len(), 1);
        let first = published[0];
        assert_eq!(first.frame, 0);
        assert_eq!(first.result.side, Side::Top);
        assert_eq!(first.result.y, 302.0);
        assert!(first.result.did_flip);
    }

    #[test]
    fn test_replay_coalesces_updates_between_frames() {
        let scenario = Scenario::parse(
            r#"{
                "viewport": { "width": 400, "height": 400 },
                "trigger": { "x": 100, "y": 100, "width": 20, "height": 20 },
                "content": { "x": 0, "y": 0, "width": 100, "height": 40 },
                "updates": [
                    { "trigger": { "x": 110, "y": 100, "width": 20, "height": 20 } },
                    { "trigger": { "x": 120, "y": 100, "width": 20, "height": 20 } },
                    { "trigger": { "x": 130, "y": 100, "width": 20, "height": 20 } },
                    "frame",
                    "frame",
                    { "viewport": { "width": 400, "height": 150 } }
                ]
            }"#,
        )
        .unwrap();

        let published = scenario.replay().unwrap();

        assert_eq!(published.len(), 3);
        assert_eq!(published[1].frame, 1);
        assert_eq!(published[1].result.x, 90.0); // 140 - 50
        assert_eq!(published[2].frame, 3, "trailing update flushed in an implicit frame");
        assert_eq!(published[2].result.side, Side::Top);
    }

    #[test]
    fn test_replay_dismiss_drops_pending() {
        let scenario = Scenario::parse(
            r#"{
                "viewport": { "width": 400, "height": 400 },
                "trigger": { "x": 100, "y": 100, "width": 20, "height": 20 },
                "content": { "x": 0, "y": 0, "width": 100, "height": 40 },
                "updates": [
                    { "trigger": { "x": 300, "y": 100, "width": 20, "height": 20 } },
                    "dismiss",
                    "frame"
                ]
            }"#,
        )
        .unwrap();

        let published = scenario.replay().unwrap();

        assert_eq!(published.len(), 1, "only the initial frame");
    }

    #[test]
    fn test_custom_fallback_order() {
        let scenario = Scenario::parse(
            r#"{
                "viewport": { "width": 400, "height": 100 },
                "placement": "bottom",
                "fallback": ["left", "right"],
                "trigger": { "x": 190, "y": 40, "width": 20, "height": 20 },
                "content": { "x": 0, "y": 0, "width": 100, "height": 60 }
            }"#,
        )
        .unwrap();

        let published = scenario.replay().unwrap();

        assert_eq!(published[0].result.side, Side::Left);
    }

    #[test]
    fn test_invalid_placement_is_reported() {
        let err = Scenario::parse(
            r#"{
                "viewport": { "width": 400, "height": 400 },
                "placement": "sideways",
                "trigger": { "x": 0, "y": 0, "width": 20, "height": 20 },
                "content": { "x": 0, "y": 0, "width": 100, "height": 40 }
            }"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("sideways"));
    }
}
