//! Frame driver: turns wakeup bursts into one recomputation per frame.
//!
//! The driver blocks while idle. On a wakeup it waits for the next frame
//! tick, drains every wakeup that arrived in the meantime and calls
//! [`PositionController::flush`] once, so a burst of measurements (e.g.
//! during a layout animation) produces a single settled result.
//!
//! A wakeup that ends an idle stretch longer than a frame starts a fresh
//! frame, so the first update of a burst never flushes on its own.

use std::time::Duration;

use log::{debug, info, trace};
use tokio::time::{interval, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::controller::{PositionController, WeakController};
use crate::wakeup::WakeupReceiver;

/// Why the driver loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The cancellation token fired.
    Cancelled,
    /// The controller was dismissed.
    Dismissed,
    /// Every controller handle was dropped (overlay unmounted).
    Closed,
}

/// Drives one controller's per-frame flushes.
///
/// Holds only a weak reference, so dropping the last [`PositionController`]
/// handle ends the loop.
pub struct FrameDriver {
    controller: WeakController,
    wakeups: WakeupReceiver,
    frame_duration: Duration,
}

impl FrameDriver {
    pub fn new(controller: &PositionController, wakeups: WakeupReceiver) -> Self {
        Self {
            controller: controller.downgrade(),
            wakeups,
            frame_duration: controller.frame_interval(),
        }
    }

    /// Spawn [`FrameDriver::run`] on the current tokio runtime.
    pub fn spawn(self, cancel: CancellationToken) -> tokio::task::JoinHandle<StopReason> {
        tokio::spawn(self.run(cancel))
    }

    /// Run until cancelled, dismissed or orphaned.
    pub async fn run(self, cancel: CancellationToken) -> StopReason {
        let Self {
            controller,
            mut wakeups,
            frame_duration,
        } = self;

        let mut frames = interval(frame_duration);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut last_frame: Option<Instant> = None;

        info!("Frame driver started ({:?} per frame)", frame_duration);

        let reason = 'frames: loop {
            // Passive: wait for something to change
            let woke = tokio::select! {
                _ = cancel.cancelled() => break 'frames StopReason::Cancelled,
                signal = wakeups.recv() => signal,
            };
            if woke.is_none() {
                break 'frames StopReason::Closed;
            }

            // A tick missed while idle would fire right away
            let idle = last_frame.is_none_or(|at| at + frame_duration <= Instant::now());
            if idle {
                frames.reset();
            }

            // Hold the burst until the next frame boundary
            let tick = tokio::select! {
                _ = cancel.cancelled() => break 'frames StopReason::Cancelled,
                at = frames.tick() => at,
            };
            last_frame = Some(tick);

            let coalesced = wakeups.drain();
            if coalesced > 0 {
                trace!("Coalesced {} extra wakeups into one frame", coalesced);
            }

            let Some(controller) = controller.upgrade() else {
                break 'frames StopReason::Closed;
            };
            if controller.is_dismissed() {
                break 'frames StopReason::Dismissed;
            }
            controller.flush();
        };

        debug!("Frame driver stopped: {:?}", reason);
        reason
    }
}
