//! Position controller for one anchored overlay.
//!
//! The controller owns the latest trigger/content measurements, the current
//! boundary and the last published [`PositionResult`]. Measurement updates
//! are cheap: they store the value, mark the controller pending and wake the
//! frame driver. The actual recomputation happens in [`PositionController::flush`],
//! at most once per frame, always from the latest stored state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use log::{debug, trace};
use perch_geom::{
    boundary, compute_position, is_usable, Edges, PlacementOptions, PositionResult, Rect, Viewport,
};
use tokio::sync::watch;

use crate::config::{validate_insets, validate_placement, ConfigError, ControllerConfig};
use crate::wakeup::{self, WakeupReceiver, WakeupSender};

#[derive(Debug)]
struct Inner {
    options: PlacementOptions,
    insets: Edges,
    frame_interval: Duration,
    trigger: Option<Rect>,
    content: Option<Rect>,
    viewport: Option<Viewport>,
    boundary: Option<Rect>,
    pending: bool,
    dismissed: bool,
    revision: u64,
}

impl Inner {
    fn refresh_boundary(&mut self) {
        self.boundary = self
            .viewport
            .map(|viewport| boundary(viewport, self.insets))
            .filter(is_usable);
    }

    /// Run the engine, or `None` while inputs are incomplete.
    fn compute(&self) -> Option<PositionResult> {
        let trigger = self.trigger?;
        let content = self.content?;
        let boundary = self.boundary?;
        Some(compute_position(trigger, content, boundary, &self.options))
    }
}

#[derive(Debug)]
struct Shared {
    inner: Mutex<Inner>,
    publisher: watch::Sender<Option<PositionResult>>,
    wakeup: WakeupSender,
}

/// Handle to a position controller.
///
/// Cloning is cheap; all clones share the same state. Once the last handle
/// is dropped the wakeup channel closes and the frame driver stops.
#[derive(Debug, Clone)]
pub struct PositionController {
    shared: Arc<Shared>,
}

/// Non-owning handle held by the frame driver.
#[derive(Debug, Clone)]
pub(crate) struct WeakController(Weak<Shared>);

impl WeakController {
    pub(crate) fn upgrade(&self) -> Option<PositionController> {
        self.0.upgrade().map(|shared| PositionController { shared })
    }
}

impl PositionController {
    /// Create a controller and the wakeup receiver its frame driver listens
    /// on.
    pub fn new(config: ControllerConfig) -> Result<(Self, WakeupReceiver), ConfigError> {
        config.validate()?;

        let (wakeup, wakeups) = wakeup::channel();
        let (publisher, _) = watch::channel(None);

        let inner = Inner {
            frame_interval: config.frame_interval(),
            options: config.placement,
            insets: config.insets,
            trigger: None,
            content: None,
            viewport: None,
            boundary: None,
            pending: false,
            dismissed: false,
            revision: 0,
        };

        let controller = Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(inner),
                publisher,
                wakeup,
            }),
        };
        Ok((controller, wakeups))
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.shared.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn downgrade(&self) -> WeakController {
        WeakController(Arc::downgrade(&self.shared))
    }

    /// Apply `f` to the state and schedule a recomputation.
    fn update(&self, what: &str, f: impl FnOnce(&mut Inner)) {
        {
            let mut inner = self.lock();
            if inner.dismissed {
                trace!("Ignoring {} update after dismiss", what);
                return;
            }
            f(&mut *inner);
            inner.pending = true;
        }
        trace!("{} updated, recomputation pending", what);
        self.shared.wakeup.send();
    }

    /// Record a new trigger measurement.
    pub fn set_trigger(&self, trigger: Rect) {
        self.update("trigger", |inner| inner.trigger = Some(trigger));
    }

    /// Record a new content measurement. Only its size is used.
    pub fn set_content(&self, content: Rect) {
        self.update("content", |inner| inner.content = Some(content));
    }

    /// Record a viewport change (rotation, window resize).
    pub fn set_viewport(&self, viewport: Viewport) {
        self.update("viewport", |inner| {
            inner.viewport = Some(viewport);
            inner.refresh_boundary();
        });
    }

    /// Replace the boundary insets (safe-area change).
    pub fn set_insets(&self, insets: Edges) -> Result<(), ConfigError> {
        validate_insets(insets)?;
        self.update("insets", |inner| {
            inner.insets = insets;
            inner.refresh_boundary();
        });
        Ok(())
    }

    /// Replace the placement policy.
    pub fn set_options(&self, options: PlacementOptions) -> Result<(), ConfigError> {
        validate_placement(&options)?;
        self.update("options", |inner| inner.options = options);
        Ok(())
    }

    /// Per-frame step: recompute once if anything changed since the last
    /// frame, then publish.
    ///
    /// Returns the published result, or `None` if nothing was pending, the
    /// inputs are incomplete, or the controller was dismissed.
    pub fn flush(&self) -> Option<PositionResult> {
        let mut inner = self.lock();
        if inner.dismissed || !inner.pending {
            return None;
        }
        inner.pending = false;
        self.recompute(&mut inner)
    }

    /// Recompute and publish immediately, pending or not.
    ///
    /// For callers that need a settled position synchronously, e.g. right
    /// before starting an entrance animation.
    pub fn force_recompute(&self) -> Option<PositionResult> {
        let mut inner = self.lock();
        if inner.dismissed {
            return None;
        }
        inner.pending = false;
        self.recompute(&mut inner)
    }

    fn recompute(&self, inner: &mut Inner) -> Option<PositionResult> {
        let Some(result) = inner.compute() else {
            debug!(
                "Not positioned yet (trigger: {}, content: {}, boundary: {})",
                inner.trigger.is_some(),
                inner.content.is_some(),
                inner.boundary.is_some()
            );
            return None;
        };

        inner.revision += 1;
        debug!(
            "Publishing position #{}: ({}, {}) {}{}",
            inner.revision,
            result.x,
            result.y,
            result.placement(),
            if result.did_flip { " (flipped)" } else { "" }
        );
        self.shared.publisher.send_replace(Some(result));
        Some(result)
    }

    /// Drop any pending recomputation and stop accepting updates.
    ///
    /// Nothing is published after this call.
    pub fn dismiss(&self) {
        {
            let mut inner = self.lock();
            if inner.dismissed {
                return;
            }
            inner.dismissed = true;
            if inner.pending {
                debug!("Dismissed with a pending recomputation, discarding it");
            }
            inner.pending = false;
        }
        // Wake the driver so it notices and exits.
        self.shared.wakeup.send();
    }

    /// Observe published results. `None` means "not yet positioned".
    pub fn subscribe(&self) -> watch::Receiver<Option<PositionResult>> {
        self.shared.publisher.subscribe()
    }

    /// Last published result.
    pub fn latest(&self) -> Option<PositionResult> {
        *self.shared.publisher.borrow()
    }

    /// Number of results published so far.
    pub fn revision(&self) -> u64 {
        self.lock().revision
    }

    pub fn is_pending(&self) -> bool {
        self.lock().pending
    }

    pub fn is_dismissed(&self) -> bool {
        self.lock().dismissed
    }

    /// Current boundary, if a usable one is known.
    pub fn boundary(&self) -> Option<Rect> {
        self.lock().boundary
    }

    pub fn frame_interval(&self) -> Duration {
        self.lock().frame_interval
    }
}
