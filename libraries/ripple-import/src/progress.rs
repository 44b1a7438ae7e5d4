//! Progress monitor implementations
//!
//! The decode loop only ever talks to the [`ProgressMonitor`] trait; these
//! are the two stock implementations. Hosts with a real progress dialog
//! implement the trait over their own UI plumbing.

use ripple_core::{ProgressMonitor, ProgressResponse};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Monitor that never stops or cancels
///
/// For headless imports and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressMonitor for NoProgress {
    fn poll(&mut self, _fraction: f64, _scale: f64) -> ProgressResponse {
        ProgressResponse::Continue
    }
}

/// Shared handle the host uses to request a stop or cancel
///
/// Clone freely; all clones control the same import. Cancel takes precedence
/// over stop when both were requested before the same poll.
#[derive(Debug, Default, Clone)]
pub struct ControlHandle {
    stop: Arc<AtomicBool>,
    cancel: Arc<AtomicBool>,
}

impl ControlHandle {
    /// Create a handle with neither request raised
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the import to stop and keep what was decoded so far
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    /// Ask the import to abort and discard everything
    pub fn request_cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}

/// Monitor backed by a [`ControlHandle`]
///
/// Observes requests cooperatively, at block granularity; also remembers the
/// last reported fraction so the host can render it.
#[derive(Debug, Default)]
pub struct FlagMonitor {
    handle: ControlHandle,
    last_fraction: f64,
}

impl FlagMonitor {
    /// Create a monitor and return it with its control handle
    pub fn pair() -> (Self, ControlHandle) {
        let handle = ControlHandle::new();
        let monitor = Self {
            handle: handle.clone(),
            last_fraction: 0.0,
        };
        (monitor, handle)
    }

    /// Last fraction reported by the decode loop
    pub fn fraction(&self) -> f64 {
        self.last_fraction
    }
}

impl ProgressMonitor for FlagMonitor {
    fn poll(&mut self, fraction: f64, _scale: f64) -> ProgressResponse {
        self.last_fraction = fraction;
        if self.handle.cancel.load(Ordering::Relaxed) {
            ProgressResponse::Cancelled
        } else if self.handle.stop.load(Ordering::Relaxed) {
            ProgressResponse::Stopped
        } else {
            ProgressResponse::Continue
        }
    }
}
