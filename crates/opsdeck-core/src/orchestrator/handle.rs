use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::registry::View;

/// Wake-up reasons for the orchestrator loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Refresh,
    Switch(View),
}

/// External control surface for the running orchestrator.
///
/// Refresh requests arriving while a cycle is in flight are dropped
/// silently (a missed tick beats overlapping panel updates). View
/// switches are queued instead, so the new view's cycle starts as soon
/// as the current cycle settles — in-flight requests are never
/// cancelled.
#[derive(Debug, Clone)]
pub struct RefreshHandle {
    tx: mpsc::Sender<Trigger>,
    cycling: Arc<AtomicBool>,
}

impl RefreshHandle {
    pub(crate) fn new(tx: mpsc::Sender<Trigger>, cycling: Arc<AtomicBool>) -> Self {
        Self { tx, cycling }
    }

    /// Request an immediate cycle. Returns false if the request was
    /// dropped because a cycle is already running.
    pub fn request_refresh(&self) -> bool {
        if self.cycling.load(Ordering::SeqCst) {
            debug!(event = "console.cycle.trigger_dropped");
            return false;
        }
        self.tx.try_send(Trigger::Refresh).is_ok()
    }

    /// Switch the active view; the next cycle fetches for it.
    pub fn switch_view(&self, view: View) -> bool {
        match self.tx.try_send(Trigger::Switch(view)) {
            Ok(()) => true,
            Err(_) => {
                warn!(event = "console.cycle.switch_dropped", view = view.as_str());
                false
            }
        }
    }

    /// Whether a cycle is currently in flight.
    pub fn is_cycling(&self) -> bool {
        self.cycling.load(Ordering::SeqCst)
    }
}
