use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use futures::future::join_all;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::decode::{DecodeOutcome, decode_panel};
use super::handle::{RefreshHandle, Trigger};
use crate::api::client::ApiClient;
use crate::api::errors::ApiError;
use crate::api::transport::HttpExec;
use crate::metrics::MetricStore;
use crate::registry::{Fetch, Panel, STATUS_PATH, View, fetch_plan};
use crate::render::{PanelSink, PanelUpdate};
use crate::session::SessionPhase;

/// Outcome of one orchestration pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Completed(CycleReport),
    /// Degenerate pass-through: no session token present.
    NoSession,
    /// Dropped by the reentrancy guard.
    Skipped,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Successful dispatches to renderers, status included.
    pub dispatched: usize,
    /// Panels degraded to an explicit empty-state.
    pub unavailable: usize,
    /// An authentication failure tore the session down mid-cycle.
    pub lost_session: bool,
}

/// The refresh orchestrator: fans a view's fetch set out concurrently,
/// settles every fetch independently and dispatches each success to its
/// renderer. At most one cycle is in flight at a time.
pub struct Orchestrator<E: HttpExec, S: PanelSink> {
    client: ApiClient<E>,
    sink: S,
    metrics: MetricStore,
    active_view: View,
    interval: Duration,
    cycling: Arc<AtomicBool>,
    triggers: mpsc::Receiver<Trigger>,
}

impl<E: HttpExec, S: PanelSink> Orchestrator<E, S> {
    pub fn new(
        client: ApiClient<E>,
        sink: S,
        initial_view: View,
        interval: Duration,
    ) -> (Self, RefreshHandle) {
        let cycling = Arc::new(AtomicBool::new(false));
        let (tx, triggers) = mpsc::channel(8);
        let handle = RefreshHandle::new(tx, cycling.clone());
        (
            Self {
                client,
                sink,
                metrics: MetricStore::new(),
                active_view: initial_view,
                interval,
                cycling,
                triggers,
            },
            handle,
        )
    }

    pub fn active_view(&self) -> View {
        self.active_view
    }

    /// Run one cycle unless one is already in flight.
    ///
    /// The guard is released on every path; an internal error is
    /// log-and-continue, never a poisoned lock.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        if self.cycling.swap(true, Ordering::SeqCst) {
            debug!(event = "console.cycle.reentrant_drop");
            return CycleOutcome::Skipped;
        }
        let outcome = self.cycle_inner().await;
        self.cycling.store(false, Ordering::SeqCst);
        outcome
    }

    async fn cycle_inner(&mut self) -> CycleOutcome {
        if !self.client.session().is_authenticated() {
            return CycleOutcome::NoSession;
        }
        let view = self.active_view;
        debug!(event = "console.cycle.started", view = view.as_str());
        let mut report = CycleReport::default();

        // The status summary is applied before any view payload so the
        // global indicator is never stale relative to panel data.
        match self.client.get(STATUS_PATH).await {
            Ok(value) => match decode_panel(Panel::Status, value, &mut self.metrics) {
                DecodeOutcome::Update(update) => {
                    self.sink.apply(update);
                    report.dispatched += 1;
                }
                DecodeOutcome::ErrorShape => {
                    warn!(event = "console.cycle.status_error_shape");
                }
                DecodeOutcome::Failed(message) => {
                    warn!(event = "console.cycle.status_decode_failed", error = %message);
                }
            },
            Err(ApiError::Unauthorized) => {
                report.lost_session = true;
            }
            Err(e) => {
                warn!(event = "console.cycle.status_failed", error = %e);
            }
        }

        // Fan the view's fetch set out concurrently; total latency is
        // bounded by the slowest endpoint, not their sum. Every fetch
        // settles independently before the cycle returns to idle.
        let plan = fetch_plan(view);
        let client = &self.client;
        let results = join_all(
            plan.iter()
                .map(|fetch| async move { (fetch, client.get(fetch.path).await) }),
        )
        .await;

        for (fetch, result) in results {
            match result {
                Ok(value) => match decode_panel(fetch.panel, value, &mut self.metrics) {
                    DecodeOutcome::Update(update) => {
                        self.sink.apply(update);
                        report.dispatched += 1;
                    }
                    DecodeOutcome::ErrorShape => self.degrade(fetch, &mut report),
                    DecodeOutcome::Failed(message) => {
                        warn!(
                            event = "console.cycle.decode_failed",
                            path = fetch.path,
                            error = %message,
                        );
                        self.degrade(fetch, &mut report);
                    }
                },
                Err(ApiError::Unauthorized) => {
                    // Teardown already ran in the gateway. The remaining
                    // results still settle and dispatch; renderers are
                    // idempotent and the login surface supersedes them.
                    report.lost_session = true;
                }
                Err(e) => {
                    if fetch.optional {
                        debug!(
                            event = "console.cycle.optional_fetch_failed",
                            path = fetch.path,
                            error = %e,
                        );
                    } else {
                        warn!(
                            event = "console.cycle.fetch_failed",
                            path = fetch.path,
                            error = %e,
                        );
                        self.degrade(fetch, &mut report);
                    }
                }
            }
        }

        info!(
            event = "console.cycle.completed",
            view = view.as_str(),
            dispatched = report.dispatched,
            unavailable = report.unavailable,
            lost_session = report.lost_session,
        );
        CycleOutcome::Completed(report)
    }

    /// Degrade one panel to its empty-state. Optional panels degrade
    /// entirely silently.
    fn degrade(&mut self, fetch: &Fetch, report: &mut CycleReport) {
        if fetch.optional {
            return;
        }
        self.sink.apply(PanelUpdate::Unavailable { panel: fetch.panel });
        report.unavailable += 1;
    }

    /// Driver loop: an immediate first cycle, then timer ticks and
    /// external triggers until the session tears down. A tick landing
    /// mid-cycle is dropped, never queued, so a slow backend
    /// self-throttles instead of building a backlog.
    pub async fn run(mut self) {
        info!(
            event = "console.cycle.loop_started",
            view = self.active_view.as_str(),
            interval_secs = self.interval.as_secs(),
        );
        let mut phase_rx = self.client.session().subscribe();
        // Receiver moved to a local so the select arm and the cycle can
        // borrow independently.
        let (_closed_tx, closed_rx) = mpsc::channel(1);
        let mut triggers = std::mem::replace(&mut self.triggers, closed_rx);
        let interval = self.interval;

        self.run_cycle().await;

        loop {
            if self.client.session().phase() == SessionPhase::Login {
                break;
            }
            tokio::select! {
                timed = tokio::time::timeout(interval, triggers.recv()) => match timed {
                    Ok(Some(Trigger::Switch(view))) => {
                        info!(event = "console.cycle.view_switched", view = view.as_str());
                        self.active_view = view;
                        self.run_cycle().await;
                    }
                    Ok(Some(Trigger::Refresh)) => {
                        self.run_cycle().await;
                    }
                    Ok(None) => break,
                    Err(_) => {
                        self.run_cycle().await;
                    }
                },
                changed = phase_rx.changed() => {
                    if changed.is_err() || *phase_rx.borrow_and_update() == SessionPhase::Login {
                        break;
                    }
                }
            }
        }
        info!(event = "console.cycle.loop_stopped");
    }
}
