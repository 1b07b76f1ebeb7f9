//! Integration tests for the refresh orchestrator: settle-independently
//! fan-out, the reentrancy guard, session teardown and view switching.

use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;

use opsdeck_core::api::{ApiClient, ApiError, ApiRequest, HttpExec, RawResponse};
use opsdeck_core::orchestrator::{CycleOutcome, Orchestrator};
use opsdeck_core::registry::{Panel, View};
use opsdeck_core::render::{PanelSink, PanelUpdate};
use opsdeck_core::session::{Session, SessionPhase};

/// Scripted transport. Paths not in the map answer 200 `{}`; listed
/// paths answer their scripted status/body. Paths in `gated` block
/// until the gate flips to true.
#[derive(Clone)]
struct ScriptedExec {
    responses: Arc<HashMap<String, (u16, String)>>,
    gated: Arc<HashSet<String>>,
    gate: watch::Receiver<bool>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ScriptedExec {
    fn new(responses: &[(&str, u16, &str)]) -> (Self, watch::Sender<bool>) {
        let (gate_tx, gate) = watch::channel(true);
        (
            Self {
                responses: Arc::new(
                    responses
                        .iter()
                        .map(|(p, s, b)| (p.to_string(), (*s, b.to_string())))
                        .collect(),
                ),
                gated: Arc::new(HashSet::new()),
                gate,
                requests: Arc::new(Mutex::new(Vec::new())),
            },
            gate_tx,
        )
    }

    fn with_gate(mut self, paths: &[&str], gate_tx: &watch::Sender<bool>) -> Self {
        self.gated = Arc::new(paths.iter().map(|p| p.to_string()).collect());
        let _ = gate_tx.send(false);
        self
    }

    fn request_count(&self, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.as_str() == path)
            .count()
    }
}

impl HttpExec for ScriptedExec {
    fn execute(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<RawResponse, ApiError>> + Send {
        self.requests.lock().unwrap().push(request.path.clone());
        let response = self
            .responses
            .get(&request.path)
            .cloned()
            .unwrap_or((200, "{}".to_string()));
        let gated = self.gated.contains(&request.path);
        let mut gate = self.gate.clone();
        async move {
            if gated {
                while !*gate.borrow_and_update() {
                    if gate.changed().await.is_err() {
                        break;
                    }
                }
            }
            Ok(RawResponse {
                status: response.0,
                body: response.1,
            })
        }
    }
}

#[derive(Clone, Default)]
struct RecordingSink(Arc<Mutex<Vec<PanelUpdate>>>);

impl RecordingSink {
    fn panels(&self) -> Vec<Panel> {
        self.0.lock().unwrap().iter().map(|u| u.panel()).collect()
    }

    fn unavailable_panels(&self) -> Vec<Panel> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter_map(|u| match u {
                PanelUpdate::Unavailable { panel } => Some(*panel),
                _ => None,
            })
            .collect()
    }
}

impl PanelSink for RecordingSink {
    fn apply(&mut self, update: PanelUpdate) {
        self.0.lock().unwrap().push(update);
    }
}

const LONG_INTERVAL: Duration = Duration::from_secs(3600);

fn orchestrator(
    exec: ScriptedExec,
    view: View,
) -> (
    Orchestrator<ScriptedExec, RecordingSink>,
    opsdeck_core::RefreshHandle,
    RecordingSink,
    Arc<Session>,
) {
    let session = Arc::new(Session::ephemeral(Some("tok".to_string())));
    let client = ApiClient::new(exec, session.clone());
    let sink = RecordingSink::default();
    let (orchestrator, handle) = Orchestrator::new(client, sink.clone(), view, LONG_INTERVAL);
    (orchestrator, handle, sink, session)
}

#[tokio::test]
async fn test_partial_failure_degrades_only_the_failing_panel() {
    let (exec, _gate) = ScriptedExec::new(&[
        ("/api/status", 200, r#"{"paused":false}"#),
        ("/api/stats", 500, "{}"),
        ("/api/schedule", 200, "[]"),
        ("/api/accounts/reddit/performance", 200, "[]"),
    ]);
    let (mut orchestrator, handle, sink, _session) = orchestrator(exec, View::Command);

    let outcome = orchestrator.run_cycle().await;

    let CycleOutcome::Completed(report) = outcome else {
        panic!("expected a completed cycle, got: {:?}", outcome);
    };
    // Status plus the six surviving view panels dispatched; only the
    // stats panel degraded.
    assert_eq!(report.dispatched, 7);
    assert_eq!(report.unavailable, 1);
    assert!(!report.lost_session);
    assert_eq!(sink.unavailable_panels(), vec![Panel::Stats]);
    // Cycle settled: back to idle.
    assert!(!handle.is_cycling());
}

#[tokio::test]
async fn test_status_applied_before_view_panels() {
    let (exec, _gate) = ScriptedExec::new(&[
        ("/api/status", 200, r#"{"paused":true}"#),
        ("/api/actions?limit=50", 200, "[]"),
    ]);
    let (mut orchestrator, _handle, sink, _session) = orchestrator(exec, View::Activity);

    orchestrator.run_cycle().await;

    let panels = sink.panels();
    assert_eq!(panels[0], Panel::Status);
    assert!(panels.contains(&Panel::Actions));
    assert!(panels.contains(&Panel::Conversations));
}

#[tokio::test]
async fn test_optional_fetch_fails_entirely_silently() {
    let (exec, _gate) = ScriptedExec::new(&[("/api/network", 503, "down")]);
    let (mut orchestrator, _handle, sink, _session) = orchestrator(exec, View::Network);

    let outcome = orchestrator.run_cycle().await;

    let CycleOutcome::Completed(report) = outcome else {
        panic!("expected a completed cycle");
    };
    assert_eq!(report.unavailable, 0);
    assert!(sink.unavailable_panels().is_empty());
    // Only the status summary was dispatched.
    assert_eq!(sink.panels(), vec![Panel::Status]);
}

#[tokio::test]
async fn test_no_session_cycle_is_a_pass_through() {
    let (exec, _gate) = ScriptedExec::new(&[]);
    let session = Arc::new(Session::ephemeral(None));
    let client = ApiClient::new(exec.clone(), session);
    let sink = RecordingSink::default();
    let (mut orchestrator, _handle) =
        Orchestrator::new(client, sink.clone(), View::Command, LONG_INTERVAL);

    let outcome = orchestrator.run_cycle().await;

    assert_eq!(outcome, CycleOutcome::NoSession);
    assert!(sink.panels().is_empty());
    assert_eq!(exec.requests.lock().unwrap().len(), 0);
}

#[tokio::test]
async fn test_auth_failure_from_any_fetch_tears_the_session_down() {
    let (exec, _gate) = ScriptedExec::new(&[
        ("/api/status", 200, "{}"),
        ("/api/actions?limit=50", 200, "[]"),
        ("/api/conversations", 401, "{}"),
    ]);
    let (mut orchestrator, handle, _sink, session) = orchestrator(exec, View::Activity);

    let outcome = orchestrator.run_cycle().await;

    let CycleOutcome::Completed(report) = outcome else {
        panic!("expected a completed cycle");
    };
    assert!(report.lost_session);
    // Token cleared, login surface shown, and the cycle still settled.
    assert_eq!(session.token(), None);
    assert_eq!(session.phase(), SessionPhase::Login);
    assert!(!handle.is_cycling());
}

#[tokio::test]
async fn test_rapid_triggers_produce_at_most_one_cycle() {
    let (exec, gate_tx) = ScriptedExec::new(&[("/api/actions?limit=50", 200, "[]")]);
    let exec = exec.with_gate(&["/api/status"], &gate_tx);
    let (orchestrator, handle, _sink, session) = orchestrator(exec.clone(), View::Activity);

    let task = tokio::spawn(orchestrator.run());

    // Wait for the first cycle to block on the gated status fetch.
    while exec.request_count("/api/status") == 0 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    // Ten rapid ticks while Cycling: every one is dropped.
    for _ in 0..10 {
        assert!(!handle.request_refresh());
    }

    gate_tx.send(true).unwrap();
    // Let the blocked cycle settle, then stop the loop.
    while handle.is_cycling() {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    session.teardown();
    task.await.unwrap();

    assert_eq!(exec.request_count("/api/status"), 1);
}

#[tokio::test]
async fn test_view_switch_keeps_stale_results_and_starts_new_cycle() {
    let (exec, gate_tx) = ScriptedExec::new(&[
        ("/api/actions?limit=50", 200, "[]"),
        ("/api/schedule", 200, "[]"),
        ("/api/accounts/reddit/performance", 200, "[]"),
    ]);
    let exec = exec.with_gate(&["/api/actions?limit=50"], &gate_tx);
    let (orchestrator, handle, sink, session) = orchestrator(exec.clone(), View::Activity);

    let task = tokio::spawn(orchestrator.run());

    // First cycle is in flight, blocked on the activity fetch.
    while exec.request_count("/api/actions?limit=50") == 0 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    // Switch views while the old view's fetches are still in flight.
    assert!(handle.switch_view(View::Command));
    gate_tx.send(true).unwrap();

    // The command cycle runs once the activity cycle settles.
    while exec.request_count("/api/stats") == 0 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    while handle.is_cycling() {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    session.teardown();
    task.await.unwrap();

    let panels = sink.panels();
    // The stale activity renderer still fired...
    let actions_at = panels.iter().position(|p| *p == Panel::Actions).unwrap();
    // ...and the new view's panels arrived after it.
    let stats_at = panels.iter().position(|p| *p == Panel::Stats).unwrap();
    assert!(actions_at < stats_at);
}

#[tokio::test]
async fn test_switch_trigger_is_queued_while_cycling() {
    let (exec, gate_tx) = ScriptedExec::new(&[]);
    let exec = exec.with_gate(&["/api/status"], &gate_tx);
    let (orchestrator, handle, _sink, session) = orchestrator(exec.clone(), View::Network);

    let task = tokio::spawn(orchestrator.run());
    while exec.request_count("/api/status") == 0 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    // Refresh triggers drop while cycling; a view switch queues.
    assert!(!handle.request_refresh());
    assert!(handle.switch_view(View::Server));

    gate_tx.send(true).unwrap();
    while exec.request_count("/api/server") == 0 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    session.teardown();
    task.await.unwrap();

    assert_eq!(exec.request_count("/api/server"), 1);
}
