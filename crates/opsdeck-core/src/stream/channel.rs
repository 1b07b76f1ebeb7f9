use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, info, warn};

use super::feed::EventFeed;
use super::types::{LogRecord, Notice};
use crate::session::{Session, SessionPhase};

/// Derive the stream URI from the API base URL and embed the session
/// token as a query parameter.
pub fn build_stream_url(base_url: &str, token: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let ws_base = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        base.to_string()
    };
    format!("{}/ws/logs?token={}", ws_base, percent_encode(token))
}

/// Minimal query-component encoding for the opaque token.
fn percent_encode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Persistent streaming connection for out-of-band log records.
///
/// Independent of the polling cycle. On unexpected close or error it
/// schedules exactly one reconnection attempt after a fixed delay, as
/// long as a session token is still present; an explicit logout stops
/// the loop instead.
pub struct EventChannel {
    base_url: String,
    session: Arc<Session>,
    feed: Arc<Mutex<EventFeed>>,
    notices: mpsc::UnboundedSender<Notice>,
    reconnect_delay: Duration,
}

impl EventChannel {
    pub fn new(
        base_url: &str,
        session: Arc<Session>,
        feed: Arc<Mutex<EventFeed>>,
        notices: mpsc::UnboundedSender<Notice>,
        reconnect_delay: Duration,
    ) -> Self {
        Self {
            base_url: base_url.to_string(),
            session,
            feed,
            notices,
            reconnect_delay,
        }
    }

    /// Connect-and-read loop. Returns when the session ends.
    pub async fn run(self) {
        let mut phase_rx = self.session.subscribe();
        loop {
            let Some(token) = self.session.token() else {
                break;
            };
            let url = build_stream_url(&self.base_url, &token);
            info!(event = "console.stream.connecting");

            match connect_async(&url).await {
                Ok((ws_stream, _)) => {
                    info!(event = "console.stream.connected");
                    let (_write, mut read) = ws_stream.split();
                    loop {
                        tokio::select! {
                            msg = read.next() => match msg {
                                Some(Ok(Message::Text(text))) => self.ingest_text(&text),
                                Some(Ok(Message::Ping(_))) => {
                                    debug!(event = "console.stream.ping");
                                }
                                Some(Ok(Message::Close(_))) | None => {
                                    warn!(event = "console.stream.closed");
                                    break;
                                }
                                Some(Ok(_)) => {}
                                Some(Err(e)) => {
                                    // An explicit error force-closes, which
                                    // funnels into the reconnection path.
                                    warn!(event = "console.stream.error", error = %e);
                                    break;
                                }
                            },
                            changed = phase_rx.changed() => {
                                if changed.is_err()
                                    || *phase_rx.borrow_and_update() == SessionPhase::Login
                                {
                                    info!(event = "console.stream.stopped");
                                    return;
                                }
                            }
                        }
                    }
                }
                Err(e) => {
                    warn!(event = "console.stream.connect_failed", error = %e);
                }
            }

            // One scheduled reconnection attempt, only while a session
            // token is still present.
            if self.session.token().is_none() {
                break;
            }
            debug!(
                event = "console.stream.reconnect_scheduled",
                delay_ms = self.reconnect_delay.as_millis() as u64,
            );
            sleep(self.reconnect_delay).await;
        }
        info!(event = "console.stream.stopped");
    }

    fn ingest_text(&self, text: &str) {
        match serde_json::from_str::<LogRecord>(text) {
            Ok(mut record) => {
                if record.ts.is_empty() {
                    record.ts = chrono::Utc::now().format("%H:%M:%S").to_string();
                }
                let notice = self
                    .feed
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .ingest(record);
                if let Some(notice) = notice {
                    let _ = self.notices.send(notice);
                }
            }
            Err(e) => {
                warn!(event = "console.stream.parse_failed", error = %e);
            }
        }
    }
}

/// At most one live channel instance. Establishing a new one closes any
/// prior instance first.
#[derive(Debug, Default)]
pub struct LiveChannel {
    task: Option<JoinHandle<()>>,
}

impl LiveChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `channel`, aborting the previous instance if one is live.
    pub fn replace(&mut self, channel: EventChannel) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!(event = "console.stream.previous_instance_closed");
        }
        self.task = Some(tokio::spawn(channel.run()));
    }

    /// Abort the live instance, if any.
    pub fn shutdown(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_live(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for LiveChannel {
    fn drop(&mut self) {
        self.shutdown();
    }
}
