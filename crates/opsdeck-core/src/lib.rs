//! opsdeck-core: Core library for the opsdeck operations console
//!
//! This library implements the refresh/render orchestration engine behind
//! the console: an authenticated API gateway, a per-view fetch registry,
//! the cycle orchestrator, derived-metric state for sparklines and trends,
//! and the live event channel. It is used by the CLI.
//!
//! # Main Entry Points
//!
//! - [`session`] - Session lifecycle, login, token persistence
//! - [`orchestrator`] - The refresh cycle and its control handle
//! - [`api`] - Authenticated gateway over the platform REST API
//! - [`stream`] - Live event channel with bounded display buffers
//! - [`registry`] - Views and their fetch sets
//! - [`config`] - Configuration management

pub mod api;
pub mod config;
pub mod errors;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod orchestrator;
pub mod registry;
pub mod render;
pub mod session;
pub mod stream;

// Re-export commonly used types at crate root for convenience
pub use api::{ApiClient, ApiError, ControlAction, ControlOutcome, HttpExec, ReqwestExec};
pub use config::ConsoleConfig;
pub use metrics::{MetricStore, StatsDerived, Trend, TrendDirection};
pub use orchestrator::{CycleOutcome, CycleReport, Orchestrator, RefreshHandle};
pub use registry::{Fetch, Panel, View, fetch_plan};
pub use render::{PanelSink, PanelUpdate};
pub use session::{LoginGuard, Session, SessionError, SessionPhase, TokenStore};
pub use stream::{EventChannel, EventFeed, LiveChannel, LogLevel, LogRecord, Notice};

// Re-export logging initialization
pub use logging::init_logging;
