//! Payload contracts for the backend API.
//!
//! The backend returns loosely-shaped JSON with many optional fields.
//! Each endpoint gets an explicit optional-field struct here; fallback
//! field names the backend is known to emit are handled with
//! `#[serde(alias)]` rather than ad-hoc lookups at render time.

pub mod activity;
pub mod communities;
pub mod funnel;
pub mod heatmap;
pub mod intel;
pub mod manage;
pub mod minimaps;
pub mod network;
pub mod schedule;
pub mod server;
pub mod stats;
pub mod status;
pub mod timeline;

pub use activity::{ActionRecord, Alert, ConversationSummary, DirectMessage};
pub use communities::{Community, TakeoverRequest, TakeoverTarget};
pub use funnel::{FunnelStage, FunnelSummary};
pub use heatmap::{HeatCell, HeatmapSummary};
pub use intel::{
    BrainSummary, DecisionKind, DecisionRecord, InsightsSummary, Opportunity, PerformanceSummary,
};
pub use manage::{AccountSummary, CookieStatus, ProjectSummary};
pub use minimaps::{GroupActivity, MinimapSummary, SubredditActivity, TelegramActivity};
pub use network::{NetworkGraph, NetworkLink, NetworkNode, NodeKind};
pub use schedule::ScheduledJob;
pub use server::{ResourceSample, ServerSummary};
pub use stats::{AccountPerformance, OpportunityCounts, StatsSummary};
pub use status::{StatusIndicator, StatusSummary};
pub use timeline::{HistorySummary, HourlyPoint};
