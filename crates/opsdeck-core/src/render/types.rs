use crate::metrics::StatsDerived;
use crate::model::{
    ActionRecord, AccountPerformance, AccountSummary, BrainSummary, Community,
    ConversationSummary, CookieStatus, DecisionRecord, FunnelSummary, HeatmapSummary,
    HistorySummary, InsightsSummary, MinimapSummary, NetworkGraph, Opportunity,
    PerformanceSummary, ProjectSummary, ScheduledJob, ServerSummary, StatsSummary, StatusSummary,
    TakeoverRequest, TakeoverTarget,
};
use crate::registry::Panel;

/// One typed dispatch from the orchestrator to a renderer.
///
/// `Unavailable` is the empty-state marker for a panel whose fetch failed
/// or decoded to an error shape; it never aborts the cycle.
#[derive(Debug, Clone)]
pub enum PanelUpdate {
    Status(StatusSummary),
    Stats {
        summary: StatsSummary,
        derived: StatsDerived,
    },
    Minimaps(MinimapSummary),
    Schedule {
        jobs: Vec<ScheduledJob>,
        full: bool,
    },
    Timeline(HistorySummary),
    AccountPerformance(Vec<AccountPerformance>),
    Heatmap(HeatmapSummary),
    Funnel(FunnelSummary),
    Actions(Vec<ActionRecord>),
    Conversations(ConversationSummary),
    Brain(BrainSummary),
    Performance(PerformanceSummary),
    Insights(InsightsSummary),
    Opportunities(Vec<Opportunity>),
    Decisions(Vec<DecisionRecord>),
    Communities(Vec<Community>),
    TakeoverTargets(Vec<TakeoverTarget>),
    TakeoverRequests(Vec<TakeoverRequest>),
    Projects(Vec<ProjectSummary>),
    Accounts(Vec<AccountSummary>),
    Cookies(Vec<CookieStatus>),
    Server(ServerSummary),
    Network(NetworkGraph),
    Unavailable {
        panel: Panel,
    },
}

impl PanelUpdate {
    /// The panel this update is addressed to.
    pub fn panel(&self) -> Panel {
        match self {
            PanelUpdate::Status(_) => Panel::Status,
            PanelUpdate::Stats { .. } => Panel::Stats,
            PanelUpdate::Minimaps(_) => Panel::Minimaps,
            PanelUpdate::Schedule { full: false, .. } => Panel::Schedule,
            PanelUpdate::Schedule { full: true, .. } => Panel::ScheduleFull,
            PanelUpdate::Timeline(_) => Panel::Timeline,
            PanelUpdate::AccountPerformance(_) => Panel::AccountPerformance,
            PanelUpdate::Heatmap(_) => Panel::Heatmap,
            PanelUpdate::Funnel(_) => Panel::Funnel,
            PanelUpdate::Actions(_) => Panel::Actions,
            PanelUpdate::Conversations(_) => Panel::Conversations,
            PanelUpdate::Brain(_) => Panel::Brain,
            PanelUpdate::Performance(_) => Panel::Performance,
            PanelUpdate::Insights(_) => Panel::Insights,
            PanelUpdate::Opportunities(_) => Panel::Opportunities,
            PanelUpdate::Decisions(_) => Panel::Decisions,
            PanelUpdate::Communities(_) => Panel::Communities,
            PanelUpdate::TakeoverTargets(_) => Panel::TakeoverTargets,
            PanelUpdate::TakeoverRequests(_) => Panel::TakeoverRequests,
            PanelUpdate::Projects(_) => Panel::Projects,
            PanelUpdate::Accounts(_) => Panel::Accounts,
            PanelUpdate::Cookies(_) => Panel::Cookies,
            PanelUpdate::Server(_) => Panel::Server,
            PanelUpdate::Network(_) => Panel::Network,
            PanelUpdate::Unavailable { panel } => *panel,
        }
    }
}

/// Consumer of panel updates.
///
/// Implementations must be idempotent display mutations: an update for a
/// panel that is no longer on screen must neither block nor error, and
/// applying the same update twice must be harmless. Updates within one
/// cycle arrive in settle order, except that the status update always
/// arrives first.
pub trait PanelSink {
    fn apply(&mut self, update: PanelUpdate);
}
