//! Static view registry: which fetches feed which panels per view.
//!
//! The table is fixed. Completeness is the only contract: every view maps
//! to a non-empty fetch set, and unknown view names are rejected at the
//! parse boundary (`View::parse`) before they can reach the orchestrator.

use serde::{Deserialize, Serialize};

/// The dashboard views an operator can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Command,
    Activity,
    Intel,
    Communities,
    Manage,
    Server,
    Network,
}

impl View {
    pub const ALL: [View; 7] = [
        View::Command,
        View::Activity,
        View::Intel,
        View::Communities,
        View::Manage,
        View::Server,
        View::Network,
    ];

    /// Parse a user-supplied view name. `None` for unknown names; this is
    /// the loud-fail point that keeps unknown views out of the cycle.
    pub fn parse(name: &str) -> Option<View> {
        match name {
            "command" => Some(View::Command),
            "activity" => Some(View::Activity),
            "intel" => Some(View::Intel),
            "communities" => Some(View::Communities),
            "manage" => Some(View::Manage),
            "server" => Some(View::Server),
            "network" => Some(View::Network),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Command => "command",
            View::Activity => "activity",
            View::Intel => "intel",
            View::Communities => "communities",
            View::Manage => "manage",
            View::Server => "server",
            View::Network => "network",
        }
    }
}

/// One display panel. Each panel consumes exactly one payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Status,
    Stats,
    Minimaps,
    Schedule,
    Timeline,
    AccountPerformance,
    Heatmap,
    Funnel,
    Actions,
    Conversations,
    Brain,
    Performance,
    Insights,
    Opportunities,
    Decisions,
    Communities,
    TakeoverTargets,
    TakeoverRequests,
    Projects,
    Accounts,
    Cookies,
    Server,
    ScheduleFull,
    Network,
}

/// One entry in a view's fetch set.
#[derive(Debug, Clone, Copy)]
pub struct Fetch {
    pub panel: Panel,
    pub path: &'static str,
    /// Optional fetches fail entirely silently; the rest degrade to an
    /// explicit empty-state dispatch.
    pub optional: bool,
}

const fn required(panel: Panel, path: &'static str) -> Fetch {
    Fetch {
        panel,
        path,
        optional: false,
    }
}

const fn optional(panel: Panel, path: &'static str) -> Fetch {
    Fetch {
        panel,
        path,
        optional: true,
    }
}

/// Fetched at the start of every cycle, before any view-specific payload.
pub const STATUS_PATH: &str = "/api/status";

static COMMAND_PLAN: &[Fetch] = &[
    required(Panel::Stats, "/api/stats"),
    required(Panel::Minimaps, "/api/minimaps"),
    required(Panel::Schedule, "/api/schedule"),
    required(Panel::Timeline, "/api/history?hours=168"),
    required(Panel::AccountPerformance, "/api/accounts/reddit/performance"),
    optional(Panel::Heatmap, "/api/heatmap"),
    optional(Panel::Funnel, "/api/funnel"),
];

static ACTIVITY_PLAN: &[Fetch] = &[
    required(Panel::Actions, "/api/actions?limit=50"),
    required(Panel::Conversations, "/api/conversations"),
];

static INTEL_PLAN: &[Fetch] = &[
    required(Panel::Brain, "/api/brain"),
    required(Panel::Performance, "/api/performance"),
    required(Panel::Insights, "/api/insights"),
    required(Panel::Opportunities, "/api/opportunities?limit=25"),
    optional(Panel::Decisions, "/api/decisions?hours=4&limit=40"),
];

static COMMUNITIES_PLAN: &[Fetch] = &[
    required(Panel::Communities, "/api/communities"),
    required(Panel::TakeoverTargets, "/api/takeover/targets"),
    required(Panel::TakeoverRequests, "/api/takeover/requests"),
];

static MANAGE_PLAN: &[Fetch] = &[
    required(Panel::Projects, "/api/projects"),
    required(Panel::Accounts, "/api/accounts"),
    required(Panel::Cookies, "/api/cookies"),
];

static SERVER_PLAN: &[Fetch] = &[
    required(Panel::Server, "/api/server"),
    required(Panel::ScheduleFull, "/api/schedule"),
];

static NETWORK_PLAN: &[Fetch] = &[optional(Panel::Network, "/api/network")];

/// The ordered fetch set for a view.
pub fn fetch_plan(view: View) -> &'static [Fetch] {
    match view {
        View::Command => COMMAND_PLAN,
        View::Activity => ACTIVITY_PLAN,
        View::Intel => INTEL_PLAN,
        View::Communities => COMMUNITIES_PLAN,
        View::Manage => MANAGE_PLAN,
        View::Server => SERVER_PLAN,
        View::Network => NETWORK_PLAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_view_has_a_non_empty_plan() {
        for view in View::ALL {
            assert!(
                !fetch_plan(view).is_empty(),
                "view {} has an empty fetch plan",
                view.as_str()
            );
        }
    }

    #[test]
    fn test_parse_round_trips() {
        for view in View::ALL {
            assert_eq!(View::parse(view.as_str()), Some(view));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(View::parse("cockpit"), None);
        assert_eq!(View::parse(""), None);
    }

    #[test]
    fn test_command_plan_order() {
        let plan = fetch_plan(View::Command);
        assert_eq!(plan[0].panel, Panel::Stats);
        assert!(plan.iter().any(|f| f.panel == Panel::Heatmap && f.optional));
    }

    #[test]
    fn test_panels_unique_within_each_plan() {
        for view in View::ALL {
            let plan = fetch_plan(view);
            for (i, a) in plan.iter().enumerate() {
                for b in &plan[i + 1..] {
                    assert_ne!(a.panel, b.panel, "duplicate panel in {}", view.as_str());
                }
            }
        }
    }
}
