//! Derived-metric state: rolling sparkline history and trend deltas.

pub mod store;
pub mod types;

pub use store::{HISTORY_CAPACITY, MetricStore};
pub use types::{StatCard, StatsDerived, Trend, TrendDirection};

use crate::model::StatsSummary;

/// The single per-cycle observation point for the aggregate stats payload.
///
/// Records each present metric into the store and computes its trend
/// exactly once, honoring the store's read-with-side-effect contract.
pub fn observe_stats(store: &mut MetricStore, stats: &StatsSummary) -> StatsDerived {
    let mut cards = Vec::new();

    let mut observe = |key: &'static str, label: &'static str, value: u64| {
        store.record(key, value as f64);
        let trend = store.trend(key, value as f64);
        cards.push(StatCard {
            key,
            label,
            value,
            trend,
            history: store.history(key),
        });
    };

    observe("total", "Total 24h", stats.total_actions);
    if stats.by_platform.contains_key("reddit") {
        observe("reddit", "Reddit", stats.platform("reddit"));
    }
    if stats.by_platform.contains_key("telegram") {
        observe("telegram", "Telegram", stats.platform("telegram"));
    }
    if stats.opportunities.pending > 0 {
        observe("opps", "Opportunities", stats.opportunities.pending);
    }
    if stats.opportunities.acted > 0 {
        observe("acted", "Acted", stats.opportunities.acted);
    }
    if stats.action_type("comment") > 0 {
        observe("comments", "Comments", stats.action_type("comment"));
    }
    if stats.posts_combined() > 0 {
        observe("posts", "Posts", stats.posts_combined());
    }
    if let Some(efficiency) = stats.efficiency_percent() {
        observe("efficiency", "Efficiency", efficiency as u64);
    }

    StatsDerived { cards }
}
