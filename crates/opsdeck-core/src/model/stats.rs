use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregate 24h action statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsSummary {
    #[serde(default)]
    pub total_actions: u64,
    #[serde(default)]
    pub by_platform: BTreeMap<String, u64>,
    #[serde(default)]
    pub by_type: BTreeMap<String, u64>,
    #[serde(default)]
    pub opportunities: OpportunityCounts,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpportunityCounts {
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub acted: u64,
    #[serde(default)]
    pub expired: u64,
    #[serde(default)]
    pub rejected: u64,
}

impl OpportunityCounts {
    pub fn total(&self) -> u64 {
        self.pending + self.acted + self.expired + self.rejected
    }
}

impl StatsSummary {
    pub fn platform(&self, name: &str) -> u64 {
        self.by_platform.get(name).copied().unwrap_or(0)
    }

    pub fn action_type(&self, name: &str) -> u64 {
        self.by_type.get(name).copied().unwrap_or(0)
    }

    /// Posts and seeded posts are shown as one figure.
    pub fn posts_combined(&self) -> u64 {
        self.action_type("post") + self.action_type("seed_post")
    }

    /// Share of opportunities acted on, rounded to whole percent.
    ///
    /// `None` when there is no opportunity activity to score.
    pub fn efficiency_percent(&self) -> Option<u8> {
        let opps = &self.opportunities;
        if opps.pending == 0 && opps.acted == 0 {
            return None;
        }
        let total = opps.total();
        if total == 0 {
            return Some(0);
        }
        Some((opps.acted as f64 / total as f64 * 100.0).round() as u8)
    }
}

/// Per-account performance for the account health panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountPerformance {
    pub username: String,
    #[serde(default)]
    pub persona: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub cooldown_remaining: u64,
    #[serde(default)]
    pub has_reddit_session: bool,
    #[serde(default)]
    pub success_rate: f64,
    #[serde(default)]
    pub total_24h: u64,
    #[serde(default)]
    pub total_4h: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub posts: u64,
    #[serde(default)]
    pub upvotes: u64,
    #[serde(default)]
    pub subscribes: u64,
    #[serde(default)]
    pub subreddits_count: u64,
    #[serde(default)]
    pub subreddits_active: Vec<String>,
    #[serde(default)]
    pub cookie_age_hours: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_deserialize_partial() {
        let json = r#"{"total_actions":120,"by_platform":{"reddit":80,"telegram":40}}"#;
        let stats: StatsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_actions, 120);
        assert_eq!(stats.platform("reddit"), 80);
        assert_eq!(stats.platform("mastodon"), 0);
        assert_eq!(stats.opportunities.pending, 0);
    }

    #[test]
    fn test_efficiency_requires_activity() {
        let stats = StatsSummary::default();
        assert_eq!(stats.efficiency_percent(), None);
    }

    #[test]
    fn test_efficiency_percent_rounds() {
        let stats = StatsSummary {
            opportunities: OpportunityCounts {
                pending: 1,
                acted: 2,
                expired: 0,
                rejected: 0,
            },
            ..StatsSummary::default()
        };
        // 2 of 3 => 66.67 => 67
        assert_eq!(stats.efficiency_percent(), Some(67));
    }

    #[test]
    fn test_posts_combined() {
        let json = r#"{"by_type":{"post":3,"seed_post":2,"comment":10}}"#;
        let stats: StatsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(stats.posts_combined(), 5);
        assert_eq!(stats.action_type("comment"), 10);
    }
}
