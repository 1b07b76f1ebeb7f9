use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Learning-state snapshot for the intel view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrainSummary {
    #[serde(default)]
    pub top_subreddits: Vec<SubredditEngagement>,
    #[serde(default)]
    pub promo_ratio: Option<f64>,
    #[serde(default)]
    pub best_tone: Option<String>,
    #[serde(default)]
    pub discoveries: u64,
    #[serde(default)]
    pub post_type_top: Vec<PostTypeStat>,
    #[serde(default)]
    pub sentiment: SentimentSummary,
    #[serde(default)]
    pub ab_tests: Vec<Experiment>,
    #[serde(default)]
    pub evolved_prompts: u64,
    #[serde(default)]
    pub llm_stats: Option<LlmStats>,
    #[serde(default)]
    pub relationships: RelationshipCounts,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentimentSummary {
    #[serde(default)]
    pub avg: f64,
    #[serde(default)]
    pub total_replies: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmStats {
    #[serde(default)]
    pub total_calls: u64,
    #[serde(default)]
    pub total_errors: u64,
    #[serde(default)]
    pub groq_rpd: u64,
    #[serde(default)]
    pub groq_limit: Option<u64>,
    #[serde(default)]
    pub creative_chain: Option<String>,
    /// Provider name -> seconds remaining disabled.
    #[serde(default)]
    pub disabled_providers: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelationshipCounts {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub friends: u64,
}

/// Self-assessed performance score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerformanceSummary {
    #[serde(default)]
    pub score: u64,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub total_actions: u64,
    #[serde(default)]
    pub components: BTreeMap<String, u64>,
    #[serde(default)]
    pub max_per_component: BTreeMap<String, u64>,
    #[serde(default)]
    pub improvements: Vec<String>,
}

impl PerformanceSummary {
    /// Component fill percentage against its configured maximum
    /// (20 when the backend omits the maximum).
    pub fn component_percent(&self, component: &str) -> u8 {
        let value = self.components.get(component).copied().unwrap_or(0);
        let max = self
            .max_per_component
            .get(component)
            .copied()
            .unwrap_or(20)
            .max(1);
        ((value as f64 / max as f64 * 100.0).round() as u64).min(100) as u8
    }
}

/// Engagement insights for the intel view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InsightsSummary {
    #[serde(default)]
    pub top_subreddits: Vec<SubredditEngagement>,
    #[serde(default)]
    pub best_tone: Option<String>,
    #[serde(default)]
    pub post_type_stats: Vec<PostTypeStat>,
    #[serde(default)]
    pub sentiment: Vec<ToneSentiment>,
    #[serde(default)]
    pub experiments: Vec<Experiment>,
    #[serde(default)]
    pub optimal_promo_ratio: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubredditEngagement {
    #[serde(default, alias = "name")]
    pub subreddit: Option<String>,
    #[serde(default, alias = "avg_eng")]
    pub avg_engagement: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostTypeStat {
    #[serde(default, alias = "type")]
    pub post_type: Option<String>,
    #[serde(default, alias = "avg_eng")]
    pub avg_engagement: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToneSentiment {
    #[serde(default)]
    pub tone: Option<String>,
    #[serde(default, alias = "avg_score")]
    pub avg_sentiment: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Experiment {
    #[serde(default, alias = "name")]
    pub variable: Option<String>,
    #[serde(default)]
    pub variant_a: String,
    #[serde(default)]
    pub variant_b: String,
    #[serde(default)]
    pub a_eng: f64,
    #[serde(default)]
    pub b_eng: f64,
    #[serde(default)]
    pub a_n: u64,
    #[serde(default)]
    pub b_n: u64,
}

/// One pending opportunity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    #[serde(default, alias = "relevance_score")]
    pub score: f64,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default, alias = "subreddit")]
    pub subreddit_or_query: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Opportunity {
    /// Short excerpt for list rendering: the title when present,
    /// otherwise the content, truncated to 80 characters.
    pub fn excerpt(&self) -> String {
        let text = self
            .title
            .as_deref()
            .or(self.content.as_deref())
            .unwrap_or("");
        text.chars().take(80).collect()
    }
}

/// One autonomy decision from the decision log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRecord {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default, alias = "type")]
    pub decision_type: Option<String>,
    #[serde(default, alias = "reasoning", alias = "reason")]
    pub details: Option<String>,
    #[serde(default, alias = "subreddit")]
    pub target: Option<String>,
}

/// Coarse decision category used to badge log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
    Selected,
    Rejected,
    RateLimited,
    Dedup,
    ResourceLow,
}

impl DecisionRecord {
    pub fn kind(&self) -> DecisionKind {
        let dtype = self
            .decision_type
            .as_deref()
            .unwrap_or("")
            .to_ascii_lowercase();
        if dtype.contains("select") {
            DecisionKind::Selected
        } else if dtype.contains("rate") {
            DecisionKind::RateLimited
        } else if dtype.contains("dedup") {
            DecisionKind::Dedup
        } else if dtype.contains("resource") {
            DecisionKind::ResourceLow
        } else {
            DecisionKind::Rejected
        }
    }
}
