use serde::{Deserialize, Serialize};

/// Per-platform activity minimaps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MinimapSummary {
    #[serde(default)]
    pub reddit: Vec<SubredditActivity>,
    #[serde(default)]
    pub telegram: TelegramActivity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubredditActivity {
    pub subreddit: String,
    #[serde(default)]
    pub count_24h: u64,
    /// Warming stage: new, warming, established, trusted.
    #[serde(default)]
    pub stage: Option<String>,
}

/// Older backends report `by_type` instead of `groups`; both shapes
/// deserialize into the same list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelegramActivity {
    #[serde(default, alias = "by_type")]
    pub groups: Vec<GroupActivity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupActivity {
    #[serde(default, alias = "type", alias = "group")]
    pub name: Option<String>,
    #[serde(default, alias = "messages")]
    pub count: u64,
}

impl GroupActivity {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}
