use serde::{Deserialize, Serialize};

/// One managed community hub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Community {
    #[serde(alias = "name")]
    pub subreddit: String,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub setup_complete: bool,
    #[serde(default)]
    pub rules_count: u64,
    #[serde(default)]
    pub flair_count: u64,
    #[serde(default)]
    pub automod_configured: bool,
    #[serde(default)]
    pub sticky_post_1: bool,
    #[serde(default)]
    pub post_count: u64,
    #[serde(default)]
    pub subscribers: Option<u64>,
    /// created | claimed | pending
    #[serde(default)]
    pub ownership_type: Option<String>,
}

impl Community {
    /// Setup progress: each of rules, flair, automod and the first sticky
    /// post contributes a quarter until setup is marked complete.
    pub fn setup_percent(&self) -> u8 {
        if self.setup_complete {
            return 100;
        }
        let mut pct = 0;
        if self.rules_count > 0 {
            pct += 25;
        }
        if self.flair_count > 0 {
            pct += 25;
        }
        if self.automod_configured {
            pct += 25;
        }
        if self.sticky_post_1 {
            pct += 25;
        }
        pct
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TakeoverTarget {
    pub subreddit: String,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "score")]
    pub takeover_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TakeoverRequest {
    pub subreddit: String,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub account: Option<String>,
    /// pending | approved | denied
    #[serde(default)]
    pub status: Option<String>,
}
