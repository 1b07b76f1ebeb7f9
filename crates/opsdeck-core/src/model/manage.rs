use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_weight() -> f64 {
    1.0
}

/// One promoted project, as listed on the manage view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub actions_24h: u64,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

/// One platform account, as listed on the manage view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSummary {
    pub platform: String,
    pub username: String,
    #[serde(default)]
    pub persona: Option<String>,
    /// healthy | cooldown | warned | banned
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub total_24h: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub posts: u64,
}

/// Stored-cookie health for one account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookieStatus {
    pub platform: String,
    pub username: String,
    #[serde(default)]
    pub has_cookies: bool,
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub key_cookies: Vec<String>,
    #[serde(default)]
    pub size_kb: Option<u64>,
}
