use serde::{Deserialize, Serialize};

/// One executed action in the activity feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRecord {
    #[serde(default, alias = "timestamp")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub action_type: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub subreddit: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
}

impl ActionRecord {
    /// Where the action landed: subreddit when known, generic target
    /// otherwise.
    pub fn location(&self) -> Option<&str> {
        self.subreddit.as_deref().or(self.target.as_deref())
    }
}

/// Direct messages and alerts for the conversations panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversationSummary {
    #[serde(default)]
    pub dms: Vec<DirectMessage>,
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectMessage {
    #[serde(default)]
    pub direction: String,
    pub username: String,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl DirectMessage {
    pub fn is_outbound(&self) -> bool {
        self.direction == "sent"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    #[serde(default)]
    pub timestamp: Option<String>,
    pub message: String,
}
