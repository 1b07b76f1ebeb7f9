use serde::{Deserialize, Serialize};

/// Relationship graph for the force-directed network panel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkGraph {
    #[serde(default)]
    pub nodes: Vec<NetworkNode>,
    #[serde(default)]
    pub links: Vec<NetworkLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkNode {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    /// Relationship warmth: noticed, engaged, warm, friend, advocate.
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub activity: Option<f64>,
    #[serde(default)]
    pub trust: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Account,
    Subreddit,
    Relationship,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkLink {
    pub source: String,
    pub target: String,
    #[serde(default = "default_link_value")]
    pub value: f64,
}

fn default_link_value() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_kind_parsing() {
        let json = r#"{"id":"a1","label":"@ada","type":"account"}"#;
        let node: NetworkNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind, NodeKind::Account);
    }

    #[test]
    fn test_unknown_node_kind() {
        let json = r#"{"id":"x","label":"?","type":"galaxy"}"#;
        let node: NetworkNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind, NodeKind::Unknown);
    }

    #[test]
    fn test_link_default_weight() {
        let json = r#"{"nodes":[],"links":[{"source":"a","target":"b"}]}"#;
        let graph: NetworkGraph = serde_json::from_str(json).unwrap();
        assert!((graph.links[0].value - 1.0).abs() < f64::EPSILON);
    }
}
