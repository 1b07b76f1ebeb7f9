use serde::{Deserialize, Serialize};

/// Direction of change against the previously observed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

/// Signed-direction trend with a rounded percentage magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    pub direction: TrendDirection,
    pub magnitude_percent: u32,
}

impl Trend {
    pub fn flat() -> Self {
        Self {
            direction: TrendDirection::Flat,
            magnitude_percent: 0,
        }
    }
}

/// One derived stat card: current value, trend arrow and sparkline history.
#[derive(Debug, Clone)]
pub struct StatCard {
    pub key: &'static str,
    pub label: &'static str,
    pub value: u64,
    pub trend: Trend,
    pub history: Vec<f64>,
}

/// Everything the stats renderer needs beyond the raw payload.
#[derive(Debug, Clone, Default)]
pub struct StatsDerived {
    pub cards: Vec<StatCard>,
}

impl StatsDerived {
    pub fn card(&self, key: &str) -> Option<&StatCard> {
        self.cards.iter().find(|c| c.key == key)
    }
}
