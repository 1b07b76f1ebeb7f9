use serde::{Deserialize, Serialize};

/// Day-of-week x hour activity heatmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatmapSummary {
    #[serde(default)]
    pub grid: Vec<HeatCell>,
    #[serde(default = "default_max_count")]
    pub max_count: u64,
}

fn default_max_count() -> u64 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeatCell {
    /// 0 = Sunday.
    pub dow: u8,
    pub hour: u8,
    #[serde(default)]
    pub count: u64,
}

impl HeatmapSummary {
    pub fn count_at(&self, dow: u8, hour: u8) -> u64 {
        self.grid
            .iter()
            .find(|c| c.dow == dow && c.hour == hour)
            .map(|c| c.count)
            .unwrap_or(0)
    }

    /// Cell intensity in [0, 1] relative to the busiest cell.
    pub fn intensity(&self, dow: u8, hour: u8) -> f64 {
        let max = self.max_count.max(1);
        self.count_at(dow, hour) as f64 / max as f64
    }
}
