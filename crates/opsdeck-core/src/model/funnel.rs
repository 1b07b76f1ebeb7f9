use serde::{Deserialize, Serialize};

/// Opportunity conversion funnel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunnelSummary {
    #[serde(default)]
    pub stages: Vec<FunnelStage>,
    #[serde(default)]
    pub conversion_rate: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunnelStage {
    pub name: String,
    #[serde(default)]
    pub count: u64,
}

impl FunnelSummary {
    /// Per-stage conversion relative to the previous stage, rounded to
    /// whole percent. The first stage has no rate.
    pub fn stage_rates(&self) -> Vec<Option<u8>> {
        self.stages
            .iter()
            .enumerate()
            .map(|(i, stage)| {
                if i == 0 {
                    return None;
                }
                let prev = self.stages[i - 1].count;
                if prev == 0 {
                    return None;
                }
                Some((stage.count as f64 / prev as f64 * 100.0).round() as u8)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stage(name: &str, count: u64) -> FunnelStage {
        FunnelStage {
            name: name.to_string(),
            count,
        }
    }

    #[test]
    fn test_stage_rates() {
        let funnel = FunnelSummary {
            stages: vec![stage("found", 100), stage("scored", 40), stage("acted", 10)],
            conversion_rate: Some(0.1),
        };
        assert_eq!(funnel.stage_rates(), vec![None, Some(40), Some(25)]);
    }

    #[test]
    fn test_stage_rate_skips_zero_previous() {
        let funnel = FunnelSummary {
            stages: vec![stage("found", 0), stage("acted", 5)],
            conversion_rate: None,
        };
        assert_eq!(funnel.stage_rates(), vec![None, None]);
    }
}
