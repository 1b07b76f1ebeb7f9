use serde_json::Value;

use crate::metrics::{self, MetricStore};
use crate::registry::Panel;
use crate::render::PanelUpdate;

/// Result of turning a raw payload into a typed panel update.
pub(crate) enum DecodeOutcome {
    Update(PanelUpdate),
    /// The backend answered 200 with an `{"error": ...}` shape. Treated
    /// as "no data available" for that one panel.
    ErrorShape,
    Failed(String),
}

/// Decode a fetched payload for its panel.
///
/// The stats payload is the one decode with a side effect: it feeds the
/// derived-metric store, once per cycle.
pub(crate) fn decode_panel(panel: Panel, value: Value, metrics: &mut MetricStore) -> DecodeOutcome {
    if let Some(object) = value.as_object()
        && object.get("error").is_some_and(|e| !e.is_null())
    {
        return DecodeOutcome::ErrorShape;
    }

    fn typed<T, F>(value: Value, wrap: F) -> DecodeOutcome
    where
        T: serde::de::DeserializeOwned,
        F: FnOnce(T) -> PanelUpdate,
    {
        match serde_json::from_value(value) {
            Ok(payload) => DecodeOutcome::Update(wrap(payload)),
            Err(e) => DecodeOutcome::Failed(e.to_string()),
        }
    }

    match panel {
        Panel::Status => typed(value, PanelUpdate::Status),
        Panel::Stats => match serde_json::from_value(value) {
            Ok(summary) => {
                let derived = metrics::observe_stats(metrics, &summary);
                DecodeOutcome::Update(PanelUpdate::Stats { summary, derived })
            }
            Err(e) => DecodeOutcome::Failed(e.to_string()),
        },
        Panel::Minimaps => typed(value, PanelUpdate::Minimaps),
        Panel::Schedule => typed(value, |jobs| PanelUpdate::Schedule { jobs, full: false }),
        Panel::ScheduleFull => typed(value, |jobs| PanelUpdate::Schedule { jobs, full: true }),
        Panel::Timeline => typed(value, PanelUpdate::Timeline),
        Panel::AccountPerformance => typed(value, PanelUpdate::AccountPerformance),
        Panel::Heatmap => typed(value, PanelUpdate::Heatmap),
        Panel::Funnel => typed(value, PanelUpdate::Funnel),
        Panel::Actions => typed(value, PanelUpdate::Actions),
        Panel::Conversations => typed(value, PanelUpdate::Conversations),
        Panel::Brain => typed(value, PanelUpdate::Brain),
        Panel::Performance => typed(value, PanelUpdate::Performance),
        Panel::Insights => typed(value, PanelUpdate::Insights),
        Panel::Opportunities => typed(value, PanelUpdate::Opportunities),
        Panel::Decisions => typed(value, PanelUpdate::Decisions),
        Panel::Communities => typed(value, PanelUpdate::Communities),
        Panel::TakeoverTargets => typed(value, PanelUpdate::TakeoverTargets),
        Panel::TakeoverRequests => typed(value, PanelUpdate::TakeoverRequests),
        Panel::Projects => typed(value, PanelUpdate::Projects),
        Panel::Accounts => typed(value, PanelUpdate::Accounts),
        Panel::Cookies => typed(value, PanelUpdate::Cookies),
        Panel::Server => typed(value, PanelUpdate::Server),
        Panel::Network => typed(value, PanelUpdate::Network),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_shape_detected() {
        let mut metrics = MetricStore::new();
        let outcome = decode_panel(Panel::Brain, json!({"error": "brain offline"}), &mut metrics);
        assert!(matches!(outcome, DecodeOutcome::ErrorShape));
    }

    #[test]
    fn test_null_error_field_is_not_an_error() {
        let mut metrics = MetricStore::new();
        let outcome = decode_panel(Panel::Brain, json!({"error": null}), &mut metrics);
        assert!(matches!(outcome, DecodeOutcome::Update(_)));
    }

    #[test]
    fn test_stats_decode_feeds_metric_store() {
        let mut metrics = MetricStore::new();
        let payload = json!({"total_actions": 120, "by_platform": {"reddit": 80}});
        let outcome = decode_panel(Panel::Stats, payload, &mut metrics);
        match outcome {
            DecodeOutcome::Update(PanelUpdate::Stats { summary, derived }) => {
                assert_eq!(summary.total_actions, 120);
                assert_eq!(derived.card("total").unwrap().value, 120);
            }
            _ => panic!("expected a stats update"),
        }
        assert_eq!(metrics.history("total"), vec![120.0]);
    }

    #[test]
    fn test_list_payload_decodes() {
        let mut metrics = MetricStore::new();
        let payload = json!([{"name": "scan", "seconds_until": 90}]);
        let outcome = decode_panel(Panel::Schedule, payload, &mut metrics);
        match outcome {
            DecodeOutcome::Update(PanelUpdate::Schedule { jobs, full }) => {
                assert_eq!(jobs.len(), 1);
                assert!(!full);
            }
            _ => panic!("expected a schedule update"),
        }
    }

    #[test]
    fn test_shape_mismatch_fails() {
        let mut metrics = MetricStore::new();
        let outcome = decode_panel(Panel::Schedule, json!("not a list"), &mut metrics);
        assert!(matches!(outcome, DecodeOutcome::Failed(_)));
    }
}
