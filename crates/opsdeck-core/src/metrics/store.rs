use std::collections::{HashMap, VecDeque};

use super::types::{Trend, TrendDirection};

/// Samples retained per metric key for sparkline rendering.
pub const HISTORY_CAPACITY: usize = 20;

/// Bounded rolling history per metric key plus previous-value tracking
/// for trend computation. Pure data structure, no I/O; mutated only from
/// the orchestration path.
#[derive(Debug, Default)]
pub struct MetricStore {
    history: HashMap<String, VecDeque<f64>>,
    previous: HashMap<String, f64>,
}

impl MetricStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` to `key`'s history, evicting the oldest sample once
    /// the buffer is at capacity. Buffers are created lazily on the first
    /// observation of a key.
    pub fn record(&mut self, key: &str, value: f64) {
        let buf = self.history.entry(key.to_string()).or_default();
        buf.push_back(value);
        while buf.len() > HISTORY_CAPACITY {
            buf.pop_front();
        }
    }

    /// Current buffer for `key`, oldest-first. Empty if never recorded.
    pub fn history(&self, key: &str) -> Vec<f64> {
        self.history
            .get(key)
            .map(|buf| buf.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Compare `current` against the last observed value for `key` and
    /// overwrite that entry with `current`.
    ///
    /// This is a read-with-side-effect: calling it twice with the same
    /// value yields `Flat` the second time. Callers must invoke it exactly
    /// once per observed value per key per cycle.
    ///
    /// Magnitude is `round(|delta| / previous * 100)`, and 0 when the
    /// previous value was 0.
    pub fn trend(&mut self, key: &str, current: f64) -> Trend {
        let previous = self.previous.insert(key.to_string(), current);
        let Some(prev) = previous else {
            return Trend::flat();
        };
        if prev == current {
            return Trend::flat();
        }
        let magnitude_percent = if prev > 0.0 {
            ((current - prev).abs() / prev * 100.0).round() as u32
        } else {
            0
        };
        let direction = if current > prev {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        };
        Trend {
            direction,
            magnitude_percent,
        }
    }

    /// Number of tracked metric keys.
    pub fn key_count(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_never_exceeds_capacity() {
        let mut store = MetricStore::new();
        for i in 0..50 {
            store.record("total", i as f64);
        }
        let history = store.history("total");
        assert_eq!(history.len(), HISTORY_CAPACITY);
        // Oldest evicted first: the buffer holds the most recent 20.
        assert_eq!(history[0], 30.0);
        assert_eq!(history[19], 49.0);
    }

    #[test]
    fn test_history_unknown_key_is_empty() {
        let store = MetricStore::new();
        assert!(store.history("never").is_empty());
    }

    #[test]
    fn test_trend_first_observation_is_flat() {
        let mut store = MetricStore::new();
        assert_eq!(store.trend("total", 120.0), Trend::flat());
    }

    #[test]
    fn test_trend_overwrite_law() {
        let mut store = MetricStore::new();
        store.trend("total", 120.0);
        let first = store.trend("total", 150.0);
        assert_eq!(first.direction, TrendDirection::Up);
        // Same value again: the previous-value table was overwritten.
        let second = store.trend("total", 150.0);
        assert_eq!(second, Trend::flat());
    }

    #[test]
    fn test_trend_magnitude_rounds() {
        let mut store = MetricStore::new();
        store.trend("total", 120.0);
        let trend = store.trend("total", 150.0);
        assert_eq!(trend.direction, TrendDirection::Up);
        assert_eq!(trend.magnitude_percent, 25);
    }

    #[test]
    fn test_trend_down() {
        let mut store = MetricStore::new();
        store.trend("reddit", 80.0);
        let trend = store.trend("reddit", 60.0);
        assert_eq!(trend.direction, TrendDirection::Down);
        assert_eq!(trend.magnitude_percent, 25);
    }

    #[test]
    fn test_trend_zero_previous_has_no_magnitude() {
        let mut store = MetricStore::new();
        store.trend("opps", 0.0);
        let trend = store.trend("opps", 10.0);
        assert_eq!(trend.direction, TrendDirection::Up);
        assert_eq!(trend.magnitude_percent, 0);
    }
}
