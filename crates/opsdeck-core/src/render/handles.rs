use std::collections::HashMap;

/// Charts that keep an in-place-updated handle across refreshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKey {
    Actions,
    Timeline,
    Resources,
}

/// One named data series within a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<f64>,
}

/// A chart created once and updated in place on subsequent refreshes, so
/// visual continuity is preserved instead of destroy-and-recreate.
#[derive(Debug, Clone)]
pub struct ChartHandle {
    id: u64,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartHandle {
    /// Stable identity assigned at creation; survives data updates.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Replace the chart's data, keeping its identity.
    pub fn update(&mut self, labels: Vec<String>, series: Vec<Series>) {
        self.labels = labels;
        self.series = series;
    }
}

/// Per-visualization mutable handles, keyed by chart. Created on first
/// use, cleared wholesale on logout.
#[derive(Debug, Default)]
pub struct HandleTable {
    charts: HashMap<ChartKey, ChartHandle>,
    next_id: u64,
}

impl HandleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the handle for `key`, creating an empty one on first use.
    pub fn upsert(&mut self, key: ChartKey) -> &mut ChartHandle {
        self.charts.entry(key).or_insert_with(|| {
            self.next_id += 1;
            ChartHandle {
                id: self.next_id,
                labels: Vec::new(),
                series: Vec::new(),
            }
        })
    }

    pub fn get(&self, key: ChartKey) -> Option<&ChartHandle> {
        self.charts.get(&key)
    }

    /// Drop all handles. Called on session teardown.
    pub fn clear(&mut self) {
        self.charts.clear();
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}
