//! Terminal formatting helpers for panel output.

use opsdeck_core::metrics::{Trend, TrendDirection};

/// Compact uptime: `42m`, `3h 12m`, `2d 5h`.
pub fn format_uptime(seconds: u64) -> String {
    if seconds < 3600 {
        format!("{}m", seconds / 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}

/// Countdown for scheduled jobs; negative means the scheduler is paused.
pub fn format_countdown(seconds: i64) -> String {
    if seconds < 0 {
        "paused".to_string()
    } else if seconds < 60 {
        format!("{seconds}s")
    } else if seconds < 3600 {
        format!("{}m", seconds / 60)
    } else {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    }
}

/// Trend marker: arrow plus magnitude when it is non-zero.
pub fn trend_marker(trend: &Trend) -> String {
    match trend.direction {
        TrendDirection::Flat => "━".to_string(),
        TrendDirection::Up if trend.magnitude_percent > 0 => {
            format!("▲{}%", trend.magnitude_percent)
        }
        TrendDirection::Up => "▲".to_string(),
        TrendDirection::Down if trend.magnitude_percent > 0 => {
            format!("▼{}%", trend.magnitude_percent)
        }
        TrendDirection::Down => "▼".to_string(),
    }
}

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Unicode sparkline scaled against the series maximum.
pub fn sparkline(values: &[f64]) -> String {
    if values.len() < 2 {
        return String::new();
    }
    let max = values.iter().cloned().fold(1.0_f64, f64::max);
    values
        .iter()
        .map(|v| {
            let idx = ((v / max) * (SPARK_LEVELS.len() - 1) as f64).round() as usize;
            SPARK_LEVELS[idx.min(SPARK_LEVELS.len() - 1)]
        })
        .collect()
}

/// Fixed-width horizontal bar for minimap rows.
pub fn bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    let mut out = String::with_capacity(width);
    for i in 0..width {
        out.push(if i < filled { '█' } else { '·' });
    }
    out
}
