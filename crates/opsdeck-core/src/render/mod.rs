//! Renderer interface and chart handle bookkeeping.

pub mod handles;
pub mod types;

pub use handles::{ChartHandle, ChartKey, HandleTable, Series};
pub use types::{PanelSink, PanelUpdate};
