//! Configuration management for the opsdeck console.

pub mod defaults;
pub mod loading;
pub mod types;

pub use loading::{console_dir, load, validate};
pub use types::{ConsoleConfig, LockoutConfig, RefreshConfig, StreamConfig};
