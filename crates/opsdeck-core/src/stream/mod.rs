//! Live event channel: streaming log records, bounded display buffers
//! and reconnection handling.

pub mod buffer;
pub mod channel;
pub mod feed;
pub mod types;

pub use buffer::BoundedLog;
pub use channel::{EventChannel, LiveChannel, build_stream_url};
pub use feed::{ACTIVITY_FEED_CAPACITY, EventFeed, SERVER_LOG_CAPACITY};
pub use types::{LogLevel, LogRecord, Notice};
