use super::buffer::BoundedLog;
use super::types::{LogLevel, LogRecord, Notice};

/// Capacity of the server-log display buffer.
pub const SERVER_LOG_CAPACITY: usize = 200;
/// Capacity of the activity-feed display buffer.
pub const ACTIVITY_FEED_CAPACITY: usize = 250;

/// In-memory state fed by the live event channel: a running counter and
/// two independently bounded display buffers.
#[derive(Debug)]
pub struct EventFeed {
    counter: u64,
    server_log: BoundedLog,
    activity_feed: BoundedLog,
}

impl Default for EventFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl EventFeed {
    pub fn new() -> Self {
        Self {
            counter: 0,
            server_log: BoundedLog::new(SERVER_LOG_CAPACITY),
            activity_feed: BoundedLog::new(ACTIVITY_FEED_CAPACITY),
        }
    }

    /// Ingest one inbound record: bump the counter, append to both
    /// buffers, and raise a notice when the record is a user-facing
    /// error (highest severity and the `ERR` category).
    pub fn ingest(&mut self, record: LogRecord) -> Option<Notice> {
        self.counter += 1;
        self.server_log.push(record.clone());
        self.activity_feed.push(record.clone());

        if record.level == LogLevel::Error && record.cat.as_deref() == Some("ERR") {
            let message: String = record.msg.chars().take(80).collect();
            return Some(Notice { message });
        }
        None
    }

    /// Total records seen this session, including evicted ones.
    pub fn count(&self) -> u64 {
        self.counter
    }

    pub fn server_log(&self) -> &BoundedLog {
        &self.server_log
    }

    pub fn activity_feed(&self) -> &BoundedLog {
        &self.activity_feed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(level: LogLevel, cat: Option<&str>, msg: &str) -> LogRecord {
        LogRecord {
            ts: "12:00:00".to_string(),
            level,
            msg: msg.to_string(),
            cat: cat.map(String::from),
        }
    }

    #[test]
    fn test_counter_counts_evicted_records() {
        let mut feed = EventFeed::new();
        for i in 0..260 {
            feed.ingest(record(LogLevel::Info, None, &format!("m{i}")));
        }
        assert_eq!(feed.count(), 260);
        assert_eq!(feed.activity_feed().len(), ACTIVITY_FEED_CAPACITY);
        assert_eq!(feed.server_log().len(), SERVER_LOG_CAPACITY);
        // Capacity-250 buffer retains the most recent 250.
        assert_eq!(feed.activity_feed().iter().next().unwrap().msg, "m10");
    }

    #[test]
    fn test_user_facing_error_raises_notice() {
        let mut feed = EventFeed::new();
        let notice = feed.ingest(record(LogLevel::Error, Some("ERR"), "reddit post failed"));
        assert_eq!(
            notice,
            Some(Notice {
                message: "reddit post failed".to_string()
            })
        );
    }

    #[test]
    fn test_internal_error_is_silent() {
        let mut feed = EventFeed::new();
        assert!(feed.ingest(record(LogLevel::Error, Some("SYS"), "x")).is_none());
        assert!(feed.ingest(record(LogLevel::Error, None, "x")).is_none());
        assert!(feed.ingest(record(LogLevel::Warning, Some("ERR"), "x")).is_none());
    }

    #[test]
    fn test_notice_message_truncated() {
        let mut feed = EventFeed::new();
        let long = "x".repeat(200);
        let notice = feed.ingest(record(LogLevel::Error, Some("ERR"), &long)).unwrap();
        assert_eq!(notice.message.len(), 80);
    }
}
