//! Terminal log records.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Category of a log line; drives its color and audio cue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LogType {
    #[default]
    Info,
    Warning,
    Error,
    Success,
    System,
}

impl LogType {
    /// Whether pushing a line of this type sounds the error cue.
    pub fn is_alert(self) -> bool {
        matches!(self, Self::Error | Self::Warning)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Success => "SUCCESS",
            Self::System => "SYSTEM",
        }
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque identifier of a log entry, unique for the lifetime of the process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogId(u64);

// Global counter for generating unique IDs
static LOG_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

impl LogId {
    fn next() -> Self {
        Self(LOG_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "log-{}", self.0)
    }
}

/// A single timestamped line of the system log.
///
/// Entries are immutable once created. Presentation state such as the typing
/// reveal is tracked by views against [`LogEntry::id`], never stored here.
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub id: LogId,
    /// Wall-clock time of creation, `HH:MM:SS`.
    pub timestamp: String,
    /// Rendered verbatim; may contain newlines.
    pub message: String,
    pub kind: LogType,
}

impl LogEntry {
    pub fn new(timestamp: impl Into<String>, message: impl Into<String>, kind: LogType) -> Self {
        Self {
            id: LogId::next(),
            timestamp: timestamp.into(),
            message: message.into(),
            kind,
        }
    }
}

impl PartialEq for LogEntry {
    fn eq(&self, other: &Self) -> bool {
        // Only compare content, not ID
        self.timestamp == other.timestamp && self.message == other.message && self.kind == other.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids() {
        let a = LogEntry::new("12:00:00", "same", LogType::Info);
        let b = LogEntry::new("12:00:00", "same", LogType::Info);

        assert_ne!(a.id, b.id);
        assert_eq!(a, b);
    }

    #[test]
    fn test_alert_types() {
        assert!(LogType::Error.is_alert());
        assert!(LogType::Warning.is_alert());
        assert!(!LogType::Info.is_alert());
        assert!(!LogType::Success.is_alert());
        assert!(!LogType::System.is_alert());
    }

    #[test]
    fn test_message_keeps_whitespace() {
        let entry = LogEntry::new("08:15:00", "line one\n  line two", LogType::System);
        assert_eq!(entry.message, "line one\n  line two");
        assert_eq!(entry.kind.to_string(), "SYSTEM");
    }
}
