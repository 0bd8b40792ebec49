//! Activity Events
//!
//! Entries shown in the TUI activity log, one per forwarded log record.

use crate::logging::LogLevel;
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub log_level: LogLevel,
    /// Module path that emitted the record, e.g. `student_admin::ui::views::list`.
    pub target: String,
    pub msg: String,
    pub timestamp: String,
}

impl Event {
    pub fn new(log_level: LogLevel, target: &str, msg: String) -> Self {
        Self {
            log_level,
            target: target.to_string(),
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Last segment of the target, used as a short source label.
    pub fn source(&self) -> &str {
        self.target.rsplit("::").next().unwrap_or(&self.target)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.log_level,
            self.timestamp,
            self.source(),
            self.msg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_is_last_path_segment() {
        let event = Event::new(
            LogLevel::Info,
            "student_admin::ui::views::list",
            "Loaded 3 students".to_string(),
        );
        assert_eq!(event.source(), "list");
        assert!(event.to_string().ends_with("list: Loaded 3 students"));

        let bare = Event::new(LogLevel::Info, "student_admin", String::new());
        assert_eq!(bare.source(), "student_admin");
    }
}
