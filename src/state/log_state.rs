//! LogState - Dashboard log lines shown in the log panel

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Lines kept before the oldest are dropped
pub const LOG_CAPACITY: usize = 2000;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    pub fn color(&self) -> gpui::Rgba {
        match self {
            LogLevel::Debug => gpui::rgba(0x6b7280ff),
            LogLevel::Info => gpui::rgba(0x22c55eff),
            LogLevel::Warn => gpui::rgba(0xf59e0bff),
            LogLevel::Error => gpui::rgba(0xef4444ff),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: u64,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// Ring buffer of log lines
#[derive(Debug)]
pub struct LogState {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    next_id: u64,
}

impl LogState {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    /// Append a line, evicting the oldest when full; returns its id
    pub fn push(
        &mut self,
        level: LogLevel,
        message: impl Into<String>,
        timestamp: DateTime<Local>,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            id,
            level,
            message: message.into(),
            timestamp,
        });
        id
    }

    pub fn entries(&self) -> &VecDeque<LogEntry> {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lines at `level` or above
    pub fn count_at_least(&self, level: LogLevel) -> usize {
        self.entries.iter().filter(|e| e.level >= level).count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for LogState {
    fn default() -> Self {
        Self::new(LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_line_is_evicted() {
        let mut logs = LogState::new(2);
        logs.push(LogLevel::Info, "a", Local::now());
        logs.push(LogLevel::Info, "b", Local::now());
        let id = logs.push(LogLevel::Error, "c", Local::now());

        assert_eq!(id, 3);
        assert_eq!(logs.len(), 2);
        let messages: Vec<_> = logs.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["b", "c"]);
    }

    #[test]
    fn counts_by_severity() {
        let mut logs = LogState::default();
        logs.push(LogLevel::Debug, "d", Local::now());
        logs.push(LogLevel::Warn, "w", Local::now());
        logs.push(LogLevel::Error, "e", Local::now());
        assert_eq!(logs.count_at_least(LogLevel::Warn), 2);
        assert_eq!(logs.count_at_least(LogLevel::Debug), 3);
    }
}
