// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, macros::format_description};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogSeverity {
    Info,
    Error,
}

impl LogSeverity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub message: String,
    pub severity: LogSeverity,
    pub timestamp: String,
}

/// Append-only session log shown in the UI. Every append is also mirrored to
/// the tracing channel. Entries are never removed; a session is short-lived
/// enough that no size bound is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: impl Into<String>) {
        self.push(message.into(), LogSeverity::Info);
    }

    pub fn append_error(&mut self, message: impl Into<String>) {
        self.push(message.into(), LogSeverity::Error);
    }

    fn push(&mut self, message: String, severity: LogSeverity) {
        match severity {
            LogSeverity::Info => tracing::info!(target: "cotizador", "{message}"),
            LogSeverity::Error => tracing::error!(target: "cotizador", "{message}"),
        }
        self.entries.push(LogEntry {
            message,
            severity,
            timestamp: now_stamp(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn now_stamp() -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    OffsetDateTime::now_utc()
        .format(&format)
        .unwrap_or_else(|_| String::from("-"))
}

#[cfg(test)]
mod tests {
    use super::{EventLog, LogSeverity};

    #[test]
    fn appends_keep_call_order() {
        let mut log = EventLog::new();
        log.append("field updated: model = TM3");
        log.append_error("logo Primary failed to load");
        log.append("PDF saved");

        let messages: Vec<_> = log
            .entries()
            .iter()
            .map(|entry| entry.message.as_str())
            .collect();
        assert_eq!(
            messages,
            vec![
                "field updated: model = TM3",
                "logo Primary failed to load",
                "PDF saved",
            ],
        );
        assert_eq!(log.entries()[1].severity, LogSeverity::Error);
    }

    #[test]
    fn entries_carry_timestamps() {
        let mut log = EventLog::new();
        log.append("start");
        assert_eq!(log.len(), 1);
        assert!(!log.entries()[0].timestamp.is_empty());
    }
}
