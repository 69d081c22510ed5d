//! Record formatting.

use chrono::{DateTime, Local};

use super::level::Level;
use crate::config::{DEFAULT_MESSAGE_TEMPLATE, DEFAULT_TIME_FORMAT};

/// A single log record, borrowed from the emitting logger.
#[derive(Debug)]
pub(crate) struct Record<'a> {
    pub timestamp: DateTime<Local>,
    pub logger: &'a str,
    pub level: Level,
    pub message: &'a str,
}

/// Message and timestamp templates applied per handler.
///
/// The message template recognizes `{timestamp}`, `{name}`, `{level}` and
/// `{message}`; any other text is copied verbatim. The timestamp template is
/// a chrono strftime string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFormat {
    pub message_template: String,
    pub time_format: String,
}

impl Default for RecordFormat {
    fn default() -> Self {
        Self {
            message_template: DEFAULT_MESSAGE_TEMPLATE.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl RecordFormat {
    pub fn new(message_template: impl Into<String>, time_format: impl Into<String>) -> Self {
        Self {
            message_template: message_template.into(),
            time_format: time_format.into(),
        }
    }

    /// Render one record into a log line (without trailing newline).
    pub(crate) fn render(&self, record: &Record<'_>) -> String {
        let timestamp = record.timestamp.format(&self.time_format).to_string();
        self.message_template
            .replace("{timestamp}", &timestamp)
            .replace("{name}", record.logger)
            .replace("{level}", record.level.as_str())
            .replace("{message}", record.message)
    }
}
