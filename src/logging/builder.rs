//! Logger construction: per-handler options and the `build_logger` surface.

use std::sync::Arc;

use super::format::RecordFormat;
use super::handler::FileMode;
use super::level::Level;
use super::logger::Logger;
use super::registry::LoggerRegistry;

/// Options for a managed console handler.
#[derive(Debug, Clone)]
pub struct ConsoleOptions {
    /// Severity threshold for this handler.
    pub level: Level,
    /// Message template, see [`RecordFormat`].
    pub message_template: String,
    /// Timestamp template (chrono strftime).
    pub time_format: String,
    /// De-duplication flag: attach only if no managed console handler
    /// exists yet.
    pub unique: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        let format = RecordFormat::default();
        Self {
            level: Level::Debug,
            message_template: format.message_template,
            time_format: format.time_format,
            unique: true,
        }
    }
}

impl ConsoleOptions {
    pub(crate) fn format(&self) -> RecordFormat {
        RecordFormat::new(&self.message_template, &self.time_format)
    }
}

/// Options for a managed file handler.
#[derive(Debug, Clone)]
pub struct FileOptions {
    pub level: Level,
    pub message_template: String,
    pub time_format: String,
    /// Explicit file stem; defaults to the logger name.
    pub file_name: Option<String>,
    /// Open mode, append by default.
    pub mode: FileMode,
    /// De-duplication flag, as in [`ConsoleOptions::unique`].
    pub unique: bool,
}

impl Default for FileOptions {
    fn default() -> Self {
        let format = RecordFormat::default();
        Self {
            level: Level::Debug,
            message_template: format.message_template,
            time_format: format.time_format,
            file_name: None,
            mode: FileMode::Append,
            unique: true,
        }
    }
}

impl FileOptions {
    pub(crate) fn format(&self) -> RecordFormat {
        RecordFormat::new(&self.message_template, &self.time_format)
    }
}

/// Builder for a named logger.
///
/// Console attachment is on by default with default options; file attachment
/// is off. `build` is idempotent when the de-duplication flags stay set:
/// calling it twice for the same name yields the same handler set.
#[derive(Debug)]
pub struct LoggerBuilder<'r> {
    registry: &'r LoggerRegistry,
    name: String,
    level: Level,
    console: Option<ConsoleOptions>,
    file: Option<FileOptions>,
}

impl<'r> LoggerBuilder<'r> {
    pub(crate) fn new(registry: &'r LoggerRegistry, name: &str) -> Self {
        Self {
            registry,
            name: name.to_string(),
            level: Level::Debug,
            console: Some(ConsoleOptions::default()),
            file: None,
        }
    }

    /// Minimum level for the logger itself (not the handlers).
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Replace the console handler options.
    pub fn console(mut self, options: ConsoleOptions) -> Self {
        self.console = Some(options);
        self
    }

    /// Skip console attachment entirely.
    pub fn no_console(mut self) -> Self {
        self.console = None;
        self
    }

    /// Request a file handler with the given options.
    pub fn file(mut self, options: FileOptions) -> Self {
        self.file = Some(options);
        self
    }

    /// Look up or create the logger, set its level, and attach the requested
    /// handlers. Never fails: file-handler problems degrade to a warning on
    /// the logger.
    pub fn build(self) -> Arc<Logger> {
        let logger = self.registry.get_or_create(&self.name);
        logger.set_level(self.level);
        if let Some(options) = &self.console {
            self.registry.attach_console_handler(&self.name, options);
        }
        if let Some(options) = &self.file {
            self.registry.attach_file_handler(&self.name, options);
        }
        logger
    }
}
