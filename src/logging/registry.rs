//! Process-wide logger registry.

use std::collections::HashMap;
use std::fs;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use once_cell::sync::Lazy;

use super::builder::{ConsoleOptions, FileOptions, LoggerBuilder};
use super::handler::{Handler, HandlerKind};
use super::logger::Logger;
use crate::config::{Settings, LOG_FILE_EXTENSION};
use crate::errors::{LogError, LogResult};

static GLOBAL: Lazy<LoggerRegistry> =
    Lazy::new(|| LoggerRegistry::with_settings(Settings::from_env()));

/// Registry of named loggers.
///
/// Loggers are created lazily on first lookup and live for the registry's
/// lifetime. The process-wide instance behind [`LoggerRegistry::global`] is
/// initialized once from the environment; independent instances with
/// explicit [`Settings`] are supported for embedding and for tests.
pub struct LoggerRegistry {
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
    settings: Settings,
}

impl LoggerRegistry {
    /// The process-wide registry, configured from the environment on first
    /// use.
    pub fn global() -> &'static LoggerRegistry {
        &GLOBAL
    }

    /// A standalone registry with explicit settings.
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            loggers: Mutex::new(HashMap::new()),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Look up the named logger, creating it at the configured default level
    /// if absent. The returned handle is shared, not copied.
    pub fn get_or_create(&self, name: &str) -> Arc<Logger> {
        let mut loggers = self.lock();
        loggers
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Logger::new(name, self.settings.default_level)))
            .clone()
    }

    /// Start building a logger; see [`LoggerBuilder`].
    pub fn builder(&self, name: &str) -> LoggerBuilder<'_> {
        LoggerBuilder::new(self, name)
    }

    /// Attach a managed console handler to the named logger.
    ///
    /// Infallible: the console sink is always writable.
    pub fn attach_console_handler(&self, name: &str, options: &ConsoleOptions) {
        let logger = self.get_or_create(name);
        let handler = Handler::console(options.level, options.format());
        logger.attach_managed(handler, options.unique);
    }

    /// Attach a managed file handler to the named logger.
    ///
    /// The target path is `<output_dir>/<stem>.log`, where `stem` is the
    /// explicit file name from `options` or the logger name. The output
    /// directory is created on demand. Failures never propagate: the logger
    /// is left without a file handler and a warning-level notice goes to its
    /// existing handlers (silent when there are none).
    pub fn attach_file_handler(&self, name: &str, options: &FileOptions) {
        let logger = self.get_or_create(name);
        if let Err(err) = self.try_attach_file(&logger, options) {
            logger.warning(&format!("file handler unavailable: {err}"));
        }
    }

    fn try_attach_file(&self, logger: &Logger, options: &FileOptions) -> LogResult<()> {
        // Skip the filesystem work when a managed file handler is already in
        // place; attach_managed re-checks under the logger lock.
        if options.unique && logger.managed_handler_count(HandlerKind::File) > 0 {
            return Ok(());
        }

        let dir = self.settings.resolved_output_dir();
        fs::create_dir_all(&dir).map_err(|source| LogError::create_directory(&dir, source))?;

        let stem = options.file_name.as_deref().unwrap_or_else(|| logger.name());
        let path = dir.join(format!("{stem}.{LOG_FILE_EXTENSION}"));
        let handler = Handler::file(&path, options.mode, options.level, options.format())?;
        logger.attach_managed(handler, options.unique);
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<Logger>>> {
        self.loggers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for LoggerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerRegistry")
            .field("loggers", &self.lock().len())
            .field("settings", &self.settings)
            .finish()
    }
}
