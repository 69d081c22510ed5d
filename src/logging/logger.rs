//! Named logger with an ordered set of handlers.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Local;

use super::format::Record;
use super::handler::{Handler, HandlerKind};
use super::level::Level;

struct Inner {
    level: Level,
    handlers: Vec<Handler>,
}

/// A named logger.
///
/// Handles are shared (`Arc<Logger>`) and interior-mutable: the registry and
/// the host can keep attaching handlers or adjusting the level after the
/// logger has been handed out. The lock also serializes the
/// check-then-attach sequence, so concurrent first-time setup cannot produce
/// duplicate managed handlers.
pub struct Logger {
    name: String,
    inner: Mutex<Inner>,
}

impl Logger {
    pub(crate) fn new(name: impl Into<String>, level: Level) -> Self {
        Self {
            name: name.into(),
            inner: Mutex::new(Inner {
                level,
                handlers: Vec::new(),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Level {
        self.lock().level
    }

    pub fn set_level(&self, level: Level) {
        self.lock().level = level;
    }

    /// Emit a record to every handler whose threshold it clears.
    ///
    /// Records below the logger minimum are dropped before any handler
    /// sees them.
    pub fn log(&self, level: Level, message: &str) {
        let mut inner = self.lock();
        if level < inner.level {
            return;
        }
        let record = Record {
            timestamp: Local::now(),
            logger: &self.name,
            level,
            message,
        };
        for handler in &mut inner.handlers {
            handler.emit(&record);
        }
    }

    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    pub fn warning(&self, message: &str) {
        self.log(Level::Warning, message);
    }

    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    pub fn critical(&self, message: &str) {
        self.log(Level::Critical, message);
    }

    /// Attach a host-provided handler unconditionally.
    ///
    /// Handlers added this way are unmanaged and never count toward the
    /// registry's de-duplication checks.
    pub fn add_handler(&self, handler: Handler) {
        self.lock().handlers.push(handler);
    }

    /// Attach a managed handler, honoring the de-duplication rule.
    ///
    /// With `unique` set, the handler is attached only when no managed
    /// handler of the same kind is present; existing handlers are never
    /// removed. Returns whether the handler was attached.
    pub(crate) fn attach_managed(&self, handler: Handler, unique: bool) -> bool {
        let handler = handler.into_managed();
        let mut inner = self.lock();
        if unique
            && inner
                .handlers
                .iter()
                .any(|h| h.is_managed() && h.kind() == handler.kind())
        {
            return false;
        }
        inner.handlers.push(handler);
        true
    }

    /// Total number of attached handlers, managed or not.
    pub fn handler_count(&self) -> usize {
        self.lock().handlers.len()
    }

    /// Number of managed handlers of the given kind.
    pub fn managed_handler_count(&self, kind: HandlerKind) -> usize {
        self.lock()
            .handlers
            .iter()
            .filter(|h| h.is_managed() && h.kind() == kind)
            .count()
    }

    // Logging must never panic the host; a poisoned lock is recovered.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &inner.level)
            .field("handlers", &inner.handlers.len())
            .finish()
    }
}
