//! Log handlers: configured sinks attached to a logger.
//!
//! Two variants exist: console (standard error) and file. Each handler
//! carries its own severity threshold and `RecordFormat`, plus a `managed`
//! tag marking handlers created by this crate's setup routines. The tag is
//! what makes repeated setup idempotent: de-duplication only ever counts
//! managed handlers, so sinks a host application attached on its own are
//! left alone.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use super::format::{Record, RecordFormat};
use super::level::Level;
use crate::errors::{LogError, LogResult};

/// Handler variant, used for de-duplication membership tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    Console,
    File,
}

/// Open mode for file sinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileMode {
    /// Append to an existing file, creating it if missing.
    #[default]
    Append,
    /// Truncate any existing content on open.
    Truncate,
}

#[derive(Debug)]
enum Sink {
    Console,
    File(File),
}

/// A configured sink with its own threshold and formatting.
#[derive(Debug)]
pub struct Handler {
    sink: Sink,
    level: Level,
    format: RecordFormat,
    managed: bool,
}

impl Handler {
    /// Console handler writing formatted records to standard error.
    ///
    /// Handlers built through this constructor are unmanaged; the registry
    /// marks its own via [`Handler::into_managed`].
    pub fn console(level: Level, format: RecordFormat) -> Self {
        Self {
            sink: Sink::Console,
            level,
            format,
            managed: false,
        }
    }

    /// File handler appending (or truncating, per `mode`) UTF-8 lines.
    pub fn file(path: &Path, mode: FileMode, level: Level, format: RecordFormat) -> LogResult<Self> {
        let mut options = OpenOptions::new();
        options.create(true).write(true);
        match mode {
            FileMode::Append => options.append(true),
            FileMode::Truncate => options.truncate(true),
        };
        let file = options
            .open(path)
            .map_err(|source| LogError::open_log_file(path, source))?;

        Ok(Self {
            sink: Sink::File(file),
            level,
            format,
            managed: false,
        })
    }

    pub(crate) fn into_managed(mut self) -> Self {
        self.managed = true;
        self
    }

    pub fn kind(&self) -> HandlerKind {
        match self.sink {
            Sink::Console => HandlerKind::Console,
            Sink::File(_) => HandlerKind::File,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn is_managed(&self) -> bool {
        self.managed
    }

    /// Write one record if it clears this handler's threshold.
    ///
    /// Write errors are swallowed: emitting a log line must never take the
    /// host application down.
    pub(crate) fn emit(&mut self, record: &Record<'_>) {
        if record.level < self.level {
            return;
        }
        let line = self.format.render(record);
        let _ = match &mut self.sink {
            Sink::Console => writeln!(io::stderr(), "{line}"),
            Sink::File(file) => writeln!(file, "{line}"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_handler_is_unmanaged_by_default() {
        let handler = Handler::console(Level::Debug, RecordFormat::default());
        assert_eq!(handler.kind(), HandlerKind::Console);
        assert!(!handler.is_managed());
    }

    #[test]
    fn test_into_managed_sets_tag() {
        let handler = Handler::console(Level::Debug, RecordFormat::default()).into_managed();
        assert!(handler.is_managed());
    }

    #[test]
    fn test_file_handler_open_failure() {
        // A directory cannot be opened as a writable file.
        let tmp = tempfile::tempdir().unwrap();
        let result = Handler::file(
            tmp.path(),
            FileMode::Append,
            Level::Debug,
            RecordFormat::default(),
        );
        assert!(matches!(result, Err(LogError::OpenLogFile { .. })));
    }

    #[test]
    fn test_file_handler_append_mode_preserves_content() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("a.log");
        std::fs::write(&path, "existing\n").unwrap();

        let mut handler =
            Handler::file(&path, FileMode::Append, Level::Debug, RecordFormat::default()).unwrap();
        handler.emit(&Record {
            timestamp: chrono::Local::now(),
            logger: "a",
            level: Level::Info,
            message: "appended",
        });
        drop(handler);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("existing\n"));
        assert!(content.contains("appended"));
    }

    #[test]
    fn test_file_handler_truncate_mode_discards_content() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("b.log");
        std::fs::write(&path, "existing\n").unwrap();

        let handler =
            Handler::file(&path, FileMode::Truncate, Level::Debug, RecordFormat::default());
        assert!(handler.is_ok());
        drop(handler);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_emit_respects_threshold() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("c.log");
        let mut handler =
            Handler::file(&path, FileMode::Append, Level::Warning, RecordFormat::default())
                .unwrap();

        handler.emit(&Record {
            timestamp: chrono::Local::now(),
            logger: "c",
            level: Level::Info,
            message: "dropped",
        });
        handler.emit(&Record {
            timestamp: chrono::Local::now(),
            logger: "c",
            level: Level::Error,
            message: "kept",
        });
        drop(handler);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("dropped"));
        assert!(content.contains("kept"));
    }
}
