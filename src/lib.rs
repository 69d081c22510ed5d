//! logkit - Named-logger setup in one call
//!
//! A small utility crate with two pieces:
//!
//! - **logging**: a process-wide registry of named loggers. `build_logger`
//!   attaches at most one managed console handler and at most one managed
//!   file handler per name, so calling it repeatedly (from every module that
//!   wants a logger) never stacks duplicate sinks.
//! - **config**: typed settings loaded once from environment variables,
//!   optionally seeded from a `.env` file via `ENV_PATH`.
//!
//! # Usage
//!
//! ```no_run
//! // Minimal: console handler only, DEBUG and above.
//! let logger = logkit::build_logger("testlogger");
//! logger.info("testlogger");
//!
//! // With a file handler: writes <output_dir>/default.log as well.
//! let logger = logkit::builder("default")
//!     .file(logkit::FileOptions::default())
//!     .build();
//! logger.info("default");
//! ```

pub mod config;
pub mod errors;
pub mod logging;

// Re-export commonly used types at crate root
pub use config::Settings;
pub use errors::{LogError, LogResult};
pub use logging::{
    ConsoleOptions, FileMode, FileOptions, Handler, HandlerKind, Level, Logger, LoggerBuilder,
    LoggerRegistry, RecordFormat,
};

use std::sync::Arc;

/// Build a logger on the process-wide registry with default options:
/// DEBUG level, console handler attached, no file handler.
pub fn build_logger(name: &str) -> Arc<Logger> {
    LoggerRegistry::global().builder(name).build()
}

/// Start building a logger on the process-wide registry.
pub fn builder(name: &str) -> LoggerBuilder<'static> {
    LoggerRegistry::global().builder(name)
}
