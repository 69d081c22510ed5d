//! Named-logger registry with idempotent handler setup.
//!
//! The entry point is [`LoggerRegistry::global`] (or a standalone
//! [`LoggerRegistry`]) together with the [`crate::build_logger`] shorthand.
//! Repeated setup calls for the same name are safe: managed handlers are
//! de-duplicated per kind.

mod builder;
mod format;
mod handler;
mod level;
mod logger;
mod registry;

pub use builder::{ConsoleOptions, FileOptions, LoggerBuilder};
pub use format::RecordFormat;
pub use handler::{FileMode, Handler, HandlerKind};
pub use level::Level;
pub use logger::Logger;
pub use registry::LoggerRegistry;
