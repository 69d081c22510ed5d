//! Crate-wide constants
//!
//! Centralized location for defaults and environment key names.

use crate::logging::Level;

// =============================================================================
// Record formatting
// =============================================================================

/// Default message template; placeholders are substituted per record
pub const DEFAULT_MESSAGE_TEMPLATE: &str = "{timestamp} | ({name}) [{level}] {message}";

/// Default timestamp format (chrono strftime), renders as `YYYY-MM-DD HH:MM:SS`
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// File output
// =============================================================================

/// Default directory for log files, relative to the configured root
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Extension appended to derived log file names
pub const LOG_FILE_EXTENSION: &str = "log";

// =============================================================================
// Levels
// =============================================================================

/// Default minimum level for freshly built loggers
pub const DEFAULT_LEVEL: Level = Level::Debug;

// =============================================================================
// Environment keys
// =============================================================================

/// Optional path to a `.env` file loaded before reading settings
pub const ENV_PATH_KEY: &str = "ENV_PATH";

/// Overrides the log output directory
pub const ENV_OUTPUT_DIR_KEY: &str = "LOG_OUTPUT_DIR";

/// Overrides the default minimum level (case-insensitive level name)
pub const ENV_DEFAULT_LEVEL_KEY: &str = "LOG_DEFAULT_LEVEL";

/// Overrides the root directory against which relative paths resolve
pub const ENV_APP_ROOT_KEY: &str = "APP_ROOT";
