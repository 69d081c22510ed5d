//! Settings loaded from environment variables.

use std::env;
use std::path::{Path, PathBuf};

use super::constants::{
    DEFAULT_LEVEL, DEFAULT_OUTPUT_DIR, ENV_APP_ROOT_KEY, ENV_DEFAULT_LEVEL_KEY, ENV_OUTPUT_DIR_KEY,
    ENV_PATH_KEY,
};
use crate::logging::Level;

/// Crate configuration.
///
/// Populated once at startup; fields not present in the environment keep
/// their compiled-in defaults. Absent or unparseable values are skipped
/// silently so a stray variable can never break logger setup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory log files are written to; resolved against `root_dir`
    /// when relative.
    pub output_dir: PathBuf,
    /// Minimum level for loggers created without an explicit level.
    pub default_level: Level,
    /// Root directory anchoring relative paths.
    pub root_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            default_level: DEFAULT_LEVEL,
            root_dir: PathBuf::from("."),
        }
    }
}

impl Settings {
    /// Load settings from environment variables.
    ///
    /// When `ENV_PATH` names a `.env` file, that file is loaded first;
    /// otherwise the conventional `.env` lookup runs. Both are best-effort
    /// and never fail the caller.
    pub fn from_env() -> Self {
        match env::var(ENV_PATH_KEY) {
            Ok(path) => {
                let _ = dotenvy::from_path(Path::new(&path));
            }
            Err(_) => {
                dotenvy::dotenv().ok();
            }
        }

        let defaults = Self::default();

        Self {
            output_dir: env::var(ENV_OUTPUT_DIR_KEY)
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            default_level: env::var(ENV_DEFAULT_LEVEL_KEY)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_level),
            root_dir: env::var(ENV_APP_ROOT_KEY)
                .map(PathBuf::from)
                .unwrap_or_else(|_| env::current_dir().unwrap_or(defaults.root_dir)),
        }
    }

    /// Output directory with a relative `output_dir` resolved against
    /// `root_dir`.
    pub fn resolved_output_dir(&self) -> PathBuf {
        if self.output_dir.is_absolute() {
            self.output_dir.clone()
        } else {
            self.root_dir.join(&self.output_dir)
        }
    }
}
