//! Log severity levels.

use std::fmt;
use std::str::FromStr;

use crate::errors::LogError;

/// Severity of a log record, ordered from least to most severe.
///
/// Both loggers and handlers use a `Level` as a minimum threshold: records
/// below it are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Level {
    /// Uppercase display name, as rendered into log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARNING" | "WARN" => Ok(Level::Warning),
            "ERROR" => Ok(Level::Error),
            "CRITICAL" => Ok(Level::Critical),
            _ => Err(LogError::InvalidLevel(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("WARNING".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!(" Critical ".parse::<Level>().unwrap(), Level::Critical);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("verbose".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
    }

    #[test]
    fn test_display_uppercase() {
        assert_eq!(Level::Debug.to_string(), "DEBUG");
        assert_eq!(Level::Critical.to_string(), "CRITICAL");
    }
}
