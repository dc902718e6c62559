//! Severity levels.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Ordered severity: `Debug < Info < Warning < Error < Critical`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::Critical,
    ];

    /// Threshold used when nothing else is configured.
    ///
    /// Debug builds log everything; release builds start at `Info`.
    pub fn default_threshold() -> Self {
        if cfg!(debug_assertions) {
            Level::Debug
        } else {
            Level::Info
        }
    }

    /// Upper-case name as it appears in formatted lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }

    /// Closest `tracing` level. `tracing` has nothing above `ERROR`.
    pub fn as_tracing(self) -> tracing::Level {
        match self {
            Level::Debug => tracing::Level::DEBUG,
            Level::Info => tracing::Level::INFO,
            Level::Warning => tracing::Level::WARN,
            Level::Error | Level::Critical => tracing::Level::ERROR,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::default_threshold()
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
            "CRITICAL" | "FATAL" => Ok(Level::Critical),
            other => Err(LogError::invalid_argument(format!("unknown level: {other:?}"))),
        }
    }
}
