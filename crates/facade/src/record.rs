//! Log records.

use chrono::{DateTime, Local};
use ctxlog_core::{Level, LoggerName};
use serde::Serialize;

/// One emitted line before formatting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub level: Level,
    pub name: LoggerName,
    pub message: String,
    pub created: DateTime<Local>,
    pub process: u32,
}

impl Record {
    /// Stamp a record with the current time and process id.
    pub fn new(level: Level, name: LoggerName, message: impl Into<String>) -> Self {
        Self {
            level,
            name,
            message: message.into(),
            created: Local::now(),
            process: std::process::id(),
        }
    }
}
