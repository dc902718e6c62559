//! Error model for name resolution, configuration and payload rendering.

use thiserror::Error;

/// Result type used across the logging crates.
pub type LogResult<T> = Result<T, LogError>;

/// Failure raised synchronously to the caller of a logging helper.
///
/// None of these are retried or recovered internally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LogError {
    /// An argument was out of range (e.g. a stack depth below 1).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Walking back the requested number of frames ran past the outermost one.
    #[error("reached the call stack limit (depth {depth}, {available} frame(s) available)")]
    StackExhausted { depth: usize, available: usize },

    /// A payload held a value with no JSON or date/time representation.
    #[error("type {type_name} not serializable: {reason}")]
    NotSerializable { type_name: String, reason: String },

    /// A formatter template could not be compiled.
    #[error("invalid format template: {0}")]
    InvalidFormat(String),
}

impl LogError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_serializable(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::NotSerializable {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }
}
