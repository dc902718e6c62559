//! `ctxlog` — named loggers derived from call-site context.
//!
//! Loggers live in a [`LoggerRegistry`] keyed by dot-delimited name. Each one
//! gets one handler, a level and a propagation flag from a [`LoggerConfig`]
//! the first time its name is acquired. Names come from explicit call sites:
//!
//! ```
//! fn run() -> ctxlog::Logger {
//!     ctxlog::class_logger!("TestClass")
//! }
//! assert_eq!(run().name().as_str(), "TestClass.run");
//! ```
//!
//! Structured payloads are logged as a text line followed by canonical JSON
//! (see [`json`] and [`structured`]).

pub mod config;
pub mod format;
pub mod handler;
pub mod json;
pub mod logger;
pub mod record;
pub mod registry;
pub mod structured;

mod macros;

pub use config::{LoggerConfig, Sink};
pub use ctxlog_core::{
    CallSite, CallStack, Level, LogError, LogResult, LoggerName, function_name, resolve_name,
};
pub use format::{DEFAULT_FORMAT, Formatter};
pub use handler::{Captured, Handler, MemoryHandler, MemorySink, StreamHandler};
pub use logger::Logger;
pub use record::Record;
pub use registry::LoggerRegistry;
pub use structured::{
    log_critical, log_debug, log_error, log_info, log_structured, log_structured_with,
    log_warning,
};

/// Logger registered under `name` in the process registry.
pub fn get_logger(name: impl Into<LoggerName>) -> Logger {
    get_logger_with(name, LoggerConfig::process_default())
}

pub fn get_logger_with(name: impl Into<LoggerName>, config: &LoggerConfig) -> Logger {
    LoggerRegistry::global().get_or_create(name, config)
}

/// Logger named after the calling function only.
///
/// See [`default_logger!`] for the form that fills in `function`.
pub fn get_default_logger(function: &str) -> Logger {
    get_logger(CallSite::new(function).logger_name())
}

pub fn get_default_logger_with(function: &str, config: &LoggerConfig) -> Logger {
    get_logger_with(CallSite::new(function).logger_name(), config)
}

/// Logger named `module.class.function` (module optional).
///
/// See [`class_logger!`] for the form that fills in `function`.
pub fn get_class_logger(class_name: &str, module_name: Option<&str>, function: &str) -> Logger {
    get_class_logger_with(class_name, module_name, function, LoggerConfig::process_default())
}

pub fn get_class_logger_with(
    class_name: &str,
    module_name: Option<&str>,
    function: &str,
    config: &LoggerConfig,
) -> Logger {
    let site = CallSite::new(function)
        .with_module(module_name)
        .with_class(Some(class_name));
    get_logger_with(site.logger_name(), config)
}
