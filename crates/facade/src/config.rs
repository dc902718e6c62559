//! Per-logger configuration applied once, when a name is first registered.

use std::sync::{Arc, OnceLock};

use ctxlog_core::{Level, LogResult};

use crate::format::Formatter;
use crate::handler::{Handler, MemoryHandler, MemorySink, StreamHandler};

/// Overrides the default threshold (e.g. `CTXLOG_LEVEL=warning`).
pub const LEVEL_ENV: &str = "CTXLOG_LEVEL";
/// Overrides the default line template.
pub const FORMAT_ENV: &str = "CTXLOG_FORMAT";

/// Where a logger's handler writes.
#[derive(Debug, Clone, Default)]
pub enum Sink {
    #[default]
    Stderr,
    Stdout,
    Memory(MemorySink),
}

/// Level, propagation and format policy for a named logger.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: Level,
    /// Forward records to ancestor loggers. Off by default so that a root
    /// subscriber does not print every line twice.
    pub propagate: bool,
    pub format: Formatter,
    pub sink: Sink,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Level::default_threshold(),
            propagate: false,
            format: Formatter::default(),
            sink: Sink::default(),
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with `CTXLOG_LEVEL` / `CTXLOG_FORMAT` applied.
    ///
    /// An unset or invalid value keeps the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(LEVEL_ENV) {
            match raw.parse::<Level>() {
                Ok(level) => config.level = level,
                Err(err) => tracing::warn!(%err, "ignoring {LEVEL_ENV}"),
            }
        }

        if let Some(raw) = lookup(FORMAT_ENV) {
            match Formatter::new(&raw) {
                Ok(format) => config.format = format,
                Err(err) => tracing::warn!(%err, "ignoring {FORMAT_ENV}"),
            }
        }

        config
    }

    /// Configuration used by the free-function constructors.
    ///
    /// Read from the environment once per process.
    pub fn process_default() -> &'static LoggerConfig {
        static DEFAULT: OnceLock<LoggerConfig> = OnceLock::new();
        DEFAULT.get_or_init(LoggerConfig::from_env)
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_propagate(mut self, propagate: bool) -> Self {
        self.propagate = propagate;
        self
    }

    /// Compile and use `template`; fails with `InvalidFormat` on a bad template.
    pub fn with_format(mut self, template: &str) -> LogResult<Self> {
        self.format = Formatter::new(template)?;
        Ok(self)
    }

    pub fn with_sink(mut self, sink: Sink) -> Self {
        self.sink = sink;
        self
    }

    pub(crate) fn build_handler(&self) -> Arc<dyn Handler> {
        let format = self.format.clone();
        match &self.sink {
            Sink::Stderr => Arc::new(StreamHandler::stderr(self.level, format)),
            Sink::Stdout => Arc::new(StreamHandler::stdout(self.level, format)),
            Sink::Memory(sink) => Arc::new(MemoryHandler::new(self.level, format, sink.clone())),
        }
    }
}
