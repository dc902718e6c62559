//! Logger handle.

use std::sync::Arc;

use ctxlog_core::{Level, LoggerName};

use crate::config::LoggerConfig;
use crate::handler::Handler;
use crate::record::Record;
use crate::registry::Shared;

#[derive(Debug)]
pub(crate) struct LoggerInner {
    name: LoggerName,
    level: Level,
    propagate: bool,
    handlers: Vec<Arc<dyn Handler>>,
}

impl LoggerInner {
    pub(crate) fn new(name: LoggerName, config: &LoggerConfig) -> Self {
        Self {
            name,
            level: config.level,
            propagate: config.propagate,
            handlers: vec![config.build_handler()],
        }
    }

    fn call_handlers(&self, record: &Record) {
        for handler in &self.handlers {
            if record.level < handler.level() {
                continue;
            }
            if let Err(err) = handler.handle(record) {
                tracing::warn!(logger = %self.name, error = %err, "log handler failed to write record");
            }
        }
    }
}

/// Handle to a registered logger. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
    registry: Arc<Shared>,
}

impl Logger {
    pub(crate) fn new(inner: Arc<LoggerInner>, registry: Arc<Shared>) -> Self {
        Self { inner, registry }
    }

    pub fn name(&self) -> &LoggerName {
        &self.inner.name
    }

    pub fn level(&self) -> Level {
        self.inner.level
    }

    pub fn propagates(&self) -> bool {
        self.inner.propagate
    }

    pub fn handler_count(&self) -> usize {
        self.inner.handlers.len()
    }

    /// Whether both handles refer to the same registered logger.
    pub fn same_logger(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn is_enabled_for(&self, level: Level) -> bool {
        level >= self.inner.level
    }

    /// Emit `message` at `level`; dropped below the logger's threshold.
    pub fn log(&self, level: Level, message: impl AsRef<str>) {
        if !self.is_enabled_for(level) {
            return;
        }
        let record = Record::new(level, self.inner.name.clone(), message.as_ref());
        self.dispatch(&record);
    }

    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.log(Level::Info, message);
    }

    pub fn warning(&self, message: impl AsRef<str>) {
        self.log(Level::Warning, message);
    }

    pub fn error(&self, message: impl AsRef<str>) {
        self.log(Level::Error, message);
    }

    pub fn critical(&self, message: impl AsRef<str>) {
        self.log(Level::Critical, message);
    }

    /// Own handlers first, then registered ancestors while propagation
    /// holds, then the `tracing` root.
    fn dispatch(&self, record: &Record) {
        self.inner.call_handlers(record);
        if !self.inner.propagate {
            return;
        }

        let mut parent = self.inner.name.parent();
        while let Some(name) = parent {
            if let Some(ancestor) = self.registry.lookup(&name) {
                ancestor.call_handlers(record);
                if !ancestor.propagate {
                    return;
                }
            }
            parent = name.parent();
        }

        ctxlog_observability::forward_to_root(record.level, record.name.as_str(), &record.message);
    }
}
