//! Name → logger registry.
//!
//! Registration is create-if-absent: the first acquisition of a name builds
//! its handler from the supplied config, later acquisitions get the same
//! logger back untouched. Handlers never accumulate.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use ctxlog_core::LoggerName;

use crate::config::LoggerConfig;
use crate::logger::{Logger, LoggerInner};

#[derive(Debug, Default)]
pub(crate) struct Shared {
    loggers: Mutex<HashMap<LoggerName, Arc<LoggerInner>>>,
}

impl Shared {
    pub(crate) fn lookup(&self, name: &LoggerName) -> Option<Arc<LoggerInner>> {
        self.loggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }
}

/// Registry of named loggers.
///
/// Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct LoggerRegistry {
    shared: Arc<Shared>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry behind the free-function constructors.
    pub fn global() -> &'static LoggerRegistry {
        static GLOBAL: OnceLock<LoggerRegistry> = OnceLock::new();
        GLOBAL.get_or_init(LoggerRegistry::new)
    }

    /// Return the logger registered under `name`, registering it with
    /// `config` if absent.
    pub fn get_or_create(&self, name: impl Into<LoggerName>, config: &LoggerConfig) -> Logger {
        let name = name.into();
        let mut loggers = self
            .shared
            .loggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let inner = loggers
            .entry(name)
            .or_insert_with_key(|name| {
                tracing::debug!(logger = %name, level = %config.level, propagate = config.propagate, "registering logger");
                Arc::new(LoggerInner::new(name.clone(), config))
            })
            .clone();

        Logger::new(inner, Arc::clone(&self.shared))
    }

    /// Already-registered logger, without registering.
    pub fn get(&self, name: &LoggerName) -> Option<Logger> {
        self.shared
            .lookup(name)
            .map(|inner| Logger::new(inner, Arc::clone(&self.shared)))
    }

    pub fn contains(&self, name: &LoggerName) -> bool {
        self.shared.lookup(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.shared
            .loggers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
