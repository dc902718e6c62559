//! Handlers: sinks that receive records and write them somewhere.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

use ctxlog_core::Level;

use crate::format::Formatter;
use crate::record::Record;

/// A sink for formatted records.
///
/// Each handler applies its own threshold on top of the logger's.
pub trait Handler: Send + Sync + fmt::Debug {
    fn level(&self) -> Level;

    fn handle(&self, record: &Record) -> io::Result<()>;
}

/// Writes one formatted line per record to a process stream.
pub struct StreamHandler {
    level: Level,
    formatter: Formatter,
    stream: Mutex<Box<dyn Write + Send>>,
}

impl StreamHandler {
    pub fn new(level: Level, formatter: Formatter, stream: Box<dyn Write + Send>) -> Self {
        Self {
            level,
            formatter,
            stream: Mutex::new(stream),
        }
    }

    pub fn stderr(level: Level, formatter: Formatter) -> Self {
        Self::new(level, formatter, Box::new(io::stderr()))
    }

    pub fn stdout(level: Level, formatter: Formatter) -> Self {
        Self::new(level, formatter, Box::new(io::stdout()))
    }
}

impl fmt::Debug for StreamHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamHandler")
            .field("level", &self.level)
            .field("format", &self.formatter.template())
            .finish_non_exhaustive()
    }
}

impl Handler for StreamHandler {
    fn level(&self) -> Level {
        self.level
    }

    fn handle(&self, record: &Record) -> io::Result<()> {
        let line = self.formatter.format(record);
        let mut stream = self.stream.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(stream, "{line}")?;
        stream.flush()
    }
}

/// A record together with the line its handler produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Captured {
    pub record: Record,
    pub line: String,
}

/// Shared in-memory buffer of captured records.
///
/// Clones share the same buffer, so a clone kept by the caller observes what
/// the logger wrote.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<Captured>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, captured: Captured) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(captured);
    }

    pub fn captured(&self) -> Vec<Captured> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn records(&self) -> Vec<Record> {
        self.captured().into_iter().map(|c| c.record).collect()
    }

    pub fn lines(&self) -> Vec<String> {
        self.captured().into_iter().map(|c| c.line).collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.captured().into_iter().map(|c| c.record.message).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

/// Handler backed by a [`MemorySink`].
#[derive(Debug)]
pub struct MemoryHandler {
    level: Level,
    formatter: Formatter,
    sink: MemorySink,
}

impl MemoryHandler {
    pub fn new(level: Level, formatter: Formatter, sink: MemorySink) -> Self {
        Self {
            level,
            formatter,
            sink,
        }
    }
}

impl Handler for MemoryHandler {
    fn level(&self) -> Level {
        self.level
    }

    fn handle(&self, record: &Record) -> io::Result<()> {
        self.sink.push(Captured {
            record: record.clone(),
            line: self.formatter.format(record),
        });
        Ok(())
    }
}
