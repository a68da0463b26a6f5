//! Rolling Logger
//!
//! A `log` backend for browser apps. Records are mirrored to the console
//! and the most recent ones are kept in a fixed-size ring buffer so they
//! can be inspected after the fact.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// One captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl LogEntry {
    /// Console line, e.g. `12:00:01.250 WARN [catalog] HTTP error! status: 500`
    pub fn format_line(&self) -> String {
        format!(
            "{} {} [{}] {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Console logger with a bounded history
pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    entries: Mutex<VecDeque<LogEntry>>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            entries: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Append an entry, evicting the oldest once full
    pub fn push(&self, entry: LogEntry) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Snapshot of buffered entries, oldest first
    pub fn recent(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        emit(&entry);
        self.push(entry);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn emit(entry: &LogEntry) {
    let line = entry.format_line().into();
    match entry.level {
        Level::Error => web_sys::console::error_1(&line),
        Level::Warn => web_sys::console::warn_1(&line),
        Level::Info => web_sys::console::info_1(&line),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(entry: &LogEntry) {
    eprintln!("{}", entry.format_line());
}

/// Install the global logger. Fails if a logger is already set.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(logger.level());
    Ok(())
}

/// Buffered entries of the global logger (empty before `init`)
pub fn recent() -> Vec<LogEntry> {
    LOGGER.get().map(RollingLogger::recent).unwrap_or_default()
}
