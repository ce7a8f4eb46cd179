//! Diagnostic sinks: the side channel the calculators report through
//!
//! No calculator writes to a global logger directly. Each takes a
//! `&mut dyn DiagnosticSink`, so callers decide where the trace goes:
//!
//! - [`TracingSink`]: forwards to `tracing` events (palindrome default)
//! - [`ConsoleSink`]: bare lines on stderr (discount and BMI default)
//! - [`WriterSink`]: `<timestamp> - <LEVEL> - <message>` lines to any writer
//! - [`MemorySink`]: keeps records in memory for inspection
//! - [`NullSink`]: drops everything
//!
//! Nothing written to a sink changes a calculator's return value.

use std::io::Write;

use tracing::Level;

/// Target used for events forwarded by [`TracingSink`]
pub const TRACE_TARGET: &str = "calckit::diagnostics";

/// Receives diagnostic records emitted during a computation
pub trait DiagnosticSink {
    /// Record one message at the given severity
    fn record(&mut self, level: Level, message: &str);

    fn info(&mut self, message: &str) {
        self.record(Level::INFO, message);
    }

    fn debug(&mut self, message: &str) {
        self.record(Level::DEBUG, message);
    }

    fn error(&mut self, message: &str) {
        self.record(Level::ERROR, message);
    }
}

// ── Sinks ─────────────────────────────────────────────────

/// Forwards every record to the `tracing` subscriber installed by the caller
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&mut self, level: Level, message: &str) {
        match level {
            Level::ERROR => tracing::error!(target: TRACE_TARGET, "{}", message),
            Level::WARN => tracing::warn!(target: TRACE_TARGET, "{}", message),
            Level::INFO => tracing::info!(target: TRACE_TARGET, "{}", message),
            Level::DEBUG => tracing::debug!(target: TRACE_TARGET, "{}", message),
            Level::TRACE => tracing::trace!(target: TRACE_TARGET, "{}", message),
        }
    }
}

/// Human-readable console output: the message alone, on stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn record(&mut self, _level: Level, message: &str) {
        eprintln!("{}", message);
    }
}

/// Discards every record
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn record(&mut self, _level: Level, _message: &str) {}
}

/// A single captured record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub level: Level,
    pub message: String,
}

/// Collects records in emission order
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Vec<Record>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records, oldest first
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Messages only, oldest first
    pub fn messages(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.message.as_str()).collect()
    }

    /// Number of records at exactly `level`
    pub fn count(&self, level: Level) -> usize {
        self.records.iter().filter(|r| r.level == level).count()
    }

    /// True if any message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.records.iter().any(|r| r.message.contains(needle))
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn record(&mut self, level: Level, message: &str) {
        self.records.push(Record {
            level,
            message: message.to_string(),
        });
    }
}

/// Writes line-oriented records to any `Write` implementation
///
/// Line format: `2026-10-18 09:30:00,123 - INFO - message`.
/// Records more verbose than `max_level` are skipped.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    max_level: Level,
}

impl<W: Write> WriterSink<W> {
    /// Create a sink that keeps INFO and above
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            max_level: Level::INFO,
        }
    }

    /// Set the most verbose level written
    #[must_use]
    pub fn with_max_level(mut self, level: Level) -> Self {
        self.max_level = level;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticSink for WriterSink<W> {
    fn record(&mut self, level: Level, message: &str) {
        if level > self.max_level {
            return;
        }
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f");
        // Sink failures never reach the computation.
        let _ = writeln!(self.writer, "{} - {} - {}", timestamp, level, message);
    }
}
