//! Main logger implementation
//!
//! Configuration happens on a [`LoggerBuilder`] during single-threaded
//! startup; [`LoggerBuilder::build`] freezes it into a [`Logger`] whose sink
//! set and level gate never change again. The frozen logger is `Clone`,
//! `Send`, and `Sync`, so emission and [`Logger::child`] are safe from any
//! number of request workers without further coordination.

use std::fmt;
use std::io;
use std::path::Path;
use std::sync::Arc;

use super::error::Result;
use super::field::{FieldProvider, StaticField};
use super::format::ConsoleFormat;
use super::level::LogLevel;
use super::record::{Caller, Record};
use super::sink::Sink;
use crate::sinks::{ConsoleSink, FileSink, WriterSink};

/// Capability set shared by [`Logger`], the request-scoped logger, and the
/// no-op logger.
///
/// Call sites hold "a logger" through this trait and never need to care
/// whether anything is actually written. The provided level helpers capture
/// the call site via `#[track_caller]`; the emission macros pass their own
/// `file!()`/`line!()` location instead.
pub trait Log: Send + Sync {
    /// Emit one record at `level` with an already-formatted message.
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>, caller: Option<Caller>);

    /// Emit one error-severity record carrying the error description and,
    /// when given, an integer error code.
    fn log_error(&self, err: &dyn std::error::Error, code: Option<i64>, caller: Option<Caller>);

    #[track_caller]
    fn debug(&self, msg: &str) {
        self.log(LogLevel::Debug, format_args!("{}", msg), Some(Caller::here()));
    }

    #[track_caller]
    fn info(&self, msg: &str) {
        self.log(LogLevel::Info, format_args!("{}", msg), Some(Caller::here()));
    }

    #[track_caller]
    fn warn(&self, msg: &str) {
        self.log(LogLevel::Warn, format_args!("{}", msg), Some(Caller::here()));
    }

    #[track_caller]
    fn error(&self, err: &dyn std::error::Error) {
        self.log_error(err, None, Some(Caller::here()));
    }

    #[track_caller]
    fn error_with_code(&self, err: &dyn std::error::Error, code: i64) {
        self.log_error(err, Some(code), Some(Caller::here()));
    }
}

/// Frozen multi-sink logger.
///
/// Cloning is cheap: the sink set is shared behind an `Arc`, only the
/// field-provider list is owned per instance.
#[derive(Clone)]
pub struct Logger {
    min_level: LogLevel,
    capture_caller: bool,
    sinks: Arc<Vec<Box<dyn Sink>>>,
    providers: Vec<Box<dyn FieldProvider>>,
}

impl Logger {
    /// Start configuring a logger.
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Build a logger straight from defaults: info level, JSON console, no
    /// file sinks, no extra fields.
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Child logger sharing this logger's sink set and configuration, with
    /// an empty field-provider list of its own.
    ///
    /// Takes no lock and leaves the parent untouched, so it is safe to call
    /// concurrently with emission from any worker.
    #[must_use]
    pub fn child(&self) -> Logger {
        Logger {
            min_level: self.min_level,
            capture_caller: self.capture_caller,
            sinks: Arc::clone(&self.sinks),
            providers: Vec::new(),
        }
    }

    /// Copy of this logger with one more static field attached.
    #[must_use]
    pub fn with_field(mut self, key: &str, value: &str) -> Logger {
        self.providers.push(Box::new(StaticField::new(key, value)));
        self
    }

    pub(crate) fn push_provider(&mut self, provider: Box<dyn FieldProvider>) {
        self.providers.push(provider);
    }

    /// Flush every sink.
    pub fn flush(&self) -> Result<()> {
        for sink in self.sinks.iter() {
            sink.flush()?;
        }
        Ok(())
    }

    /// Apply providers and fan the record out to every sink.
    ///
    /// Per-sink failures are best-effort: the failing sink is reported on
    /// stderr and the remaining sinks still receive the record.
    fn emit(&self, mut record: Record) {
        for provider in &self.providers {
            provider.apply(&mut record);
        }
        if !self.capture_caller {
            record.caller = None;
        }
        for sink in self.sinks.iter() {
            if let Err(e) = sink.write(&record) {
                eprintln!("reqlog: sink '{}' write failed: {}", sink.name(), e);
            }
        }
    }
}

impl Log for Logger {
    fn log(&self, level: LogLevel, args: fmt::Arguments<'_>, caller: Option<Caller>) {
        if level < self.min_level {
            return;
        }
        let mut record = Record::new(level, args.to_string());
        record.caller = caller;
        self.emit(record);
    }

    fn log_error(&self, err: &dyn std::error::Error, code: Option<i64>, caller: Option<Caller>) {
        let mut record = Record::new(LogLevel::Error, String::new());
        record.set_error(err);
        record.code = code;
        record.caller = caller;
        self.emit(record);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a frozen [`Logger`].
///
/// The builder is the only mutation surface; nothing is shared until
/// [`build`](LoggerBuilder::build) assembles the fan-out sink set (console
/// appended unless silenced) and hands back the frozen logger. Configure
/// fully, build once, then share.
///
/// # Example
/// ```no_run
/// use reqlog::{ConsoleFormat, Logger, LogLevel};
///
/// let logger = Logger::builder()
///     .level(LogLevel::Debug)
///     .console_format(ConsoleFormat::Text)
///     .file("server.log")
///     .expect("log file must be writable")
///     .field("app", "portfolio")
///     .build();
/// ```
pub struct LoggerBuilder {
    level: LogLevel,
    console_format: ConsoleFormat,
    console_colors: bool,
    silent: bool,
    capture_caller: bool,
    sinks: Vec<Box<dyn Sink>>,
    fields: Vec<StaticField>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            level: LogLevel::Info,
            console_format: ConsoleFormat::Json,
            console_colors: true,
            silent: false,
            capture_caller: false,
            sinks: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set minimum log level by name; unknown names fall back to `Info`.
    #[must_use = "builder methods return a new value"]
    pub fn level_name(mut self, name: &str) -> Self {
        self.level = LogLevel::from_name(name);
        self
    }

    /// Choose JSON or human-readable console rendering
    #[must_use = "builder methods return a new value"]
    pub fn console_format(mut self, format: ConsoleFormat) -> Self {
        self.console_format = format;
        self
    }

    /// Enable or disable colored level tags in the text console rendering
    #[must_use = "builder methods return a new value"]
    pub fn console_colors(mut self, enabled: bool) -> Self {
        self.console_colors = enabled;
        self
    }

    /// Suppress the console sink entirely
    #[must_use = "builder methods return a new value"]
    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Attach call-site locations to emitted records
    #[must_use = "builder methods return a new value"]
    pub fn caller(mut self, enabled: bool) -> Self {
        self.capture_caller = enabled;
        self
    }

    /// Add an output sink
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Add a file sink, opening `path` for append and creating it if absent.
    ///
    /// # Errors
    ///
    /// An unopenable path is a fatal startup condition: the caller must
    /// abort rather than continue with a half-configured logger.
    pub fn file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.sinks.push(Box::new(FileSink::new(path.as_ref())?));
        Ok(self)
    }

    /// Add a sink over an arbitrary writer
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: io::Write + Send + 'static>(mut self, writer: W) -> Self {
        self.sinks.push(Box::new(WriterSink::new(writer)));
        self
    }

    /// Add a static field carried by every record
    #[must_use = "builder methods return a new value"]
    pub fn field(mut self, key: &str, value: &str) -> Self {
        self.fields.push(StaticField::new(key, value));
        self
    }

    /// Freeze the configuration into a [`Logger`].
    ///
    /// Combines the configured sinks into the fan-out set and appends the
    /// console sink unless silenced. After this point no further mutation is
    /// possible; share the result freely.
    pub fn build(self) -> Logger {
        let mut sinks = self.sinks;
        if !self.silent {
            sinks.push(Box::new(ConsoleSink::new(
                self.console_format,
                self.console_colors,
            )));
        }

        let providers = self
            .fields
            .into_iter()
            .map(|field| Box::new(field) as Box<dyn FieldProvider>)
            .collect();

        Logger {
            min_level: self.level,
            capture_caller: self.capture_caller,
            sinks: Arc::new(sinks),
            providers,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
