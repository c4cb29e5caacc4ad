//! # reqlog
//!
//! Request-scoped structured logging: a frozen multi-sink core logger,
//! per-request child loggers carrying a correlation id and elapsed time, a
//! typed request context with a no-op fallback, and a panic-recovery bridge.
//!
//! ## Features
//!
//! - **Multi-Sink Fan-Out**: file, console, and arbitrary writer sinks, each
//!   receiving every record
//! - **Field Providers**: pluggable contributors of one key/value pair per
//!   record (static, elapsed-time, correlation id, or custom)
//! - **Freeze Then Share**: configure on a builder during startup, then share
//!   the frozen logger across all request workers
//! - **Never Fails the Request**: context lookups degrade to a no-op logger,
//!   and a panicked handler becomes a single structured error record

pub mod config;
pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::config::{LoggingConfig, ServerConfig};
    pub use crate::core::{
        extract_logger, extract_logger_with_fields, ConsoleFormat, ContextLogger, FieldProvider,
        FieldValue, Log, Logger, LoggerBuilder, LoggerError, LogLevel, NoopLogger, Record,
        RequestContext, RequestLogger, Result, Sink, NOOP,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, WriterSink};
}

pub use config::{LoggingConfig, ServerConfig};
pub use core::{
    catch_panic, extract_logger, extract_logger_with_fields, log_panic, Caller, ConsoleFormat,
    ContextLogger, ElapsedField, FieldProvider, FieldValue, Log, Logger, LoggerBuilder,
    LoggerError, LogLevel, NoopLogger, Record, RequestContext, RequestIdField, RequestLogger,
    Result, Sink, StaticField, NOOP,
};
pub use sinks::{ConsoleSink, FileSink, WriterSink};
