//! No-op logger
//!
//! A single stateless instance of the [`Log`](super::logger::Log) capability
//! set that discards everything. Handed out whenever no real logger is
//! available, so call sites never need a missing-logger check.

use std::fmt;

use super::level::LogLevel;
use super::logger::Log;
use super::record::Caller;

/// Logger that accepts every operation and performs no observable action.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

/// Process-wide no-op instance; safe for unrestricted concurrent use.
pub static NOOP: NoopLogger = NoopLogger;

impl Log for NoopLogger {
    fn log(&self, _level: LogLevel, _args: fmt::Arguments<'_>, _caller: Option<Caller>) {}

    fn log_error(
        &self,
        _err: &dyn std::error::Error,
        _code: Option<i64>,
        _caller: Option<Caller>,
    ) {
    }
}
