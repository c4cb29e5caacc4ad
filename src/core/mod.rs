//! Core logger types and traits

pub mod context;
pub mod error;
pub mod field;
pub mod format;
pub mod level;
pub mod logger;
pub mod noop;
pub mod record;
pub mod recover;
pub mod request;
pub mod sink;

pub use context::{extract_logger, extract_logger_with_fields, ContextLogger, RequestContext};
pub use error::{LoggerError, Result};
pub use field::{FieldProvider, StaticField};
pub use format::ConsoleFormat;
pub use level::LogLevel;
pub use logger::{Log, Logger, LoggerBuilder};
pub use noop::{NoopLogger, NOOP};
pub use record::{
    Caller, FieldValue, Record, ELAPSED_KEY, ERROR_CODE_KEY, ERROR_KEY, REQUEST_ID_KEY,
    TIMESTAMP_KEY, TIME_FORMAT,
};
pub use recover::{catch_panic, log_panic};
pub use request::{ElapsedField, RequestIdField, RequestLogger};
pub use sink::Sink;
