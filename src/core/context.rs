//! Request context and logger retrieval
//!
//! The active logger travels with the request in a [`RequestContext`] instead
//! of a direct reference. Retrieval through [`extract_logger`] can never fail:
//! when nothing is bound it degrades to the no-op logger, so logging is never
//! a source of request failures.

use std::fmt;
use std::sync::Arc;

use uuid::Uuid;

use super::logger::Log;
use super::noop::{NoopLogger, NOOP};
use super::record::Caller;
use super::request::RequestLogger;

/// Per-request carrier for the scoped logger and correlation id.
///
/// Both slots are typed and optional; "bound but of the wrong type" is not
/// representable, so the only degraded case is absence.
#[derive(Clone, Default)]
pub struct RequestContext {
    logger: Option<Arc<RequestLogger>>,
    request_id: Option<Uuid>,
}

impl RequestContext {
    /// Empty context; every lookup degrades to the no-op logger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with both the scoped logger and its correlation id bound.
    #[must_use]
    pub fn bind(logger: Arc<RequestLogger>, id: Uuid) -> Self {
        Self {
            logger: Some(logger),
            request_id: Some(id),
        }
    }

    pub fn logger(&self) -> Option<&RequestLogger> {
        self.logger.as_deref()
    }

    pub fn request_id(&self) -> Option<Uuid> {
        self.request_id
    }
}

/// Logger bound in `ctx`, or the no-op logger when none is.
///
/// Never fails, by design.
pub fn extract_logger(ctx: &RequestContext) -> &dyn Log {
    match ctx.logger() {
        Some(logger) => logger,
        None => &NOOP,
    }
}

/// Like [`extract_logger`], but the returned logger additionally carries
/// `fields` on every record.
///
/// The legacy implementation computed the augmented logger and then handed
/// back the original, so the fields never took effect; this returns the
/// augmented one.
pub fn extract_logger_with_fields(
    ctx: &RequestContext,
    fields: &[(&str, &str)],
) -> ContextLogger {
    match ctx.logger() {
        Some(logger) => {
            let mut scoped = logger.clone();
            for (key, value) in fields {
                scoped = scoped.with_field(key, value);
            }
            ContextLogger::Request(scoped)
        }
        None => ContextLogger::Noop(NoopLogger),
    }
}

/// Owned logger handed out by [`extract_logger_with_fields`].
#[derive(Clone)]
pub enum ContextLogger {
    Request(RequestLogger),
    Noop(NoopLogger),
}

impl Log for ContextLogger {
    fn log(&self, level: super::level::LogLevel, args: fmt::Arguments<'_>, caller: Option<Caller>) {
        match self {
            ContextLogger::Request(logger) => logger.log(level, args, caller),
            ContextLogger::Noop(logger) => logger.log(level, args, caller),
        }
    }

    fn log_error(&self, err: &dyn std::error::Error, code: Option<i64>, caller: Option<Caller>) {
        match self {
            ContextLogger::Request(logger) => logger.log_error(err, code, caller),
            ContextLogger::Noop(logger) => logger.log_error(err, code, caller),
        }
    }
}
