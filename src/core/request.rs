//! Request-scoped logger
//!
//! A [`RequestLogger`] is a child of the core logger carrying two standing
//! field providers: the time elapsed since the request began and the request
//! correlation identifier. Every record emitted through it picks both up
//! without any action from call sites.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use uuid::Uuid;

use super::context::RequestContext;
use super::field::FieldProvider;
use super::logger::{Log, Logger};
use super::record::{Caller, Record, ELAPSED_KEY, REQUEST_ID_KEY};

impl Logger {
    /// Mint a request-scoped child tagged with `id`.
    ///
    /// The elapsed-time field starts counting now; the id field is fixed for
    /// the logger's lifetime. The parent is only read, never mutated.
    #[must_use]
    pub fn new_request(&self, id: Uuid) -> RequestLogger {
        let mut inner = self.child();
        inner.push_provider(Box::new(ElapsedField::starting_now()));
        inner.push_provider(Box::new(RequestIdField::new(id)));
        RequestLogger { inner, id }
    }
}

/// Child logger bound to one request.
///
/// Owns its field-provider list: fields attached here are never visible to
/// the parent or to sibling request loggers. Dropped with the request, no
/// explicit teardown.
#[derive(Clone)]
pub struct RequestLogger {
    inner: Logger,
    id: Uuid,
}

impl RequestLogger {
    /// Begin a request against `parent`: mint a fresh correlation id, build
    /// the scoped logger, and return it together with a context binding both.
    ///
    /// The caller is expected to echo [`request_id`](Self::request_id) into
    /// the response metadata and to carry the context to downstream code.
    pub fn begin(parent: &Logger) -> (Arc<RequestLogger>, RequestContext) {
        let id = Uuid::new_v4();
        let logger = Arc::new(parent.new_request(id));
        let ctx = RequestContext::bind(Arc::clone(&logger), id);
        (logger, ctx)
    }

    pub fn request_id(&self) -> Uuid {
        self.id
    }

    /// Copy of this logger with one more static field attached.
    #[must_use]
    pub fn with_field(mut self, key: &str, value: &str) -> Self {
        self.inner = self.inner.with_field(key, value);
        self
    }
}

impl Log for RequestLogger {
    fn log(&self, level: super::level::LogLevel, args: fmt::Arguments<'_>, caller: Option<Caller>) {
        self.inner.log(level, args, caller);
    }

    fn log_error(&self, err: &dyn std::error::Error, code: Option<i64>, caller: Option<Caller>) {
        self.inner.log_error(err, code, caller);
    }
}

/// Elapsed time since the captured start instant, in whole milliseconds.
///
/// Computed at emission time, so successive records carry a monotonically
/// non-decreasing value.
#[derive(Debug, Clone)]
pub struct ElapsedField {
    start: Instant,
}

impl ElapsedField {
    pub fn starting_now() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl FieldProvider for ElapsedField {
    fn apply(&self, record: &mut Record) {
        record.set_field(ELAPSED_KEY, self.start.elapsed().as_millis() as i64);
    }

    fn clone_box(&self) -> Box<dyn FieldProvider> {
        Box::new(self.clone())
    }
}

/// Correlation identifier fixed at request start.
#[derive(Debug, Clone)]
pub struct RequestIdField {
    id: Uuid,
}

impl RequestIdField {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

impl FieldProvider for RequestIdField {
    fn apply(&self, record: &mut Record) {
        record.set_field(REQUEST_ID_KEY, self.id.to_string());
    }

    fn clone_box(&self) -> Box<dyn FieldProvider> {
        Box::new(self.clone())
    }
}
