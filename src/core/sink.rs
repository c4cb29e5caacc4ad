//! Sink trait for log output destinations

use super::{error::Result, record::Record};

/// A destination for finished records.
///
/// Sinks take `&self` and guard their writer internally, so one frozen sink
/// set can be shared across every request worker; a sink must not interleave
/// two records' bytes.
pub trait Sink: Send + Sync {
    fn write(&self, record: &Record) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn name(&self) -> &str;
}
