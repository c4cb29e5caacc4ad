//! Console sink implementation

use std::io::{self, Write};

use crate::core::format::{self, ConsoleFormat};
use crate::core::record::Record;
use crate::core::sink::Sink;
use crate::core::Result;

/// Sink writing to stdout, as JSON or a colored human-readable line.
///
/// Writes go through the process-wide stdout lock, one full line per record,
/// so concurrent emissions never interleave mid-line.
pub struct ConsoleSink {
    format: ConsoleFormat,
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new(format: ConsoleFormat, use_colors: bool) -> Self {
        Self { format, use_colors }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new(ConsoleFormat::Json, true)
    }
}

impl Sink for ConsoleSink {
    fn write(&self, record: &Record) -> Result<()> {
        let line = match self.format {
            ConsoleFormat::Json => format::json_line(record),
            ConsoleFormat::Text => format::text_line(record, self.use_colors),
        };

        let mut out = io::stdout().lock();
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
