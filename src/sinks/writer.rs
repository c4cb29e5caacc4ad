//! Sink over an arbitrary writer

use std::io::Write;

use parking_lot::Mutex;

use crate::core::format;
use crate::core::record::Record;
use crate::core::sink::Sink;
use crate::core::Result;

/// Sink writing JSON record lines to any `io::Write` destination.
pub struct WriterSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl WriterSink {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl Sink for WriterSink {
    fn write(&self, record: &Record) -> Result<()> {
        let line = format::json_line(record);
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "writer"
    }
}
