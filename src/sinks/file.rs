//! File sink implementation

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::core::format;
use crate::core::record::Record;
use crate::core::sink::Sink;
use crate::core::{LoggerError, Result};

/// Sink appending JSON record lines to a file.
///
/// The file is opened for append and created if absent, with owner
/// read/write permissions only. Writes are buffered; flushed explicitly and
/// on drop.
pub struct FileSink {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl FileSink {
    /// Open `path` for appending.
    ///
    /// # Errors
    ///
    /// Fails with [`LoggerError::FileOpen`] when the file cannot be opened
    /// or created; startup code must treat that as fatal.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let file = options
            .open(&path)
            .map_err(|source| LoggerError::file_open(path.display().to_string(), source))?;

        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
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
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Buffered lines must reach disk even without an explicit flush.
        let _ = self.flush();
    }
}
