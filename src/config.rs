//! Startup configuration values
//!
//! These are plain serde types: loading them from YAML or flags is the
//! caller's business. The only logic here is [`LoggingConfig::build_logger`],
//! which applies the logger section the same way every binary should.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{Logger, Result};

/// Server-wide configuration, logger section included.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServerConfig {
    /// Bind address, e.g. `0.0.0.0`.
    pub ip: String,
    pub port: u16,
    /// Maximum number of concurrently handled requests.
    pub concurrency: usize,
    /// Request body size limit in bytes.
    pub body_limit: usize,
    pub read_timeout_secs: u64,
    pub write_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub logger: LoggingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "0.0.0.0".to_string(),
            port: 3000,
            concurrency: 100,
            body_limit: 1_000_000,
            read_timeout_secs: 5,
            write_timeout_secs: 10,
            idle_timeout_secs: 120,
            logger: LoggingConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }

    pub fn write_timeout(&self) -> Duration {
        Duration::from_secs(self.write_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }
}

/// Logger section of the startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Log file path; no file sink when absent.
    pub file: Option<PathBuf>,
    /// Minimum level name; unknown names fall back to `info`.
    pub level: String,
    /// Attach call-site locations to records.
    pub log_caller: bool,
    /// Keep the console sink enabled.
    pub console: bool,
    /// Static fields attached to every record.
    pub static_fields: BTreeMap<String, String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
            log_caller: false,
            console: true,
            static_fields: BTreeMap::new(),
        }
    }
}

impl LoggingConfig {
    /// Build the process logger from this section.
    ///
    /// # Errors
    ///
    /// Fails when the configured log file cannot be opened; startup code
    /// must treat that as fatal rather than continue without its log sink.
    pub fn build_logger(&self) -> Result<Logger> {
        let mut builder = Logger::builder()
            .level_name(&self.level)
            .caller(self.log_caller)
            .silent(!self.console);
        if let Some(path) = &self.file {
            builder = builder.file(path)?;
        }
        for (key, value) in &self.static_fields {
            builder = builder.field(key, value);
        }
        Ok(builder.build())
    }
}
