//! Logging macros for ergonomic log message formatting.
//!
//! The macros format like `println!` and pass the expansion site as the
//! record's caller location, which the logger attaches when caller capture
//! is enabled.
//!
//! # Examples
//!
//! ```
//! use reqlog::prelude::*;
//! use reqlog::info;
//!
//! let logger = Logger::builder().silent(true).build();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use reqlog::prelude::*;
/// # let logger = Logger::builder().silent(true).build();
/// use reqlog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log(
            $level,
            format_args!($($arg)+),
            Some($crate::core::record::Caller { file: file!(), line: line!() }),
        )
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use reqlog::prelude::*;
/// # let logger = Logger::builder().silent(true).build();
/// use reqlog::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use reqlog::prelude::*;
/// # let logger = Logger::builder().silent(true).build();
/// use reqlog::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use reqlog::prelude::*;
/// # let logger = Logger::builder().silent(true).build();
/// use reqlog::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// For an error *value*, prefer [`Log::error`](crate::Log::error) or
/// [`Log::error_with_code`](crate::Log::error_with_code), which carry the
/// description in the record's error field.
///
/// # Examples
///
/// ```
/// # use reqlog::prelude::*;
/// # let logger = Logger::builder().silent(true).build();
/// use reqlog::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Log, Logger, LogLevel};

    #[test]
    fn test_log_macro() {
        let logger = Logger::builder().silent(true).build();
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Info, "Formatted: {}", 42);
    }

    #[test]
    fn test_level_macros() {
        let logger = Logger::builder().silent(true).level(LogLevel::Debug).build();
        debug!(logger, "Debug message");
        info!(logger, "Items: {}", 100);
        warn!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);
    }

    #[test]
    fn test_macros_work_through_dyn_log() {
        let logger = Logger::builder().silent(true).build();
        let dynamic: &dyn Log = &logger;
        info!(dynamic, "through the trait object");
    }
}
