//! Basic logger usage
//!
//! Demonstrates building a frozen logger, leveled emission, and error records.
//!
//! Run with: cargo run --example basic_usage

use reqlog::prelude::*;

fn main() -> Result<()> {
    // Human-readable console output for the demo; JSON is the default.
    let logger = Logger::builder()
        .level(LogLevel::Debug)
        .console_format(ConsoleFormat::Text)
        .field("app", "demo")
        .build();

    logger.debug("debug message");
    logger.info("info message");
    logger.warn("warning message");

    let err = LoggerError::other("something broke");
    logger.error(&err);
    logger.error_with_code(&err, 42);

    // Formatted variants go through the macros.
    let items = 100;
    reqlog::info!(logger, "processing {} items", items);

    // Below the minimum level: never formatted, never written.
    let quiet = Logger::builder().level(LogLevel::Warn).build();
    quiet.debug("this is dropped");
    quiet.info("this too");
    quiet.warn("this one shows");

    logger.flush()
}
