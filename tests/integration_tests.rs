//! Integration tests for the logging core
//!
//! These tests verify:
//! - Level filtering and the end-to-end emission scenario
//! - Field application, child isolation, and elapsed-time monotonicity
//! - Multi-sink fan-out and line integrity under concurrency
//! - Context fallback and the panic-recovery bridge

use std::fs;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use reqlog::core::{ELAPSED_KEY, ERROR_CODE_KEY, ERROR_KEY, REQUEST_ID_KEY};
use reqlog::prelude::*;
use reqlog::{catch_panic, warn};
use tempfile::TempDir;

/// Writer over a shared buffer, for asserting on emitted records.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn new() -> Self {
        Self::default()
    }

    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("sink output is valid utf8")
    }

    fn records(&self) -> Vec<serde_json::Value> {
        self.contents()
            .lines()
            .map(|line| serde_json::from_str(line).expect("each line is one JSON record"))
            .collect()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capturing_logger(level: LogLevel) -> (Logger, SharedBuf) {
    let buf = SharedBuf::new();
    let logger = Logger::builder()
        .level(level)
        .silent(true)
        .writer(buf.clone())
        .build();
    (logger, buf)
}

#[test]
fn test_level_filtering() {
    let (logger, buf) = capturing_logger(LogLevel::Warn);

    logger.debug("dropped");
    logger.info("dropped");
    assert_eq!(buf.records().len(), 0);

    logger.warn("kept");
    let err = io::Error::new(io::ErrorKind::Other, "kept");
    logger.error(&err);
    assert_eq!(buf.records().len(), 2);
}

#[test]
fn test_field_written_exactly_once() {
    let buf = SharedBuf::new();
    let logger = Logger::builder()
        .silent(true)
        .writer(buf.clone())
        .field("k", "v")
        .field("app", "portfolio")
        .build();

    logger.info("hello");

    let line = buf.contents();
    assert_eq!(line.matches("\"k\":\"v\"").count(), 1);
    let records = buf.records();
    assert_eq!(records[0]["k"], "v");
    assert_eq!(records[0]["app"], "portfolio");
}

#[test]
fn test_child_isolation() {
    let (parent, buf) = capturing_logger(LogLevel::Info);

    let a = parent.child().with_field("x", "only-a");
    let b = parent.child();

    b.info("from b");
    parent.info("from parent");
    a.info("from a");

    let records = buf.records();
    assert_eq!(records.len(), 3);
    assert!(records[0].get("x").is_none(), "sibling must not see the field");
    assert!(records[1].get("x").is_none(), "parent must not see the field");
    assert_eq!(records[2]["x"], "only-a");
}

#[test]
fn test_monotonic_elapsed_duration() {
    let (core, buf) = capturing_logger(LogLevel::Info);
    let scoped = core.new_request(uuid::Uuid::new_v4());

    scoped.info("first");
    std::thread::sleep(Duration::from_millis(30));
    scoped.info("second");

    let records = buf.records();
    let t1 = records[0][ELAPSED_KEY].as_i64().expect("elapsed is an integer");
    let t2 = records[1][ELAPSED_KEY].as_i64().expect("elapsed is an integer");
    assert!(t1 <= t2);
    // Whole-millisecond values may each floor by up to 1ms.
    assert!(t2 - t1 >= 29, "elapsed delta was {}ms", t2 - t1);
}

#[test]
fn test_noop_safety() {
    NOOP.debug("x");
    NOOP.info("");
    NOOP.warn("newlines\nand\ttabs and a very long message ");
    let err = io::Error::new(io::ErrorKind::Other, "ignored");
    NOOP.error(&err);
    NOOP.error_with_code(&err, i64::MIN);
    reqlog::info!(NOOP, "formatted {} {:?} {:#x}", "a", Some(3), 255);
}

#[test]
fn test_multi_sink_fanout() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("fanout.log");

    let buf = SharedBuf::new();
    let logger = Logger::builder()
        .silent(true)
        .file(&log_file)
        .expect("Failed to open log file")
        .writer(buf.clone())
        .build();

    logger.info("one record, two destinations");
    logger.flush().expect("Failed to flush");

    let file_content = fs::read_to_string(&log_file).expect("Failed to read log file");
    assert_eq!(file_content, buf.contents());
    assert_eq!(file_content.lines().count(), 1);
}

#[test]
fn test_context_fallback() {
    let ctx = RequestContext::new();

    let logger = extract_logger(&ctx);
    logger.info("silently dropped");
    logger.warn("also dropped");

    let tagged = extract_logger_with_fields(&ctx, &[("step", "checkout")]);
    assert!(matches!(tagged, ContextLogger::Noop(_)));
    tagged.info("dropped too");
}

#[test]
fn test_end_to_end_scenario() {
    let (logger, buf) = capturing_logger(LogLevel::Warn);

    logger.debug("x");
    logger.warn("y");
    let err = io::Error::new(io::ErrorKind::Other, "disk on fire");
    logger.error_with_code(&err, 42);

    let records = buf.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["level"], "WARN");
    assert_eq!(records[0]["message"], "y");
    assert_eq!(records[1]["level"], "ERROR");
    assert_eq!(records[1][ERROR_CODE_KEY], 42);
    assert_eq!(records[1][ERROR_KEY], "disk on fire");
}

#[test]
fn test_log_injection_prevention() {
    let (logger, buf) = capturing_logger(LogLevel::Info);

    let malicious = "User login\nERROR fake record injected\nINFO continuation";
    logger.info(malicious);

    let content = buf.contents();
    assert_eq!(content.lines().count(), 1, "Log should be a single line");
    assert!(buf.records()[0]["message"]
        .as_str()
        .unwrap()
        .contains("\\nERROR"));
}

#[test]
fn test_request_records_carry_id_and_elapsed() {
    let (core, buf) = capturing_logger(LogLevel::Info);
    let (scoped, ctx) = RequestLogger::begin(&core);

    scoped.info("accepted");
    extract_logger(&ctx).info("downstream");

    let id = scoped.request_id().to_string();
    for record in buf.records() {
        assert_eq!(record[REQUEST_ID_KEY], id.as_str());
        assert!(record[ELAPSED_KEY].is_i64());
    }
}

#[test]
fn test_extract_with_fields_attaches_fields() {
    let (core, buf) = capturing_logger(LogLevel::Info);
    let (_scoped, ctx) = RequestLogger::begin(&core);

    let tagged = extract_logger_with_fields(&ctx, &[("tenant", "acme"), ("step", "checkout")]);
    tagged.info("work detail");

    let records = buf.records();
    assert_eq!(records[0]["tenant"], "acme");
    assert_eq!(records[0]["step"], "checkout");
}

#[test]
fn test_panic_bridge_emits_one_error_record() {
    let (core, buf) = capturing_logger(LogLevel::Info);
    let (scoped, ctx) = RequestLogger::begin(&core);

    let outcome: Option<()> = catch_panic(&core, &ctx, || panic!("boom"));
    assert!(outcome.is_none());

    let records = buf.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["level"], "ERROR");
    assert_eq!(records[0][REQUEST_ID_KEY], scoped.request_id().to_string());
    let description = records[0][ERROR_KEY].as_str().unwrap();
    assert!(description.starts_with("panic: boom"));
}

#[test]
fn test_panic_bridge_without_context() {
    let (core, buf) = capturing_logger(LogLevel::Info);

    let outcome: Option<()> = catch_panic(&core, &RequestContext::new(), || {
        panic!("{}", String::from("owned payload"))
    });
    assert!(outcome.is_none());

    let records = buf.records();
    assert_eq!(records.len(), 1);
    assert!(records[0].get(REQUEST_ID_KEY).is_none());
    assert!(records[0][ERROR_KEY]
        .as_str()
        .unwrap()
        .starts_with("panic: owned payload"));
}

#[test]
fn test_macro_caller_capture() {
    let buf = SharedBuf::new();
    let logger = Logger::builder()
        .silent(true)
        .writer(buf.clone())
        .caller(true)
        .build();

    warn!(logger, "careful");

    let records = buf.records();
    let caller = records[0]["caller"].as_str().unwrap();
    assert!(caller.contains("integration_tests.rs"), "caller was {}", caller);
}

#[test]
fn test_caller_dropped_when_disabled() {
    let (logger, buf) = capturing_logger(LogLevel::Info);

    warn!(logger, "careful");

    assert!(buf.records()[0].get("caller").is_none());
}

#[test]
fn test_concurrent_emission_keeps_lines_intact() {
    let (logger, buf) = capturing_logger(LogLevel::Info);

    let workers: Vec<_> = (0..8)
        .map(|worker| {
            let scoped = logger.new_request(uuid::Uuid::new_v4());
            std::thread::spawn(move || {
                for i in 0..50 {
                    reqlog::info!(scoped, "worker {} message {}", worker, i);
                }
            })
        })
        .collect();
    for handle in workers {
        handle.join().expect("worker thread panicked");
    }

    // Every line parses on its own: no interleaving mid-line.
    let records = buf.records();
    assert_eq!(records.len(), 8 * 50);
}
