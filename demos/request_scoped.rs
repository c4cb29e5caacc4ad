//! Request-scoped logging walkthrough
//!
//! One frozen core logger, a per-request child carrying the correlation id
//! and elapsed time, context-based lookup in downstream code, and panic
//! recovery.
//!
//! Run with: cargo run --example request_scoped

use reqlog::prelude::*;
use reqlog::{catch_panic, info};

fn main() -> Result<()> {
    let core = Logger::builder().field("app", "demo").build();

    // Per request: mint an id, get the scoped logger and its context.
    let (request_logger, ctx) = RequestLogger::begin(&core);
    info!(request_logger, "request accepted");

    handle(&ctx);

    // A panicking handler becomes one structured error record tagged with
    // the request id; the worker survives.
    let outcome: Option<()> = catch_panic(&core, &ctx, || {
        panic!("handler exploded");
    });
    assert!(outcome.is_none());

    core.flush()
}

fn handle(ctx: &RequestContext) {
    // Downstream code never holds a direct reference; absence would degrade
    // to the no-op logger.
    let logger = extract_logger(ctx);
    logger.info("doing the work");

    let tagged = extract_logger_with_fields(ctx, &[("step", "checkout")]);
    tagged.info("work detail");
}
