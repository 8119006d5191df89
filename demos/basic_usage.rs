//! Basic wrapper usage example
//!
//! Demonstrates the environment-driven setup, context labels, message
//! prefixes, structured fields, and runtime level changes.
//!
//! Run with: cargo run --example basic_usage

use bff_logging::bootstrap;
use bff_logging::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== BFF Logging - Basic Usage Example ===\n");

    // Development settings select the pretty console transport
    let settings = RuntimeSettings::default();
    let (sink, main_logger) = bootstrap::init(&settings);

    println!("1. Severity methods through the Main wrapper:");
    main_logger.set_level(LogLevel::Trace);
    main_logger.verbose("This is a verbose message");
    main_logger.debug("This is a debug message");
    main_logger.info("This is an info message");
    main_logger.warn("This is a warning message");
    main_logger.error("This is an error message");
    main_logger.fatal("This is a fatal message");

    println!("\n2. Context labels and message prefixes:");
    let mut payments = ContextLogger::with_context(Arc::clone(&sink), "PaymentService");
    payments.info("context label in front of the message");

    payments.set_prefix("worker-1");
    payments.info("prefix inserted into the message text");

    println!("\n3. Structured fields:");
    payments.info((
        Metadata::new().with("order_id", 42).with("amount", 19.99),
        "payment captured",
    ));
    payments.info(Metadata::new().with("event", "heartbeat"));

    println!("\n4. Runtime level changes are shared across wrappers:");
    main_logger.set_level(LogLevel::Warn);
    payments.debug("Debug message (hidden)");
    payments.warn("Warning message (visible)");
    println!("   Effective level value: {}", payments.level_value());

    main_logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
