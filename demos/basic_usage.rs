//! Basic logger usage example
//!
//! Demonstrates the default logger, an explicit logger with fields, and the
//! logging macros.
//!
//! Run with: cargo run --example basic_usage

use json_line_logger::prelude::*;
use json_line_logger::{error, info, warn};

fn main() -> Result<()> {
    println!("=== JSON Line Logger - Basic Usage Example ===\n");

    println!("1. Process-wide default logger (stdout, INFO, colored):");
    let logger = default_logger();
    logger.debug("This debug message is filtered", LogContext::new());
    logger.info("Service starting", LogContext::new().with_field("version", "1.2.3"));
    logger.warn("Cache is cold", LogContext::new().with_field("entries", 0));
    logger.error(
        "disk full",
        LogContext::new().with_field("path", "/var/log"),
    );

    println!("\n2. Explicit logger with a lower threshold and no colors:");
    let verbose = Logger::builder()
        .min_level(LogLevel::Debug)
        .color(false)
        .timestamp_format(TimestampFormat::Iso8601)
        .build();
    verbose.debug("Resolved config", LogContext::new().with_field("workers", 4));

    println!("\n3. Macros with format arguments and fields:");
    let port = 8080;
    info!(verbose, "Listening on port {}", port; "port" => port);
    warn!(verbose, "Retry {} of {}", 2, 5; "backoff_ms" => 250);
    error!(verbose, "Upstream unavailable"; "host" => "db-1", "timeout_s" => 30);

    verbose.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
