//! Basic logger usage example
//!
//! Demonstrates the four levels, labels and timestamps on the console.
//!
//! Run with: cargo run --example basic_usage

use rust_console_log::prelude::*;
use std::collections::BTreeMap;

fn main() -> Result<()> {
    println!("=== Rust Console Log - Basic Usage Example ===\n");

    // Print even when stdout is piped so the demo always shows something
    let mut logger = Logger::builder().console(StdoutConsole::forced()).build();

    println!("1. Logging at different levels:");
    logger.text("This is a plain text message");
    logger.warning("This is a warning message");
    logger.error("This is an error message");
    logger.success("This is a success message");

    println!("\n2. Without labels, custom time format:");
    logger.set_show_labels(false);
    logger.set_time_format("%H:%M:%S");
    logger.warning("Warning without a label");

    println!("\n3. Dumping values:");
    logger.set_show_labels(true);
    let mut settings = BTreeMap::new();
    settings.insert("retries", vec![1, 2, 4]);
    settings.insert("ports", vec![80, 443]);
    logger.dump(&settings)?;
    logger.dump("a plain string")?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
