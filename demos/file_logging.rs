//! File logging example
//!
//! Demonstrates buffering output, mirroring it through a callback and saving
//! the buffer to a file.
//!
//! Run with: cargo run --example file_logging

use rust_console_log::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Rust Console Log - File Logging Example ===\n");

    let mut logger = Logger::with_config(LoggerConfig::new().with_output_to_buffer(true));

    let mirrored = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&mirrored);
    logger.set_log_callback(move |text| {
        counter.fetch_add(text.len(), Ordering::Relaxed);
    });

    println!("1. Logging to both console and buffer:");
    logger.text("Application started");
    logger.warning("Using default settings for some options");
    logger.error("Failed to load optional plugin");
    logger.success("Application initialization complete");

    println!("\n2. Saving the buffer:");
    let written = logger.save("application.log", false)?;
    println!("   {} bytes written, {} bytes mirrored", written, mirrored.load(Ordering::Relaxed));

    logger.clear();
    logger.text("Second session");
    logger.save("application.log", true)?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
