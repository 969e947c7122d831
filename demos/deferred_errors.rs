//! Deferred error output example
//!
//! Progress lines stay hidden unless the run fails; the first error prints
//! everything that was held back.
//!
//! Run with: cargo run --example deferred_errors

use rust_console_log::prelude::*;

fn run(fail_at: Option<u32>) {
    let mut logger = Logger::builder()
        .config(LoggerConfig::new().with_output_only_if_error(true))
        .console(StdoutConsole::forced())
        .build();

    for step in 1..=4 {
        if fail_at == Some(step) {
            logger.error(format!("Step {} failed", step));
            continue;
        }
        logger.text(format!("Step {} done", step));
    }
    logger.success("Run finished");
}

fn main() {
    println!("=== Rust Console Log - Deferred Errors Example ===\n");

    println!("1. Successful run (nothing printed):");
    run(None);

    println!("\n2. Failing run (history released at the first error):");
    run(Some(3));

    println!("\n=== Example completed successfully! ===");
}
