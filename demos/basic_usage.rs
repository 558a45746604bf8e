//! Basic logger usage example
//!
//! Demonstrates listeners, scoped child loggers and level-filtered piping.
//!
//! Run with: cargo run --example basic_usage

use scoped_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Scoped Logger - Basic Usage Example ===\n");

    let logger = Logger::builder().scope("app").build()?;

    println!("1. Piping everything up to INFO to the console:");
    let console = logger.pipe(ConsoleSink::stdout_only(), PipeOptions::default());
    logger.error("This is an error message");
    logger.warn("This is a warning message");
    logger.info("This is an info message");
    logger.debug("This debug message is not piped");

    println!("\n2. Child loggers forward to their parent:");
    let db = logger.create_child("db");
    db.info("connected");
    db.create_child("pool").warn("pool exhausted");

    println!("\n3. Listening for a single type:");
    logger.on("error", |event| print!("  (listener saw) {}", event.message));
    logger.error("disk full");

    console.finish()?;
    println!("\n4. After finishing the pipe nothing reaches the console:");
    logger.info("silent");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
