//! File logging example
//!
//! Demonstrates JSON file logging with size-based rotation.
//!
//! Run with: cargo run --example file_logging

use rust_logger_facade::core::options::{
    with_compress, with_file_name, with_max_backups, with_max_size, with_stack,
};
use rust_logger_facade::prelude::*;
use std::fs;

fn main() -> Result<()> {
    println!("=== Rust Logger Facade - File Logging Example ===\n");

    let log_dir = std::env::temp_dir().join("rust_logger_facade_demo");
    fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("app.log");

    let logger = FileLogger::new([
        with_file_name(log_path.to_string_lossy()),
        with_max_size(1),
        with_max_backups(3),
        with_compress(true),
    ]);
    let ctx = LogContext::background().with_fields(vec![Field::string("service", "demo")]);

    println!("1. Writing entries to {}", log_path.display());
    for i in 0..20_000u64 {
        logger.info(&ctx, "order processed", &[Field::uint64("order_id", i)]);
    }
    logger.sync(&ctx);

    println!("\n2. Files after rotation:");
    let mut names: Vec<String> = fs::read_dir(&log_dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    for name in names {
        println!("   {}", name);
    }

    println!("\n3. Entry with stack trace:");
    let traced = FileLogger::new([
        with_file_name(log_dir.join("traced.log").to_string_lossy()),
        with_stack(true),
    ]);
    traced.error(&ctx, "unexpected state", &[]);
    traced.sync(&ctx);
    println!("   written to {}", log_dir.join("traced.log").display());

    println!("\n=== Example completed successfully ===");
    Ok(())
}
