//! Group and registry example
//!
//! Demonstrates fanning out to several loggers and using the process registry.
//!
//! Run with: cargo run --example group_logging

use rust_logger_facade::core::options::{with_file_name, with_level};
use rust_logger_facade::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Rust Logger Facade - Group Logging Example ===\n");

    let log_path = std::env::temp_dir().join("rust_logger_facade_group.log");
    let console: Arc<dyn Logger> = Arc::new(ConsoleLogger::new([with_level("debug")]));
    let file: Arc<dyn Logger> = Arc::new(FileLogger::new([
        with_file_name(log_path.to_string_lossy()),
        with_level("warn"),
    ]));

    let group = Arc::new(GroupLogger::new(vec![console.clone(), file.clone()]));
    let ctx = LogContext::background();

    println!("1. Fan-out (console gets everything, file only warn and above):");
    group.debug(&ctx, "cache warmed", &[Field::int64("entries", 512)]);
    group.warn(&ctx, "slow query", &[Field::duration("elapsed", std::time::Duration::from_millis(830))]);

    println!("\n2. Registry:");
    registry::set_default_logger(group);
    registry::set_logger("audit", file);
    registry::info(&ctx, "through the default logger", &[]);
    if let Some(audit) = registry::get_logger("audit") {
        audit.error(&ctx, "permission denied", &[Field::string("user", "mallory")]);
    }

    registry::sync(&ctx);
    println!("\nFile entries written to {}", log_path.display());
    println!("\n=== Example completed successfully ===");
}
