//! Basic logger usage example
//!
//! Demonstrates console logging with fields, context and different levels.
//!
//! Run with: cargo run --example basic_usage

use rust_logger_facade::core::encoder::capital_color_level_encoder;
use rust_logger_facade::core::options::{with_level, with_level_encoder, with_name};
use rust_logger_facade::prelude::*;
use rust_logger_facade::{fields, info};

fn main() {
    println!("=== Rust Logger Facade - Basic Usage Example ===\n");

    let logger = ConsoleLogger::new([
        with_level("debug"),
        with_name("basic"),
        with_level_encoder(capital_color_level_encoder()),
    ]);
    let ctx = LogContext::background();

    println!("1. Logging at different levels:");
    logger.debug(&ctx, "This is a debug message", &[]);
    logger.info(&ctx, "This is an info message", &[]);
    logger.warn(&ctx, "This is a warning message", &[]);
    logger.error(&ctx, "This is an error message", &[]);

    println!("\n2. Structured fields:");
    logger.info(
        &ctx,
        "request handled",
        &fields! { "method" => "GET", "status" => 200i64, "cached" => false },
    );
    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
    logger.error(&ctx, "startup check failed", &[Field::error(&err)]);

    println!("\n3. Context fields:");
    let request_ctx = ctx.with_fields(vec![Field::string("request_id", "req-42")]);
    logger.info(&request_ctx, "loaded user", &[Field::int64("user_id", 7)]);

    println!("\n4. Raising the threshold at runtime:");
    logger.set_level(LogLevel::Warn);
    logger.info(&ctx, "This info message is filtered out", &[]);
    logger.warn(&ctx, "Only warnings and above now", &[]);

    println!("\n5. Formatting macros:");
    info!(logger, &ctx, "processed {} items in {} ms", 128, 35);
    logger.set_level(LogLevel::Info);
    info!(logger, &ctx, "processed {} items in {} ms", 128, 35);

    logger.sync(&ctx);
    println!("\n=== Example completed successfully ===");
}
