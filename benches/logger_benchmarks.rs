//! Criterion benchmarks for rust_logger_facade

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_logger_facade::core::options::{with_level, with_time_key};
use rust_logger_facade::prelude::*;
use rust_logger_facade::{EncoderConfig, LogEntry};
use std::io;

fn sink_logger() -> ConsoleLogger {
    ConsoleLogger::with_writer(io::sink(), [with_level("info")])
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_console_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("console_logging");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger();
    let ctx = LogContext::background();
    let fields = [Field::string("k", "v"), Field::int64("n", 42)];

    group.bench_function("info_no_fields", |b| {
        b.iter(|| logger.info(&ctx, black_box("hello"), &[]));
    });

    group.bench_function("info_with_fields", |b| {
        b.iter(|| logger.info(&ctx, black_box("hello"), black_box(&fields)));
    });

    group.bench_function("debug_filtered", |b| {
        b.iter(|| logger.debug(&ctx, black_box("hidden"), black_box(&fields)));
    });

    let ctx_with_fields = ctx.with_fields(vec![Field::string("request_id", "r-1")]);
    group.bench_function("info_with_context_fields", |b| {
        b.iter(|| logger.info(&ctx_with_fields, black_box("hello"), black_box(&fields)));
    });

    group.finish();
}

fn bench_json_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("json_logging");
    group.throughput(Throughput::Elements(1));

    let logger = FileLogger::with_writer(io::sink(), [with_time_key("")]);
    let ctx = LogContext::background();
    let fields = [Field::string("k", "v"), Field::float64("f", 1.5)];

    group.bench_function("info_with_fields", |b| {
        b.iter(|| logger.info(&ctx, black_box("hello"), black_box(&fields)));
    });

    group.finish();
}

// ============================================================================
// Encoding Benchmarks
// ============================================================================

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");

    let config = EncoderConfig::default();
    let entry = LogEntry::new(LogLevel::Info, "encode me");
    let fields: Vec<Field> = (0..8).map(|i| Field::int64(format!("f{}", i), i)).collect();

    for format in [OutputFormat::Json, OutputFormat::Console] {
        group.bench_function(format!("{:?}", format), |b| {
            b.iter(|| black_box(format.encode(&config, &entry, black_box(&fields))));
        });
    }

    group.bench_function("merge_fields", |b| {
        b.iter(|| black_box(merge_fields(&fields[..3], &fields[3..5], &fields[5..])));
    });

    group.finish();
}

criterion_group!(benches, bench_console_logging, bench_json_logging, bench_encoding);
criterion_main!(benches);
