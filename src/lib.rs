//! # Rust Logger Facade
//!
//! A structured logging facade: leveled logging with typed fields, per-call
//! context, console and rotating-file outputs, fan-out groups and a
//! process-wide registry of named loggers.
//!
//! ## Features
//!
//! - **Structured fields**: typed key/value pairs merged from the call site,
//!   the logger and the context, in that order
//! - **Two encodings**: separator-delimited console lines and JSON lines
//! - **Rotation**: size-based file rotation with backup count, age limit and
//!   gzip compression
//! - **Option handlers**: loggers are configured by folding option mutators
//! - **Registry**: named loggers plus a default logger for package-level calls
//!
//! ## Example
//!
//! ```
//! use rust_logger_facade::prelude::*;
//! use rust_logger_facade::core::options::{with_level, with_name};
//! use std::sync::Arc;
//!
//! let console = Arc::new(ConsoleLogger::new([with_level("debug"), with_name("api")]));
//! let ctx = LogContext::background().with_fields(vec![Field::string("request_id", "r-1")]);
//!
//! console.debug(&ctx, "parsing body", &[Field::uint64("bytes", 512)]);
//!
//! registry::set_default_logger(console);
//! registry::info(&ctx, "request handled", &[]);
//! registry::sync(&ctx);
//! ```

pub mod appenders;
pub mod core;
pub mod loggers;
pub mod macros;
pub mod registry;

pub mod prelude {
    pub use crate::appenders::{ConsoleSink, RotatingFileWriter, RotationPolicy, WriterSink};
    pub use crate::core::{
        merge_fields, AtomicLevel, ContextFields, Field, FieldType, FieldValue, LogContext,
        LogLevel, Logger, LoggerConfig, LoggerError, OptionHandler, Options, OutputFormat, Result,
        Sink,
    };
    pub use crate::loggers::{ConsoleLogger, FileLogger, GroupLogger};
    pub use crate::registry;
}

pub use appenders::{ConsoleSink, RotatingFileWriter, RotationPolicy, WriterSink};
pub use core::{
    merge_fields, AtomicLevel, ContextFields, EncoderConfig, Engine, EntryCaller, Field,
    FieldType, FieldValue, LogContext, LogEntry, LogLevel, Logger, LoggerConfig, LoggerError,
    OptionHandler, Options, OutputFormat, PrimitiveValue, Result, Sink,
};
pub use loggers::{ConsoleLogger, FileLogger, GroupLogger};
