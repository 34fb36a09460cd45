//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod encoder;
pub mod engine;
pub mod error;
pub mod field;
pub mod log_context;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod options;
pub mod output_format;

pub use appender::Sink;
pub use config::LoggerConfig;
pub use encoder::{EncoderConfig, EntryCaller, PrimitiveValue};
pub use engine::{CheckedEntry, Engine};
pub use error::{LoggerError, Result};
pub use field::{merge_fields, Field, FieldType, FieldValue};
pub use log_context::{ContextFields, LogContext};
pub use log_entry::LogEntry;
pub use log_level::{AtomicLevel, LogLevel};
pub use logger::Logger;
pub use options::{OptionHandler, Options};
pub use output_format::OutputFormat;
