//! Sink implementations

pub mod console;
pub mod rotating_file;
pub mod writer;

pub use console::ConsoleSink;
pub use rotating_file::{RotatingFileWriter, RotationPolicy};
pub use writer::WriterSink;

pub use crate::core::Sink;
