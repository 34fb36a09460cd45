//! File logger

use super::LoggerCore;
use crate::appenders::{RotatingFileWriter, RotationPolicy, WriterSink};
use crate::core::{Engine, OptionHandler, Options, OutputFormat, Sink};
use std::io::Write;

/// Writes JSON entries to a size-rotated file
///
/// File name, size limit and retention come from the options
/// (`with_file_name`, `with_max_size`, `with_max_backups`, `with_max_age`,
/// `with_local_time`, `with_compress`). The file is created on the first
/// write.
///
/// # Example
///
/// ```no_run
/// use rust_logger_facade::core::options::{with_file_name, with_max_backups};
/// use rust_logger_facade::{FileLogger, Field, LogContext, Logger};
///
/// let logger = FileLogger::new([
///     with_file_name("/var/log/app/app.log"),
///     with_max_backups(5),
/// ]);
/// let ctx = LogContext::background();
/// logger.info(&ctx, "order placed", &[Field::uint64("order_id", 1001)]);
/// logger.sync(&ctx);
/// ```
#[derive(Default)]
pub struct FileLogger {
    core: Option<LoggerCore>,
}

impl FileLogger {
    pub fn new<I>(handlers: I) -> Self
    where
        I: IntoIterator<Item = OptionHandler>,
    {
        let opts = Options::resolve(handlers);
        let writer = RotatingFileWriter::new(RotationPolicy::from_options(&opts));
        Self::from_parts(&opts, Box::new(writer))
    }

    /// JSON encoding into an arbitrary writer, without rotation
    pub fn with_writer<W, I>(writer: W, handlers: I) -> Self
    where
        W: Write + Send + 'static,
        I: IntoIterator<Item = OptionHandler>,
    {
        let opts = Options::resolve(handlers);
        Self::from_parts(&opts, Box::new(WriterSink::new(writer)))
    }

    fn from_parts(opts: &Options, sink: Box<dyn Sink>) -> Self {
        let engine = Engine::new(opts, OutputFormat::Json, sink);
        Self {
            core: Some(LoggerCore::new(opts, engine)),
        }
    }
}

impl_core_logger!(FileLogger);
