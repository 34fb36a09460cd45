//! Console logger

use super::LoggerCore;
use crate::appenders::{ConsoleSink, WriterSink};
use crate::core::{Engine, OptionHandler, Options, OutputFormat, Sink};
use std::io::Write;

/// Writes console-encoded entries to standard output
///
/// A `ConsoleLogger::default()` is uninitialized: every call on it is a
/// silent no-op.
///
/// # Example
///
/// ```
/// use rust_logger_facade::core::options::with_level;
/// use rust_logger_facade::{ConsoleLogger, Field, LogContext, Logger};
///
/// let logger = ConsoleLogger::new([with_level("debug")]);
/// let ctx = LogContext::background();
/// logger.info(&ctx, "service started", &[Field::int64("port", 8080)]);
/// logger.sync(&ctx);
/// ```
#[derive(Default)]
pub struct ConsoleLogger {
    core: Option<LoggerCore>,
}

impl ConsoleLogger {
    pub fn new<I>(handlers: I) -> Self
    where
        I: IntoIterator<Item = OptionHandler>,
    {
        Self::with_sink(Box::new(ConsoleSink::new()), handlers)
    }

    /// Console encoding into an arbitrary writer instead of stdout
    pub fn with_writer<W, I>(writer: W, handlers: I) -> Self
    where
        W: Write + Send + 'static,
        I: IntoIterator<Item = OptionHandler>,
    {
        Self::with_sink(Box::new(WriterSink::new(writer)), handlers)
    }

    fn with_sink<I>(sink: Box<dyn Sink>, handlers: I) -> Self
    where
        I: IntoIterator<Item = OptionHandler>,
    {
        let opts = Options::resolve(handlers);
        let engine = Engine::new(&opts, OutputFormat::Console, sink);
        Self {
            core: Some(LoggerCore::new(&opts, engine)),
        }
    }
}

impl_core_logger!(ConsoleLogger);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Field, LogContext, LogLevel, Logger};
    use crate::core::options::{with_console_separator, with_extend_fields, with_level, with_time_key};
    use crate::loggers::test_support::SharedBuffer;

    #[test]
    fn test_debug_suppressed_info_written() {
        let buf = SharedBuffer::default();
        let logger = ConsoleLogger::with_writer(buf.clone(), [with_level("info")]);
        let ctx = LogContext::background();

        logger.debug(&ctx, "hidden", &[]);
        logger.info(&ctx, "shown", &[Field::string("k", "v")]);

        let lines = buf.lines();
        assert_eq!(lines.len(), 1);
        let parts: Vec<&str> = lines[0].split('\t').collect();
        assert_eq!(parts[1], "info");
        assert!(parts[2].contains("console.rs:"));
        assert_eq!(parts[3], "shown");
        assert_eq!(parts[4], "{\"k\":\"v\"}");
    }

    #[test]
    fn test_field_order_call_site_static_context() {
        let buf = SharedBuffer::default();
        let logger = ConsoleLogger::with_writer(
            buf.clone(),
            [
                with_time_key(""),
                with_console_separator(" "),
                with_extend_fields(vec![Field::string("app", "demo")]),
            ],
        );
        let ctx = LogContext::background().with_fields(vec![Field::string("trace", "t-1")]);

        logger.warn(&ctx, "ordered", &[Field::int64("n", 3)]);

        let line = buf.contents();
        assert!(
            line.ends_with("{\"n\":3,\"app\":\"demo\",\"trace\":\"t-1\"}\n"),
            "got {}",
            line
        );
    }

    #[test]
    fn test_uninitialized_is_noop() {
        let logger = ConsoleLogger::default();
        let ctx = LogContext::background();

        assert!(!logger.is_initialized());
        assert_eq!(logger.level(), None);
        logger.set_level(LogLevel::Debug);
        logger.error(&ctx, "nothing happens", &[]);
        logger.panic(&ctx, "not even this", &[]);
        logger.sync(&ctx);
    }

    #[test]
    fn test_set_level_at_runtime() {
        let buf = SharedBuffer::default();
        let logger = ConsoleLogger::with_writer(buf.clone(), [with_level("error")]);
        let ctx = LogContext::background();

        logger.warn(&ctx, "before", &[]);
        logger.set_level(LogLevel::Warn);
        assert_eq!(logger.level(), Some(LogLevel::Warn));
        logger.warn(&ctx, "after", &[]);

        let contents = buf.contents();
        assert!(!contents.contains("before"));
        assert!(contents.contains("after"));
    }
}
