//! The logger capability
//!
//! Every logger, whether it writes itself or fans out to others, implements
//! [`Logger`]. Only [`Logger::log`] and [`Logger::sync`] are required; the
//! per-level methods forward to `log`.
//!
//! None of the methods return errors. Write failures are reported on stderr
//! by the logger that hit them.

use super::field::Field;
use super::log_context::LogContext;
use super::log_level::LogLevel;

pub trait Logger: Send + Sync {
    /// Log `message` at `level` with `fields` and the fields carried by `ctx`
    ///
    /// Panic entries panic after writing and Fatal entries exit the process,
    /// whether or not the threshold lets them through.
    #[track_caller]
    fn log(&self, ctx: &LogContext, level: LogLevel, message: &str, fields: &[Field]);

    /// Flush buffered output
    fn sync(&self, ctx: &LogContext);

    #[track_caller]
    fn debug(&self, ctx: &LogContext, message: &str, fields: &[Field]) {
        self.log(ctx, LogLevel::Debug, message, fields);
    }

    #[track_caller]
    fn info(&self, ctx: &LogContext, message: &str, fields: &[Field]) {
        self.log(ctx, LogLevel::Info, message, fields);
    }

    #[track_caller]
    fn warn(&self, ctx: &LogContext, message: &str, fields: &[Field]) {
        self.log(ctx, LogLevel::Warn, message, fields);
    }

    #[track_caller]
    fn error(&self, ctx: &LogContext, message: &str, fields: &[Field]) {
        self.log(ctx, LogLevel::Error, message, fields);
    }

    /// Log at Panic level, then panic with `message`
    #[track_caller]
    fn panic(&self, ctx: &LogContext, message: &str, fields: &[Field]) {
        self.log(ctx, LogLevel::Panic, message, fields);
    }

    /// Log at Fatal level, then exit the process with status 1
    #[track_caller]
    fn fatal(&self, ctx: &LogContext, message: &str, fields: &[Field]) {
        self.log(ctx, LogLevel::Fatal, message, fields);
    }
}
