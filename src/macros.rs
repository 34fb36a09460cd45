//! Logging macros for ergonomic message formatting and field lists.
//!
//! The level macros format their message like `format!` and log it with no
//! call-site fields; context and logger fields are still attached.
//!
//! # Examples
//!
//! ```
//! use rust_logger_facade::{fields, info, ConsoleLogger, LogContext, Logger};
//!
//! let logger = ConsoleLogger::new([]);
//! let ctx = LogContext::background();
//!
//! // Formatted message
//! let port = 8080;
//! info!(logger, &ctx, "Server listening on port {}", port);
//!
//! // Structured fields
//! logger.info(&ctx, "request done", &fields! {
//!     "status" => 200i64,
//!     "path" => "/health",
//! });
//! ```

/// Build a `Vec<Field>` from `key => value` pairs.
///
/// Values may be anything convertible into a `FieldValue`.
///
/// # Examples
///
/// ```
/// use rust_logger_facade::{fields, FieldType};
///
/// let fields = fields! { "user" => "alice", "attempts" => 3i64, "ok" => true };
/// assert_eq!(fields.len(), 3);
/// assert_eq!(fields[1].field_type(), FieldType::Int64);
///
/// let none = fields! {};
/// assert!(none.is_empty());
/// ```
#[macro_export]
macro_rules! fields {
    () => {
        ::std::vec::Vec::<$crate::core::Field>::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        vec![$($crate::core::Field::new($key, $value)),+]
    };
}

/// Log a formatted message at the given level.
///
/// # Examples
///
/// ```
/// # use rust_logger_facade::{ConsoleLogger, LogContext, LogLevel};
/// # let logger = ConsoleLogger::new([]);
/// # let ctx = LogContext::background();
/// use rust_logger_facade::log;
/// log!(logger, &ctx, LogLevel::Info, "Simple message");
/// log!(logger, &ctx, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $ctx:expr, $level:expr, $($arg:tt)+) => {{
        #[allow(unused_imports)]
        use $crate::core::Logger as _;
        $logger.log($ctx, $level, &format!($($arg)+), &[])
    }};
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_facade::{ConsoleLogger, LogContext};
/// # use rust_logger_facade::core::options::with_level;
/// # let logger = ConsoleLogger::new([with_level("debug")]);
/// # let ctx = LogContext::background();
/// use rust_logger_facade::debug;
/// debug!(logger, &ctx, "Debug information");
/// debug!(logger, &ctx, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::log!($logger, $ctx, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_facade::{ConsoleLogger, LogContext};
/// # let logger = ConsoleLogger::new([]);
/// # let ctx = LogContext::background();
/// use rust_logger_facade::info;
/// info!(logger, &ctx, "Application started");
/// info!(logger, &ctx, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::log!($logger, $ctx, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_facade::{ConsoleLogger, LogContext};
/// # let logger = ConsoleLogger::new([]);
/// # let ctx = LogContext::background();
/// use rust_logger_facade::warn;
/// warn!(logger, &ctx, "Low disk space");
/// warn!(logger, &ctx, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::log!($logger, $ctx, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_logger_facade::{ConsoleLogger, LogContext};
/// # let logger = ConsoleLogger::new([]);
/// # let ctx = LogContext::background();
/// use rust_logger_facade::error;
/// error!(logger, &ctx, "Failed to connect to database");
/// error!(logger, &ctx, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::log!($logger, $ctx, $crate::LogLevel::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::options::with_level;
    use crate::core::{FieldValue, LogContext, LogLevel};
    use crate::loggers::test_support::SharedBuffer;
    use crate::FileLogger;
    use std::sync::Arc;

    fn logger_and_buffer() -> (FileLogger, SharedBuffer) {
        let buf = SharedBuffer::default();
        (FileLogger::with_writer(buf.clone(), [with_level("debug")]), buf)
    }

    #[test]
    fn test_level_macros() {
        let (logger, buf) = logger_and_buffer();
        let ctx = LogContext::background();

        log!(logger, &ctx, LogLevel::Info, "Formatted: {}", 42);
        debug!(logger, &ctx, "Count: {}", 5);
        info!(logger, &ctx, "Items: {}", 100);
        warn!(logger, &ctx, "Retry {} of {}", 1, 3);
        error!(logger, &ctx, "Code: {}", 500);

        let lines = buf.lines();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("\"msg\":\"Formatted: 42\""));
        assert!(lines[1].contains("\"level\":\"debug\""));
        assert!(lines[3].contains("\"msg\":\"Retry 1 of 3\""));
        assert!(lines[4].contains("\"level\":\"error\""));
    }

    #[test]
    #[deny(unused_imports)]
    fn test_macros_on_shared_logger() {
        let (logger, buf) = logger_and_buffer();
        let shared: Arc<dyn crate::Logger> = Arc::new(logger);
        info!(shared, &LogContext::background(), "via arc");
        assert!(buf.contents().contains("via arc"));
    }

    #[test]
    fn test_caller_points_at_macro_use() {
        let (logger, buf) = logger_and_buffer();
        info!(logger, &LogContext::background(), "where");
        assert!(buf.contents().contains("macros.rs:"));
    }

    #[test]
    fn test_fields_macro() {
        let fields = fields! { "a" => 1i64, "b" => "two", "c" => false };
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].key(), "a");
        assert_eq!(fields[1].value(), &FieldValue::String("two".to_string()));
        assert_eq!(fields[2].value(), &FieldValue::Bool(false));

        let trailing = fields! { "x" => 1.5f64, };
        assert_eq!(trailing.len(), 1);
    }
}
