//! Errors raised by sinks, file rotation and configuration parsing
//!
//! Logging calls never return these. Loggers report them on stderr and carry
//! on; only sink-level and config-level APIs hand them to the caller.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// An I/O step failed; `operation` names the step, `detail` the target
    #[error("{operation} failed ({detail}): {source}")]
    IoOperation {
        operation: String,
        detail: String,
        #[source]
        source: std::io::Error,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration document or value was rejected
    #[error("invalid {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Writing to or flushing the log file failed
    #[error("log file '{path}': {message}")]
    LogFile { path: String, message: String },

    /// Moving the current file to a backup failed
    #[error("rotating '{path}': {message}")]
    Rotation { path: String, message: String },

    /// One entry is larger than the whole file may grow
    #[error("entry of {len} bytes exceeds maximum file size {max}")]
    EntryTooLarge { len: u64, max: u64 },

    /// Any other sink failure
    #[error("sink failure: {0}")]
    Sink(String),
}

impl LoggerError {
    pub fn io_operation(
        operation: impl Into<String>,
        detail: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            detail: detail.into(),
            source,
        }
    }

    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn log_file(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::LogFile {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn rotation(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Rotation {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn sink(message: impl Into<String>) -> Self {
        LoggerError::Sink(message.into())
    }
}

/// Lets a sink sit behind `io::Write`; wrapped I/O errors keep their kind.
impl From<LoggerError> for std::io::Error {
    fn from(err: LoggerError) -> Self {
        match err {
            LoggerError::Io(e) | LoggerError::IoOperation { source: e, .. } => e,
            other => std::io::Error::other(other.to_string()),
        }
    }
}
