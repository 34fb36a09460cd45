//! Fan-out logger

use crate::core::{Field, LogContext, LogLevel, Logger};
use std::fmt;
use std::sync::Arc;

/// Forwards every call to each member in registration order
///
/// Members are called one after another on the calling thread. A member that
/// panics or exits stops the fan-out, so with a Panic entry only the first
/// member gets to write it.
///
/// # Example
///
/// ```
/// use rust_logger_facade::{ConsoleLogger, GroupLogger, LogContext, Logger};
/// use std::sync::Arc;
///
/// let group = GroupLogger::new(vec![
///     Arc::new(ConsoleLogger::new([])),
///     Arc::new(ConsoleLogger::default()),
/// ]);
/// group.info(&LogContext::background(), "to everyone", &[]);
/// assert_eq!(group.len(), 2);
/// ```
#[derive(Default, Clone)]
pub struct GroupLogger {
    loggers: Vec<Arc<dyn Logger>>,
}

impl GroupLogger {
    pub fn new(loggers: Vec<Arc<dyn Logger>>) -> Self {
        Self { loggers }
    }

    pub fn push(&mut self, logger: Arc<dyn Logger>) {
        self.loggers.push(logger);
    }

    pub fn len(&self) -> usize {
        self.loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.is_empty()
    }
}

impl Logger for GroupLogger {
    fn log(&self, ctx: &LogContext, level: LogLevel, message: &str, fields: &[Field]) {
        for logger in &self.loggers {
            logger.log(ctx, level, message, fields);
        }
    }

    fn sync(&self, ctx: &LogContext) {
        for logger in &self.loggers {
            logger.sync(ctx);
        }
    }
}

impl fmt::Debug for GroupLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupLogger")
            .field("loggers", &self.loggers.len())
            .finish()
    }
}
