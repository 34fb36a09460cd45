//! Process-wide logger registry
//!
//! Loggers are registered by name and one of them may be the default logger
//! used by the package-level functions ([`info`], [`error`], ...). All reads
//! and writes go through one lock; loggers are cloned out of it before they
//! are called, so a logger that panics never leaves the lock held.
//!
//! # Example
//!
//! ```
//! use rust_logger_facade::{registry, ConsoleLogger, LogContext, Logger};
//! use std::sync::Arc;
//!
//! registry::set_default_logger(Arc::new(ConsoleLogger::new([])));
//! registry::set_logger("audit", Arc::new(ConsoleLogger::new([])));
//!
//! let ctx = LogContext::background();
//! registry::info(&ctx, "through the default logger", &[]);
//! if let Some(audit) = registry::get_logger("audit") {
//!     audit.warn(&ctx, "through a named logger", &[]);
//! }
//! registry::sync(&ctx);
//! ```

use crate::core::{Field, LogContext, LogLevel, Logger};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

#[derive(Default)]
struct Registry {
    loggers: HashMap<String, Arc<dyn Logger>>,
    default: Option<Arc<dyn Logger>>,
}

fn registry() -> &'static RwLock<Registry> {
    static REGISTRY: OnceLock<RwLock<Registry>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(Registry::default()))
}

/// Register `logger` under `name`, replacing any logger of that name
pub fn set_logger(name: impl Into<String>, logger: Arc<dyn Logger>) {
    registry().write().loggers.insert(name.into(), logger);
}

/// The logger registered under `name`
pub fn get_logger(name: &str) -> Option<Arc<dyn Logger>> {
    registry().read().loggers.get(name).cloned()
}

/// Replace the default logger
pub fn set_default_logger(logger: Arc<dyn Logger>) {
    registry().write().default = Some(logger);
}

pub fn default_logger() -> Option<Arc<dyn Logger>> {
    registry().read().default.clone()
}

/// Log through the default logger; does nothing when none is set
#[track_caller]
pub fn log(ctx: &LogContext, level: LogLevel, message: &str, fields: &[Field]) {
    if let Some(logger) = default_logger() {
        logger.log(ctx, level, message, fields);
    }
}

#[track_caller]
pub fn debug(ctx: &LogContext, message: &str, fields: &[Field]) {
    log(ctx, LogLevel::Debug, message, fields);
}

#[track_caller]
pub fn info(ctx: &LogContext, message: &str, fields: &[Field]) {
    log(ctx, LogLevel::Info, message, fields);
}

#[track_caller]
pub fn warn(ctx: &LogContext, message: &str, fields: &[Field]) {
    log(ctx, LogLevel::Warn, message, fields);
}

#[track_caller]
pub fn error(ctx: &LogContext, message: &str, fields: &[Field]) {
    log(ctx, LogLevel::Error, message, fields);
}

/// Log at Panic level through the default logger, which then panics
#[track_caller]
pub fn panic(ctx: &LogContext, message: &str, fields: &[Field]) {
    log(ctx, LogLevel::Panic, message, fields);
}

/// Log at Fatal level through the default logger, which then exits
#[track_caller]
pub fn fatal(ctx: &LogContext, message: &str, fields: &[Field]) {
    log(ctx, LogLevel::Fatal, message, fields);
}

/// Flush the default logger and every named logger
pub fn sync(ctx: &LogContext) {
    let (default, named): (Option<Arc<dyn Logger>>, Vec<Arc<dyn Logger>>) = {
        let guard = registry().read();
        (guard.default.clone(), guard.loggers.values().cloned().collect())
    };

    if let Some(logger) = default {
        logger.sync(ctx);
    }
    for logger in named {
        logger.sync(ctx);
    }
}
