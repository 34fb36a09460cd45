//! Logger implementations
//!
//! - [`ConsoleLogger`]: console-encoded entries on stdout or any writer
//! - [`FileLogger`]: JSON entries into a size-rotated file
//! - [`GroupLogger`]: fans every call out to a list of loggers

/// Level accessors and the `Logger` impl shared by the engine-backed loggers
///
/// The type must hold its engine as `core: Option<LoggerCore>`; `None` makes
/// every call a no-op.
macro_rules! impl_core_logger {
    ($logger:ty) => {
        impl $logger {
            pub fn is_initialized(&self) -> bool {
                self.core.is_some()
            }

            /// Current threshold, `None` when uninitialized
            pub fn level(&self) -> Option<$crate::core::LogLevel> {
                self.core.as_ref().map(|c| c.engine().level())
            }

            pub fn set_level(&self, level: $crate::core::LogLevel) {
                if let Some(core) = &self.core {
                    core.engine().set_level(level);
                }
            }
        }

        impl $crate::core::Logger for $logger {
            fn log(
                &self,
                ctx: &$crate::core::LogContext,
                level: $crate::core::LogLevel,
                message: &str,
                fields: &[$crate::core::Field],
            ) {
                if let Some(core) = &self.core {
                    core.log(ctx, level, message, fields);
                }
            }

            fn sync(&self, _ctx: &$crate::core::LogContext) {
                if let Some(core) = &self.core {
                    core.sync();
                }
            }
        }
    };
}

pub mod console;
pub mod file;
pub mod group;

pub use console::ConsoleLogger;
pub use file::FileLogger;
pub use group::GroupLogger;

use crate::core::{merge_fields, Engine, Field, LogContext, LogLevel, Options};

/// Engine plus the static fields of one logger
pub(crate) struct LoggerCore {
    engine: Engine,
    ext_fields: Vec<Field>,
}

impl LoggerCore {
    pub(crate) fn new(opts: &Options, engine: Engine) -> Self {
        Self {
            engine,
            ext_fields: opts.ext_fields.clone(),
        }
    }

    /// Fields are merged only after the level check has passed.
    #[track_caller]
    pub(crate) fn log(&self, ctx: &LogContext, level: LogLevel, message: &str, fields: &[Field]) {
        let Some(entry) = self.engine.check(level) else {
            return;
        };
        if !entry.enabled() {
            entry.write(message, &[]);
            return;
        }

        let merged = self.merge(ctx, fields);
        entry.write(message, &merged);
    }

    /// Call-site, static and context fields in that order
    fn merge(&self, ctx: &LogContext, fields: &[Field]) -> Vec<Field> {
        #[cfg(test)]
        test_support::MERGES.with(|m| m.set(m.get() + 1));

        let context_fields = ctx.fields();
        if fields.is_empty() && self.ext_fields.is_empty() && context_fields.is_empty() {
            return Vec::new();
        }
        merge_fields(fields, &self.ext_fields, context_fields)
    }

    pub(crate) fn sync(&self) {
        if let Err(e) = self.engine.sync() {
            eprintln!("[LOGGER ERROR] Sync failed: {}", e);
        }
    }

    pub(crate) fn engine(&self) -> &Engine {
        &self.engine
    }
}
