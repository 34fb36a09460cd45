//! Logger options and their resolution
//!
//! Options are built by folding an ordered list of [`OptionHandler`]s over
//! [`Options::default`]. Handlers run in order, so the last handler touching a
//! field wins. Nothing is validated here.
//!
//! # Example
//!
//! ```
//! use rust_logger_facade::core::options::{with_level, with_message_key, Options};
//! use rust_logger_facade::LogLevel;
//!
//! let opts = Options::resolve([
//!     with_level("debug"),
//!     with_message_key("message"),
//!     with_level("WARN"),
//! ]);
//!
//! assert_eq!(opts.level, LogLevel::Warn);
//! assert_eq!(opts.message_key, "message");
//! assert_eq!(opts.time_key, "time");
//! ```

use super::encoder::{
    full_caller_encoder, full_name_encoder, lowercase_level_encoder, millis_duration_encoder,
    stand_time_encoder, CallerEncoder, DurationEncoder, LevelEncoder, NameEncoder, TimeEncoder,
};
use super::field::Field;
use super::log_level::LogLevel;
use std::fmt;

/// Default file written by file loggers
pub const DEFAULT_FILENAME: &str = "/tmp/lumberjack.log";

/// Default maximum size of a log file before rotation, in megabytes
pub const DEFAULT_MAX_SIZE_MB: u64 = 100;

/// Logger configuration
#[derive(Clone)]
pub struct Options {
    pub message_key: String,
    pub level_key: String,
    pub time_key: String,
    pub name_key: String,
    pub caller_key: String,
    pub stacktrace_key: String,
    pub skip_line_ending: bool,
    pub line_ending: String,

    pub encode_level: LevelEncoder,
    pub encode_time: TimeEncoder,
    pub encode_duration: DurationEncoder,
    pub encode_caller: CallerEncoder,
    pub encode_name: NameEncoder,

    /// Separator between elements of console output
    pub console_separator: String,

    /// Minimum level that is written
    pub level: LogLevel,

    /// File to write logs to; backups are kept in the same directory.
    pub filename: String,
    /// Maximum size in megabytes before the file is rotated
    pub max_size: u64,
    /// Days to keep rotated files, 0 keeps them regardless of age
    pub max_age: u64,
    /// Number of rotated files to keep, 0 keeps all of them
    pub max_backups: usize,
    /// Use local time instead of UTC in backup file names
    pub local_time: bool,
    /// Gzip rotated files
    pub compress: bool,

    /// Attach the call site to every entry
    pub with_caller: bool,
    /// Attach a stack trace to every entry
    pub with_stack: bool,
    /// Fields appended to every entry of the logger
    pub ext_fields: Vec<Field>,
    /// Logger name, written under `name_key` when set
    pub name: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            message_key: "msg".to_string(),
            level_key: "level".to_string(),
            time_key: "time".to_string(),
            name_key: "name".to_string(),
            caller_key: "caller".to_string(),
            stacktrace_key: "stack".to_string(),
            skip_line_ending: false,
            line_ending: "\n".to_string(),
            encode_level: lowercase_level_encoder(),
            encode_time: stand_time_encoder(),
            encode_duration: millis_duration_encoder(),
            encode_caller: full_caller_encoder(),
            encode_name: full_name_encoder(),
            console_separator: "\t".to_string(),
            level: LogLevel::Info,
            filename: DEFAULT_FILENAME.to_string(),
            max_size: DEFAULT_MAX_SIZE_MB,
            max_age: 0,
            max_backups: 0,
            local_time: false,
            compress: false,
            with_caller: true,
            with_stack: false,
            ext_fields: Vec::new(),
            name: None,
        }
    }
}

impl Options {
    /// Apply `handlers` in order to a copy of the defaults
    pub fn resolve<I>(handlers: I) -> Self
    where
        I: IntoIterator<Item = OptionHandler>,
    {
        let mut opts = Options::default();
        for handler in handlers {
            handler(&mut opts);
        }
        opts
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("message_key", &self.message_key)
            .field("level_key", &self.level_key)
            .field("time_key", &self.time_key)
            .field("name_key", &self.name_key)
            .field("caller_key", &self.caller_key)
            .field("stacktrace_key", &self.stacktrace_key)
            .field("skip_line_ending", &self.skip_line_ending)
            .field("line_ending", &self.line_ending)
            .field("console_separator", &self.console_separator)
            .field("level", &self.level)
            .field("filename", &self.filename)
            .field("max_size", &self.max_size)
            .field("max_age", &self.max_age)
            .field("max_backups", &self.max_backups)
            .field("local_time", &self.local_time)
            .field("compress", &self.compress)
            .field("with_caller", &self.with_caller)
            .field("with_stack", &self.with_stack)
            .field("ext_fields", &self.ext_fields)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// A single option mutator
pub type OptionHandler = Box<dyn Fn(&mut Options) + Send + Sync>;

pub fn with_message_key(key: impl Into<String>) -> OptionHandler {
    let key = key.into();
    Box::new(move |opt| opt.message_key = key.clone())
}

pub fn with_level_key(key: impl Into<String>) -> OptionHandler {
    let key = key.into();
    Box::new(move |opt| opt.level_key = key.clone())
}

pub fn with_time_key(key: impl Into<String>) -> OptionHandler {
    let key = key.into();
    Box::new(move |opt| opt.time_key = key.clone())
}

pub fn with_name_key(key: impl Into<String>) -> OptionHandler {
    let key = key.into();
    Box::new(move |opt| opt.name_key = key.clone())
}

pub fn with_caller_key(key: impl Into<String>) -> OptionHandler {
    let key = key.into();
    Box::new(move |opt| opt.caller_key = key.clone())
}

pub fn with_stacktrace_key(key: impl Into<String>) -> OptionHandler {
    let key = key.into();
    Box::new(move |opt| opt.stacktrace_key = key.clone())
}

pub fn with_skip_line_ending(skip: bool) -> OptionHandler {
    Box::new(move |opt| opt.skip_line_ending = skip)
}

pub fn with_line_ending(ending: impl Into<String>) -> OptionHandler {
    let ending = ending.into();
    Box::new(move |opt| opt.line_ending = ending.clone())
}

pub fn with_level_encoder(enc: LevelEncoder) -> OptionHandler {
    Box::new(move |opt| opt.encode_level = enc.clone())
}

pub fn with_time_encoder(enc: TimeEncoder) -> OptionHandler {
    Box::new(move |opt| opt.encode_time = enc.clone())
}

pub fn with_duration_encoder(enc: DurationEncoder) -> OptionHandler {
    Box::new(move |opt| opt.encode_duration = enc.clone())
}

pub fn with_caller_encoder(enc: CallerEncoder) -> OptionHandler {
    Box::new(move |opt| opt.encode_caller = enc.clone())
}

pub fn with_name_encoder(enc: NameEncoder) -> OptionHandler {
    Box::new(move |opt| opt.encode_name = enc.clone())
}

pub fn with_console_separator(sep: impl Into<String>) -> OptionHandler {
    let sep = sep.into();
    Box::new(move |opt| opt.console_separator = sep.clone())
}

/// Set the threshold from a level name; unrecognized names mean `info`.
pub fn with_level(level: &str) -> OptionHandler {
    let level = LogLevel::parse_or_default(level);
    Box::new(move |opt| opt.level = level)
}

pub fn with_file_name(path: impl Into<String>) -> OptionHandler {
    let path = path.into();
    Box::new(move |opt| opt.filename = path.clone())
}

pub fn with_max_size(megabytes: u64) -> OptionHandler {
    Box::new(move |opt| opt.max_size = megabytes)
}

pub fn with_max_age(days: u64) -> OptionHandler {
    Box::new(move |opt| opt.max_age = days)
}

pub fn with_max_backups(count: usize) -> OptionHandler {
    Box::new(move |opt| opt.max_backups = count)
}

pub fn with_local_time(local: bool) -> OptionHandler {
    Box::new(move |opt| opt.local_time = local)
}

pub fn with_compress(compress: bool) -> OptionHandler {
    Box::new(move |opt| opt.compress = compress)
}

pub fn with_caller(enabled: bool) -> OptionHandler {
    Box::new(move |opt| opt.with_caller = enabled)
}

pub fn with_stack(enabled: bool) -> OptionHandler {
    Box::new(move |opt| opt.with_stack = enabled)
}

/// Replace the fields appended to every entry of the logger
pub fn with_extend_fields(fields: Vec<Field>) -> OptionHandler {
    Box::new(move |opt| opt.ext_fields = fields.clone())
}

pub fn with_name(name: impl Into<String>) -> OptionHandler {
    let name = name.into();
    Box::new(move |opt| opt.name = Some(name.clone()))
}
