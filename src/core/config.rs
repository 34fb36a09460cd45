//! Declarative logger configuration
//!
//! `LoggerConfig` mirrors the scalar options so a logger can be configured from
//! a JSON document. Absent fields keep their defaults.
//!
//! # Example
//!
//! ```
//! use rust_logger_facade::core::config::LoggerConfig;
//! use rust_logger_facade::core::options::Options;
//! use rust_logger_facade::LogLevel;
//!
//! let config = LoggerConfig::from_json(r#"{ "level": "debug", "max_backups": 7 }"#).unwrap();
//! let opts = Options::resolve(config.into_handlers());
//!
//! assert_eq!(opts.level, LogLevel::Debug);
//! assert_eq!(opts.max_backups, 7);
//! ```

use super::error::{LoggerError, Result};
use super::options::{self, OptionHandler};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub level: Option<String>,
    pub name: Option<String>,

    pub message_key: Option<String>,
    pub level_key: Option<String>,
    pub time_key: Option<String>,
    pub name_key: Option<String>,
    pub caller_key: Option<String>,
    pub stacktrace_key: Option<String>,
    pub skip_line_ending: Option<bool>,
    pub line_ending: Option<String>,
    pub console_separator: Option<String>,

    pub filename: Option<String>,
    pub max_size: Option<u64>,
    pub max_age: Option<u64>,
    pub max_backups: Option<usize>,
    pub local_time: Option<bool>,
    pub compress: Option<bool>,

    pub with_caller: Option<bool>,
    pub with_stack: Option<bool>,
}

impl LoggerConfig {
    /// Parse a configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LoggerError::config("LoggerConfig", e.to_string()))
    }

    /// Turn the configuration into option handlers, one per present field
    pub fn into_handlers(self) -> Vec<OptionHandler> {
        let mut handlers: Vec<OptionHandler> = Vec::new();

        if let Some(level) = self.level {
            handlers.push(options::with_level(&level));
        }
        if let Some(name) = self.name {
            handlers.push(options::with_name(name));
        }
        if let Some(key) = self.message_key {
            handlers.push(options::with_message_key(key));
        }
        if let Some(key) = self.level_key {
            handlers.push(options::with_level_key(key));
        }
        if let Some(key) = self.time_key {
            handlers.push(options::with_time_key(key));
        }
        if let Some(key) = self.name_key {
            handlers.push(options::with_name_key(key));
        }
        if let Some(key) = self.caller_key {
            handlers.push(options::with_caller_key(key));
        }
        if let Some(key) = self.stacktrace_key {
            handlers.push(options::with_stacktrace_key(key));
        }
        if let Some(skip) = self.skip_line_ending {
            handlers.push(options::with_skip_line_ending(skip));
        }
        if let Some(ending) = self.line_ending {
            handlers.push(options::with_line_ending(ending));
        }
        if let Some(sep) = self.console_separator {
            handlers.push(options::with_console_separator(sep));
        }
        if let Some(path) = self.filename {
            handlers.push(options::with_file_name(path));
        }
        if let Some(size) = self.max_size {
            handlers.push(options::with_max_size(size));
        }
        if let Some(age) = self.max_age {
            handlers.push(options::with_max_age(age));
        }
        if let Some(count) = self.max_backups {
            handlers.push(options::with_max_backups(count));
        }
        if let Some(local) = self.local_time {
            handlers.push(options::with_local_time(local));
        }
        if let Some(compress) = self.compress {
            handlers.push(options::with_compress(compress));
        }
        if let Some(enabled) = self.with_caller {
            handlers.push(options::with_caller(enabled));
        }
        if let Some(enabled) = self.with_stack {
            handlers.push(options::with_stack(enabled));
        }

        handlers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_level::LogLevel;
    use crate::core::options::Options;

    #[test]
    fn test_empty_config_yields_no_handlers() {
        let config = LoggerConfig::from_json("{}").unwrap();
        assert_eq!(config, LoggerConfig::default());
        assert!(config.into_handlers().is_empty());
    }

    #[test]
    fn test_full_rotation_config() {
        let config = LoggerConfig::from_json(
            r#"{
                "level": "warn",
                "filename": "/var/log/app.log",
                "max_size": 10,
                "max_age": 30,
                "max_backups": 5,
                "local_time": true,
                "compress": true,
                "with_caller": false
            }"#,
        )
        .unwrap();

        let opts = Options::resolve(config.into_handlers());
        assert_eq!(opts.level, LogLevel::Warn);
        assert_eq!(opts.filename, "/var/log/app.log");
        assert_eq!(opts.max_size, 10);
        assert_eq!(opts.max_age, 30);
        assert_eq!(opts.max_backups, 5);
        assert!(opts.local_time);
        assert!(opts.compress);
        assert!(!opts.with_caller);
        assert_eq!(opts.message_key, "msg");
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = LoggerConfig::from_json(r#"{ "level": "chatty" }"#).unwrap();
        assert_eq!(Options::resolve(config.into_handlers()).level, LogLevel::Info);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = LoggerConfig::from_json(r#"{ "colour": true }"#).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
