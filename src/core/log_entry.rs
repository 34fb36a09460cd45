//! Log entry structure

use super::encoder::EntryCaller;
use super::log_level::LogLevel;
use chrono::{DateTime, FixedOffset, Local};

/// Everything about one log call except its fields
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub time: DateTime<FixedOffset>,
    pub name: Option<String>,
    pub caller: Option<EntryCaller>,
    pub stack: Option<String>,
}

impl LogEntry {
    /// A new entry stamped with the current local time
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            time: Local::now().fixed_offset(),
            name: None,
            caller: None,
            stack: None,
        }
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn with_caller(mut self, caller: EntryCaller) -> Self {
        self.caller = Some(caller);
        self
    }

    pub fn with_stack(mut self, stack: String) -> Self {
        self.stack = Some(stack);
        self
    }

    pub fn with_time(mut self, time: DateTime<FixedOffset>) -> Self {
        self.time = time;
        self
    }
}
