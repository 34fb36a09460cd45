//! Primitive encoders and the resolved encoder configuration
//!
//! Each encoder is a pure function mapping one typed value (level, time,
//! duration, caller, logger name) to a [`PrimitiveValue`]. The JSON format
//! writes the primitive as a JSON scalar; the console format writes it as
//! plain text.

use super::log_level::LogLevel;
use super::options::Options;
use chrono::{DateTime, FixedOffset, SecondsFormat};
use std::fmt;
use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

/// Primitive serialization produced by an encoder
#[derive(Debug, Clone, PartialEq)]
pub enum PrimitiveValue {
    String(String),
    Int64(i64),
    Uint64(u64),
    Float64(f64),
    Bool(bool),
}

impl PrimitiveValue {
    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            PrimitiveValue::String(s) => serde_json::Value::String(s.clone()),
            PrimitiveValue::Int64(i) => serde_json::Value::Number((*i).into()),
            PrimitiveValue::Uint64(u) => serde_json::Value::Number((*u).into()),
            PrimitiveValue::Float64(f) => float_to_json(*f),
            PrimitiveValue::Bool(b) => serde_json::Value::Bool(*b),
        }
    }
}

impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveValue::String(s) => write!(f, "{}", s),
            PrimitiveValue::Int64(i) => write!(f, "{}", i),
            PrimitiveValue::Uint64(u) => write!(f, "{}", u),
            PrimitiveValue::Float64(fl) => write!(f, "{}", fl),
            PrimitiveValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// JSON has no NaN or infinities; those become strings.
pub(crate) fn float_to_json(value: f64) -> serde_json::Value {
    if value.is_nan() {
        serde_json::Value::String("NaN".to_string())
    } else if value.is_infinite() {
        let text = if value > 0.0 { "+Inf" } else { "-Inf" };
        serde_json::Value::String(text.to_string())
    } else {
        serde_json::Number::from_f64(value)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    }
}

/// Source location of a log call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryCaller {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl EntryCaller {
    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }

    /// `file:line` with only the last directory kept, e.g. `core/engine.rs:42`
    pub fn trimmed_path(&self) -> String {
        let normalized = self.file.replace('\\', "/");
        let mut parts = normalized.rsplitn(3, '/');
        let file = parts.next().unwrap_or_default();
        match parts.next() {
            Some(dir) => format!("{}/{}:{}", dir, file, self.line),
            None => format!("{}:{}", file, self.line),
        }
    }
}

impl fmt::Display for EntryCaller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

pub type LevelEncoder = Arc<dyn Fn(LogLevel) -> PrimitiveValue + Send + Sync>;
pub type TimeEncoder = Arc<dyn Fn(&DateTime<FixedOffset>) -> PrimitiveValue + Send + Sync>;
pub type DurationEncoder = Arc<dyn Fn(Duration) -> PrimitiveValue + Send + Sync>;
pub type CallerEncoder = Arc<dyn Fn(&EntryCaller) -> PrimitiveValue + Send + Sync>;
pub type NameEncoder = Arc<dyn Fn(&str) -> PrimitiveValue + Send + Sync>;

/// `info`, `warn`, ...
pub fn lowercase_level_encoder() -> LevelEncoder {
    Arc::new(|level| PrimitiveValue::String(level.to_str().to_string()))
}

/// `INFO`, `WARN`, ...
pub fn capital_level_encoder() -> LevelEncoder {
    Arc::new(|level| PrimitiveValue::String(level.to_capital_str().to_string()))
}

/// Capitalized level names wrapped in ANSI color codes, for terminals
#[cfg(feature = "console")]
pub fn capital_color_level_encoder() -> LevelEncoder {
    use colored::Colorize;
    Arc::new(|level| {
        PrimitiveValue::String(
            level
                .to_capital_str()
                .color(level.color_code())
                .to_string(),
        )
    })
}

/// Format times with a strftime-compatible layout
///
/// # Examples
///
/// ```
/// use rust_logger_facade::core::encoder::{time_encoder_of_layout, PrimitiveValue};
/// use chrono::{FixedOffset, TimeZone};
///
/// let encode = time_encoder_of_layout("%Y/%m/%d");
/// let t = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(encode(&t), PrimitiveValue::String("2025/01/08".to_string()));
/// ```
pub fn time_encoder_of_layout(layout: impl Into<String>) -> TimeEncoder {
    let layout = layout.into();
    Arc::new(move |t| PrimitiveValue::String(t.format(&layout).to_string()))
}

/// `2025-01-08 10:30:45`
pub fn stand_time_encoder() -> TimeEncoder {
    time_encoder_of_layout("%Y-%m-%d %H:%M:%S")
}

/// `2025-01-08T10:30:45.123+0000`
pub fn iso8601_time_encoder() -> TimeEncoder {
    time_encoder_of_layout("%Y-%m-%dT%H:%M:%S%.3f%z")
}

/// `2025-01-08T10:30:45.123456789+00:00`
pub fn rfc3339_time_encoder() -> TimeEncoder {
    Arc::new(|t| PrimitiveValue::String(t.to_rfc3339_opts(SecondsFormat::Nanos, false)))
}

/// Milliseconds since the Unix epoch as an integer
pub fn epoch_millis_time_encoder() -> TimeEncoder {
    Arc::new(|t| PrimitiveValue::Int64(t.timestamp_millis()))
}

/// Whole milliseconds as an integer
pub fn millis_duration_encoder() -> DurationEncoder {
    Arc::new(|d| PrimitiveValue::Int64(i64::try_from(d.as_millis()).unwrap_or(i64::MAX)))
}

/// Seconds as a float
pub fn seconds_duration_encoder() -> DurationEncoder {
    Arc::new(|d| PrimitiveValue::Float64(d.as_secs_f64()))
}

/// Human-readable text such as `1.5s`
pub fn string_duration_encoder() -> DurationEncoder {
    Arc::new(|d| PrimitiveValue::String(format!("{:?}", d)))
}

/// `/full/path/to/src/file.rs:line`
pub fn full_caller_encoder() -> CallerEncoder {
    Arc::new(|caller| PrimitiveValue::String(caller.to_string()))
}

/// `dir/file.rs:line`
pub fn short_caller_encoder() -> CallerEncoder {
    Arc::new(|caller| PrimitiveValue::String(caller.trimmed_path()))
}

/// Logger name as-is
pub fn full_name_encoder() -> NameEncoder {
    Arc::new(|name| PrimitiveValue::String(name.to_string()))
}

/// Everything an output format needs to lay out one entry
///
/// Keys left empty are omitted from the output.
#[derive(Clone)]
pub struct EncoderConfig {
    pub message_key: String,
    pub level_key: String,
    pub time_key: String,
    pub name_key: String,
    pub caller_key: String,
    pub stacktrace_key: String,
    pub line_ending: String,
    pub console_separator: String,
    pub encode_level: LevelEncoder,
    pub encode_time: TimeEncoder,
    pub encode_duration: DurationEncoder,
    pub encode_caller: CallerEncoder,
    pub encode_name: NameEncoder,
}

impl EncoderConfig {
    /// Resolve the encoder parameters from logger options
    pub fn from_options(opts: &Options) -> Self {
        let line_ending = if opts.skip_line_ending {
            String::new()
        } else if opts.line_ending.is_empty() {
            "\n".to_string()
        } else {
            opts.line_ending.clone()
        };

        Self {
            message_key: opts.message_key.clone(),
            level_key: opts.level_key.clone(),
            time_key: opts.time_key.clone(),
            name_key: opts.name_key.clone(),
            caller_key: opts.caller_key.clone(),
            stacktrace_key: opts.stacktrace_key.clone(),
            line_ending,
            console_separator: opts.console_separator.clone(),
            encode_level: Arc::clone(&opts.encode_level),
            encode_time: Arc::clone(&opts.encode_time),
            encode_duration: Arc::clone(&opts.encode_duration),
            encode_caller: Arc::clone(&opts.encode_caller),
            encode_name: Arc::clone(&opts.encode_name),
        }
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::from_options(&Options::default())
    }
}

impl fmt::Debug for EncoderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncoderConfig")
            .field("message_key", &self.message_key)
            .field("level_key", &self.level_key)
            .field("time_key", &self.time_key)
            .field("name_key", &self.name_key)
            .field("caller_key", &self.caller_key)
            .field("stacktrace_key", &self.stacktrace_key)
            .field("line_ending", &self.line_ending)
            .field("console_separator", &self.console_separator)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::{with_line_ending, with_message_key, with_skip_line_ending};
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::milliseconds(123)
    }

    #[test]
    fn test_level_encoders() {
        assert_eq!(
            lowercase_level_encoder()(LogLevel::Warn),
            PrimitiveValue::String("warn".to_string())
        );
        assert_eq!(
            capital_level_encoder()(LogLevel::Panic),
            PrimitiveValue::String("PANIC".to_string())
        );
    }

    #[test]
    fn test_time_encoders() {
        let t = fixed_datetime();
        assert_eq!(
            stand_time_encoder()(&t),
            PrimitiveValue::String("2025-01-08 10:30:45".to_string())
        );
        assert_eq!(
            iso8601_time_encoder()(&t),
            PrimitiveValue::String("2025-01-08T10:30:45.123+0000".to_string())
        );
        assert_eq!(
            epoch_millis_time_encoder()(&t),
            PrimitiveValue::Int64(t.timestamp_millis())
        );
    }

    #[test]
    fn test_duration_encoders() {
        let d = Duration::from_millis(1500);
        assert_eq!(millis_duration_encoder()(d), PrimitiveValue::Int64(1500));
        assert_eq!(seconds_duration_encoder()(d), PrimitiveValue::Float64(1.5));
        assert_eq!(
            string_duration_encoder()(d),
            PrimitiveValue::String("1.5s".to_string())
        );
    }

    #[test]
    fn test_caller_encoders() {
        let caller = EntryCaller {
            file: "/home/dev/project/src/core/engine.rs",
            line: 42,
            column: 9,
        };
        assert_eq!(
            full_caller_encoder()(&caller),
            PrimitiveValue::String("/home/dev/project/src/core/engine.rs:42".to_string())
        );
        assert_eq!(
            short_caller_encoder()(&caller),
            PrimitiveValue::String("core/engine.rs:42".to_string())
        );

        let bare = EntryCaller {
            file: "main.rs",
            line: 3,
            column: 1,
        };
        assert_eq!(bare.trimmed_path(), "main.rs:3");
    }

    #[test]
    fn test_non_finite_floats_become_strings() {
        assert_eq!(float_to_json(f64::NAN), serde_json::json!("NaN"));
        assert_eq!(float_to_json(f64::INFINITY), serde_json::json!("+Inf"));
        assert_eq!(float_to_json(f64::NEG_INFINITY), serde_json::json!("-Inf"));
        assert_eq!(float_to_json(2.5), serde_json::json!(2.5));
    }

    #[test]
    fn test_config_line_ending_resolution() {
        let config = EncoderConfig::default();
        assert_eq!(config.line_ending, "\n");
        assert_eq!(config.message_key, "msg");

        let opts = Options::resolve([with_line_ending(""), with_message_key("message")]);
        let config = EncoderConfig::from_options(&opts);
        assert_eq!(config.line_ending, "\n");
        assert_eq!(config.message_key, "message");

        let opts = Options::resolve([with_line_ending("\r\n"), with_skip_line_ending(true)]);
        assert_eq!(EncoderConfig::from_options(&opts).line_ending, "");
    }
}
