//! Structured log fields
//!
//! A [`Field`] is one typed key/value attribute of a log entry. The value is a
//! closed sum type, so the active payload is always the one named by the
//! variant and the encoders match on it exhaustively.

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use std::fmt;
use std::time::Duration;

/// Payload of a structured field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    /// UTF-8 text carried as raw bytes
    ByteString(Vec<u8>),
    Duration(Duration),
    Float64(f64),
    Int64(i64),
    String(String),
    /// A timestamp stored compactly as Unix nanoseconds plus its offset
    Time { nanos: i64, offset: FixedOffset },
    /// A timestamp outside the range representable in Unix nanoseconds
    TimeFull(DateTime<FixedOffset>),
    Uint64(u64),
    /// The display text of an error
    Error(String),
}

/// Type tag of a [`FieldValue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Bool,
    ByteString,
    Duration,
    Float64,
    Int64,
    String,
    Time,
    TimeFull,
    Uint64,
    Error,
}

impl FieldValue {
    /// Build a time payload, choosing the compact form when it fits in i64 nanoseconds
    pub fn from_time<Tz: TimeZone>(value: DateTime<Tz>) -> Self {
        let fixed = value.with_timezone(&value.offset().fix());
        match fixed.timestamp_nanos_opt() {
            Some(nanos) => FieldValue::Time {
                nanos,
                offset: *fixed.offset(),
            },
            None => FieldValue::TimeFull(fixed),
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::Bool(_) => FieldType::Bool,
            FieldValue::ByteString(_) => FieldType::ByteString,
            FieldValue::Duration(_) => FieldType::Duration,
            FieldValue::Float64(_) => FieldType::Float64,
            FieldValue::Int64(_) => FieldType::Int64,
            FieldValue::String(_) => FieldType::String,
            FieldValue::Time { .. } => FieldType::Time,
            FieldValue::TimeFull(_) => FieldType::TimeFull,
            FieldValue::Uint64(_) => FieldType::Uint64,
            FieldValue::Error(_) => FieldType::Error,
        }
    }

    /// The timestamp carried by a `Time` or `TimeFull` payload
    pub fn as_datetime(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            FieldValue::Time { nanos, offset } => {
                Some(DateTime::<Utc>::from_timestamp_nanos(*nanos).with_timezone(offset))
            }
            FieldValue::TimeFull(t) => Some(*t),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::ByteString(bytes) => write!(f, "{}", String::from_utf8_lossy(bytes)),
            FieldValue::Duration(d) => write!(f, "{:?}", d),
            FieldValue::Float64(fl) => write!(f, "{}", fl),
            FieldValue::Int64(i) => write!(f, "{}", i),
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Time { .. } | FieldValue::TimeFull(_) => match self.as_datetime() {
                Some(t) => write!(f, "{}", t.to_rfc3339()),
                None => Ok(()),
            },
            FieldValue::Uint64(u) => write!(f, "{}", u),
            FieldValue::Error(e) => write!(f, "{}", e),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int64(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int64(i as i64)
    }
}

impl From<u64> for FieldValue {
    fn from(u: u64) -> Self {
        FieldValue::Uint64(u)
    }
}

impl From<u32> for FieldValue {
    fn from(u: u32) -> Self {
        FieldValue::Uint64(u as u64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float64(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<Duration> for FieldValue {
    fn from(d: Duration) -> Self {
        FieldValue::Duration(d)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(bytes: Vec<u8>) -> Self {
        FieldValue::ByteString(bytes)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(t: DateTime<Utc>) -> Self {
        FieldValue::from_time(t)
    }
}

impl From<DateTime<FixedOffset>> for FieldValue {
    fn from(t: DateTime<FixedOffset>) -> Self {
        FieldValue::from_time(t)
    }
}

/// One key/value attribute of a log entry
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    key: String,
    value: FieldValue,
}

impl Field {
    pub fn new(key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn bool(key: impl Into<String>, val: bool) -> Self {
        Self::new(key, FieldValue::Bool(val))
    }

    /// A field carrying UTF-8 encoded text as bytes
    pub fn byte_string(key: impl Into<String>, val: impl Into<Vec<u8>>) -> Self {
        Self::new(key, FieldValue::ByteString(val.into()))
    }

    pub fn float64(key: impl Into<String>, val: f64) -> Self {
        Self::new(key, FieldValue::Float64(val))
    }

    pub fn int(key: impl Into<String>, val: isize) -> Self {
        Self::int64(key, val as i64)
    }

    pub fn int64(key: impl Into<String>, val: i64) -> Self {
        Self::new(key, FieldValue::Int64(val))
    }

    pub fn string(key: impl Into<String>, val: impl Into<String>) -> Self {
        Self::new(key, FieldValue::String(val.into()))
    }

    pub fn uint(key: impl Into<String>, val: usize) -> Self {
        Self::uint64(key, val as u64)
    }

    pub fn uint64(key: impl Into<String>, val: u64) -> Self {
        Self::new(key, FieldValue::Uint64(val))
    }

    /// A timestamp field. Values before 1677-09-21 or after 2262-04-11 are
    /// kept as-is (`TimeFull`); everything else is stored as Unix nanoseconds.
    pub fn time<Tz: TimeZone>(key: impl Into<String>, val: DateTime<Tz>) -> Self {
        Self::new(key, FieldValue::from_time(val))
    }

    pub fn duration(key: impl Into<String>, val: Duration) -> Self {
        Self::new(key, FieldValue::Duration(val))
    }

    /// An error field under the conventional `error` key
    pub fn error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Self::named_error("error", err)
    }

    pub fn named_error<E: std::error::Error + ?Sized>(key: impl Into<String>, err: &E) -> Self {
        Self::new(key, FieldValue::Error(err.to_string()))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn field_type(&self) -> FieldType {
        self.value.field_type()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Merge the fields of one log call.
///
/// The result is `call_site ++ logger_static ++ context`: nothing is
/// de-duplicated or reordered. When every input is empty the returned vector
/// does not allocate.
pub fn merge_fields(call_site: &[Field], logger_static: &[Field], context: &[Field]) -> Vec<Field> {
    let total = call_site.len() + logger_static.len() + context.len();
    if total == 0 {
        return Vec::new();
    }

    let mut merged = Vec::with_capacity(total);
    merged.extend_from_slice(call_site);
    merged.extend_from_slice(logger_static);
    merged.extend_from_slice(context);
    merged
}
