//! Output formats for log entries
//!
//! - Json: one JSON object per line, fields in merged order
//! - Console: separator-delimited text with the fields as a trailing JSON object
//!
//! Both formats write duplicate field keys as-is and in order. The formats do
//! not de-duplicate; JSON readers such as `serde_json` keep the last value.

use super::encoder::{float_to_json, EncoderConfig, PrimitiveValue};
use super::field::{Field, FieldValue};
use super::log_entry::LogEntry;

/// Output format for log entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format for machine processing
    ///
    /// Example: `{"time":"2025-01-08 10:30:45","level":"info","msg":"Request processed","k":"v"}`
    #[default]
    Json,

    /// Human-readable text separated by the configured console separator
    ///
    /// Example: `2025-01-08 10:30:45	info	Request processed	{"k":"v"}`
    Console,
}

impl OutputFormat {
    /// Encode one entry, including the line ending
    pub fn encode(&self, config: &EncoderConfig, entry: &LogEntry, fields: &[Field]) -> String {
        match self {
            OutputFormat::Json => self.format_json(config, entry, fields),
            OutputFormat::Console => self.format_console(config, entry, fields),
        }
    }

    /// Format as JSON
    fn format_json(&self, config: &EncoderConfig, entry: &LogEntry, fields: &[Field]) -> String {
        let mut out = String::with_capacity(128 + fields.len() * 32);
        out.push('{');
        let mut first = true;

        if !config.time_key.is_empty() {
            let time = (config.encode_time)(&entry.time);
            push_json_pair(&mut out, &mut first, &config.time_key, &time.to_json_value());
        }
        if !config.level_key.is_empty() {
            let level = (config.encode_level)(entry.level);
            push_json_pair(&mut out, &mut first, &config.level_key, &level.to_json_value());
        }
        if let (Some(name), false) = (&entry.name, config.name_key.is_empty()) {
            let name = (config.encode_name)(name);
            push_json_pair(&mut out, &mut first, &config.name_key, &name.to_json_value());
        }
        if let (Some(caller), false) = (&entry.caller, config.caller_key.is_empty()) {
            let caller = (config.encode_caller)(caller);
            push_json_pair(&mut out, &mut first, &config.caller_key, &caller.to_json_value());
        }
        if !config.message_key.is_empty() {
            let message = serde_json::Value::String(entry.message.clone());
            push_json_pair(&mut out, &mut first, &config.message_key, &message);
        }

        if !fields.is_empty() {
            push_json_fields(&mut out, &mut first, config, fields);
        }

        if let (Some(stack), false) = (&entry.stack, config.stacktrace_key.is_empty()) {
            let stack = serde_json::Value::String(stack.clone());
            push_json_pair(&mut out, &mut first, &config.stacktrace_key, &stack);
        }

        out.push('}');
        out.push_str(&config.line_ending);
        out
    }

    /// Format as separator-delimited text
    fn format_console(&self, config: &EncoderConfig, entry: &LogEntry, fields: &[Field]) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(6);

        if !config.time_key.is_empty() {
            parts.push((config.encode_time)(&entry.time).to_string());
        }
        if !config.level_key.is_empty() {
            parts.push((config.encode_level)(entry.level).to_string());
        }
        if let (Some(name), false) = (&entry.name, config.name_key.is_empty()) {
            parts.push((config.encode_name)(name).to_string());
        }
        if let (Some(caller), false) = (&entry.caller, config.caller_key.is_empty()) {
            parts.push((config.encode_caller)(caller).to_string());
        }
        if !config.message_key.is_empty() {
            parts.push(entry.message.clone());
        }

        if !fields.is_empty() {
            let mut context = String::from("{");
            let mut first = true;
            push_json_fields(&mut context, &mut first, config, fields);
            context.push('}');
            parts.push(context);
        }

        let mut out = parts.join(&config.console_separator);

        if let (Some(stack), false) = (&entry.stack, config.stacktrace_key.is_empty()) {
            out.push('\n');
            out.push_str(stack);
        }

        out.push_str(&config.line_ending);
        out
    }
}

/// Convert a field payload to JSON using the configured primitive encoders
pub fn field_to_json(config: &EncoderConfig, value: &FieldValue) -> serde_json::Value {
    match value {
        FieldValue::Bool(b) => serde_json::Value::Bool(*b),
        FieldValue::ByteString(bytes) => {
            serde_json::Value::String(String::from_utf8_lossy(bytes).into_owned())
        }
        FieldValue::Duration(d) => (config.encode_duration)(*d).to_json_value(),
        FieldValue::Float64(f) => float_to_json(*f),
        FieldValue::Int64(i) => serde_json::Value::Number((*i).into()),
        FieldValue::String(s) => serde_json::Value::String(s.clone()),
        FieldValue::Time { .. } | FieldValue::TimeFull(_) => match value.as_datetime() {
            Some(t) => (config.encode_time)(&t).to_json_value(),
            None => PrimitiveValue::String(String::new()).to_json_value(),
        },
        FieldValue::Uint64(u) => serde_json::Value::Number((*u).into()),
        FieldValue::Error(e) => serde_json::Value::String(e.clone()),
    }
}

fn push_json_fields(out: &mut String, first: &mut bool, config: &EncoderConfig, fields: &[Field]) {
    for field in fields {
        let value = field_to_json(config, field.value());
        push_json_pair(out, first, field.key(), &value);
    }
}

fn push_json_pair(out: &mut String, first: &mut bool, key: &str, value: &serde_json::Value) {
    if !*first {
        out.push(',');
    }
    *first = false;
    out.push_str(&serde_json::Value::String(key.to_string()).to_string());
    out.push(':');
    out.push_str(&value.to_string());
}
