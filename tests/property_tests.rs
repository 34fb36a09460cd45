//! Property-based tests using proptest
//!
//! These tests verify:
//! - Option handlers fold left to right, last write wins
//! - Field merge is plain concatenation in call-site, static, context order
//! - Level parsing and ordering
//! - Encoding never panics and always yields one JSON line

use proptest::prelude::*;
use rust_logger_facade::core::options::{with_level, with_max_backups, with_message_key};
use rust_logger_facade::prelude::*;
use rust_logger_facade::{EncoderConfig, LogEntry};

fn level_strategy() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Panic),
        Just(LogLevel::Fatal),
    ]
}

fn fields_strategy() -> impl Strategy<Value = Vec<Field>> {
    prop::collection::vec(("[a-z]{1,8}", any::<i64>()), 0..6)
        .prop_map(|pairs| pairs.into_iter().map(|(k, v)| Field::int64(k, v)).collect())
}

// ============================================================================
// Options
// ============================================================================

proptest! {
    #[test]
    fn test_last_message_key_wins(keys in prop::collection::vec("[a-z]{1,10}", 1..8)) {
        let expected = keys.last().cloned().unwrap();
        let opts = Options::resolve(keys.into_iter().map(with_message_key));
        prop_assert_eq!(opts.message_key, expected);
    }

    #[test]
    fn test_unrelated_handlers_do_not_interfere(count in 0usize..100, level in level_strategy()) {
        let opts = Options::resolve([with_max_backups(count), with_level(level.to_str())]);
        prop_assert_eq!(opts.max_backups, count);
        prop_assert_eq!(opts.level, level);
        prop_assert_eq!(opts.message_key.as_str(), "msg");
    }
}

// ============================================================================
// Field merge
// ============================================================================

proptest! {
    #[test]
    fn test_merge_is_concatenation(
        a in fields_strategy(),
        b in fields_strategy(),
        c in fields_strategy(),
    ) {
        let merged = merge_fields(&a, &b, &c);
        let expected: Vec<Field> = a.iter().chain(b.iter()).chain(c.iter()).cloned().collect();
        prop_assert_eq!(merged, expected);
    }
}

// ============================================================================
// Levels
// ============================================================================

proptest! {
    #[test]
    fn test_log_level_str_roundtrip(level in level_strategy()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(parsed, level);
        let upper: LogLevel = level.to_capital_str().parse().unwrap();
        prop_assert_eq!(upper, level);
    }

    #[test]
    fn test_log_level_ordering(a in level_strategy(), b in level_strategy()) {
        prop_assert_eq!(a < b, (a as u8) < (b as u8));
        let gate = AtomicLevel::new(a);
        prop_assert_eq!(gate.enabled(b), b >= a);
    }

    #[test]
    fn test_unknown_level_defaults_to_info(invalid in "[0-9 ]{1,10}") {
        prop_assert!(invalid.parse::<LogLevel>().is_err());
        prop_assert_eq!(LogLevel::parse_or_default(&invalid), LogLevel::Info);
    }
}

// ============================================================================
// Encoding
// ============================================================================

proptest! {
    #[test]
    fn test_json_encoding_is_single_valid_line(
        message in ".*",
        level in level_strategy(),
        fields in fields_strategy(),
    ) {
        let config = EncoderConfig::default();
        let entry = LogEntry::new(level, message.clone());
        let line = OutputFormat::Json.encode(&config, &entry, &fields);

        prop_assert!(line.ends_with('\n'));
        prop_assert_eq!(line.matches('\n').count(), 1);
        let parsed: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        prop_assert_eq!(parsed["msg"].as_str().unwrap(), message.as_str());
        prop_assert_eq!(parsed["level"].as_str().unwrap(), level.to_str());
    }

    #[test]
    fn test_float_fields_never_break_json(value in any::<f64>()) {
        let config = EncoderConfig::default();
        let entry = LogEntry::new(LogLevel::Info, "float");
        let line = OutputFormat::Json.encode(&config, &entry, &[Field::float64("v", value)]);
        prop_assert!(serde_json::from_str::<serde_json::Value>(line.trim_end()).is_ok());
    }
}
