//! Property-based tests for bff_logging using proptest

use bff_logging::config::{logger_options, RuntimeSettings};
use bff_logging::core::{LogLevel, LogMessage, LogRecord, Metadata};
use proptest::prelude::*;

fn settings(environment: &str, log_level: &str, verbose: &str) -> RuntimeSettings {
    RuntimeSettings {
        environment: environment.to_string(),
        log_level: log_level.to_string(),
        log_local_verbose: verbose.to_string(),
        ..RuntimeSettings::default()
    }
}

/// Field maps whose keys can never collide with reserved output keys
fn field_map() -> impl Strategy<Value = Metadata> {
    prop::collection::hash_map("k[a-z0-9]{0,6}", "[a-zA-Z0-9]{0,8}", 0..6)
        .prop_map(|map| map.into_iter().collect())
}

// ============================================================================
// Message Prefix Rule
// ============================================================================

proptest! {
    /// A prefix is inserted exactly once, as "[prefix] " before the text
    #[test]
    fn test_prefix_inserted_exactly_once(
        prefix in "[a-zA-Z0-9-]{1,12}",
        message in "[ -~]{0,40}"
    ) {
        let prefixed = LogMessage::from(message.as_str()).with_prefix(&prefix);
        prop_assert_eq!(
            prefixed.text().unwrap(),
            format!("[{}] {}", prefix, message)
        );
    }

    /// Prefixing a structured-first message touches only the text
    #[test]
    fn test_prefix_never_touches_fields(
        prefix in "[a-zA-Z0-9-]{1,12}",
        message in "[ -~]{0,40}",
        fields in field_map()
    ) {
        let prefixed =
            LogMessage::from((fields.clone(), message.as_str())).with_prefix(&prefix);

        prop_assert_eq!(prefixed.fields().unwrap(), &fields);
        prop_assert_eq!(
            prefixed.text().unwrap(),
            format!("[{}] {}", prefix, message)
        );
    }

    /// A fields-only message passes through any prefix unchanged
    #[test]
    fn test_fields_only_never_prefixed(
        prefix in "[a-zA-Z0-9-]{1,12}",
        fields in field_map()
    ) {
        let passed = LogMessage::from(fields.clone()).with_prefix(&prefix);
        prop_assert_eq!(passed, LogMessage::Fields(fields));
    }

    /// Without a prefix the message text is byte-identical
    #[test]
    fn test_no_prefix_passthrough(message in "[ -~]{0,40}") {
        let (text, _) = LogMessage::from(message.as_str()).into_parts();
        prop_assert_eq!(text, message);
    }
}

// ============================================================================
// Metadata Merge Semantics
// ============================================================================

proptest! {
    /// merge_missing never overwrites an existing key
    #[test]
    fn test_merge_missing_never_overwrites(
        first in field_map(),
        second in field_map()
    ) {
        let mut merged = first.clone();
        merged.merge_missing(&second);

        for (key, value) in first.iter() {
            prop_assert_eq!(merged.get(key), Some(value));
        }
        for (key, value) in second.iter() {
            if !first.contains_key(key) {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
    }

    /// merge lets the newcomer win on every colliding key
    #[test]
    fn test_merge_overwrite_wins(
        first in field_map(),
        second in field_map()
    ) {
        let mut merged = first;
        merged.merge(second.clone());

        for (key, value) in second.iter() {
            prop_assert_eq!(merged.get(key), Some(value));
        }
    }
}

// ============================================================================
// Log Level
// ============================================================================

proptest! {
    /// Level names roundtrip through parsing
    #[test]
    fn test_log_level_str_roundtrip(level in prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]) {
        let parsed: LogLevel = level.as_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Level ordering is consistent with numeric severity
    #[test]
    fn test_log_level_ordering(
        level1 in prop_oneof![
            Just(LogLevel::Trace),
            Just(LogLevel::Debug),
            Just(LogLevel::Info),
            Just(LogLevel::Warn),
            Just(LogLevel::Error),
            Just(LogLevel::Fatal),
        ],
        level2 in prop_oneof![
            Just(LogLevel::Trace),
            Just(LogLevel::Debug),
            Just(LogLevel::Info),
            Just(LogLevel::Warn),
            Just(LogLevel::Error),
            Just(LogLevel::Fatal),
        ]
    ) {
        prop_assert_eq!(level1 <= level2, level1.value() <= level2.value());
        prop_assert_eq!(level1 < level2, level1.value() < level2.value());
    }

    /// Parsing accepts any casing of the accepted names
    #[test]
    fn test_log_level_case_insensitive(use_lower in any::<bool>()) {
        let names = ["TRACE", "VERBOSE", "DEBUG", "INFO", "WARN", "WARNING", "ERROR", "FATAL"];

        for name in names {
            let input = if use_lower {
                name.to_lowercase()
            } else {
                name.to_string()
            };
            prop_assert!(input.parse::<LogLevel>().is_ok(), "Failed to parse: {}", input);
        }
    }

    /// Numeric strings never parse as a level
    #[test]
    fn test_log_level_invalid_parse(invalid in "[0-9]{1,6}") {
        prop_assert!(invalid.parse::<LogLevel>().is_err());
    }
}

// ============================================================================
// Message Sanitization (Security Critical!)
// ============================================================================

proptest! {
    /// Newlines are escaped in record messages (prevents log injection)
    #[test]
    fn test_message_sanitization_newlines(message in ".*") {
        let record = LogRecord::new(LogLevel::Info, message.clone());

        prop_assert!(!record.message.contains('\n'),
                "Record contains unsanitized newline: {:?}", record.message);

        if message.contains('\n') {
            prop_assert!(record.message.contains("\\n"),
                    "Newlines not properly escaped: {:?}", record.message);
        }
    }

    /// Carriage returns are escaped in record messages
    #[test]
    fn test_message_sanitization_carriage_return(message in ".*") {
        let record = LogRecord::new(LogLevel::Info, message.clone());

        prop_assert!(!record.message.contains('\r'),
                "Record contains unsanitized carriage return: {:?}", record.message);

        if message.contains('\r') {
            prop_assert!(record.message.contains("\\r"),
                    "Carriage returns not properly escaped: {:?}", record.message);
        }
    }

    /// Tabs are escaped in record messages
    #[test]
    fn test_message_sanitization_tabs(message in ".*") {
        let record = LogRecord::new(LogLevel::Info, message.clone());

        prop_assert!(!record.message.contains('\t'),
                "Record contains unsanitized tab: {:?}", record.message);
    }

    /// An attacker cannot forge extra log lines through the message
    #[test]
    fn test_log_injection_prevention(
        legitimate in "[a-zA-Z0-9 ]+",
        injected_level in prop_oneof![
            Just("ERROR"),
            Just("WARN"),
            Just("FATAL"),
        ]
    ) {
        let malicious = format!("{}\n{}: Fake admin login", legitimate, injected_level);
        let record = LogRecord::new(LogLevel::Info, malicious);

        let lines: Vec<&str> = record.message.split('\n').collect();
        prop_assert_eq!(lines.len(), 1,
                   "Message was not properly sanitized: {:?}", &record.message);
    }
}

// ============================================================================
// Configuration Factory
// ============================================================================

proptest! {
    /// Production never gets the pretty transport, whatever else is set
    #[test]
    fn test_production_never_pretty(
        log_level in "[a-z]{0,10}",
        verbose in "[a-zA-Z]{0,6}"
    ) {
        let options = logger_options(&settings("production", &log_level, &verbose));
        prop_assert!(options.pretty.is_none());
    }

    /// Every other environment gets the pretty transport
    #[test]
    fn test_non_production_always_pretty(
        environment in "[a-z]{1,12}".prop_filter("not production", |e| e != "production")
    ) {
        let options = logger_options(&settings(&environment, "info", ""));
        prop_assert!(options.pretty.is_some());
    }

    /// The include restriction is lifted exactly when verbose is "true"
    #[test]
    fn test_verbose_controls_include(verbose in "[a-zA-Z]{0,8}") {
        let options = logger_options(&settings("development", "info", &verbose));
        let pretty = options.pretty.unwrap();

        prop_assert_eq!(
            pretty.include.is_none(),
            verbose.eq_ignore_ascii_case("true")
        );
    }

    /// The factory resolves any level string without failing
    #[test]
    fn test_factory_level_total(log_level in ".*") {
        let options = logger_options(&settings("development", &log_level, ""));
        prop_assert!(options.level.value() <= LogLevel::Fatal.value());
    }
}
