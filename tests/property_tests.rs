//! Property-based tests for json_line_logger using proptest

use json_line_logger::prelude::*;
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
    ]
}

fn plain_logger(min_level: LogLevel) -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let logger = Logger::builder()
        .min_level(min_level)
        .color(false)
        .without_timestamps()
        .source_location(false)
        .sink(sink.clone())
        .build();
    (logger, sink)
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that LogLevel ordering follows the numeric representation
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
    }

    /// Raw values outside the enumeration always map to UNKNOWN
    #[test]
    fn test_out_of_range_level_is_unknown(raw in 4u8..) {
        prop_assert_eq!(LogLevel::label_for(raw), "UNKNOWN");
        prop_assert!(LogLevel::from_repr(raw).is_none());
    }

    /// Uncolored labels are byte-identical to the level name
    #[test]
    fn test_plain_label_matches_name(level in any_level()) {
        prop_assert_eq!(&*level.label(false), level.to_str());
        let colored = level.label(true);
        prop_assert!(colored.starts_with("\x1b["));
        prop_assert!(colored.ends_with("\x1b[0m"));
        prop_assert!(colored.contains(level.to_str()));
    }
}

// ============================================================================
// Logger Tests
// ============================================================================

proptest! {
    /// A call emits exactly one line when at or above the threshold, none otherwise
    #[test]
    fn test_threshold_filtering(threshold in any_level(), level in any_level(), message in ".*") {
        let (logger, sink) = plain_logger(threshold);

        logger.log(level, message.clone(), LogContext::new());

        if level < threshold {
            prop_assert!(sink.is_empty());
        } else {
            let lines = sink.lines();
            prop_assert_eq!(lines.len(), 1);
            let start = lines[0].find('{').unwrap();
            let payload: serde_json::Value = serde_json::from_str(&lines[0][start..]).unwrap();
            prop_assert_eq!(payload["message"].as_str(), Some(message.as_str()));
            prop_assert_eq!(payload["level"].as_str(), Some(level.to_str()));
        }
    }

    /// Every supplied field shows up in the payload with its value
    #[test]
    fn test_fields_survive_serialization(
        fields in prop::collection::hash_map("[a-z_]{1,12}", any::<i64>(), 0..8)
    ) {
        let (logger, sink) = plain_logger(LogLevel::Debug);
        let context: LogContext = fields.iter().map(|(k, v)| (k.as_str(), *v)).collect();

        logger.info("fields", context);

        let contents = sink.contents();
        let start = contents.find('{').unwrap();
        let payload: serde_json::Value = serde_json::from_str(contents[start..].trim_end()).unwrap();
        for (key, value) in &fields {
            prop_assert_eq!(payload[key.as_str()].as_i64(), Some(*value));
        }
    }

    /// Finite floats serialize; anything else yields the diagnostic line instead
    #[test]
    fn test_float_fields(
        value in prop_oneof![
            any::<f64>(),
            Just(f64::NAN),
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
        ]
    ) {
        let (logger, sink) = plain_logger(LogLevel::Debug);

        logger.info("measurement", LogContext::new().with_field("value", value));

        let contents = sink.contents();
        prop_assert_eq!(sink.lines().len(), 1);
        if value.is_finite() {
            prop_assert!(contents.contains("measurement"));
        } else {
            prop_assert!(!contents.contains("measurement"));
            prop_assert!(contents.starts_with("Failed to marshal log entry:"));
        }
    }
}
