//! Property-based tests for service_logger using proptest

use parking_lot::Mutex;
use proptest::prelude::*;
use service_logger::filter::LogFilter;
use service_logger::prelude::*;
use std::io::Write;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Debug),
        Just(Level::Info),
        Just(Level::Warn),
        Just(Level::Error),
    ]
}

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Write for Capture {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// Level names and numeric values both round-trip
    #[test]
    fn test_level_roundtrip(level in any_level()) {
        let parsed: Level = level.as_str().parse().unwrap();
        prop_assert_eq!(level, parsed);

        let from_num = Level::try_from(level.as_i8()).unwrap();
        prop_assert_eq!(level, from_num);
    }

    /// Level ordering agrees with the numeric severity
    #[test]
    fn test_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, a.as_i8() <= b.as_i8());
        prop_assert_eq!(a < b, a.as_i8() < b.as_i8());
    }

    /// Level names parse in any case
    #[test]
    fn test_level_parse_case_insensitive(level in any_level(), upper in any::<bool>()) {
        let name = if upper {
            level.as_str().to_uppercase()
        } else {
            level.as_str().to_lowercase()
        };
        prop_assert_eq!(name.parse::<Level>().unwrap(), level);
    }

    /// Only the four severities convert from a number
    #[test]
    fn test_unknown_numbers_rejected(n in any::<i8>()) {
        prop_assume!(![-4, 0, 4, 8].contains(&n));
        prop_assert!(Level::try_from(n).is_err());
    }
}

// ============================================================================
// Emission Tests
// ============================================================================

proptest! {
    /// A record is written exactly when its level reaches the minimum
    #[test]
    fn test_threshold_filtering(min in any_level(), level in any_level()) {
        let capture = Capture::default();
        let logger = Logger::new(Output::writer(capture.clone()), min, "SALES", None);

        logger.log(&Context::background(), level, "m", vec![]);

        let written = !capture.0.lock().is_empty();
        prop_assert_eq!(written, level >= min);
    }

    /// The emitted trace id is whatever the context carried
    #[test]
    fn test_trace_id_passthrough(trace in "\\PC*") {
        let capture = Capture::default();
        let logger = Logger::new(
            Output::writer(capture.clone()),
            Level::Info,
            "SALES",
            Some(trace_id_from_context()),
        );

        logger.info(&Context::background().with_trace_id(trace.clone()), "m", vec![]);

        let raw = capture.0.lock().clone();
        let value: serde_json::Value = serde_json::from_slice(&raw).unwrap();
        prop_assert_eq!(value["trace_id"].as_str(), Some(trace.as_str()));
    }

    /// Arbitrary messages always yield exactly one line
    #[test]
    fn test_message_single_line(msg in "\\PC*[\\n\\r]?\\PC*") {
        let capture = Capture::default();
        let logger = Logger::new(Output::writer(capture.clone()), Level::Info, "SALES", None);

        logger.info(&Context::background(), &msg, vec![]);

        let raw = String::from_utf8(capture.0.lock().clone()).unwrap();
        prop_assert_eq!(raw.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        prop_assert_eq!(value["msg"].as_str(), Some(msg.as_str()));
    }
}

// ============================================================================
// Value Tests
// ============================================================================

proptest! {
    #[test]
    fn test_int_value_json(n in any::<i64>()) {
        prop_assert_eq!(FieldValue::from(n).to_json_value(), serde_json::json!(n));
    }

    #[test]
    fn test_string_value_json(s in "\\PC*") {
        prop_assert_eq!(
            FieldValue::from(s.as_str()).to_json_value(),
            serde_json::Value::String(s.clone())
        );
    }

    #[test]
    fn test_finite_float_value_json(f in -1.0e12f64..1.0e12) {
        prop_assert_eq!(FieldValue::from(f).to_json_value(), serde_json::json!(f));
    }
}

// ============================================================================
// Filter Tests
// ============================================================================

proptest! {
    /// Service matching ignores case on both sides
    #[test]
    fn test_filter_case_insensitive(service in "[a-zA-Z]{1,12}", flip in any::<bool>()) {
        let wanted = if flip { service.to_uppercase() } else { service.to_lowercase() };
        let line = serde_json::json!({
            "service": service,
            "time": "t",
            "file": "f.rs:1",
            "level": "INFO",
            "msg": "m",
        })
        .to_string();

        let other = format!("{}x", wanted);
        prop_assert!(LogFilter::new(&wanted).format_line(&line).is_some());
        prop_assert!(LogFilter::new(&other).format_line(&line).is_none());
    }

    /// Without a filter every line produces output
    #[test]
    fn test_unfiltered_never_drops(line in "\\PC*") {
        prop_assert!(LogFilter::default().format_line(&line).is_some());
    }
}
