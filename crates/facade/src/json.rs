//! Canonical JSON rendering of structured payloads.
//!
//! Output is pretty-printed with a 4-space indent, object keys sorted by code
//! point, `,` between items and `: ` after keys. Non-ASCII text is written
//! literally. chrono date/time values serialize as ISO-8601 strings; a
//! `std::time::SystemTime` field needs `#[serde(serialize_with =
//! "ctxlog::json::iso8601")]` to do the same, since its own serde form is a
//! `{secs_since_epoch, nanos_since_epoch}` struct.

mod finite;

use std::any::type_name;
use std::time::SystemTime;

use chrono::{DateTime, SecondsFormat, Utc};

use ctxlog_core::{LogError, LogResult};
use serde::{Serialize, Serializer};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

const INDENT: &[u8] = b"    ";

const REJECT_PREFIX: &str = "value of type ";
const REJECT_SUFFIX: &str = " has no JSON representation";

/// Render `payload` as canonical JSON.
///
/// Fails with [`LogError::NotSerializable`] when any value inside cannot be
/// expressed as JSON. The error names the offending type when a field was
/// marked with [`reject`] or is a non-finite float (`f32`/`f64`), and the
/// payload type otherwise.
pub fn render<T>(payload: &T) -> LogResult<String>
where
    T: Serialize + ?Sized,
{
    payload
        .serialize(finite::FiniteCheck)
        .map_err(not_serializable::<T>)?;
    let value = serde_json::to_value(payload).map_err(not_serializable::<T>)?;
    let value = sort_keys(value);

    let mut out = Vec::with_capacity(128);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
    value
        .serialize(&mut serializer)
        .map_err(not_serializable::<T>)?;

    String::from_utf8(out).map_err(|e| LogError::not_serializable(type_name::<T>(), e.to_string()))
}

/// `serialize_with` helper for fields that hold non-data values.
///
/// ```
/// #[derive(serde::Serialize)]
/// struct Upload {
///     path: String,
///     #[serde(serialize_with = "ctxlog::json::reject")]
///     file: std::fs::File,
/// }
/// ```
pub fn reject<T, S>(_value: &T, _serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    Err(serde::ser::Error::custom(rejection(type_name::<T>())))
}

/// `serialize_with` helper rendering a `SystemTime` as an ISO-8601 UTC string.
///
/// ```
/// #[derive(serde::Serialize)]
/// struct Checkpoint {
///     #[serde(serialize_with = "ctxlog::json::iso8601")]
///     at: std::time::SystemTime,
/// }
/// let rendered = ctxlog::json::render(&Checkpoint { at: std::time::UNIX_EPOCH }).unwrap();
/// assert!(rendered.contains("\"1970-01-01T00:00:00Z\""));
/// ```
pub fn iso8601<S>(value: &SystemTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let at = DateTime::<Utc>::from(*value);
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::AutoSi, true))
}

fn rejection(type_name: &str) -> String {
    format!("{REJECT_PREFIX}{type_name}{REJECT_SUFFIX}")
}

fn not_serializable<T: ?Sized>(err: serde_json::Error) -> LogError {
    let reason = err.to_string();
    let type_name = reason
        .strip_prefix(REJECT_PREFIX)
        .and_then(|rest| rest.strip_suffix(REJECT_SUFFIX))
        .unwrap_or(type_name::<T>())
        .to_string();
    LogError::NotSerializable { type_name, reason }
}

/// Rebuild objects with keys in sorted order, independent of how
/// `serde_json::Map` orders entries in this build.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            let sorted: Map<String, Value> = entries
                .into_iter()
                .map(|(key, value)| (key, sort_keys(value)))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn renders_simple_mapping() {
        let rendered = render(&json!({"test": "test"})).unwrap();
        assert_eq!(rendered, "{\n    \"test\": \"test\"\n}");

        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, json!({"test": "test"}));
    }

    #[test]
    fn keys_are_sorted_at_every_level() {
        let payload = json!({
            "b": {"z": 1, "a": 2},
            "a": [{"y": true, "x": null}],
        });
        let rendered = render(&payload).unwrap();
        let expected = r#"{
    "a": [
        {
            "x": null,
            "y": true
        }
    ],
    "b": {
        "a": 2,
        "z": 1
    }
}"#;
        assert_eq!(rendered, expected);
    }

    #[test]
    fn non_ascii_is_kept_literal() {
        let rendered = render(&json!({"msg": "こんにちは", "é": "ü"})).unwrap();
        assert!(rendered.contains("\"msg\": \"こんにちは\""));
        assert!(rendered.contains("\"é\": \"ü\""));
        assert!(!rendered.contains("\\u"));
    }

    #[test]
    fn sequences_and_empty_containers() {
        assert_eq!(render(&vec![1, 2]).unwrap(), "[\n    1,\n    2\n]");
        assert_eq!(render(&json!({})).unwrap(), "{}");
        assert_eq!(render(&Vec::<u8>::new()).unwrap(), "[]");
    }

    #[derive(Serialize)]
    struct Shipment {
        order: u32,
        shipped_on: NaiveDate,
        seen_at: chrono::DateTime<Utc>,
    }

    #[test]
    fn dates_render_as_iso_8601() {
        let payload = Shipment {
            order: 7,
            shipped_on: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            seen_at: Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap(),
        };
        let parsed: Value = serde_json::from_str(&render(&payload).unwrap()).unwrap();
        assert_eq!(parsed["shipped_on"], "2024-03-09");
        assert_eq!(parsed["seen_at"], "2024-03-09T14:05:07Z");
        assert_eq!(parsed["order"], 7);
    }

    #[derive(Serialize)]
    struct Upload {
        path: String,
        #[serde(serialize_with = "reject")]
        file: std::fs::File,
    }

    #[test]
    fn open_file_is_not_serializable() {
        let file = std::fs::File::open(std::env::current_exe().unwrap()).unwrap();
        let payload = Upload {
            path: "self".to_string(),
            file,
        };

        match render(&payload) {
            Err(LogError::NotSerializable { type_name, reason }) => {
                assert_eq!(type_name, "std::fs::File");
                assert!(reason.contains("std::fs::File"));
            }
            other => panic!("expected NotSerializable, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_floats_are_not_serializable() {
        let ratios = std::collections::BTreeMap::from([("ratio", f64::NAN)]);
        match render(&ratios) {
            Err(LogError::NotSerializable { type_name, .. }) => assert_eq!(type_name, "f64"),
            other => panic!("expected NotSerializable, got {other:?}"),
        }
        match render(&vec![f64::INFINITY]) {
            Err(LogError::NotSerializable { type_name, .. }) => assert_eq!(type_name, "f64"),
            other => panic!("expected NotSerializable, got {other:?}"),
        }

        #[derive(Serialize)]
        struct Reading {
            label: &'static str,
            value: Option<f32>,
        }
        let err = render(&Reading {
            label: "thermometer",
            value: Some(f32::NEG_INFINITY),
        })
        .unwrap_err();
        assert!(matches!(err, LogError::NotSerializable { ref type_name, .. } if type_name == "f32"));

        assert_eq!(render(&json!({"ratio": 0.5})).unwrap(), "{\n    \"ratio\": 0.5\n}");
    }

    #[derive(Serialize)]
    struct Checkpoint {
        #[serde(serialize_with = "iso8601")]
        at: SystemTime,
    }

    #[test]
    fn system_time_renders_as_iso_8601_with_helper() {
        let epoch = render(&Checkpoint {
            at: std::time::UNIX_EPOCH,
        })
        .unwrap();
        assert_eq!(epoch, "{\n    \"at\": \"1970-01-01T00:00:00Z\"\n}");

        let later = std::time::UNIX_EPOCH + std::time::Duration::from_millis(1_710_000_000_250);
        let parsed: Value = serde_json::from_str(&render(&Checkpoint { at: later }).unwrap()).unwrap();
        assert_eq!(parsed["at"], "2024-03-09T16:00:00.250Z");
    }

    #[test]
    fn non_string_map_keys_are_not_serializable() {
        let mut payload = HashMap::new();
        payload.insert((1u8, 2u8), "pair");

        let err = render(&payload).unwrap_err();
        match err {
            LogError::NotSerializable { type_name, .. } => {
                assert!(type_name.contains("HashMap"), "{type_name}");
            }
            other => panic!("expected NotSerializable, got {other:?}"),
        }
    }
}
