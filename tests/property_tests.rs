//! Property-based tests for the round-trip guarantees of the codec.
//!
//! Generated values stay inside what the grammar can express: array items
//! are scalars, empty containers or single-key labelled containers.

use chrono::{TimeZone, Utc};
use nan0::{format_value, from_str, parse, parse_value, stringify, to_string, Nan0Map, Value};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};

fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_string(value) {
        Ok(serialized) => match from_str::<T>(&serialized) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

fn key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

fn text() -> impl Strategy<Value = String> {
    prop::collection::vec("\\PC{0,12}", 1..4).prop_map(|lines| lines.join("\n"))
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<f64>()
            .prop_filter("finite", |n| n.is_finite())
            .prop_map(Value::Number),
        // 0000-01-01 ..= 9999-12-31, whole seconds
        (-62_167_219_200i64..=253_402_300_799i64)
            .prop_map(|secs| Value::Date(Utc.timestamp_opt(secs, 0).unwrap())),
        text().prop_map(Value::String),
    ]
}

fn as_container(value: Value) -> Value {
    if value.is_container() {
        value
    } else {
        Value::Array(vec![value])
    }
}

fn item(inner: BoxedStrategy<Value>) -> impl Strategy<Value = Value> {
    prop_oneof![
        scalar(),
        Just(Value::Array(Vec::new())),
        Just(Value::Object(Nan0Map::new())),
        (key(), inner).prop_map(|(label, value)| {
            let mut wrapper = Nan0Map::new();
            wrapper.insert(label, as_container(value));
            Value::Object(wrapper)
        }),
    ]
}

fn document() -> impl Strategy<Value = Value> {
    scalar()
        .prop_recursive(3, 32, 5, |inner| {
            let inner = inner.boxed();
            prop_oneof![
                prop::collection::vec((key(), inner.clone()), 0..5)
                    .prop_map(|fields| Value::Object(fields.into_iter().collect())),
                prop::collection::vec(item(inner), 0..5).prop_map(Value::Array),
            ]
        })
        .prop_map(as_container)
}

proptest! {
    #[test]
    fn prop_document_round_trip(value in document()) {
        let text = stringify(&value).unwrap();
        prop_assert_eq!(parse(&text).unwrap(), value, "text was:\n{}", text);
    }

    #[test]
    fn prop_stringify_is_stable(value in document()) {
        let text = stringify(&value).unwrap();
        let again = stringify(&parse(&text).unwrap()).unwrap();
        prop_assert_eq!(again, text);
    }

    #[test]
    fn prop_format_is_idempotent(value in scalar()) {
        let once = format_value(&value);
        prop_assert_eq!(format_value(&parse_value(&once)), once);
    }

    #[test]
    fn prop_grouped_numbers(n in -1_000_000_000_000i64..1_000_000_000_000i64, frac in 0u32..1000) {
        let value = Value::Number(n as f64 + f64::from(frac) / 1000.0);
        let text = format_value(&value);
        prop_assert!(!text.contains("__"));
        prop_assert_eq!(parse_value(&text), value);
    }

    // serde bridge: the root must be a container, so scalars travel in vectors.
    #[test]
    fn prop_vec_i32(v in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_vec_u32(v in prop::collection::vec(any::<u32>(), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_vec_bool(v in prop::collection::vec(any::<bool>(), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_vec_string(v in prop::collection::vec("\\PC*", 0..10)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_simple_struct(id in any::<u32>(), name in "\\PC*", score in any::<i32>(), flag in proptest::option::of(any::<bool>())) {
        #[derive(Serialize, Deserialize, Debug, PartialEq)]
        struct Record {
            id: u32,
            name: String,
            score: i32,
            flag: Option<bool>,
        }

        let record = Record { id, name, score, flag };
        prop_assert!(roundtrip(&record));
    }

    #[test]
    fn prop_tuple_i32_bool(t in (any::<i32>(), any::<bool>())) {
        prop_assert!(roundtrip(&t));
    }
}
