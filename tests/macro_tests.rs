use chrono::{TimeZone, Utc};
use nan0::{nan0, stringify, Nan0Map, Value};

#[test]
fn test_nan0_macro_null() {
    let value = nan0!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_nan0_macro_booleans() {
    assert_eq!(nan0!(true), Value::Bool(true));
    assert_eq!(nan0!(false), Value::Bool(false));
}

#[test]
fn test_nan0_macro_numbers() {
    assert_eq!(nan0!(42), Value::Number(42.0));
    assert_eq!(nan0!(3.5), Value::Number(3.5));
    assert_eq!(nan0!(-123), Value::Number(-123.0));
    assert_eq!(nan0!(7u8), Value::Number(7.0));
}

#[test]
fn test_nan0_macro_strings() {
    assert_eq!(nan0!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(nan0!(""), Value::String(String::new()));
    assert_eq!(nan0!(String::from("owned")), Value::from("owned"));
}

#[test]
fn test_nan0_macro_arrays() {
    assert_eq!(nan0!([]), Value::Array(vec![]));

    let mixed = nan0!([1, "hello", true, null, -2]);
    assert_eq!(
        mixed,
        Value::Array(vec![
            Value::Number(1.0),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
            Value::Number(-2.0),
        ])
    );
}

#[test]
fn test_nan0_macro_objects() {
    assert_eq!(nan0!({}), Value::Object(Nan0Map::new()));

    let simple = nan0!({
        "name": "Alice",
        "age": 30
    });
    let obj = simple.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(obj.get("name"), Some(&Value::from("Alice")));
    assert_eq!(obj.get("age"), Some(&Value::Number(30.0)));
}

#[test]
fn test_nan0_macro_nested() {
    let nested = nan0!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "tags": ["admin", "developer"],
        "count": 42
    });

    let user = nested.get("user").and_then(Value::as_object).unwrap();
    assert_eq!(user.get("id"), Some(&Value::Number(123.0)));
    assert_eq!(user.get("active"), Some(&Value::Bool(true)));

    let tags = nested.get("tags").and_then(Value::as_array).unwrap();
    assert_eq!(tags, &vec![Value::from("admin"), Value::from("developer")]);

    assert_eq!(
        stringify(&nested).unwrap(),
        "user:\n  id: 123\n  name: Bob\n  active: true\ntags:\n  - admin\n  - developer\ncount: 42"
    );
}

#[test]
fn test_nan0_macro_expressions() {
    let released = Utc.with_ymd_and_hms(2024, 11, 13, 0, 0, 0).unwrap();
    let limit: Option<u32> = None;
    let value = nan0!({
        "released": released,
        "limit": limit,
        "sum": 1 + 2,
        "label": format!("v{}", 2),
    });

    assert_eq!(value.get("released"), Some(&Value::Date(released)));
    assert_eq!(value.get("limit"), Some(&Value::Null));
    assert_eq!(value.get("sum"), Some(&Value::Number(3.0)));
    assert_eq!(value.get("label"), Some(&Value::from("v2")));
}

#[test]
fn test_value_methods() {
    let null_val = nan0!(null);
    assert!(null_val.is_null());
    assert!(!null_val.is_bool());
    assert!(!null_val.is_number());
    assert!(!null_val.is_string());
    assert!(!null_val.is_array());
    assert!(!null_val.is_object());

    let bool_val = nan0!(true);
    assert_eq!(bool_val.as_bool(), Some(true));

    let str_val = nan0!("hello");
    assert_eq!(str_val.as_str(), Some("hello"));

    let array_val = nan0!([1, 2, 3]);
    assert_eq!(array_val.as_array().map(Vec::len), Some(3));
    assert!(array_val.is_container());

    let obj_val = nan0!({"key": "value"});
    assert_eq!(obj_val.as_object().map(Nan0Map::len), Some(1));
    assert!(nan0!({}).is_empty_container());
}
