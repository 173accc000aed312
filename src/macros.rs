/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// `null`, arrays and objects are spelled out; anything else is an expression
/// converted with `Value::from`. Object keys are string literals.
///
/// ```rust
/// use nan0::{nan0, Value};
///
/// let limit = 10;
/// let value = nan0!({
///     "name": "scan",
///     "limit": limit,
///     "offset": -2,
///     "tags": ["a", null, []],
///     "nested": { "deep": true }
/// });
/// assert_eq!(value.get("offset"), Some(&Value::Number(-2.0)));
/// ```
#[macro_export]
macro_rules! nan0 {
    (@array $array:ident) => {};
    (@array $array:ident , $($rest:tt)*) => {
        $crate::nan0!(@array $array $($rest)*);
    };
    (@array $array:ident null $($rest:tt)*) => {
        $array.push($crate::Value::Null);
        $crate::nan0!(@array $array $($rest)*);
    };
    (@array $array:ident [$($inner:tt)*] $($rest:tt)*) => {
        $array.push($crate::nan0!([$($inner)*]));
        $crate::nan0!(@array $array $($rest)*);
    };
    (@array $array:ident {$($inner:tt)*} $($rest:tt)*) => {
        $array.push($crate::nan0!({$($inner)*}));
        $crate::nan0!(@array $array $($rest)*);
    };
    (@array $array:ident $next:expr , $($rest:tt)*) => {
        $array.push($crate::Value::from($next));
        $crate::nan0!(@array $array $($rest)*);
    };
    (@array $array:ident $last:expr) => {
        $array.push($crate::Value::from($last));
    };

    (@object $object:ident) => {};
    (@object $object:ident , $($rest:tt)*) => {
        $crate::nan0!(@object $object $($rest)*);
    };
    (@object $object:ident $key:literal : null $($rest:tt)*) => {
        $object.insert($key.to_string(), $crate::Value::Null);
        $crate::nan0!(@object $object $($rest)*);
    };
    (@object $object:ident $key:literal : [$($inner:tt)*] $($rest:tt)*) => {
        $object.insert($key.to_string(), $crate::nan0!([$($inner)*]));
        $crate::nan0!(@object $object $($rest)*);
    };
    (@object $object:ident $key:literal : {$($inner:tt)*} $($rest:tt)*) => {
        $object.insert($key.to_string(), $crate::nan0!({$($inner)*}));
        $crate::nan0!(@object $object $($rest)*);
    };
    (@object $object:ident $key:literal : $value:expr , $($rest:tt)*) => {
        $object.insert($key.to_string(), $crate::Value::from($value));
        $crate::nan0!(@object $object $($rest)*);
    };
    (@object $object:ident $key:literal : $value:expr) => {
        $object.insert($key.to_string(), $crate::Value::from($value));
    };

    (null) => {
        $crate::Value::Null
    };

    ([]) => {
        $crate::Value::Array(::std::vec::Vec::new())
    };

    ([ $($tt:tt)+ ]) => {{
        let mut array = ::std::vec::Vec::new();
        $crate::nan0!(@array array $($tt)+);
        $crate::Value::Array(array)
    }};

    ({}) => {
        $crate::Value::Object($crate::Nan0Map::new())
    };

    ({ $($tt:tt)+ }) => {{
        let mut object = $crate::Nan0Map::new();
        $crate::nan0!(@object object $($tt)+);
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Nan0Map, Value};

    #[test]
    fn test_nan0_macro_primitives() {
        assert_eq!(nan0!(null), Value::Null);
        assert_eq!(nan0!(true), Value::Bool(true));
        assert_eq!(nan0!(42), Value::Number(42.0));
        assert_eq!(nan0!(-3.5), Value::Number(-3.5));
        assert_eq!(nan0!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_nan0_macro_arrays() {
        assert_eq!(nan0!([]), Value::Array(vec![]));
        assert_eq!(
            nan0!([1, "two", null, [false], {}]),
            Value::Array(vec![
                Value::Number(1.0),
                Value::String("two".into()),
                Value::Null,
                Value::Array(vec![Value::Bool(false)]),
                Value::Object(Nan0Map::new()),
            ])
        );
        assert_eq!(nan0!([1, 2,]).as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_nan0_macro_objects() {
        assert_eq!(nan0!({}), Value::Object(Nan0Map::new()));

        let name = String::from("Alice");
        let obj = nan0!({
            "name": name,
            "age": 30,
            "pet": null,
            "langs": ["rust"],
        });
        let map = obj.as_object().unwrap();
        let keys: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "age", "pet", "langs"]);
        assert_eq!(map.get("name"), Some(&Value::String("Alice".into())));
        assert_eq!(map.get("pet"), Some(&Value::Null));
    }
}
