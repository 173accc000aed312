use chrono::{DateTime, TimeZone, Utc};
use nan0::{from_str, from_value, parse, to_string, to_value, Error, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
enum Line {
    Product(Product),
    Note(Vec<String>),
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    lines: Vec<Line>,
    total: f64,
}

#[test]
fn test_simple_struct() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    };

    let text = to_string(&user).unwrap();
    println!("User NaN0:\n{}", text);

    let user_back: User = from_str(&text).unwrap();
    assert_eq!(user, user_back);
}

#[test]
fn test_nested_struct_with_labelled_items() {
    let order = Order {
        order_id: 12345,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["vip".to_string()],
        },
        lines: vec![
            Line::Product(Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            }),
            Line::Note(vec!["gift wrap".to_string()]),
        ],
        total: 1109.97,
    };

    let text = to_string(&order).unwrap();
    assert_eq!(
        text,
        "order_id: 12_345\n\
         customer:\n  id: 123\n  name: Alice\n  active: true\n  tags:\n    - vip\n\
         lines:\n  - Product:\n    sku: WIDGET-001\n    price: 29.99\n    quantity: 2\n\
         \x20\x20- Note:\n    - gift wrap\n\
         total: 1_109.97"
    );

    let order_back: Order = from_str(&text).unwrap();
    assert_eq!(order, order_back);
}

#[test]
fn test_array_of_structs_is_rejected() {
    let products = vec![
        Product {
            sku: "A".to_string(),
            price: 1.0,
            quantity: 1,
        },
        Product {
            sku: "B".to_string(),
            price: 2.0,
            quantity: 2,
        },
    ];
    assert!(matches!(to_string(&products), Err(Error::InputContract(_))));
}

#[test]
fn test_map_of_structs() {
    let mut stock = BTreeMap::new();
    stock.insert(
        "north".to_string(),
        Product {
            sku: "N-1".to_string(),
            price: 0.5,
            quantity: 1_000,
        },
    );
    stock.insert(
        "south".to_string(),
        Product {
            sku: "S-1".to_string(),
            price: 12.25,
            quantity: 0,
        },
    );

    let text = to_string(&stock).unwrap();
    assert!(text.contains("quantity: 1_000"));
    let back: BTreeMap<String, Product> = from_str(&text).unwrap();
    assert_eq!(stock, back);
}

#[test]
fn test_option_fields() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Contact {
        name: String,
        email: Option<String>,
        phone: Option<String>,
    }

    let contact = Contact {
        name: "Bob".to_string(),
        email: None,
        phone: Some("555 0100".to_string()),
    };
    let text = to_string(&contact).unwrap();
    assert_eq!(text, "name: Bob\nemail: null\nphone: 555 0100");
    assert_eq!(from_str::<Contact>(&text).unwrap(), contact);
}

#[test]
fn test_strings_that_look_like_other_types() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Tricky {
        zip: String,
        flag: String,
        day: String,
        empty: String,
        padded: String,
        quote: String,
        ratio: String,
    }

    let tricky = Tricky {
        zip: "01234".to_string(),
        flag: "true".to_string(),
        day: "2024-01-01".to_string(),
        empty: String::new(),
        padded: "  x  ".to_string(),
        quote: "say \"hi\"".to_string(),
        ratio: "3:2".to_string(),
    };
    let text = to_string(&tricky).unwrap();
    assert!(text.contains("zip: \"01234\""));
    assert!(text.contains("flag: \"true\""));
    assert!(text.contains("ratio: \"3:2\""));
    assert_eq!(from_str::<Tricky>(&text).unwrap(), tricky);
}

#[test]
fn test_multiline_strings() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Post {
        title: String,
        body: String,
    }

    let post = Post {
        title: "Hello".to_string(),
        body: "first line\nsecond line\n  indented".to_string(),
    };
    let text = to_string(&post).unwrap();
    assert_eq!(text, "title: Hello\nbody: |\n  first line\n  second line\n    indented");
    assert_eq!(from_str::<Post>(&text).unwrap(), post);

    let gappy = Post {
        title: "Gap".to_string(),
        body: "a\n\nb".to_string(),
    };
    let text = to_string(&gappy).unwrap();
    assert_eq!(text, "title: Gap\nbody: \"a\\n\\nb\"");
    assert_eq!(from_str::<Post>(&text).unwrap(), gappy);
}

#[test]
fn test_enums() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    enum Status {
        Active,
        Suspended { reason: String },
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Account {
        status: Status,
        previous: Status,
    }

    let account = Account {
        status: Status::Active,
        previous: Status::Suspended {
            reason: "billing".to_string(),
        },
    };
    let text = to_string(&account).unwrap();
    assert_eq!(text, "status: Active\nprevious:\n  Suspended:\n    reason: billing");
    assert_eq!(from_str::<Account>(&text).unwrap(), account);
}

#[test]
fn test_dates_through_chrono() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Event {
        at: DateTime<Utc>,
    }

    let value = parse("at: 2024-11-13T19:34:00").unwrap();
    let event: Event = from_value(value).unwrap();
    assert_eq!(event.at, Utc.with_ymd_and_hms(2024, 11, 13, 19, 34, 0).unwrap());

    // chrono serializes to an RFC 3339 string, which is written quoted.
    let text = to_string(&event).unwrap();
    assert!(text.starts_with("at: \"2024-11-13T19:34:00"));
    assert_eq!(from_str::<Event>(&text).unwrap(), event);
}

#[test]
fn test_to_value() {
    let user = User {
        id: 1,
        name: "Ann".to_string(),
        active: false,
        tags: vec![],
    };
    let value = to_value(&user).unwrap();
    assert_eq!(value.get("id"), Some(&Value::Number(1.0)));
    assert_eq!(value.get("tags"), Some(&Value::Array(vec![])));
    assert_eq!(to_string(&user).unwrap(), "id: 1\nname: Ann\nactive: false\ntags: []");
}

#[test]
fn test_large_and_fractional_numbers() {
    let numbers = vec![0.1, -2.5, 1e15, 123456789.0];
    let text = to_string(&numbers).unwrap();
    assert_eq!(text, "- 0.1\n- -2.5\n- 1_000_000_000_000_000\n- 123_456_789");
    assert_eq!(from_str::<Vec<f64>>(&text).unwrap(), numbers);
}

#[test]
fn test_deserialize_errors() {
    assert!(from_str::<User>("id: 1\nname: x").is_err());
    assert!(from_str::<Vec<u8>>("- 300").is_err());
    assert!(matches!(
        from_str::<User>("id 1"),
        Err(Error::Grammar { .. })
    ));
}
