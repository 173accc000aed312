//! Working with Value for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use serde::{Deserialize, Serialize};
use nan0::{nan0, parse, stringify, to_value, Value};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Build config dynamically with nan0! macro
    let config = nan0!({
        "host": "localhost",
        "port": 8080,
        "features": ["auth", "logging", "metrics"],
        "debug": true
    });

    println!("Config as NaN0:\n{}\n", stringify(&config)?);

    // Access values dynamically
    if let Some(host) = config.get("host").and_then(Value::as_str) {
        println!("Accessing field 'host': {}", host);
    }
    if let Some(port) = config.get("port").and_then(Value::as_i64) {
        println!("Accessing field 'port': {}", port);
    }

    // Parsed documents carry typed scalars
    let parsed = parse("released: 2024-11-13T19:34:00\nbudget: 160_000_500.345\nnote: \"42\"")?;
    for (key, value) in parsed.as_object().into_iter().flatten() {
        println!("  {} is a {} ({})", key, value.type_name(), value);
    }

    // Convert a struct to Value
    let user = User {
        id: 1,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };
    let mut value = to_value(&user)?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("active".to_string(), Value::Bool(true));
    }
    println!("\nUser as NaN0:\n{}", value);

    Ok(())
}
