//! Basic NaN0 serialization and deserialization.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use nan0::{from_str, to_string};
use std::collections::BTreeMap;
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct User {
    id: u32,
    name: String,
    email: String,
    bio: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut users = BTreeMap::new();
    users.insert(
        "alice".to_string(),
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            bio: "Writes parsers.\nReviews them too.".to_string(),
        },
    );
    users.insert(
        "bob".to_string(),
        User {
            id: 1_043,
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
            bio: "Ops: on call".to_string(),
        },
    );

    // Serialize to NaN0
    let text = to_string(&users)?;
    println!("NaN0 output:\n{}\n", text);

    // Deserialize back
    let back: BTreeMap<String, User> = from_str(&text)?;
    assert_eq!(users, back);
    println!("Round-trip successful!");

    Ok(())
}
