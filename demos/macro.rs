//! Using the nan0! macro for dynamic value construction.
//!
//! Run with: cargo run --example macro

use nan0::{format_value, nan0, stringify};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let null_val = nan0!(null);
    let bool_val = nan0!(true);
    let number = nan0!(1234567.5);
    let text = nan0!("Hello: NaN0");

    // Scalars have no document form of their own; format_value gives their literal.
    println!("Primitives:");
    println!("  null:   {}", format_value(&null_val));
    println!("  bool:   {}", format_value(&bool_val));
    println!("  number: {}", format_value(&number));
    println!("  text:   {}\n", format_value(&text));

    let numbers = nan0!([1, 2, 3, 4, 5]);
    let mixed = nan0!([1, "two", true, null, [], {}]);

    println!("Arrays:");
    println!("{}\n", stringify(&numbers)?);
    println!("{}\n", stringify(&mixed)?);

    let user = nan0!({
        "id": 123,
        "name": "Alice",
        "email": "alice@example.com",
        "about": "line one\nline two",
        "groups": [
            {"admins": ["alice", "root"]},
            {"settings": {"theme": "dark"}}
        ]
    });

    println!("Object:\n{}", stringify(&user)?);

    Ok(())
}
