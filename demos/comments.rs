//! Keeping comments through a parse/stringify round-trip.
//!
//! Run with: cargo run --example comments

use nan0::{parse_document, stringify_document, stringify_with_comments, nan0, Comment};
use std::error::Error;

const SETTINGS: &str = "# Service settings
name: billing
# Connection pool
#   sizes are per worker
pool:
  min: 2
  max: 16
replicas:
  # primary first
  - eu-west
  - eu-central";

fn main() -> Result<(), Box<dyn Error>> {
    let doc = parse_document(SETTINGS)?;

    println!("Value: {:?}\n", doc.value);
    println!("Comments (latest first):");
    for comment in &doc.comments {
        println!("  [{}] {:?}", comment.id, comment.text);
    }

    let text = stringify_document(&doc)?;
    println!("\nWritten back:\n{}\n", text);

    // Comments can also be supplied by hand.
    let value = nan0!({"retries": 3, "backoff": "exponential"});
    let notes = vec![Comment::new("tuned in review", "backoff")];
    println!("{}", stringify_with_comments(&value, &notes)?);

    Ok(())
}
