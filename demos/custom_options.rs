//! Customizing the tab unit, line separator and skip rules.
//!
//! Run with: cargo run --example custom_options

use serde::{Deserialize, Serialize};
use nan0::{from_value, Codec, LineParser, ParserOptions, Skip, TabCandidate};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Config {
    name: String,
    version: String,
    debug: bool,
    paths: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config {
        name: "MyApp".to_string(),
        version: "1.0.0".to_string(),
        debug: true,
        paths: vec!["/usr/local".to_string(), "/opt".to_string()],
    };
    let value = nan0::to_value(&config)?;

    // Default format (two spaces, "\n")
    println!("Default:\n{}\n", Codec::default().stringify(&value)?);

    // Tabs and CRLF line endings
    let windows = Codec::new(ParserOptions::new().with_tab("\t").with_line_separator("\r\n"));
    let text = windows.stringify(&value)?;
    println!("Tabs + CRLF:\n{:?}\n", text);
    let back: Config = from_value(windows.parse(&text)?)?;
    assert_eq!(back, config);

    // Unknown indentation: detect it first
    let foreign = "name: MyApp\nversion: \"1.0.0\"\ndebug: true\npaths:\n    - /usr/local\n    - /opt";
    let tab = LineParser::find_tab(foreign, &TabCandidate::defaults(), "\n");
    println!("Detected tab unit: {:?}", tab);
    let detected = Codec::new(ParserOptions::new().with_tab(tab));
    let back: Config = from_value(detected.parse(foreign)?)?;
    assert_eq!(back, config);

    // Extra skip rules drop lines before the grammar sees them
    let noisy = "name: MyApp\n;; generated\nversion: \"1.0.0\"\ndebug: true\npaths: []";
    let codec = Codec::new(ParserOptions::new().with_skip(Skip::predicate(|row| row.starts_with(";;"))));
    println!("Without the ';;' line: {:?}", codec.parse(noisy)?);

    Ok(())
}
