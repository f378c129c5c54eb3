//! Driving class strings from serde types and JSON.
//!
//! Run with: cargo run --example typed_flags

use clsify::{clsify, to_class_string, ClassValue};
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct RowState {
    is_selected: bool,
    is_striped: bool,
    is_hovered: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let row = RowState {
        is_selected: true,
        is_striped: false,
        is_hovered: true,
    };
    println!("row:  {}", to_class_string(&row)?);

    // Class descriptions can come from any serde format
    let value: ClassValue = serde_json::from_str(r#"["panel", {"panel-open": true, "panel-dark": false}]"#)?;
    println!("json: {}", clsify(&[value]));

    Ok(())
}
