//! Joining strings, arrays and key-presence maps.
//!
//! Run with: cargo run --example basic

use clsify::{cls, clsify, ClassMap, ClassValue};

fn main() {
    let is_active = true;
    let is_disabled = false;
    let size: Option<&str> = Some("btn-lg");
    let tone: Option<&str> = None;

    // Macro form
    let class = clsify!(
        "btn",
        size,
        tone,
        { "btn-active": is_active, "btn-disabled": is_disabled }
    );
    println!("macro:    {}", class);

    // Function form
    let mut state = ClassMap::new();
    state.insert("btn-active", is_active);
    state.insert("btn-disabled", is_disabled);

    let args = [
        ClassValue::from("btn"),
        ClassValue::from(size),
        ClassValue::from(tone),
        ClassValue::from(state),
    ];
    println!("function: {}", clsify(&args));

    // Arrays nest; falsy entries leave no gaps
    let nested = cls!(["nav", null, ["nav-item", "", { "nav-item-current": true }], 0]);
    println!("nested:   {}", nested);
}
