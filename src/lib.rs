//! # clsify
//!
//! Compose conditional class-name strings from strings, numbers, nested lists
//! and key-presence maps.
//!
//! ## What does it do?
//!
//! Markup generators keep building the same kind of string: a base class, a few
//! classes that only apply in some states, maybe a list coming from somewhere
//! else. `clsify` takes any mix of those and produces one space-joined string,
//! dropping whatever is absent.
//!
//! ## Key Features
//!
//! - **Forgiving**: `null`, `false`, `0`, `""` and NaN simply contribute nothing
//! - **Recursive**: Arrays nest arbitrarily, maps contribute the keys whose flag is set
//! - **Deterministic**: Map keys keep insertion order
//! - **Helpers**: BEM-style modifiers, prefixes and responsive variants
//! - **Serde Compatible**: Any `#[derive(Serialize)]` type can describe classes
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! clsify = "0.1"
//! ```
//!
//! ### Joining classes
//!
//! ```rust
//! use clsify::clsify;
//!
//! let is_active = true;
//! let is_disabled = false;
//!
//! let class = clsify!("btn", { "btn-active": is_active, "btn-disabled": is_disabled });
//! assert_eq!(class, "btn btn-active");
//! ```
//!
//! The function form takes a slice of [`ClassValue`]s:
//!
//! ```rust
//! use clsify::{clsify, ClassValue};
//!
//! let extra: Option<&str> = None;
//! let class = clsify(&[ClassValue::from("a"), ClassValue::from(extra), ClassValue::from("b")]);
//! assert_eq!(class, "a b");
//! ```
//!
//! ### Derived classes
//!
//! ```rust
//! use clsify::{chain, responsive, with_modifier, with_prefix};
//!
//! assert_eq!(with_modifier("btn", &["large", "disabled"]), "btn btn--large btn--disabled");
//! assert_eq!(with_prefix("sm", &["block", "flex"]), "sm-block sm-flex");
//! assert_eq!(responsive("md", &["col", "full"]), "col md-full");
//! assert_eq!(chain("btn").modifier(&["large"]), "btn btn--large");
//! ```
//!
//! ### Typed flags
//!
//! ```rust
//! use clsify::to_class_string;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Row {
//!     selected: bool,
//!     striped: bool,
//! }
//!
//! let row = Row { selected: true, striped: false };
//! assert_eq!(to_class_string(&row).unwrap(), "selected");
//! ```
//!
//! ## Errors
//!
//! Joining never fails. Only the serde bridge ([`to_value`],
//! [`to_class_string`]) returns [`Result`], for shapes that have no class
//! meaning.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`basic.rs`** - Joining strings, arrays and maps
//! - **`chain.rs`** - Modifiers, prefixes and the chain builder
//! - **`typed_flags.rs`** - Driving classes from serde types and JSON
//!
//! Run any of them with: `cargo run --example <name>`

#[macro_use]
mod macros;

pub mod chain;
pub mod coerce;
pub mod compose;
pub mod error;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use chain::{chain, chain_with_options, Chain};
pub use coerce::{clsify, to_val};
pub use compose::{
    responsive, responsive_with_options, with_modifier, with_modifier_with_options,
    with_prefix, with_prefix_with_options,
};
pub use error::{Error, Result};
pub use map::ClassMap;
pub use options::ClassOptions;
pub use ser::{to_class_string, to_value, ValueSerializer};
pub use value::{ClassValue, Number};

/// Shorter name for [`ClassValue`].
pub type Value = ClassValue;
