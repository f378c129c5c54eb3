//! Modifiers, prefixes, responsive variants and the chain builder.
//!
//! Run with: cargo run --example chain

use clsify::{
    chain, chain_with_options, cls, responsive, with_modifier, with_prefix, ClassOptions,
};

fn main() {
    println!("{}", with_modifier("btn", &["large", "disabled"]));
    println!("{}", with_prefix("sm", &["block", "flex"]));
    println!("{}", responsive("md", &["col", "full"]));

    let btn = chain("btn");
    println!("{}", btn.modifier(&["large"]));
    println!("{}", btn.prefix("sm"));
    println!("{}", btn.responsive("md"));
    println!("{}", btn.add(&[cls!("extra"), cls!({ "is-loading": true })]));

    let card = chain_with_options("card", ClassOptions::underscored());
    println!("{}", card.modifier(&["wide", "flat"]));
}
