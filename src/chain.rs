//! A builder scoped to one class.
//!
//! [`chain`] binds an initial class once so it can be combined in several ways
//! without repeating it. Every operation returns a finished `String`; the
//! chain itself is left untouched and can be reused.
//!
//! ```rust
//! use clsify::{chain, cls};
//!
//! let btn = chain("btn");
//! assert_eq!(btn.modifier(&["large"]), "btn btn--large");
//! assert_eq!(btn.prefix("sm"), "sm-btn");
//! assert_eq!(btn.add(&[cls!("x"), cls!({ "y": true })]), "btn x y");
//! ```

use crate::{clsify, compose, ClassOptions, ClassValue};

/// Operations pre-bound to an initial class. Created by [`chain`] or
/// [`chain_with_options`].
#[derive(Clone, Debug, PartialEq)]
pub struct Chain {
    initial_class: String,
    options: ClassOptions,
}

impl Chain {
    /// The class this chain is scoped to.
    #[must_use]
    pub fn initial_class(&self) -> &str {
        &self.initial_class
    }

    /// Joins the initial class with `args`, as [`clsify`] would.
    #[must_use]
    pub fn add(&self, args: &[ClassValue]) -> String {
        let mut all = Vec::with_capacity(args.len() + 1);
        all.push(ClassValue::from(self.initial_class.as_str()));
        all.extend_from_slice(args);
        clsify(&all)
    }

    /// The initial class followed by its `--modifier` variants.
    #[must_use]
    pub fn modifier<S: AsRef<str>>(&self, modifiers: &[S]) -> String {
        compose::with_modifier_with_options(&self.initial_class, modifiers, &self.options)
    }

    /// The initial class rewritten under `prefix`.
    #[must_use]
    pub fn prefix(&self, prefix: &str) -> String {
        compose::with_prefix_with_options(prefix, &[self.initial_class.as_str()], &self.options)
    }

    /// The initial class as the base of a responsive set.
    ///
    /// A single class is always the unprefixed base, so this returns the
    /// initial class unchanged.
    #[must_use]
    pub fn responsive(&self, prefix: &str) -> String {
        compose::responsive_with_options(prefix, &[self.initial_class.as_str()], &self.options)
    }
}

/// Creates a [`Chain`] scoped to `initial_class`.
#[must_use]
pub fn chain(initial_class: &str) -> Chain {
    chain_with_options(initial_class, ClassOptions::default())
}

/// Creates a [`Chain`] that derives tokens with the given separators.
///
/// # Examples
///
/// ```rust
/// use clsify::{chain_with_options, ClassOptions};
///
/// let card = chain_with_options("card", ClassOptions::underscored());
/// assert_eq!(card.modifier(&["wide"]), "card card__wide");
/// assert_eq!(card.prefix("md"), "md_card");
/// ```
#[must_use]
pub fn chain_with_options(initial_class: &str, options: ClassOptions) -> Chain {
    Chain {
        initial_class: initial_class.to_string(),
        options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClassMap;

    #[test]
    fn test_modifier() {
        assert_eq!(chain("btn").modifier(&["large"]), "btn btn--large");
    }

    #[test]
    fn test_add_prepends_initial_class() {
        let mut flags = ClassMap::new();
        flags.insert("y", true);
        flags.insert("n", false);
        let args = [ClassValue::from("x"), ClassValue::Null, ClassValue::from(flags)];
        assert_eq!(chain("btn").add(&args), "btn x y");
        assert_eq!(chain("btn").add(&[]), "btn");
    }

    #[test]
    fn test_add_with_empty_initial_class() {
        assert_eq!(chain("").add(&[ClassValue::from("x")]), "x");
    }

    #[test]
    fn test_prefix_and_responsive() {
        let col = chain("col");
        assert_eq!(col.prefix("md"), "md-col");
        assert_eq!(col.responsive("md"), "col");
    }

    #[test]
    fn test_chain_is_reusable() {
        let btn = chain("btn");
        let first = btn.modifier(&["a"]);
        let second = btn.modifier(&["a"]);
        assert_eq!(first, second);
        assert_eq!(btn.initial_class(), "btn");
    }
}
