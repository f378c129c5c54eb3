//! Helpers that derive class tokens from a base or prefix.
//!
//! These work on plain tokens only: nothing is coerced, filtered or
//! deduplicated, and an empty base or prefix is used as given.

use crate::ClassOptions;

/// Joins already-rendered tokens with single spaces.
fn join<I>(tokens: I) -> String
where
    I: IntoIterator<Item = String>,
{
    tokens.into_iter().collect::<Vec<_>>().join(" ")
}

/// Returns the base class followed by one `base--modifier` token per modifier.
///
/// # Examples
///
/// ```rust
/// use clsify::with_modifier;
///
/// assert_eq!(
///     with_modifier("btn", &["large", "disabled"]),
///     "btn btn--large btn--disabled"
/// );
/// assert_eq!(with_modifier("btn", &[] as &[&str]), "btn");
/// ```
#[must_use]
pub fn with_modifier<S: AsRef<str>>(base_class: &str, modifiers: &[S]) -> String {
    with_modifier_with_options(base_class, modifiers, &ClassOptions::default())
}

/// [`with_modifier`] with a custom modifier separator.
#[must_use]
pub fn with_modifier_with_options<S: AsRef<str>>(
    base_class: &str,
    modifiers: &[S],
    options: &ClassOptions,
) -> String {
    let derived = modifiers.iter().map(|modifier| {
        format!(
            "{}{}{}",
            base_class,
            options.modifier_separator,
            modifier.as_ref()
        )
    });
    join(std::iter::once(base_class.to_string()).chain(derived))
}

/// Rewrites every class as `prefix-class`, keeping argument order.
///
/// # Examples
///
/// ```rust
/// use clsify::with_prefix;
///
/// assert_eq!(with_prefix("sm", &["block", "flex"]), "sm-block sm-flex");
/// ```
#[must_use]
pub fn with_prefix<S: AsRef<str>>(prefix: &str, classes: &[S]) -> String {
    with_prefix_with_options(prefix, classes, &ClassOptions::default())
}

/// [`with_prefix`] with a custom prefix separator.
#[must_use]
pub fn with_prefix_with_options<S: AsRef<str>>(
    prefix: &str,
    classes: &[S],
    options: &ClassOptions,
) -> String {
    join(
        classes
            .iter()
            .map(|class| format!("{}{}{}", prefix, options.prefix_separator, class.as_ref())),
    )
}

/// Keeps the first class as the base variant and prefixes every later one.
///
/// # Examples
///
/// ```rust
/// use clsify::responsive;
///
/// assert_eq!(responsive("md", &["col", "full"]), "col md-full");
/// assert_eq!(responsive("md", &["col"]), "col");
/// ```
#[must_use]
pub fn responsive<S: AsRef<str>>(prefix: &str, classes: &[S]) -> String {
    responsive_with_options(prefix, classes, &ClassOptions::default())
}

/// [`responsive`] with a custom prefix separator.
#[must_use]
pub fn responsive_with_options<S: AsRef<str>>(
    prefix: &str,
    classes: &[S],
    options: &ClassOptions,
) -> String {
    join(classes.iter().enumerate().map(|(index, class)| {
        if index == 0 {
            class.as_ref().to_string()
        } else {
            format!("{}{}{}", prefix, options.prefix_separator, class.as_ref())
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: &[&str] = &[];

    #[test]
    fn test_with_modifier() {
        assert_eq!(
            with_modifier("btn", &["large", "disabled"]),
            "btn btn--large btn--disabled"
        );
        assert_eq!(with_modifier("btn", NONE), "btn");
    }

    #[test]
    fn test_with_modifier_keeps_duplicates_and_empty_base() {
        assert_eq!(with_modifier("a", &["x", "x"]), "a a--x a--x");
        assert_eq!(with_modifier("", &["x"]), " --x");
    }

    #[test]
    fn test_with_modifier_accepts_owned_strings() {
        let modifiers = vec!["lg".to_string()];
        assert_eq!(with_modifier("card", &modifiers), "card card--lg");
    }

    #[test]
    fn test_with_prefix() {
        assert_eq!(with_prefix("sm", &["block", "flex"]), "sm-block sm-flex");
        assert_eq!(with_prefix("sm", NONE), "");
    }

    #[test]
    fn test_responsive() {
        assert_eq!(responsive("md", &["col", "full"]), "col md-full");
        assert_eq!(
            responsive("lg", &["a", "b", "c"]),
            "a lg-b lg-c"
        );
        assert_eq!(responsive("md", NONE), "");
    }

    #[test]
    fn test_custom_separators() {
        let options = ClassOptions::underscored();
        assert_eq!(
            with_modifier_with_options("btn", &["lg"], &options),
            "btn btn__lg"
        );
        assert_eq!(
            with_prefix_with_options("sm", &["block"], &options),
            "sm_block"
        );
        assert_eq!(
            responsive_with_options("md", &["col", "full"], &options),
            "col md_full"
        );
    }
}
