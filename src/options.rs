//! Configuration options for derived class tokens.
//!
//! The helpers that derive new tokens from a base class join the pieces with a
//! separator:
//!
//! - modifiers: `base` + `--` + `modifier` (BEM style)
//! - prefixes: `prefix` + `-` + `class`
//!
//! [`ClassOptions`] lets both separators be swapped out.
//!
//! ## Examples
//!
//! ```rust
//! use clsify::{with_modifier_with_options, with_prefix_with_options, ClassOptions};
//!
//! let options = ClassOptions::new().with_modifier_separator("__");
//! assert_eq!(
//!     with_modifier_with_options("card", &["wide"], &options),
//!     "card card__wide"
//! );
//!
//! let options = ClassOptions::new().with_prefix_separator(":");
//! assert_eq!(
//!     with_prefix_with_options("md", &["flex"], &options),
//!     "md:flex"
//! );
//! ```

/// Separator used between a base class and its modifier by default.
pub const DEFAULT_MODIFIER_SEPARATOR: &str = "--";

/// Separator used between a prefix and a class by default.
pub const DEFAULT_PREFIX_SEPARATOR: &str = "-";

/// Separators for derived class tokens.
///
/// # Examples
///
/// ```rust
/// use clsify::ClassOptions;
///
/// // `--` for modifiers, `-` for prefixes
/// let options = ClassOptions::new();
/// assert_eq!(options.modifier_separator, "--");
///
/// // `__` for modifiers, `_` for prefixes
/// let options = ClassOptions::underscored();
/// assert_eq!(options.prefix_separator, "_");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassOptions {
    pub modifier_separator: String,
    pub prefix_separator: String,
}

impl Default for ClassOptions {
    fn default() -> Self {
        ClassOptions {
            modifier_separator: DEFAULT_MODIFIER_SEPARATOR.to_string(),
            prefix_separator: DEFAULT_PREFIX_SEPARATOR.to_string(),
        }
    }
}

impl ClassOptions {
    /// Creates default options (`--` for modifiers, `-` for prefixes).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that join with underscores (`__` for modifiers, `_` for prefixes).
    #[must_use]
    pub fn underscored() -> Self {
        ClassOptions {
            modifier_separator: "__".to_string(),
            prefix_separator: "_".to_string(),
        }
    }

    /// Sets the separator placed between a base class and a modifier.
    #[must_use]
    pub fn with_modifier_separator(mut self, separator: impl Into<String>) -> Self {
        self.modifier_separator = separator.into();
        self
    }

    /// Sets the separator placed between a prefix and a class.
    #[must_use]
    pub fn with_prefix_separator(mut self, separator: impl Into<String>) -> Self {
        self.prefix_separator = separator.into();
        self
    }
}
