//! The coercer: turning class values into space-joined token strings.
//!
//! [`to_val`] flattens a single [`ClassValue`] and [`clsify`] joins any number
//! of them. Neither can fail: values with no class meaning (`Null`, booleans)
//! contribute nothing, as do falsy array elements and map entries.
//!
//! Output never carries leading, trailing or doubled spaces produced by the
//! joining itself. Tokens supplied by the caller are copied verbatim.

use crate::ClassValue;

/// Appends `token` to `out`, separated by a single space from prior content.
#[inline]
fn push_token(out: &mut String, token: &str) {
    if token.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(token);
}

fn write_value(out: &mut String, value: &ClassValue) {
    match value {
        ClassValue::String(s) => push_token(out, s),
        ClassValue::Number(n) => push_token(out, &n.to_string()),
        ClassValue::Array(items) => {
            for item in items.iter().filter(|item| item.is_truthy()) {
                write_value(out, item);
            }
        }
        ClassValue::Map(map) => {
            for key in map.active_keys() {
                push_token(out, key);
            }
        }
        ClassValue::Null | ClassValue::Bool(_) => {}
    }
}

/// Coerces one value into its token string.
///
/// Strings and numbers yield their own text, arrays yield their truthy
/// elements recursively, maps yield the keys whose flag is truthy, and
/// everything else yields `""`.
///
/// Unlike [`clsify`], the value itself is not checked for truthiness, so a
/// bare `0` still renders as `"0"`.
///
/// # Examples
///
/// ```rust
/// use clsify::{cls, to_val};
///
/// assert_eq!(to_val(&cls!(["a", false, ["b", { "c": true, "d": 0 }]])), "a b c");
/// assert_eq!(to_val(&cls!(null)), "");
/// assert_eq!(to_val(&cls!(0)), "0");
/// ```
#[must_use]
pub fn to_val(value: &ClassValue) -> String {
    let mut out = String::new();
    write_value(&mut out, value);
    out
}

/// Joins every truthy argument's coerced form with single spaces.
///
/// # Examples
///
/// ```rust
/// use clsify::{clsify, ClassValue};
///
/// let active = true;
/// let args = [
///     ClassValue::from("btn"),
///     ClassValue::from(active.then_some("btn-active")),
///     ClassValue::Null,
/// ];
/// assert_eq!(clsify(&args), "btn btn-active");
/// assert_eq!(clsify(&[]), "");
/// ```
#[must_use]
pub fn clsify(args: &[ClassValue]) -> String {
    let mut out = String::new();
    for arg in args.iter().filter(|arg| arg.is_truthy()) {
        write_value(&mut out, arg);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ClassMap, Number};

    fn s(token: &str) -> ClassValue {
        ClassValue::from(token)
    }

    #[test]
    fn test_empty() {
        assert_eq!(clsify(&[]), "");
        assert_eq!(clsify(&[ClassValue::Null, ClassValue::Bool(true)]), "");
    }

    #[test]
    fn test_skips_null_between_strings() {
        assert_eq!(clsify(&[s("a"), ClassValue::Null, s("b")]), "a b");
    }

    #[test]
    fn test_array_drops_falsy_elements() {
        let arr = ClassValue::Array(vec![s("a"), ClassValue::Bool(false), s("b")]);
        assert_eq!(clsify(&[arr]), "a b");
    }

    #[test]
    fn test_map_emits_truthy_keys() {
        let map: ClassMap = [
            ("a", ClassValue::Bool(true)),
            ("b", ClassValue::Bool(false)),
            ("c", ClassValue::from(1)),
        ]
        .into_iter()
        .collect();
        assert_eq!(clsify(&[ClassValue::Map(map)]), "a c");
    }

    #[test]
    fn test_nested() {
        let mut inner = ClassMap::new();
        inner.insert("z", true);
        let nested = ClassValue::Array(vec![s("y"), ClassValue::Map(inner)]);
        assert_eq!(clsify(&[s("x"), nested]), "x y z");
    }

    #[test]
    fn test_empty_containers_add_no_spaces() {
        let args = [
            s("a"),
            ClassValue::Array(vec![]),
            ClassValue::Map(ClassMap::new()),
            ClassValue::Array(vec![ClassValue::Array(vec![]), ClassValue::Null]),
            s("b"),
        ];
        assert_eq!(clsify(&args), "a b");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(clsify(&[ClassValue::from(0)]), "");
        assert_eq!(clsify(&[ClassValue::Number(Number::NaN)]), "");
        assert_eq!(clsify(&[ClassValue::from(1.5), ClassValue::from(2)]), "1.5 2");
        assert_eq!(to_val(&ClassValue::from(0)), "0");
    }

    #[test]
    fn test_other_values_coerce_to_empty() {
        assert_eq!(to_val(&ClassValue::Null), "");
        assert_eq!(to_val(&ClassValue::Bool(true)), "");
        assert_eq!(to_val(&ClassValue::Bool(false)), "");
    }

    #[test]
    fn test_flat_string_is_unchanged() {
        assert_eq!(to_val(&s("a b  c")), "a b  c");
        assert_eq!(clsify(&[s("already flat")]), "already flat");
    }
}
