/// Builds a [`ClassValue`](crate::ClassValue) from JSON-like syntax.
///
/// Arrays and maps nest. Anything else is passed to `ClassValue::from`; wrap
/// expressions longer than one token in parentheses.
///
/// ```rust
/// use clsify::{cls, ClassValue};
///
/// let open = false;
/// let value = cls!(["menu", { "menu-open": open, "menu-dark": true }, null]);
/// assert_eq!(value.to_string(), "menu menu-dark");
///
/// let count = 3;
/// assert_eq!(cls!({ "many": (count > 1) }).to_string(), "many");
/// ```
#[macro_export]
macro_rules! cls {
    // Handle null
    (null) => {
        $crate::ClassValue::Null
    };

    (true) => {
        $crate::ClassValue::Bool(true)
    };

    (false) => {
        $crate::ClassValue::Bool(false)
    };

    ([]) => {
        $crate::ClassValue::Array(::std::vec::Vec::new())
    };

    ([ $($elem:tt),+ $(,)? ]) => {
        $crate::ClassValue::Array(::std::vec![$($crate::cls!($elem)),+])
    };

    ({}) => {
        $crate::ClassValue::Map($crate::ClassMap::new())
    };

    ({ $($key:literal : $value:tt),+ $(,)? }) => {{
        let mut map = $crate::ClassMap::new();
        $(
            map.insert($key, $crate::cls!($value));
        )+
        $crate::ClassValue::Map(map)
    }};

    // Strings, numbers, options and anything else with a `From` impl
    ($other:expr) => {
        $crate::ClassValue::from($other)
    };
}

/// Joins literal-style arguments into a class string.
///
/// Each argument is built with [`cls!`](crate::cls) and the result handed to
/// [`clsify`](crate::clsify()).
///
/// ```rust
/// use clsify::clsify;
///
/// assert_eq!(clsify!(), "");
/// assert_eq!(clsify!("a", null, "b"), "a b");
/// assert_eq!(clsify!("x", ["y", { "z": true }]), "x y z");
/// ```
#[macro_export]
macro_rules! clsify {
    () => {
        ::std::string::String::new()
    };

    ($($arg:tt),+ $(,)?) => {
        $crate::clsify(&[$($crate::cls!($arg)),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::{ClassMap, ClassValue, Number};

    #[test]
    fn test_cls_macro_primitives() {
        assert_eq!(cls!(null), ClassValue::Null);
        assert_eq!(cls!(true), ClassValue::Bool(true));
        assert_eq!(cls!(false), ClassValue::Bool(false));
        assert_eq!(cls!(42), ClassValue::Number(Number::Integer(42)));
        assert_eq!(cls!(3.5), ClassValue::Number(Number::Float(3.5)));
        assert_eq!(cls!("btn"), ClassValue::String("btn".to_string()));
    }

    #[test]
    fn test_cls_macro_collections() {
        assert_eq!(cls!([]), ClassValue::Array(vec![]));
        assert_eq!(cls!({}), ClassValue::Map(ClassMap::new()));

        let map = cls!({ "a": true, "b": 0 });
        match map {
            ClassValue::Map(map) => {
                assert_eq!(map.len(), 2);
                assert_eq!(map.get("b"), Some(&ClassValue::Number(Number::Integer(0))));
            }
            _ => panic!("Expected map"),
        }
    }

    #[test]
    fn test_clsify_macro() {
        assert_eq!(clsify!(), "");
        assert_eq!(clsify!(["a", false, "b"]), "a b");
        assert_eq!(clsify!({ "a": true, "b": false, "c": 1 }), "a c");
    }
}
