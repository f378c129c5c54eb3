//! Dynamic value representation for class inputs.
//!
//! This module provides the [`ClassValue`] enum, the single input type every
//! entry point of this crate coerces. Each variant falls into one of four
//! shapes that decide how it is turned into tokens:
//!
//! | Shape            | Variants                 | Contributes                       |
//! |------------------|--------------------------|-----------------------------------|
//! | Primitive        | `String`, `Number`       | its own text                      |
//! | Sequence         | `Array`                  | its truthy elements, recursively  |
//! | Key-presence map | `Map`                    | the keys whose flag is truthy     |
//! | Other            | `Null`, `Bool`           | nothing                           |
//!
//! ## Truthiness
//!
//! Whether an argument, element or map flag counts as present follows the
//! familiar scripting rules. The falsy values are exactly:
//!
//! - `Null` and `Bool(false)`
//! - zero (`0`, `0.0`, `-0.0`)
//! - NaN
//! - the empty string
//!
//! Everything else is truthy, including empty arrays and empty maps.
//!
//! ```rust
//! use clsify::{ClassMap, ClassValue};
//!
//! assert!(!ClassValue::from(0).is_truthy());
//! assert!(!ClassValue::from(f64::NAN).is_truthy());
//! assert!(!ClassValue::from("").is_truthy());
//! assert!(ClassValue::from(" ").is_truthy());
//! assert!(ClassValue::from(Vec::<ClassValue>::new()).is_truthy());
//! assert!(ClassValue::from(ClassMap::new()).is_truthy());
//! ```

use crate::ClassMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed class input.
///
/// # Examples
///
/// ```rust
/// use clsify::{ClassMap, ClassValue};
///
/// let mut flags = ClassMap::new();
/// flags.insert("active", true);
///
/// let value = ClassValue::from(vec![
///     ClassValue::from("btn"),
///     ClassValue::Null,
///     ClassValue::from(flags),
/// ]);
///
/// assert!(value.is_array());
/// assert_eq!(value.to_string(), "btn active");
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum ClassValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<ClassValue>),
    Map(ClassMap),
}

/// A numeric class token.
///
/// Numbers render the way a scripting runtime stringifies them, so whole floats
/// lose their fractional part and very large or very small magnitudes switch to
/// exponent notation.
///
/// # Examples
///
/// ```rust
/// use clsify::Number;
///
/// assert_eq!(Number::Integer(42).to_string(), "42");
/// assert_eq!(Number::Float(2.0).to_string(), "2");
/// assert_eq!(Number::Float(1.5).to_string(), "1.5");
/// assert_eq!(Number::Float(1e21).to_string(), "1e+21");
/// assert_eq!(Number::Infinity.to_string(), "Infinity");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
    Infinity,
    NegativeInfinity,
    NaN,
}

impl Number {
    /// Returns `true` unless the number is zero or NaN.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clsify::Number;
    ///
    /// assert!(Number::Integer(-1).is_truthy());
    /// assert!(Number::Infinity.is_truthy());
    /// assert!(!Number::Integer(0).is_truthy());
    /// assert!(!Number::Float(-0.0).is_truthy());
    /// assert!(!Number::NaN.is_truthy());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Number::Integer(i) => *i != 0,
            Number::Float(f) => *f != 0.0 && !f.is_nan(),
            Number::Infinity | Number::NegativeInfinity => true,
            Number::NaN => false,
        }
    }

    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a special value (Infinity, -Infinity, or NaN).
    #[inline]
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(
            self,
            Number::Infinity | Number::NegativeInfinity | Number::NaN
        )
    }

    /// Converts this number to an `i64` if it holds a whole value in range.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Converts this number to an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
            Number::Infinity => f64::INFINITY,
            Number::NegativeInfinity => f64::NEG_INFINITY,
            Number::NaN => f64::NAN,
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("NaN");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    // -0.0 renders as "0"
    if value == 0.0 {
        return f.write_str("0");
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{}", value);
    }

    let exp = format!("{:e}", value);
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{}e+{}", mantissa, exponent)
        }
        _ => f.write_str(&exp),
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write_float(f, *fl),
            Number::Infinity => f.write_str("Infinity"),
            Number::NegativeInfinity => f.write_str("-Infinity"),
            Number::NaN => f.write_str("NaN"),
        }
    }
}

impl ClassValue {
    /// Returns `true` if the value counts as present.
    ///
    /// See the [module documentation](self) for the exact falsy set.
    #[inline]
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            ClassValue::Null => false,
            ClassValue::Bool(b) => *b,
            ClassValue::Number(n) => n.is_truthy(),
            ClassValue::String(s) => !s.is_empty(),
            ClassValue::Array(_) | ClassValue::Map(_) => true,
        }
    }

    /// A short lowercase name for the variant, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            ClassValue::Null => "null",
            ClassValue::Bool(_) => "bool",
            ClassValue::Number(_) => "number",
            ClassValue::String(_) => "string",
            ClassValue::Array(_) => "array",
            ClassValue::Map(_) => "map",
        }
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, ClassValue::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, ClassValue::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, ClassValue::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, ClassValue::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, ClassValue::Array(_))
    }

    /// Returns `true` if the value is a key-presence map.
    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, ClassValue::Map(_))
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use clsify::ClassValue;
    ///
    /// assert_eq!(ClassValue::from("btn").as_str(), Some("btn"));
    /// assert_eq!(ClassValue::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ClassValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<ClassValue>> {
        match self {
            ClassValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is a map, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&ClassMap> {
        match self {
            ClassValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

/// Writes the coerced class string, the same text [`to_val`](crate::to_val) returns.
impl fmt::Display for ClassValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::to_val(self))
    }
}

impl Serialize for ClassValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ClassValue::Null => serializer.serialize_unit(),
            ClassValue::Bool(b) => serializer.serialize_bool(*b),
            ClassValue::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            ClassValue::Number(n) => serializer.serialize_f64(n.as_f64()),
            ClassValue::String(s) => serializer.serialize_str(s),
            ClassValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            ClassValue::Map(map) => {
                use serde::ser::SerializeMap;
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for ClassValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ClassValueVisitor;

        impl<'de> Visitor<'de> for ClassValueVisitor {
            type Value = ClassValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, number, array, map, bool or null")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(ClassValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(ClassValue::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                Ok(ClassValue::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(ClassValue::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(ClassValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(ClassValue::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(ClassValue::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(ClassValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(ClassValue::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = ClassMap::new();
                while let Some((key, value)) = map.next_entry::<String, ClassValue>()? {
                    values.insert(key, value);
                }
                Ok(ClassValue::Map(values))
            }
        }

        deserializer.deserialize_any(ClassValueVisitor)
    }
}

// TryFrom implementations for extracting primitives from ClassValue
impl TryFrom<ClassValue> for String {
    type Error = crate::Error;

    fn try_from(value: ClassValue) -> crate::Result<Self> {
        match value {
            ClassValue::String(s) => Ok(s),
            other => Err(crate::Error::type_mismatch("string", other.kind())),
        }
    }
}

impl TryFrom<ClassValue> for bool {
    type Error = crate::Error;

    fn try_from(value: ClassValue) -> crate::Result<Self> {
        match value {
            ClassValue::Bool(b) => Ok(b),
            other => Err(crate::Error::type_mismatch("bool", other.kind())),
        }
    }
}

impl TryFrom<ClassValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: ClassValue) -> crate::Result<Self> {
        match value {
            ClassValue::Number(n) => n
                .as_i64()
                .ok_or_else(|| crate::Error::type_mismatch("integer", "non-integral number")),
            other => Err(crate::Error::type_mismatch("integer", other.kind())),
        }
    }
}

impl TryFrom<ClassValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: ClassValue) -> crate::Result<Self> {
        match value {
            ClassValue::Number(n) => Ok(n.as_f64()),
            other => Err(crate::Error::type_mismatch("number", other.kind())),
        }
    }
}

// From implementations for building ClassValue from Rust values
impl From<bool> for ClassValue {
    fn from(value: bool) -> Self {
        ClassValue::Bool(value)
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ClassValue {
                fn from(value: $ty) -> Self {
                    ClassValue::Number(Number::Integer(value as i64))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<isize> for ClassValue {
    fn from(value: isize) -> Self {
        ClassValue::from(value as i64)
    }
}

impl From<u64> for ClassValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => ClassValue::Number(Number::Integer(i)),
            Err(_) => ClassValue::Number(Number::Float(value as f64)),
        }
    }
}

impl From<usize> for ClassValue {
    fn from(value: usize) -> Self {
        ClassValue::from(value as u64)
    }
}

impl From<f32> for ClassValue {
    fn from(value: f32) -> Self {
        ClassValue::Number(Number::Float(value as f64))
    }
}

impl From<f64> for ClassValue {
    fn from(value: f64) -> Self {
        ClassValue::Number(Number::Float(value))
    }
}

impl From<Number> for ClassValue {
    fn from(value: Number) -> Self {
        ClassValue::Number(value)
    }
}

impl From<char> for ClassValue {
    fn from(value: char) -> Self {
        ClassValue::String(value.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        ClassValue::String(value)
    }
}

impl From<&String> for ClassValue {
    fn from(value: &String) -> Self {
        ClassValue::String(value.clone())
    }
}

impl From<&str> for ClassValue {
    fn from(value: &str) -> Self {
        ClassValue::String(value.to_string())
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(value: Vec<T>) -> Self {
        ClassValue::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>, const N: usize> From<[T; N]> for ClassValue {
    fn from(value: [T; N]) -> Self {
        ClassValue::Array(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassValue::Null, Into::into)
    }
}

impl From<ClassMap> for ClassValue {
    fn from(value: ClassMap) -> Self {
        ClassValue::Map(value)
    }
}

impl<T: Into<ClassValue>> FromIterator<T> for ClassValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ClassValue::Array(iter.into_iter().map(Into::into).collect())
    }
}
