//! Converting any `T: Serialize` into a [`ClassValue`].
//!
//! This lets typed Rust data stand in for hand-built class values. A struct of
//! `bool` fields becomes a key-presence map keyed by field name:
//!
//! ```rust
//! use clsify::to_class_string;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct ButtonState {
//!     active: bool,
//!     disabled: bool,
//!     loading: bool,
//! }
//!
//! let state = ButtonState { active: true, disabled: false, loading: true };
//! assert_eq!(to_class_string(&state).unwrap(), "active loading");
//! ```
//!
//! Mapping of serde shapes:
//!
//! | serde shape                     | class value                 |
//! |---------------------------------|-----------------------------|
//! | bool, integers, floats          | `Bool`, `Number`            |
//! | char, str, unit variant         | `String`                    |
//! | unit, unit struct, `None`       | `Null`                      |
//! | seq, tuple, tuple struct        | `Array`                     |
//! | map, struct                     | `Map` (keys must be strings)|
//! | newtype variant `V(x)`          | `Map` `{ "V": x }`          |
//! | bytes                           | `Null`                      |
//! | tuple variant, struct variant   | error                       |

use crate::error::{Error, Result};
use crate::{clsify, ClassMap, ClassValue, Number};
use serde::ser::{self, Serialize};

/// Serializer whose output is a [`ClassValue`].
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<ClassValue>,
}

pub struct SerializeMap {
    map: ClassMap,
    current_key: Option<String>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = ClassValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = ser::Impossible<ClassValue, Error>;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = ser::Impossible<ClassValue, Error>;

    fn serialize_bool(self, v: bool) -> Result<ClassValue> {
        Ok(ClassValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<ClassValue> {
        Ok(ClassValue::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<ClassValue> {
        Ok(ClassValue::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<ClassValue> {
        Ok(ClassValue::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<ClassValue> {
        Ok(ClassValue::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<ClassValue> {
        Ok(ClassValue::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<ClassValue> {
        Ok(ClassValue::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<ClassValue> {
        Ok(ClassValue::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<ClassValue> {
        Ok(ClassValue::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<ClassValue> {
        Ok(ClassValue::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<ClassValue> {
        Ok(ClassValue::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<ClassValue> {
        Ok(ClassValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<ClassValue> {
        Ok(ClassValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<ClassValue> {
        log::trace!("dropping {} byte buffer with no class meaning", v.len());
        Ok(ClassValue::Null)
    }

    fn serialize_none(self) -> Result<ClassValue> {
        Ok(ClassValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<ClassValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<ClassValue> {
        Ok(ClassValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<ClassValue> {
        Ok(ClassValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<ClassValue> {
        Ok(ClassValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<ClassValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<ClassValue>
    where
        T: ?Sized + Serialize,
    {
        let mut map = ClassMap::with_capacity(1);
        map.insert(variant, to_value(value)?);
        Ok(ClassValue::Map(map))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type("tuple variants"))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::with_capacity(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type("struct variants"))
    }
}

impl SerializeVec {
    fn with_capacity(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn with_capacity(capacity: usize) -> Self {
        SerializeMap {
            map: ClassMap::with_capacity(capacity),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = ClassValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<ClassValue> {
        Ok(ClassValue::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = ClassValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<ClassValue> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = ClassValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<ClassValue> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = ClassValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_value(key)? {
            ClassValue::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            other => Err(Error::key_must_be_string(other.kind())),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<ClassValue> {
        Ok(ClassValue::Map(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = ClassValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<ClassValue> {
        Ok(ClassValue::Map(self.map))
    }
}

/// Convert any `T: Serialize` to a [`ClassValue`].
///
/// # Examples
///
/// ```rust
/// use clsify::{to_value, ClassValue};
///
/// let value = to_value(&vec!["a", "b"]).unwrap();
/// assert_eq!(value, ClassValue::from(["a", "b"]));
/// ```
///
/// # Errors
///
/// Returns an error if a map key is not a string or the value contains a tuple
/// or struct enum variant.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<ClassValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Convert any `T: Serialize` straight to its class string.
///
/// Equivalent to [`to_value`] followed by [`clsify`] of the single value, so a
/// falsy top-level value yields `""`.
///
/// # Examples
///
/// ```rust
/// use clsify::to_class_string;
/// use std::collections::BTreeMap;
///
/// let mut flags = BTreeMap::new();
/// flags.insert("open", true);
/// flags.insert("closed", false);
///
/// assert_eq!(to_class_string(&flags).unwrap(), "open");
/// assert_eq!(to_class_string(&Some("x")).unwrap(), "x");
/// assert_eq!(to_class_string(&None::<&str>).unwrap(), "");
/// ```
///
/// # Errors
///
/// Returns an error under the same conditions as [`to_value`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_class_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    Ok(clsify(std::slice::from_ref(&value)))
}
