use std::fmt;

use faststr::FastStr;

use super::object::Object;

/// Array is the payload of an array `AnyValue`.
pub type Array = Vec<AnyValue>;

/// ValueType tells which of the seven shapes an `AnyValue` holds.
///
/// # Examples
/// ```
/// use anyvalue::{from_str, prelude::*, ValueType};
///
/// let json = from_str(r#"{"a": 1, "b": 1.5, "c": true}"#).unwrap();
///
/// assert_eq!(json.get_type(), ValueType::Object);
/// assert_eq!(json.get("a").unwrap().get_type(), ValueType::Int);
/// assert_eq!(json.get("b").unwrap().get_type(), ValueType::Double);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum ValueType {
    Null = 0,
    Bool = 1,
    Int = 2,
    Double = 3,
    String = 4,
    Array = 5,
    Object = 6,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueType::Null => "null",
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Double => "double",
            ValueType::String => "string",
            ValueType::Array => "array",
            ValueType::Object => "object",
        })
    }
}

/// AnyValue can hold any JSON value.
///
/// A decoded integer stays `Int` and a decoded float stays `Double`; nothing is coerced. Arrays
/// and objects own their children, so a tree never aliases another tree and `clone` is a deep
/// copy.
///
/// Read and write it through [`JsonValueTrait`](crate::JsonValueTrait) and
/// [`JsonValueMutTrait`](crate::JsonValueMutTrait), which are also implemented for `Option`, so
/// accesses chain without unwrapping each step.
#[derive(Debug, Clone, Default)]
pub enum AnyValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(FastStr),
    Array(Array),
    Object(Object),
}

impl AnyValue {
    /// Create a new `null` value.
    #[inline]
    pub const fn new_null() -> Self {
        AnyValue::Null
    }

    #[inline]
    pub const fn new_bool(val: bool) -> Self {
        AnyValue::Bool(val)
    }

    #[inline]
    pub const fn new_i64(val: i64) -> Self {
        AnyValue::Int(val)
    }

    /// Create a double value. Non-finite numbers are kept as they are, but JSON has no text for
    /// them and they encode as `null`.
    #[inline]
    pub const fn new_f64(val: f64) -> Self {
        AnyValue::Double(val)
    }

    /// Create a string value from a `&'static str` without copying.
    #[inline]
    pub fn from_static_str(val: &'static str) -> Self {
        AnyValue::String(FastStr::from_static_str(val))
    }

    /// Create a new empty array.
    #[inline]
    pub const fn new_array() -> Self {
        AnyValue::Array(Vec::new())
    }

    /// Create a new empty object.
    #[inline]
    pub fn new_object() -> Self {
        AnyValue::Object(Object::new())
    }

    /// Returns the shape this value holds.
    #[inline]
    pub fn get_type(&self) -> ValueType {
        match self {
            AnyValue::Null => ValueType::Null,
            AnyValue::Bool(_) => ValueType::Bool,
            AnyValue::Int(_) => ValueType::Int,
            AnyValue::Double(_) => ValueType::Double,
            AnyValue::String(_) => ValueType::String,
            AnyValue::Array(_) => ValueType::Array,
            AnyValue::Object(_) => ValueType::Object,
        }
    }

    /// Returns the number of elements of an array, entries of an object, or bytes of a string.
    /// Other values have length zero.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            AnyValue::String(s) => s.len(),
            AnyValue::Array(a) => a.len(),
            AnyValue::Object(o) => o.len(),
            _ => 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Takes the value out, leaving `null` in its place.
    ///
    /// # Examples
    /// ```
    /// use anyvalue::{json, prelude::*};
    ///
    /// let mut data = json!({"x": [1, 2]});
    /// let taken = data.get_mut("x").map(|v| v.take());
    ///
    /// assert_eq!(taken, Some(json!([1, 2])));
    /// assert_eq!(data, json!({"x": null}));
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl fmt::Display for AnyValue {
    /// Writes the value as compact JSON text, or pretty-printed with `{:#}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if f.alternate() {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        f.write_str(&text.map_err(|_| fmt::Error)?)
    }
}
