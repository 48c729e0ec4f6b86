use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use super::{node::AnyValue, object::Object};
use crate::error::Result;

impl Serialize for AnyValue {
    /// Emits the value through any `serde` serializer, dispatching on the active variant. Errors
    /// from the serializer are returned as they are.
    #[inline]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            AnyValue::Null => serializer.serialize_unit(),
            AnyValue::Bool(b) => serializer.serialize_bool(*b),
            AnyValue::Int(i) => serializer.serialize_i64(*i),
            AnyValue::Double(f) => serializer.serialize_f64(*f),
            AnyValue::String(s) => serializer.serialize_str(s),
            AnyValue::Array(array) => {
                let mut seq = serializer.serialize_seq(Some(array.len()))?;
                for element in array {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            AnyValue::Object(object) => object.serialize(serializer),
        }
    }
}

impl Serialize for Object {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Convert a `T` into an `AnyValue`.
///
/// # Example
///
/// ```
/// use anyvalue::{json, to_value};
/// use serde::Serialize;
///
/// #[derive(Serialize, Debug)]
/// struct User {
///     string: String,
///     number: i32,
///     array: Vec<String>,
/// }
///
/// let user = User {
///     string: "hello".into(),
///     number: 123,
///     array: vec!["a".into(), "b".into(), "c".into()],
/// };
/// let got = to_value(&user).unwrap();
/// let expect = json!({
///     "string": "hello",
///     "number": 123,
///     "array": ["a", "b", "c"],
/// });
/// assert_eq!(got, expect);
/// ```
///
/// # Errors
///
/// This conversion can fail if `T`'s implementation of `Serialize` decides to
/// fail, or if `T` contains a map with non-string keys.
///
/// ```
/// use std::collections::BTreeMap;
///
/// use anyvalue::to_value;
///
/// // The keys in this map are vectors, not strings.
/// let mut map = BTreeMap::new();
/// map.insert(vec![32, 64], "x86");
/// assert!(to_value(&map).is_err());
/// ```
pub fn to_value<T>(value: &T) -> Result<AnyValue>
where
    T: ?Sized + Serialize,
{
    Ok(serde_json::to_value(value)?.into())
}
