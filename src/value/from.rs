use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
};

use faststr::FastStr;

use super::{node::AnyValue, object::Object};

macro_rules! impl_from_signed {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for AnyValue {
                #[inline]
                fn from(val: $ty) -> Self {
                    AnyValue::Int(val as i64)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize, u8, u16, u32);

macro_rules! impl_from_unsigned {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for AnyValue {
                /// Integers above `i64::MAX` do not fit an `Int` and become a `Double`, the same
                /// way the decoder treats them.
                #[inline]
                fn from(val: $ty) -> Self {
                    i64::try_from(val).map_or(AnyValue::Double(val as f64), AnyValue::Int)
                }
            }
        )*
    };
}

impl_from_unsigned!(u64, usize);

impl From<f32> for AnyValue {
    #[inline]
    fn from(val: f32) -> Self {
        AnyValue::Double(f64::from(val))
    }
}

impl From<f64> for AnyValue {
    /// Convert `f64` to a double `AnyValue`. Never fails, even for NaN or infinity.
    #[inline]
    fn from(val: f64) -> Self {
        AnyValue::Double(val)
    }
}

impl From<bool> for AnyValue {
    /// Convert `bool` to a boolean `AnyValue`.
    ///
    /// # Examples
    ///
    /// ```
    /// use anyvalue::{prelude::*, AnyValue};
    ///
    /// let x: AnyValue = true.into();
    /// assert!(x.is_true());
    /// ```
    #[inline]
    fn from(val: bool) -> Self {
        AnyValue::Bool(val)
    }
}

impl From<()> for AnyValue {
    #[inline]
    fn from(_: ()) -> Self {
        AnyValue::Null
    }
}

macro_rules! impl_from_str {
    () => {};
    ($($ty:ty),*) => {
        $(
            impl From<&$ty> for AnyValue {
                /// Convert a string type into a string `AnyValue`. The string will be copied.
                #[inline]
                fn from(val: &$ty) -> Self {
                    AnyValue::String(FastStr::new(val))
                }
            }
        )*
    };
}

impl_from_str!(String, str);

impl From<String> for AnyValue {
    #[inline]
    fn from(val: String) -> Self {
        AnyValue::String(FastStr::from(val))
    }
}

impl From<FastStr> for AnyValue {
    #[inline]
    fn from(val: FastStr) -> Self {
        AnyValue::String(val)
    }
}

impl From<&FastStr> for AnyValue {
    #[inline]
    fn from(val: &FastStr) -> Self {
        AnyValue::String(val.clone())
    }
}

impl<'a> From<Cow<'a, str>> for AnyValue {
    /// Convert copy-on-write string to a string `AnyValue`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::borrow::Cow;
    ///
    /// use anyvalue::AnyValue;
    ///
    /// let s1: Cow<str> = Cow::Borrowed("hello");
    /// let s2: Cow<str> = Cow::Owned("hello".to_string());
    ///
    /// assert_eq!(AnyValue::from(s1), AnyValue::from(s2));
    /// ```
    #[inline]
    fn from(value: Cow<'a, str>) -> Self {
        match value {
            Cow::Borrowed(s) => s.into(),
            Cow::Owned(s) => s.into(),
        }
    }
}

impl From<char> for AnyValue {
    #[inline]
    fn from(val: char) -> Self {
        AnyValue::String(FastStr::new(val.encode_utf8(&mut [0; 4])))
    }
}

impl<T: Into<AnyValue>> From<Option<T>> for AnyValue {
    /// `None` becomes `null`.
    #[inline]
    fn from(val: Option<T>) -> Self {
        val.map_or(AnyValue::Null, Into::into)
    }
}

impl<T: Into<AnyValue>> From<Vec<T>> for AnyValue {
    /// Convert a `Vec` to an array `AnyValue`, lifting every element.
    ///
    /// # Examples
    ///
    /// ```
    /// use anyvalue::{json, AnyValue};
    ///
    /// assert_eq!(AnyValue::from(vec!["hi", "hello"]), json!(["hi", "hello"]));
    /// assert_eq!(AnyValue::from(Vec::<i32>::new()), json!([]));
    /// ```
    #[inline]
    fn from(val: Vec<T>) -> Self {
        AnyValue::Array(val.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<AnyValue>> From<&[T]> for AnyValue {
    #[inline]
    fn from(val: &[T]) -> Self {
        AnyValue::Array(val.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<AnyValue>, const N: usize> From<[T; N]> for AnyValue {
    #[inline]
    fn from(val: [T; N]) -> Self {
        AnyValue::Array(val.into_iter().map(Into::into).collect())
    }
}

impl From<Object> for AnyValue {
    #[inline]
    fn from(val: Object) -> Self {
        AnyValue::Object(val)
    }
}

impl<K: AsRef<str>, V: Into<AnyValue>, S> From<HashMap<K, V, S>> for AnyValue {
    /// Convert a string-keyed `HashMap` to an object `AnyValue`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    ///
    /// use anyvalue::{json, AnyValue};
    ///
    /// let map = HashMap::from([("a", "alpha"), ("b", "bravo")]);
    /// assert_eq!(AnyValue::from(map), json!({"a": "alpha", "b": "bravo"}));
    /// ```
    #[inline]
    fn from(val: HashMap<K, V, S>) -> Self {
        AnyValue::Object(val.into_iter().collect())
    }
}

impl<K: AsRef<str>, V: Into<AnyValue>> From<BTreeMap<K, V>> for AnyValue {
    #[inline]
    fn from(val: BTreeMap<K, V>) -> Self {
        AnyValue::Object(val.into_iter().collect())
    }
}

impl<T: Into<AnyValue>> FromIterator<T> for AnyValue {
    /// Create an array `AnyValue` by collecting an iterator of array elements.
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        AnyValue::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: AsRef<str>, V: Into<AnyValue>> FromIterator<(K, V)> for AnyValue {
    /// Create an object `AnyValue` by collecting an iterator of key-value pairs.
    #[inline]
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        AnyValue::Object(iter.into_iter().collect())
    }
}

impl From<serde_json::Value> for AnyValue {
    /// Convert a `serde_json::Value`. Numbers that fit an `i64` become `Int`, every other number
    /// becomes `Double`.
    fn from(val: serde_json::Value) -> Self {
        match val {
            serde_json::Value::Null => AnyValue::Null,
            serde_json::Value::Bool(b) => AnyValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => AnyValue::Int(i),
                None => n.as_f64().map_or(AnyValue::Null, AnyValue::Double),
            },
            serde_json::Value::String(s) => s.into(),
            serde_json::Value::Array(a) => a.into(),
            serde_json::Value::Object(o) => o.into_iter().collect(),
        }
    }
}

impl From<AnyValue> for serde_json::Value {
    /// Convert into a `serde_json::Value`. A non-finite double has no JSON number and becomes
    /// `null`.
    fn from(val: AnyValue) -> Self {
        match val {
            AnyValue::Null => serde_json::Value::Null,
            AnyValue::Bool(b) => serde_json::Value::Bool(b),
            AnyValue::Int(i) => serde_json::Value::Number(i.into()),
            AnyValue::Double(f) => serde_json::Number::from_f64(f)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            AnyValue::String(s) => serde_json::Value::String(s.to_string()),
            AnyValue::Array(a) => a.into_iter().map(serde_json::Value::from).collect(),
            AnyValue::Object(o) => serde_json::Value::Object(
                o.into_iter()
                    .map(|(k, v)| (k.to_string(), serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;
    use crate::{json, prelude::*, ValueType};

    #[test]
    fn test_from_primitives() {
        assert_eq!(AnyValue::from(1_i8).get_type(), ValueType::Int);
        assert_eq!(AnyValue::from(u32::MAX).as_i64(), Some(u32::MAX as i64));
        assert_eq!(AnyValue::from(i64::MIN).as_i64(), Some(i64::MIN));
        assert_eq!(AnyValue::from(i64::MAX as u64).as_i64(), Some(i64::MAX));
        assert_eq!(AnyValue::from(u64::MAX).as_f64(), Some(u64::MAX as f64));
        assert_eq!(AnyValue::from(2.5_f32).as_f64(), Some(2.5));
        assert!(AnyValue::from(f64::NAN).as_f64().is_some_and(f64::is_nan));
        assert_eq!(AnyValue::from(()), AnyValue::Null);
        assert_eq!(AnyValue::from(None::<i32>), AnyValue::Null);
        assert_eq!(AnyValue::from(Some("s")).as_str(), Some("s"));
        assert_eq!(AnyValue::from('😁').as_str(), Some("😁"));
        assert_eq!(
            AnyValue::from(String::from("owned")).as_str(),
            Some("owned")
        );
        assert_eq!(AnyValue::from(&FastStr::new("fast")).as_str(), Some("fast"));
    }

    #[test]
    fn test_from_containers() {
        let nested = AnyValue::from(vec![
            AnyValue::from(1),
            AnyValue::from(2),
            AnyValue::from(HashMap::from([("c", "deep charlie")])),
        ]);
        assert_eq!(nested, json!([1, 2, {"c": "deep charlie"}]));

        assert_eq!(AnyValue::from(&[1, 2, 3][..]), json!([1, 2, 3]));
        assert_eq!(AnyValue::from([true, false]), json!([true, false]));
        assert_eq!(
            AnyValue::from(BTreeMap::from([("k1", 1), ("2", 2)])),
            json!({"k1": 1, "2": 2})
        );

        let array: AnyValue = (1..=3).collect();
        assert_eq!(array, json!([1, 2, 3]));
        let object: AnyValue = vec![("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(object, json!({"b": 2, "a": 1}));
    }

    #[test]
    fn test_serde_json_interop() {
        let original = serde_json::json!({
            "int": -1,
            "big": u64::MAX,
            "float": 1.5,
            "array": [null, true, "s"],
        });
        let value = AnyValue::from(original.clone());
        assert_eq!(
            value.get("int").map(AnyValue::get_type),
            Some(ValueType::Int)
        );
        assert_eq!(
            value.get("big").map(AnyValue::get_type),
            Some(ValueType::Double)
        );
        assert_eq!(value.get("float").as_f64(), Some(1.5));

        let back = serde_json::Value::from(value);
        assert_eq!(back["int"], original["int"]);
        assert_eq!(back["float"], original["float"]);
        assert_eq!(back["array"], original["array"]);
        assert_eq!(
            serde_json::Value::from(AnyValue::from(f64::INFINITY)),
            serde_json::Value::Null
        );
    }
}
