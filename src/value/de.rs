use std::fmt;

use faststr::FastStr;
use serde::de::{
    self, DeserializeOwned, DeserializeSeed, Deserializer, EnumAccess, MapAccess, SeqAccess,
    Visitor,
};

use super::{node::AnyValue, object::Object};
use crate::{error::Result, DecodeError, Path, Segment, TypeMismatch};

/// Decodes one value from any `serde` deserializer.
///
/// A number that fits an `i64` and has no fraction or exponent becomes an `Int`, every other
/// number becomes a `Double`. Tokens that no variant can hold, such as bytes or enums, fail the
/// whole decode with a [`TypeMismatch`] that names where they were found. Nothing is returned
/// from a failed decode.
///
/// # Examples
/// ```
/// use anyvalue::{decode, prelude::*};
///
/// let mut de = serde_json::Deserializer::from_str(r#"[1, 1.0, "1"]"#);
/// let value = decode(&mut de).unwrap();
///
/// assert!(value.get(0).is_i64());
/// assert!(value.get(1).is_f64());
/// assert!(value.get(2).is_str());
/// ```
pub fn decode<'de, D>(deserializer: D) -> std::result::Result<AnyValue, DecodeError<D::Error>>
where
    D: Deserializer<'de>,
{
    let mut path = Path::new();
    let mut mismatch = None;
    let seed = ValueSeed {
        path: &mut path,
        mismatch: &mut mismatch,
    };
    seed.deserialize(deserializer)
        .map_err(|err| match mismatch.take() {
            Some(mismatch) => DecodeError::TypeMismatch(mismatch),
            None => DecodeError::Transport(err),
        })
}

/// Interpret an `AnyValue` as an instance of type `T`.
///
/// # Examples
/// ```
/// use anyvalue::{from_value, json};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, Debug, PartialEq)]
/// struct User {
///     name: String,
///     tags: Vec<String>,
/// }
///
/// let value = json!({"name": "alpha", "tags": ["a", "b"]});
/// let user: User = from_value(&value).unwrap();
/// assert_eq!(user, User { name: "alpha".into(), tags: vec!["a".into(), "b".into()] });
///
/// assert!(from_value::<User>(&json!({"name": 1})).is_err());
/// ```
pub fn from_value<T>(value: &AnyValue) -> Result<T>
where
    T: DeserializeOwned,
{
    Ok(serde_json::from_value(serde_json::to_value(value)?)?)
}

impl<'de> de::Deserialize<'de> for AnyValue {
    #[inline]
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut path = Path::new();
        let mut mismatch = None;
        ValueSeed {
            path: &mut path,
            mismatch: &mut mismatch,
        }
        .deserialize(deserializer)
    }
}

// Records the first token that cannot be held, together with where it was met.
fn mismatch<E: de::Error>(path: &Path, slot: &mut Option<TypeMismatch>, unexpected: String) -> E {
    let err = TypeMismatch {
        path: path.clone(),
        unexpected,
    };
    trace!(path = %err.path, unexpected = %err.unexpected, "decode type mismatch");
    let custom = E::custom(&err);
    *slot = Some(err);
    custom
}

struct ValueSeed<'p> {
    path: &'p mut Path,
    mismatch: &'p mut Option<TypeMismatch>,
}

impl<'de> DeserializeSeed<'de> for ValueSeed<'_> {
    type Value = AnyValue;

    #[inline]
    fn deserialize<D>(self, deserializer: D) -> std::result::Result<AnyValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor {
            path: self.path,
            mismatch: self.mismatch,
        })
    }
}

struct ValueVisitor<'p> {
    path: &'p mut Path,
    mismatch: &'p mut Option<TypeMismatch>,
}

impl ValueVisitor<'_> {
    fn child(&mut self) -> ValueSeed<'_> {
        ValueSeed {
            path: &mut *self.path,
            mismatch: &mut *self.mismatch,
        }
    }

    fn reject<E: de::Error>(self, unexpected: &str) -> E {
        mismatch(self.path, self.mismatch, unexpected.to_owned())
    }
}

impl<'de> Visitor<'de> for ValueVisitor<'_> {
    type Value = AnyValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("any valid JSON value")
    }

    #[inline]
    fn visit_bool<E>(self, value: bool) -> std::result::Result<AnyValue, E> {
        Ok(AnyValue::Bool(value))
    }

    #[inline]
    fn visit_i64<E>(self, value: i64) -> std::result::Result<AnyValue, E> {
        Ok(AnyValue::Int(value))
    }

    #[inline]
    fn visit_u64<E>(self, value: u64) -> std::result::Result<AnyValue, E> {
        Ok(AnyValue::from(value))
    }

    fn visit_i128<E>(self, value: i128) -> std::result::Result<AnyValue, E> {
        Ok(match i64::try_from(value) {
            Ok(int) => AnyValue::Int(int),
            Err(_) => AnyValue::Double(value as f64),
        })
    }

    fn visit_u128<E>(self, value: u128) -> std::result::Result<AnyValue, E> {
        Ok(match i64::try_from(value) {
            Ok(int) => AnyValue::Int(int),
            Err(_) => AnyValue::Double(value as f64),
        })
    }

    #[inline]
    fn visit_f64<E>(self, value: f64) -> std::result::Result<AnyValue, E> {
        Ok(AnyValue::Double(value))
    }

    #[inline]
    fn visit_str<E>(self, value: &str) -> std::result::Result<AnyValue, E> {
        Ok(AnyValue::String(FastStr::new(value)))
    }

    #[inline]
    fn visit_string<E>(self, value: String) -> std::result::Result<AnyValue, E> {
        Ok(AnyValue::String(FastStr::from(value)))
    }

    fn visit_bytes<E>(self, _value: &[u8]) -> std::result::Result<AnyValue, E>
    where
        E: de::Error,
    {
        Err(self.reject("bytes"))
    }

    #[inline]
    fn visit_none<E>(self) -> std::result::Result<AnyValue, E> {
        Ok(AnyValue::Null)
    }

    #[inline]
    fn visit_some<D>(self, deserializer: D) -> std::result::Result<AnyValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    #[inline]
    fn visit_unit<E>(self) -> std::result::Result<AnyValue, E> {
        Ok(AnyValue::Null)
    }

    fn visit_newtype_struct<D>(self, deserializer: D) -> std::result::Result<AnyValue, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A>(mut self, mut seq: A) -> std::result::Result<AnyValue, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut array = Vec::new();
        loop {
            self.path.push(Segment::Index(array.len()));
            let element = seq.next_element_seed(self.child())?;
            self.path.pop();
            match element {
                Some(element) => array.push(element),
                None => break,
            }
        }
        Ok(AnyValue::Array(array))
    }

    fn visit_map<A>(mut self, mut map: A) -> std::result::Result<AnyValue, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut object = Object::new();
        while let Some(key) = map.next_key_seed(KeySeed {
            path: &*self.path,
            mismatch: &mut *self.mismatch,
        })? {
            self.path.push(Segment::Key(key.clone()));
            let value = map.next_value_seed(self.child())?;
            self.path.pop();
            // the last of duplicated keys wins
            object.insert_faststr(key, value);
        }
        Ok(AnyValue::Object(object))
    }

    fn visit_enum<A>(self, _data: A) -> std::result::Result<AnyValue, A::Error>
    where
        A: EnumAccess<'de>,
    {
        Err(self.reject("an enum"))
    }
}

/// Object keys must be strings. Anything else is decoded first so the mismatch can name it.
struct KeySeed<'p> {
    path: &'p Path,
    mismatch: &'p mut Option<TypeMismatch>,
}

impl<'de> DeserializeSeed<'de> for KeySeed<'_> {
    type Value = FastStr;

    fn deserialize<D>(self, deserializer: D) -> std::result::Result<FastStr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut path = self.path.clone();
        let key = ValueSeed {
            path: &mut path,
            mismatch: &mut *self.mismatch,
        }
        .deserialize(deserializer)?;
        match key {
            AnyValue::String(key) => Ok(key),
            other => Err(mismatch(
                self.path,
                self.mismatch,
                format!("a map key of type {}", other.get_type()),
            )),
        }
    }
}

#[cfg(test)]
mod test {
    use serde::de::{
        value::{
            BytesDeserializer, EnumAccessDeserializer, Error as ValueError, MapDeserializer,
            SeqDeserializer, StrDeserializer, UnitDeserializer,
        },
        IntoDeserializer,
    };
    use serde::Deserialize;

    use super::*;
    use crate::{json, prelude::*, ValueType};

    fn expect_mismatch<E: fmt::Debug>(
        result: std::result::Result<AnyValue, DecodeError<E>>,
    ) -> TypeMismatch {
        match result {
            Err(DecodeError::TypeMismatch(mismatch)) => mismatch,
            other => panic!("expected a type mismatch, got {other:?}"),
        }
    }

    fn decode_str(text: &str) -> std::result::Result<AnyValue, DecodeError<serde_json::Error>> {
        decode(&mut serde_json::Deserializer::from_str(text))
    }

    #[test]
    fn test_decode_number_tie_break() {
        let text =
            r#"[1, -1, 3.14159265358979323846, 1e2, 9223372036854775807, 9223372036854775808]"#;
        let value = decode_str(text).unwrap();

        assert_eq!(value.get(0), Some(&AnyValue::Int(1)));
        assert_eq!(value.get(1), Some(&AnyValue::Int(-1)));
        assert_eq!(value.get(2).as_f64(), Some(std::f64::consts::PI));
        assert_eq!(value.get(3), Some(&AnyValue::Double(100.0)));
        assert_eq!(value.get(4), Some(&AnyValue::Int(i64::MAX)));
        assert_eq!(value.get(5).as_f64(), Some(9223372036854775808.0));
    }

    #[test]
    fn test_decode_negative_zero() {
        // serde_json reports `-0` as a float to keep its sign
        let value = decode_str("[-0, 0, -0.0]").unwrap();
        assert_eq!(
            value.get(0).map(AnyValue::get_type),
            Some(ValueType::Double)
        );
        let zero = value.get(0).as_f64();
        assert!(zero.is_some_and(|f| f == 0.0 && f.is_sign_negative()));
        assert_eq!(value.get(1), Some(&AnyValue::Int(0)));
        assert_eq!(
            value.get(2).map(AnyValue::get_type),
            Some(ValueType::Double)
        );
        assert_eq!(value.get(0), value.get(2));
    }

    #[test]
    fn test_decode_null_and_option() {
        let value = decode_str("[null, {}]").unwrap();
        assert!(value.get(0).is_null());
        assert!(value.get(1).is_object());

        let unit: UnitDeserializer<ValueError> = ().into_deserializer();
        assert!(decode(unit).unwrap().is_null());
    }

    #[test]
    fn test_decode_duplicate_keys() {
        let value = decode_str(r#"{"a": 1, "a": 2}"#).unwrap();
        assert_eq!(value, json!({"a": 2}));
    }

    #[test]
    fn test_bytes_mismatch() {
        let mismatch = expect_mismatch(decode(BytesDeserializer::<ValueError>::new(b"raw")));
        assert_eq!(mismatch.path().to_string(), "$");
        assert_eq!(mismatch.unexpected(), "bytes");

        let items = vec![&b"a"[..], &b"b"[..]];
        let seq = SeqDeserializer::<_, ValueError>::new(items.into_iter());
        let mismatch = expect_mismatch(decode(seq));
        assert_eq!(mismatch.path().to_string(), "$[0]");

        let entries = vec![("list", vec![&b"x"[..]])];
        let map = MapDeserializer::<_, ValueError>::new(entries.into_iter());
        let mismatch = expect_mismatch(decode(map));
        assert_eq!(mismatch.path().to_string(), "$.list[0]");
        assert_eq!(
            mismatch.to_string(),
            "type mismatch at `$.list[0]`: bytes cannot be held by an AnyValue"
        );
    }

    #[test]
    fn test_enum_mismatch() {
        let variant: StrDeserializer<ValueError> = "Unit".into_deserializer();
        let mismatch = expect_mismatch(decode(EnumAccessDeserializer::new(variant)));
        assert_eq!(mismatch.path().to_string(), "$");
        assert_eq!(mismatch.unexpected(), "an enum");

        let entries = vec![("kind", EnumAccessDeserializer::new(variant))];
        let map = MapDeserializer::<_, ValueError>::new(entries.into_iter());
        let mismatch = expect_mismatch(decode(map));
        assert_eq!(mismatch.path().to_string(), "$.kind");
        assert_eq!(mismatch.unexpected(), "an enum");
    }

    #[test]
    fn test_non_string_key_mismatch() {
        let entries = vec![(1_i64, "one")];
        let map = MapDeserializer::<_, ValueError>::new(entries.into_iter());
        let mismatch = expect_mismatch(decode(map));
        assert_eq!(mismatch.path().to_string(), "$");
        assert_eq!(mismatch.unexpected(), "a map key of type int");
    }

    #[test]
    fn test_transport_error() {
        let err = decode_str("[1,").unwrap_err();
        assert!(matches!(err, DecodeError::Transport(ref e) if e.is_eof()));
    }

    #[test]
    fn test_deserialize_impl() {
        let value: AnyValue = serde_json::from_str(r#"{"nested": {"array": [1, 2]}}"#).unwrap();
        assert_eq!(value.get("nested").get("array").get(1).as_i64(), Some(2));

        let entries = vec![("k", &b"x"[..])];
        let map = MapDeserializer::<_, ValueError>::new(entries.into_iter());
        let err = AnyValue::deserialize(map).unwrap_err();
        assert!(err.to_string().contains("$.k"));
    }

    #[test]
    fn test_from_value() {
        let value = json!({"a": [1, 2], "b": null});
        let map: std::collections::HashMap<String, Option<Vec<i32>>> = from_value(&value).unwrap();
        assert_eq!(map["a"], Some(vec![1, 2]));
        assert_eq!(map["b"], None);

        let err = from_value::<Vec<i32>>(&value).unwrap_err();
        assert!(err.type_mismatch().is_none());
        assert_eq!(from_value::<f64>(&AnyValue::from(f64::NAN)).ok(), None);
    }
}
