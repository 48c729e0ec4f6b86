//! Decoding JSON text into an `AnyValue` and encoding it back, with `serde_json` as the codec.

pub(crate) mod de;
pub(crate) mod ser;

pub use self::{
    de::{from_reader, from_slice, from_str},
    ser::{to_string, to_string_pretty, to_vec, to_vec_pretty, to_writer, to_writer_pretty},
};

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;
    use crate::{json, prelude::*, AnyValue, ValueType};

    const NESTED: &str = r#"{
        "null": null,
        "bool": true,
        "int": 4,
        "double": 3.14159265358979323846,
        "string": "hello",
        "array": [1, 2.5, "three", false, null],
        "nested": {"array": [1, 2, {"c": "deep charlie"}]}
    }"#;

    fn arb_value() -> impl Strategy<Value = AnyValue> {
        let leaf = prop_oneof![
            Just(AnyValue::Null),
            any::<bool>().prop_map(AnyValue::Bool),
            any::<i64>().prop_map(AnyValue::Int),
            any::<f64>()
                .prop_filter("JSON has no NaN or infinity", |f| f.is_finite())
                .prop_map(AnyValue::Double),
            ".{0,12}".prop_map(AnyValue::from),
        ];
        leaf.prop_recursive(4, 64, 8, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..8).prop_map(AnyValue::Array),
                prop::collection::hash_map(".{0,8}", inner, 0..8).prop_map(AnyValue::from),
            ]
        })
    }

    #[test]
    fn test_decode_every_variant() {
        let value = from_str(NESTED).unwrap();
        let expected = [
            ("null", ValueType::Null),
            ("bool", ValueType::Bool),
            ("int", ValueType::Int),
            ("double", ValueType::Double),
            ("string", ValueType::String),
            ("array", ValueType::Array),
            ("nested", ValueType::Object),
        ];
        for (key, typ) in expected {
            assert_eq!(
                value.get(key).map(AnyValue::get_type),
                Some(typ),
                "key is {key}"
            );
        }
        assert_eq!(value.get("double").as_f64(), Some(std::f64::consts::PI));
        assert_eq!(value.get("array").get(2).as_str(), Some("three"));
        assert_eq!(
            value.get("nested").get("array").get(2).get("c").as_str(),
            Some("deep charlie")
        );
    }

    #[test]
    fn test_round_trip_text() {
        let value = from_str(NESTED).unwrap();

        let compact = to_string(&value).unwrap();
        assert_eq!(from_str(&compact).unwrap(), value);

        let pretty = to_string_pretty(&value).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(from_str(&pretty).unwrap(), value);

        let bytes = to_vec(&value).unwrap();
        assert_eq!(from_slice(&bytes).unwrap(), value);
        assert_eq!(from_reader(bytes.as_slice()).unwrap(), value);

        let mut buf = Vec::new();
        to_writer_pretty(&mut buf, &value).unwrap();
        assert_eq!(buf, to_vec_pretty(&value).unwrap());
        buf.clear();
        to_writer(&mut buf, &value).unwrap();
        assert_eq!(buf, bytes);
    }

    #[test]
    fn test_decode_errors() {
        let err = from_str(r#"{"a": 1"#).unwrap_err();
        assert!(err.is_eof());

        let err = from_str(r#"{"a": 1} {"b": 2}"#).unwrap_err();
        assert!(err.is_syntax());
        assert!(err.type_mismatch().is_none());

        let err = from_slice(b"\"\xff\"").unwrap_err();
        assert!(err.is_syntax());

        struct Broken;

        impl std::io::Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "broken"))
            }
        }

        assert!(from_reader(Broken).unwrap_err().is_io());
    }

    #[test]
    fn test_decode_depth_limit() {
        fn nested(depth: usize) -> AnyValue {
            (0..depth).fold(AnyValue::Null, |inner, _| AnyValue::Array(vec![inner]))
        }

        let deepest = nested(127);
        let text = to_string(&deepest).unwrap();
        assert_eq!(from_str(&text).unwrap(), deepest);

        let text = to_string(&nested(128)).unwrap();
        let err = from_str(&text).unwrap_err();
        assert!(err.is_syntax());
        assert!(err.to_string().contains("recursion limit exceeded"));
    }

    #[test]
    fn test_encode_keeps_variant() {
        assert_eq!(to_string(&json!(1)).unwrap(), "1");
        assert_eq!(to_string(&json!(1.0)).unwrap(), "1.0");
        assert!(from_str("1").unwrap().is_i64());
        assert!(from_str("1.0").unwrap().is_f64());
        assert_eq!(to_string(&AnyValue::from(f64::INFINITY)).unwrap(), "null");
    }

    proptest! {
        #[test]
        fn test_round_trip(value in arb_value()) {
            let text = to_string(&value).unwrap();
            prop_assert_eq!(from_str(&text).unwrap(), value);
        }

        #[test]
        fn test_eq_is_an_equivalence(a in arb_value(), b in arb_value()) {
            let c = a.clone();
            prop_assert_eq!(&a, &a);
            prop_assert_eq!(&a, &c);
            prop_assert_eq!(a == b, b == a);
            if a == b {
                prop_assert_eq!(&b, &c);
            }
        }

        #[test]
        fn test_object_eq_ignores_order(entries in prop::collection::vec((".{0,4}", any::<i64>()), 0..8)) {
            let forward: AnyValue = entries.iter().cloned().collect();
            let backward: AnyValue = entries.iter().rev().cloned().collect();
            let unique = entries.iter().map(|(k, _)| k).collect::<std::collections::HashSet<_>>();
            if unique.len() == entries.len() {
                prop_assert_eq!(forward, backward);
            }
        }
    }
}
