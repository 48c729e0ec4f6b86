use std::io;

use serde_json::de::{IoRead, Read, SliceRead, StrRead};

use crate::{error::Result, value::decode, AnyValue};

fn from_trait<'de, R>(read: R) -> Result<AnyValue>
where
    R: Read<'de>,
{
    let mut de = serde_json::Deserializer::new(read);
    let value = decode(&mut de)?;

    // Make sure the whole stream has been consumed.
    de.end()?;
    Ok(value)
}

/// Decode an `AnyValue` from bytes of JSON text.
pub fn from_slice(json: &[u8]) -> Result<AnyValue> {
    from_trait(SliceRead::new(json))
}

/// Decode an `AnyValue` from a string of JSON text.
///
/// # Examples
/// ```
/// use anyvalue::{from_str, prelude::*};
///
/// let value = from_str(r#"{"pi": 3.14159265358979323846, "answer": 42}"#).unwrap();
/// assert!(value.get("pi").is_f64());
/// assert_eq!(value.get("answer").as_i64(), Some(42));
///
/// let err = from_str(r#"{"answer": 42} trailing"#).unwrap_err();
/// assert!(err.is_syntax());
/// ```
pub fn from_str(s: &str) -> Result<AnyValue> {
    from_trait(StrRead::new(s))
}

/// Decode an `AnyValue` from a reader.
pub fn from_reader<R>(reader: R) -> Result<AnyValue>
where
    R: io::Read,
{
    from_trait(IoRead::new(reader))
}
