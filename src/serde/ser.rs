//! Encoding is delegated to `serde_json`, and its errors are returned unchanged.

use std::io;

use serde::Serialize;

use crate::AnyValue;

/// Encode the value as JSON into the I/O stream.
///
/// # Errors
///
/// Encoding fails only if the writer does.
#[inline]
pub fn to_writer<W>(writer: W, value: &AnyValue) -> serde_json::Result<()>
where
    W: io::Write,
{
    let mut ser = serde_json::Serializer::new(writer);
    value.serialize(&mut ser)
}

/// Encode the value as pretty-printed JSON into the I/O stream.
#[inline]
pub fn to_writer_pretty<W>(writer: W, value: &AnyValue) -> serde_json::Result<()>
where
    W: io::Write,
{
    let mut ser = serde_json::Serializer::pretty(writer);
    value.serialize(&mut ser)
}

/// Encode the value as a JSON byte vector.
#[inline]
pub fn to_vec(value: &AnyValue) -> serde_json::Result<Vec<u8>> {
    let mut writer = Vec::with_capacity(128);
    to_writer(&mut writer, value)?;
    Ok(writer)
}

#[inline]
pub fn to_vec_pretty(value: &AnyValue) -> serde_json::Result<Vec<u8>> {
    let mut writer = Vec::with_capacity(128);
    to_writer_pretty(&mut writer, value)?;
    Ok(writer)
}

/// Encode the value as a String of JSON.
///
/// A double that is NaN or infinite has no JSON text and is written as `null`.
#[inline]
pub fn to_string(value: &AnyValue) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

#[inline]
pub fn to_string_pretty(value: &AnyValue) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
