//! When decoding into or writing through an `AnyValue` goes wrong.
//!
//! Reading a missing path is not an error: it yields `None`. Writing to an unreachable path is a
//! silent no-op unless the strict `try_assign` family is used, which reports a [`WriteError`].

use std::{fmt::Display, result};

use serde::{de, ser};
use thiserror::Error as ThisError;

use crate::{pointer::Path, value::ValueType, Segment};

/// This type represents all possible errors that can occur when decoding JSON text into an
/// `AnyValue`, or converting between an `AnyValue` and a typed Rust value.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A token had a shape that no `AnyValue` variant can hold.
    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),

    /// The JSON codec failed: invalid syntax, unexpected EOF, an I/O failure, or a typed value
    /// that did not match the tree in `from_value`.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A custom message raised by a `Serialize` or `Deserialize` implementation.
    #[error("{0}")]
    Message(String),
}

impl de::Error for Error {
    #[cold]
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl ser::Error for Error {
    #[cold]
    fn custom<T: Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

/// Alias for a `Result` with the error type `anyvalue::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Returns the mismatch details if decoding met an unrepresentable token.
    pub fn type_mismatch(&self) -> Option<&TypeMismatch> {
        match self {
            Error::TypeMismatch(mismatch) => Some(mismatch),
            _ => None,
        }
    }

    /// Returns true if this error was caused by input that was not syntactically valid JSON.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Json(err) if err.is_syntax())
    }

    /// Returns true if this error was caused by prematurely reaching the end of the input data.
    pub fn is_eof(&self) -> bool {
        matches!(self, Error::Json(err) if err.is_eof())
    }

    /// Returns true if this error was caused by a failure to read or write bytes on an I/O
    /// stream.
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Json(err) if err.is_io())
    }
}

impl From<DecodeError<serde_json::Error>> for Error {
    fn from(err: DecodeError<serde_json::Error>) -> Self {
        match err {
            DecodeError::TypeMismatch(mismatch) => Error::TypeMismatch(mismatch),
            DecodeError::Transport(err) => Error::Json(err),
        }
    }
}

/// A decoded token matched none of the seven `AnyValue` shapes.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error(
    "type mismatch at `{path}`: {unexpected} cannot be held by an AnyValue"
)]
pub struct TypeMismatch {
    pub(crate) path: Path,
    pub(crate) unexpected: String,
}

impl TypeMismatch {
    /// The segments traversed from the root to the offending token.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A description of the offending token, such as `bytes` or `an enum`.
    pub fn unexpected(&self) -> &str {
        &self.unexpected
    }
}

/// The error returned by [`decode`](crate::decode), generic over the transport's own error.
#[derive(Debug, ThisError)]
pub enum DecodeError<E> {
    /// A token had a shape that no `AnyValue` variant can hold.
    #[error(transparent)]
    TypeMismatch(TypeMismatch),

    /// The deserializer itself failed.
    #[error(transparent)]
    Transport(E),
}

/// Why a strict write was rejected. The lenient writes (`set`, `remove`, `assign`) ignore these
/// conditions and leave the tree unchanged.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum WriteError {
    /// The write target itself is absent, e.g. an earlier step of the chain missed.
    #[error("the write target is absent")]
    Absent,

    /// An intermediate segment of a path did not resolve.
    #[error("no value at `{path}`")]
    MissingSegment { path: Path },

    /// A path write needs at least one segment.
    #[error("cannot write through an empty path")]
    EmptyPath,

    /// Only objects and arrays have children.
    #[error("cannot write `{segment}` into a {found} value")]
    NotAContainer { segment: Segment, found: ValueType },

    /// Arrays are never grown by a write.
    #[error("index {index} is out of bounds for an array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// The segment is not a non-negative decimal integer, so it cannot address an array.
    #[error("`{segment}` is not a valid array index")]
    InvalidIndex { segment: Segment },

    /// Removing from an array would shift the indices of later elements.
    #[error("cannot remove index {index} from an array")]
    ArrayRemoval { index: usize },
}
