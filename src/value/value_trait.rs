use faststr::FastStr;

use super::{
    node::{AnyValue, Array},
    object::Object,
};
use crate::{index::parse_index, Index, Path, Segment, WriteError};

/// A trait for reading JSON values. Used by `AnyValue` and by the `Option` and `Result` wrappers
/// that a chained access produces.
///
/// Every method reports a miss as `None` (or `false`) rather than an error, so a chain keeps
/// going after the first missing step and simply answers `None` at the end. An absent value is
/// not `null`: `is_null` is true only for a present `null`.
///
/// # Examples
/// ```
/// use anyvalue::{json, prelude::*, AnyValue};
///
/// let root = json!({"nested": {"array": [1, 2, {"c": "deep charlie"}]}});
///
/// assert_eq!(root.get("nested").get("array").get(2).get("c").as_str(), Some("deep charlie"));
/// assert!(root.get("nested").get("array").get(3).is_none());
///
/// let missing: Option<&AnyValue> = root.get("missing");
/// assert!(!missing.is_null());
/// ```
pub trait JsonValueTrait {
    /// Returns the underlying value, or `None` if `self` is `Option::None` or `Result::Err(_)`.
    fn as_value(&self) -> Option<&AnyValue>;

    /// Returns true if the value is a present `null`.
    #[inline]
    fn is_null(&self) -> bool {
        matches!(self.as_value(), Some(AnyValue::Null))
    }

    #[inline]
    fn is_boolean(&self) -> bool {
        matches!(self.as_value(), Some(AnyValue::Bool(_)))
    }

    #[inline]
    fn is_true(&self) -> bool {
        self.as_bool() == Some(true)
    }

    #[inline]
    fn is_false(&self) -> bool {
        self.as_bool() == Some(false)
    }

    /// Returns true if the value holds an `Int`.
    #[inline]
    fn is_i64(&self) -> bool {
        matches!(self.as_value(), Some(AnyValue::Int(_)))
    }

    /// Returns true if the value holds a `Double`.
    #[inline]
    fn is_f64(&self) -> bool {
        matches!(self.as_value(), Some(AnyValue::Double(_)))
    }

    /// Returns true if the value holds either numeric variant.
    #[inline]
    fn is_number(&self) -> bool {
        self.is_i64() || self.is_f64()
    }

    #[inline]
    fn is_str(&self) -> bool {
        matches!(self.as_value(), Some(AnyValue::String(_)))
    }

    #[inline]
    fn is_array(&self) -> bool {
        matches!(self.as_value(), Some(AnyValue::Array(_)))
    }

    #[inline]
    fn is_object(&self) -> bool {
        matches!(self.as_value(), Some(AnyValue::Object(_)))
    }

    #[inline]
    fn as_bool(&self) -> Option<bool> {
        match self.as_value()? {
            AnyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if the value is an `Int`. A `Double` is never truncated.
    #[inline]
    fn as_i64(&self) -> Option<i64> {
        match self.as_value()? {
            AnyValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float if the value is a `Double`. An `Int` is never widened.
    ///
    /// # Examples
    /// ```
    /// use anyvalue::{json, prelude::*};
    ///
    /// assert_eq!(json!(1.5).as_f64(), Some(1.5));
    /// assert_eq!(json!(1).as_f64(), None);
    /// ```
    #[inline]
    fn as_f64(&self) -> Option<f64> {
        match self.as_value()? {
            AnyValue::Double(f) => Some(*f),
            _ => None,
        }
    }

    #[inline]
    fn as_str(&self) -> Option<&str> {
        match self.as_value()? {
            AnyValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    #[inline]
    fn as_faststr(&self) -> Option<&FastStr> {
        match self.as_value()? {
            AnyValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    fn as_array(&self) -> Option<&Array> {
        match self.as_value()? {
            AnyValue::Array(array) => Some(array),
            _ => None,
        }
    }

    #[inline]
    fn as_object(&self) -> Option<&Object> {
        match self.as_value()? {
            AnyValue::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Index into an object or array by one segment. See [`Index`] for how a segment is matched
    /// against each variant.
    #[inline]
    fn get<I: Index>(&self, index: I) -> Option<&AnyValue> {
        index.index_into(self.as_value()?)
    }

    /// Follows every segment of `path` from this value. The empty path addresses the value
    /// itself.
    ///
    /// # Examples
    /// ```
    /// use anyvalue::{json, path, prelude::*};
    ///
    /// let root = json!({"nested": {"array": [1, 2, {"c": "deep charlie"}]}});
    ///
    /// assert_eq!(root.pointer(&path!["nested", "array", 2, "c"]).as_str(), Some("deep charlie"));
    /// assert_eq!(root.pointer(&path!["nested", "array", "1"]).as_i64(), Some(2));
    /// assert!(root.pointer(&path!["nested", "object"]).is_none());
    /// assert_eq!(root.pointer(&path![]), Some(&root));
    /// ```
    fn pointer(&self, path: &Path) -> Option<&AnyValue> {
        let mut current = self.as_value()?;
        for segment in path {
            current = segment.index_into(current)?;
        }
        Some(current)
    }
}

/// A trait for writing JSON values in place.
///
/// The lenient writes `set`, `remove`, `assign` and `assign_pointer` never fail: when the target
/// is absent, is not a container, or is an array that does not already hold the index, they leave
/// the tree unchanged. Their `try_` counterparts report why with a [`WriteError`].
///
/// Arrays are never grown or shrunk by a write: only an existing element can be replaced.
///
/// # Examples
/// ```
/// use anyvalue::{json, prelude::*};
///
/// let mut root = json!({"nested": {"array": [1, 2, {"c": "deep charlie"}]}});
///
/// root.get_mut("nested").get_mut("array").get_mut(2).set("c", "not charlie");
/// assert_eq!(root.get("nested").get("array").get(2).get("c").as_str(), Some("not charlie"));
///
/// root.get_mut("nested").get_mut("array").get_mut(2).remove("c");
/// assert!(root.get("nested").get("array").get(2).get("c").is_none());
///
/// // past the end of the array
/// root.get_mut("nested").get_mut("array").set(3, true);
/// assert_eq!(root.get("nested").get("array").as_array().map(Vec::len), Some(3));
/// ```
pub trait JsonValueMutTrait {
    /// Returns the underlying value, or `None` if `self` is `Option::None` or `Result::Err(_)`.
    fn as_value_mut(&mut self) -> Option<&mut AnyValue>;

    #[inline]
    fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self.as_value_mut()? {
            AnyValue::Array(array) => Some(array),
            _ => None,
        }
    }

    #[inline]
    fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self.as_value_mut()? {
            AnyValue::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Mutably index into an object or array by one segment.
    #[inline]
    fn get_mut<I: Index>(&mut self, index: I) -> Option<&mut AnyValue> {
        index.index_into_mut(self.as_value_mut()?)
    }

    fn pointer_mut(&mut self, path: &Path) -> Option<&mut AnyValue> {
        let mut current = self.as_value_mut()?;
        for segment in path {
            current = segment.index_into_mut(current)?;
        }
        Some(current)
    }

    /// Inserts or replaces the child at `index`. A no-op when the write is not possible.
    #[inline]
    fn set<I: Index, T: Into<AnyValue>>(&mut self, index: I, value: T) {
        self.assign(index, Some(value.into()));
    }

    /// Removes the key from an object, returning its value. Removing from an array is not
    /// supported and leaves it unchanged.
    #[inline]
    fn remove<I: Index>(&mut self, index: I) -> Option<AnyValue> {
        self.try_assign(index, None).ok().flatten()
    }

    /// Writes `Some(value)` at `index`, or removes the child for `None`, ignoring any failure.
    fn assign<I: Index>(&mut self, index: I, value: Option<AnyValue>) {
        if let Err(_err) = self.try_assign(&index, value) {
            trace!(segment = %index.to_segment(), error = %_err, "ignored write");
        }
    }

    /// Writes `Some(value)` at `index`, or removes the child for `None`, and returns the value
    /// that was displaced.
    ///
    /// Against an object a numeric segment is written as its decimal text key. Against an array
    /// a string segment must be ASCII digits.
    ///
    /// # Examples
    /// ```
    /// use anyvalue::{json, prelude::*, WriteError};
    ///
    /// let mut root = json!({"array": [1, 2, 3], "text": "t"});
    ///
    /// assert_eq!(root.get_mut("array").try_assign(0, Some(json!(0))), Ok(Some(json!(1))));
    /// assert_eq!(
    ///     root.get_mut("array").try_assign(3, Some(json!(4))),
    ///     Err(WriteError::IndexOutOfBounds { index: 3, len: 3 })
    /// );
    /// assert!(root.get_mut("text").try_assign("k", None).is_err());
    /// assert_eq!(root.get_mut("nothing").try_assign("k", None), Err(WriteError::Absent));
    /// ```
    fn try_assign<I: Index>(
        &mut self,
        index: I,
        value: Option<AnyValue>,
    ) -> Result<Option<AnyValue>, WriteError> {
        let target = self.as_value_mut().ok_or(WriteError::Absent)?;
        write_child(target, index.to_segment(), value)
    }

    /// Like [`assign`](Self::assign), addressed by a whole path from this value. Every segment
    /// but the last must already resolve, and the empty path writes nothing.
    fn assign_pointer(&mut self, path: &Path, value: Option<AnyValue>) {
        if let Err(_err) = self.try_assign_pointer(path, value) {
            trace!(path = %path, error = %_err, "ignored write");
        }
    }

    /// Like [`try_assign`](Self::try_assign), addressed by a whole path from this value.
    ///
    /// # Examples
    /// ```
    /// use anyvalue::{json, path, prelude::*, WriteError};
    ///
    /// let mut root = json!({"nested": {"array": [1, 2, {"c": "deep charlie"}]}});
    ///
    /// let old = root.try_assign_pointer(&path!["nested", "array", 2, "c"], Some(json!(1)));
    /// assert_eq!(old, Ok(Some(json!("deep charlie"))));
    ///
    /// let err = root.try_assign_pointer(&path!["nested", "object", "c"], Some(json!(1)));
    /// assert_eq!(
    ///     err.unwrap_err().to_string(),
    ///     "no value at `$.nested.object`"
    /// );
    /// ```
    fn try_assign_pointer(
        &mut self,
        path: &Path,
        value: Option<AnyValue>,
    ) -> Result<Option<AnyValue>, WriteError> {
        let (last, parents) = path.split_last().ok_or(WriteError::EmptyPath)?;
        let mut current = self.as_value_mut().ok_or(WriteError::Absent)?;
        for (depth, segment) in parents.iter().enumerate() {
            let missing = || WriteError::MissingSegment {
                path: Path(path[..=depth].to_vec()),
            };
            current = segment.index_into_mut(current).ok_or_else(missing)?;
        }
        write_child(current, last.clone(), value)
    }
}

/// Writes one child of `target`, which must be an object or an array.
fn write_child(
    target: &mut AnyValue,
    segment: Segment,
    value: Option<AnyValue>,
) -> Result<Option<AnyValue>, WriteError> {
    match target {
        AnyValue::Object(object) => {
            let key = match segment {
                Segment::Key(key) => key,
                Segment::Index(index) => FastStr::new(itoa::Buffer::new().format(index)),
            };
            Ok(match value {
                Some(value) => object.insert_faststr(key, value),
                None => object.remove(&key),
            })
        }
        AnyValue::Array(array) => {
            let index = match &segment {
                Segment::Index(index) => Some(*index),
                Segment::Key(key) => parse_index(key),
            };
            let Some(index) = index else {
                return Err(WriteError::InvalidIndex { segment });
            };
            let Some(value) = value else {
                return Err(WriteError::ArrayRemoval { index });
            };
            let len = array.len();
            match array.get_mut(index) {
                Some(slot) => Ok(Some(std::mem::replace(slot, value))),
                None => Err(WriteError::IndexOutOfBounds { index, len }),
            }
        }
        other => Err(WriteError::NotAContainer {
            segment,
            found: other.get_type(),
        }),
    }
}

impl JsonValueTrait for AnyValue {
    #[inline]
    fn as_value(&self) -> Option<&AnyValue> {
        Some(self)
    }
}

impl<V: JsonValueTrait> JsonValueTrait for Option<V> {
    #[inline]
    fn as_value(&self) -> Option<&AnyValue> {
        self.as_ref().and_then(JsonValueTrait::as_value)
    }
}

impl<V: JsonValueTrait, E> JsonValueTrait for Result<V, E> {
    #[inline]
    fn as_value(&self) -> Option<&AnyValue> {
        self.as_ref().ok().and_then(JsonValueTrait::as_value)
    }
}

impl<V: JsonValueTrait + ?Sized> JsonValueTrait for &V {
    #[inline]
    fn as_value(&self) -> Option<&AnyValue> {
        (**self).as_value()
    }
}

impl<V: JsonValueTrait + ?Sized> JsonValueTrait for &mut V {
    #[inline]
    fn as_value(&self) -> Option<&AnyValue> {
        (**self).as_value()
    }
}

impl JsonValueMutTrait for AnyValue {
    #[inline]
    fn as_value_mut(&mut self) -> Option<&mut AnyValue> {
        Some(self)
    }
}

impl<V: JsonValueMutTrait> JsonValueMutTrait for Option<V> {
    #[inline]
    fn as_value_mut(&mut self) -> Option<&mut AnyValue> {
        self.as_mut().and_then(JsonValueMutTrait::as_value_mut)
    }
}

impl<V: JsonValueMutTrait, E> JsonValueMutTrait for Result<V, E> {
    #[inline]
    fn as_value_mut(&mut self) -> Option<&mut AnyValue> {
        self.as_mut().ok().and_then(JsonValueMutTrait::as_value_mut)
    }
}

impl<V: JsonValueMutTrait + ?Sized> JsonValueMutTrait for &mut V {
    #[inline]
    fn as_value_mut(&mut self) -> Option<&mut AnyValue> {
        (**self).as_value_mut()
    }
}
