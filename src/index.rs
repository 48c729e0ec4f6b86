use faststr::FastStr;

use crate::{util::private::Sealed, AnyValue, Segment};

/// An indexing trait for `AnyValue`: one step of a chained access.
///
/// It is implemented for `usize`, `str`, `String`, `FastStr`, `Segment` and references to them.
/// The active variant of the container decides how the segment is read:
///
/// - against an object, a string is the key and a number is the key spelled in decimal;
/// - against an array, a number is the index and a string must be ASCII digits to be one;
/// - anything else is a miss.
///
/// # Examples
///
/// ```
/// use anyvalue::{json, prelude::*};
///
/// let data = json!({"array": [10, 20, 30], "object": {"2": "two"}});
///
/// assert_eq!(data.get("array").get(1).as_i64(), Some(20));
/// assert_eq!(data.get("array").get("1").as_i64(), Some(20));
/// assert_eq!(data.get("object").get(2).as_str(), Some("two"));
/// assert!(data.get("array").get("x").is_none());
/// assert!(data.get("array").get(3).is_none());
/// ```
pub trait Index: Sealed {
    /// Return None if the index is not already in the array or object.
    #[doc(hidden)]
    fn index_into<'v>(&self, v: &'v AnyValue) -> Option<&'v AnyValue>;

    /// Return None if the index is not already in the array or object.
    #[doc(hidden)]
    fn index_into_mut<'v>(&self, v: &'v mut AnyValue) -> Option<&'v mut AnyValue>;

    /// The owned segment, used by writes and diagnostics.
    #[doc(hidden)]
    fn to_segment(&self) -> Segment;
}

/// Parses an array index out of a string segment. Only plain ASCII digits are accepted, so
/// `"+1"`, `"-1"` and `" 1"` never address an element.
pub(crate) fn parse_index(key: &str) -> Option<usize> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}

impl Index for usize {
    #[inline]
    fn index_into<'v>(&self, v: &'v AnyValue) -> Option<&'v AnyValue> {
        match v {
            AnyValue::Array(array) => array.get(*self),
            AnyValue::Object(object) => object.get(itoa::Buffer::new().format(*self)),
            _ => None,
        }
    }

    #[inline]
    fn index_into_mut<'v>(&self, v: &'v mut AnyValue) -> Option<&'v mut AnyValue> {
        match v {
            AnyValue::Array(array) => array.get_mut(*self),
            AnyValue::Object(object) => object.get_mut(itoa::Buffer::new().format(*self)),
            _ => None,
        }
    }

    #[inline]
    fn to_segment(&self) -> Segment {
        Segment::Index(*self)
    }
}

impl Index for str {
    #[inline]
    fn index_into<'v>(&self, v: &'v AnyValue) -> Option<&'v AnyValue> {
        match v {
            AnyValue::Object(object) => object.get(self),
            AnyValue::Array(array) => parse_index(self).and_then(|i| array.get(i)),
            _ => None,
        }
    }

    #[inline]
    fn index_into_mut<'v>(&self, v: &'v mut AnyValue) -> Option<&'v mut AnyValue> {
        match v {
            AnyValue::Object(object) => object.get_mut(self),
            AnyValue::Array(array) => parse_index(self).and_then(|i| array.get_mut(i)),
            _ => None,
        }
    }

    #[inline]
    fn to_segment(&self) -> Segment {
        Segment::Key(FastStr::new(self))
    }
}

macro_rules! impl_str_index {
    ($($t: ty),*) => {
        $(
            impl Index for $t {
                #[inline]
                fn index_into<'v>(&self, v: &'v AnyValue) -> Option<&'v AnyValue> {
                    self.as_str().index_into(v)
                }

                #[inline]
                fn index_into_mut<'v>(&self, v: &'v mut AnyValue) -> Option<&'v mut AnyValue> {
                    self.as_str().index_into_mut(v)
                }

                #[inline]
                fn to_segment(&self) -> Segment {
                    Segment::Key(FastStr::new(self.as_str()))
                }
            }
        )*
    };
}

impl_str_index!(String, FastStr);

impl Index for Segment {
    #[inline]
    fn index_into<'v>(&self, v: &'v AnyValue) -> Option<&'v AnyValue> {
        match self {
            Segment::Index(i) => i.index_into(v),
            Segment::Key(k) => k.index_into(v),
        }
    }

    #[inline]
    fn index_into_mut<'v>(&self, v: &'v mut AnyValue) -> Option<&'v mut AnyValue> {
        match self {
            Segment::Index(i) => i.index_into_mut(v),
            Segment::Key(k) => k.index_into_mut(v),
        }
    }

    #[inline]
    fn to_segment(&self) -> Segment {
        self.clone()
    }
}

impl<T> Index for &T
where
    T: ?Sized + Index,
{
    #[inline]
    fn index_into<'v>(&self, v: &'v AnyValue) -> Option<&'v AnyValue> {
        (**self).index_into(v)
    }

    #[inline]
    fn index_into_mut<'v>(&self, v: &'v mut AnyValue) -> Option<&'v mut AnyValue> {
        (**self).index_into_mut(v)
    }

    #[inline]
    fn to_segment(&self) -> Segment {
        (**self).to_segment()
    }
}
