use faststr::FastStr;

use super::{node::AnyValue, value_trait::JsonValueTrait};

impl Eq for AnyValue {}

impl PartialEq for AnyValue {
    /// Structural equality. Arrays compare in order and objects ignore key order. An `Int` never
    /// equals a `Double`, and two NaN doubles are equal so the relation stays reflexive.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        match (self, other) {
            (AnyValue::Null, AnyValue::Null) => true,
            (AnyValue::Bool(a), AnyValue::Bool(b)) => a == b,
            (AnyValue::Int(a), AnyValue::Int(b)) => a == b,
            (AnyValue::Double(a), AnyValue::Double(b)) => a == b || (a.is_nan() && b.is_nan()),
            (AnyValue::String(a), AnyValue::String(b)) => a == b,
            (AnyValue::Array(a), AnyValue::Array(b)) => a == b,
            (AnyValue::Object(a), AnyValue::Object(b)) => a == b,
            _ => false,
        }
    }
}

macro_rules! impl_str_eq {
    ($($eq:ident [$($ty:ty)*])*) => {
        $($(
            impl PartialEq<$ty> for AnyValue {
                #[inline]
                fn eq(&self, other: &$ty) -> bool {
                    let s: &str = other.as_ref();
                    $eq(self, s)
                }
            }

            impl PartialEq<AnyValue> for $ty {
                #[inline]
                fn eq(&self, other: &AnyValue) -> bool {
                    let s: &str = self.as_ref();
                    $eq(other, s)
                }
            }

            impl PartialEq<$ty> for &AnyValue {
                #[inline]
                fn eq(&self, other: &$ty) -> bool {
                    let s: &str = other.as_ref();
                    $eq(*self, s)
                }
            }
        )*)*
    }
}

impl_str_eq! {
    eq_str[str String FastStr]
}

impl PartialEq<&str> for AnyValue {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        eq_str(self, other)
    }
}

impl PartialEq<AnyValue> for &str {
    #[inline]
    fn eq(&self, other: &AnyValue) -> bool {
        eq_str(other, self)
    }
}

#[inline]
fn eq_i64(value: &AnyValue, other: i64) -> bool {
    value.as_i64() == Some(other)
}

#[inline]
fn eq_u64(value: &AnyValue, other: u64) -> bool {
    i64::try_from(other).is_ok_and(|other| eq_i64(value, other))
}

#[inline]
fn eq_f64(value: &AnyValue, other: f64) -> bool {
    value.as_f64() == Some(other)
}

#[inline]
fn eq_bool(value: &AnyValue, other: bool) -> bool {
    value.as_bool() == Some(other)
}

#[inline]
fn eq_str(value: &AnyValue, other: &str) -> bool {
    value.as_str() == Some(other)
}

macro_rules! impl_numeric_eq {
    ($($eq:ident [$($ty:ty)*])*) => {
        $($(
            impl PartialEq<$ty> for AnyValue {
                #[inline]
                fn eq(&self, other: &$ty) -> bool {
                    $eq(self, *other as _)
                }
            }

            impl PartialEq<AnyValue> for $ty {
                #[inline]
                fn eq(&self, other: &AnyValue) -> bool {
                    $eq(other, *self as _)
                }
            }

            impl PartialEq<$ty> for &AnyValue {
                #[inline]
                fn eq(&self, other: &$ty) -> bool {
                    $eq(*self, *other as _)
                }
            }
        )*)*
    }
}

impl_numeric_eq! {
    eq_i64[i8 i16 i32 i64 isize]
    eq_u64[u8 u16 u32 u64 usize]
    eq_f64[f32 f64]
    eq_bool[bool]
}
