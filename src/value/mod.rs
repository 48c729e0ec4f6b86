//! A dynamic type to representing any valid JSON value.

mod de;
mod from;
#[macro_use]
mod macros;
pub(crate) mod node;
pub mod object;
mod partial_eq;
mod ser;
mod value_trait;

#[doc(inline)]
pub use self::de::{decode, from_value};
#[doc(inline)]
pub use self::node::{AnyValue, Array, ValueType};
#[doc(inline)]
pub use self::object::{IntoIter, Iter, IterMut, Object};
#[doc(inline)]
pub use self::ser::to_value;
#[doc(inline)]
pub use self::value_trait::{JsonValueMutTrait, JsonValueTrait};
