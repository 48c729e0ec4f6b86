//! A dynamic container for any JSON value.
//!
//! [`AnyValue`] holds exactly one of null, bool, integer, double, string, array or object. It can
//! be decoded from any `serde` token stream without knowing the shape up front, encoded back,
//! compared, and read or written one path segment at a time:
//!
//! ```
//! use anyvalue::{json, prelude::*};
//!
//! let mut root = json!({"nested": {"array": [1, 2, {"c": "deep charlie"}]}});
//! assert_eq!(root.get("nested").get("array").get(2).get("c").as_str(), Some("deep charlie"));
//!
//! root.get_mut("nested").get_mut("array").get_mut(2).set("c", "not charlie");
//! assert_eq!(root.get("nested").get("array").get(2).get("c").as_str(), Some("not charlie"));
//!
//! // a missing step turns the rest of the chain into a no-op
//! root.get_mut("missing").set("c", 1);
//! assert!(root.get("missing").is_none());
//! ```

/// Trace-level logging macro that forwards to `tracing::trace!` when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::tracing::trace!($($arg)*)
    };
}

/// Trace-level logging macro (no-op when `tracing` feature is disabled).
#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

mod error;
mod index;
mod pointer;
mod util;

pub mod prelude;
pub mod serde;
pub mod value;

pub use crate::error::*;
pub use crate::index::Index;
pub use crate::pointer::*;
pub use crate::serde::*;
pub use crate::value::*;

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}
