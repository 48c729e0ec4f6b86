/// Construct an `anyvalue::AnyValue` from a JSON literal.
///
/// ```
/// # use anyvalue::json;
/// #
/// let value = json!({
///     "code": 200,
///     "success": true,
///     "payload": {
///         "features": [
///             "serde",
///             "json"
///         ],
///         "homepage": null
///     }
/// });
/// ```
///
/// Variables or expressions can be interpolated into the JSON literal. Any type
/// interpolated into an array element or object value must implement Serde's
/// `Serialize` trait, while any type interpolated into a object key must
/// implement `Into<String>`. If the `Serialize` implementation of the
/// interpolated type decides to fail, or if the interpolated type contains a
/// map with non-string keys, the `json!` macro will panic.
///
/// ```
/// # use anyvalue::{json, prelude::*};
/// #
/// let code = 200;
/// let features = vec!["anyvalue", "json"];
///
/// let value = json!({
///     "code": code,
///     "success": code == 200,
///     "payload": {
///         "features": features,
///         features[0]: features[1]
///     }
/// });
/// assert_eq!(value.get("code").as_i64(), Some(200));
/// assert_eq!(value.get("payload").get("features").get(0).as_str(), Some("anyvalue"));
/// ```
///
/// Integers stay `Int` and numbers written with a fraction or exponent become `Double`, the same
/// as decoding the literal would give.
///
/// ```
/// # use anyvalue::{json, prelude::*};
/// #
/// assert!(json!(1).is_i64());
/// assert!(json!(1.0).is_f64());
/// ```
///
/// Trailing commas are allowed inside both arrays and objects.
///
/// ```
/// # use anyvalue::json;
/// #
/// let value = json!(["notice", "the", "trailing", "comma -->",]);
/// ```
#[macro_export]
macro_rules! json {
    ($($json:tt)+) => {
        $crate::AnyValue::from($crate::__private::serde_json::json!($($json)+))
    };
}
