//! Emptiness check

use js_value::JsValue;
use tracing::trace;

use crate::predicates::{is_arguments, is_array, is_array_like, is_typed_array};
use crate::prototype::is_prototype;
use crate::tag::{classify, CategoryTag};

/// Whether `value` holds nothing, by category:
///
/// 1. null and undefined are empty.
/// 2. Arrays, string primitives, typed arrays and `arguments` objects are
///    empty when their `length` is 0.
/// 3. Maps and Sets are empty when their size is 0. Weak collections have
///    no size and skip this step.
/// 4. A constructor's `prototype` object is empty without own enumerable
///    keys.
/// 5. Anything else without own enumerable keys is empty.
/// 6. Otherwise only the first `for…in` key is examined: a non-empty own
///    key makes the value non-empty, any other first key makes it empty.
///
/// # Examples
///
/// ```
/// use js_value::JsValue;
/// use type_checks::is_empty;
///
/// assert!(is_empty(&JsValue::array()));
/// assert!(is_empty(&JsValue::map()));
/// assert!(!is_empty(&JsValue::string("a")));
/// assert!(!is_empty(&JsValue::object_from([("a", JsValue::number(1.0))])));
/// ```
pub fn is_empty(value: &JsValue) -> bool {
    if value.is_nullish() {
        return true;
    }
    if is_array_like(value)
        && (is_array(value)
            || matches!(value, JsValue::String(_))
            || is_typed_array(value)
            || is_arguments(value))
    {
        return !value.get_str("length").is_truthy();
    }
    if let CategoryTag::Map | CategoryTag::Set = classify(value) {
        return value.as_object().and_then(|obj| obj.collection_size()) == Some(0);
    }

    let own_keys = value.own_keys();
    if is_prototype(value) || own_keys.is_empty() {
        return own_keys.is_empty();
    }

    trace!(keys = own_keys.len(), "checking first enumerable key");
    match value.for_in_keys().first() {
        Some(key) => key.is_empty() || !value.has_own(key),
        None => false,
    }
}
