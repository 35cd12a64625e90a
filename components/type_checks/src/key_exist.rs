//! Key existence check

use js_value::JsValue;

use crate::predicates::is_object;
use crate::prototype::is_prototype;
use crate::tag::{classify, CategoryTag};

/// Whether `key` exists on `value`.
///
/// Maps and Sets answer with their own membership test (SameValueZero).
/// Objects answer by reading `value[key]`, own or inherited, so a key
/// whose value is undefined reports as absent. Primitives, null and
/// undefined never have keys.
///
/// # Examples
///
/// ```
/// use js_value::JsValue;
/// use type_checks::is_key_exist;
///
/// let map = JsValue::map_from([(JsValue::number(1.0), JsValue::string("x"))]);
/// assert!(is_key_exist(&map, &JsValue::number(1.0)));
/// assert!(!is_key_exist(&JsValue::object(), &JsValue::string("missing")));
/// ```
pub fn is_key_exist(value: &JsValue, key: &JsValue) -> bool {
    if value.is_nullish() {
        return false;
    }
    if let CategoryTag::Map | CategoryTag::Set = classify(value) {
        return value.as_object().is_some_and(|obj| obj.collection_has(key));
    }
    if is_prototype(value) || is_object(value) {
        return !value.get(&key.to_property_key()).is_undefined();
    }
    false
}
