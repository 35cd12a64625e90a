//! Prototype-chain checks

use js_value::{realm, JsValue};

use crate::predicates::is_object_like;
use crate::tag::{classify, CategoryTag};

/// Object created from a literal, `new Object()` or `Object.create(null)`.
///
/// The value must carry the generic `Object` tag and sit exactly one
/// level below the root of its own prototype chain, so instances of
/// classes and `Object.create(someObject)` results are rejected.
///
/// # Examples
///
/// ```
/// use js_value::JsValue;
/// use type_checks::is_plain_object;
///
/// assert!(is_plain_object(&JsValue::object()));
/// assert!(is_plain_object(&JsValue::create(&JsValue::Null).unwrap()));
///
/// let point = JsValue::class("Point", None).unwrap();
/// assert!(!is_plain_object(&JsValue::construct(&point).unwrap()));
/// ```
pub fn is_plain_object(value: &JsValue) -> bool {
    if !is_object_like(value) || classify(value) != CategoryTag::Object {
        return false;
    }
    let Some(proto) = value.prototype() else {
        return true;
    };
    let mut root = proto.clone();
    while let Some(next) = root.prototype() {
        root = next;
    }
    proto.ptr_eq(&root)
}

/// Whether `value` is the `prototype` object of its own constructor.
///
/// Without a callable `constructor` (or when its `prototype` is falsy)
/// the candidate is `Object.prototype`.
pub fn is_prototype(value: &JsValue) -> bool {
    if !value.is_truthy() {
        return false;
    }
    let constructor = value.get_str("constructor");
    let proto = Some(constructor)
        .filter(JsValue::is_callable)
        .map(|ctor| ctor.get_str("prototype"))
        .filter(JsValue::is_truthy)
        .unwrap_or_else(|| JsValue::Object(realm::object_prototype()));
    value.strict_equals(&proto)
}
