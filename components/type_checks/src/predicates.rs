//! Category predicates
//!
//! Each predicate pairs a fast path on the primitive kind (`typeof`) with
//! a fallback on [`classify`], so primitives and their wrapper objects are
//! recognised alike.
//!
//! `is_string`, `is_number`, `is_array` and `is_function` reject every
//! falsy value before looking at its kind: `""`, `0`, `-0` and `NaN` are
//! not reported as strings or numbers.

use js_value::{parse_date, realm, JsValue, TypeOf};

use crate::prototype::is_plain_object;
use crate::tag::{classify, CategoryTag};

/// `nodeType` of an element node
const ELEMENT_NODE: f64 = 1.0;

/// `Number.MAX_SAFE_INTEGER`
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// `typeof value == "object"` and not null
pub fn is_object_like(value: &JsValue) -> bool {
    value.type_of() == TypeOf::Object && !value.is_null()
}

/// Non-empty string primitive or String wrapper
pub fn is_string(value: &JsValue) -> bool {
    if !value.is_truthy() {
        return false;
    }
    value.type_of() == TypeOf::String || classify(value) == CategoryTag::String
}

/// Truthy value that is a number primitive, a Number wrapper, or converts
/// with `Number(value)` to a non-zero, non-NaN number (`"42"`, `true`,
/// `[5]`, a valid date after the epoch).
pub fn is_number(value: &JsValue) -> bool {
    if !value.is_truthy() {
        return false;
    }
    if value.type_of() == TypeOf::Number {
        return true;
    }
    let converted = value.to_number();
    (converted != 0.0 && !converted.is_nan()) || classify(value) == CategoryTag::Number
}

/// Array instance
pub fn is_array(value: &JsValue) -> bool {
    if !value.is_truthy() {
        return false;
    }
    value.type_of() == TypeOf::Object && classify(value) == CategoryTag::Array
}

/// The null marker
pub fn is_null(value: &JsValue) -> bool {
    value.type_of() == TypeOf::Object && classify(value) == CategoryTag::Null
}

/// Plain callable: ordinary, arrow or class functions.
///
/// Async and generator functions carry their own tags and are rejected.
pub fn is_function(value: &JsValue) -> bool {
    if !value.is_truthy() {
        return false;
    }
    value.type_of() == TypeOf::Function && classify(value) == CategoryTag::Function
}

/// Any object or function
pub fn is_object(value: &JsValue) -> bool {
    !value.is_nullish() && matches!(value.type_of(), TypeOf::Object | TypeOf::Function)
}

/// A Date instance, or a string that parses to a valid instant.
///
/// Invalid Date objects still count: only strings are parsed.
///
/// # Examples
///
/// ```
/// use js_value::JsValue;
/// use type_checks::is_date;
///
/// assert!(is_date(&JsValue::string("2022-1-21 12:24:11")));
/// assert!(is_date(&JsValue::date(f64::NAN)));
/// assert!(!is_date(&JsValue::string("yesterday")));
/// ```
pub fn is_date(value: &JsValue) -> bool {
    if is_string(value) {
        return value
            .string_content()
            .and_then(|text| parse_date(&text))
            .is_some();
    }
    is_object_like(value) && classify(value) == CategoryTag::Date
}

/// `true`, `false` or a Boolean wrapper
pub fn is_boolean(value: &JsValue) -> bool {
    matches!(value, JsValue::Boolean(_))
        || (is_object_like(value) && classify(value) == CategoryTag::Boolean)
}

/// The undefined marker
pub fn is_undefined(value: &JsValue) -> bool {
    value.is_undefined() || classify(value) == CategoryTag::Undefined
}

/// Map instance
pub fn is_map(value: &JsValue) -> bool {
    is_object_like(value) && classify(value) == CategoryTag::Map
}

/// Set instance
pub fn is_set(value: &JsValue) -> bool {
    is_object_like(value) && classify(value) == CategoryTag::Set
}

/// WeakMap instance
pub fn is_weak_map(value: &JsValue) -> bool {
    is_object_like(value) && classify(value) == CategoryTag::WeakMap
}

/// WeakSet instance
pub fn is_weak_set(value: &JsValue) -> bool {
    is_object_like(value) && classify(value) == CategoryTag::WeakSet
}

/// Symbol primitive or wrapper
pub fn is_symbol(value: &JsValue) -> bool {
    value.type_of() == TypeOf::Symbol
        || (is_object_like(value) && classify(value) == CategoryTag::Symbol)
}

/// Regular expression
pub fn is_reg_exp(value: &JsValue) -> bool {
    is_object_like(value) && classify(value) == CategoryTag::RegExp
}

/// Error instance, or any object with `Error.prototype` on its chain
pub fn is_error(value: &JsValue) -> bool {
    let Some(obj) = value.as_object().filter(|_| is_object_like(value)) else {
        return false;
    };
    classify(value) == CategoryTag::Error
        || realm::prototype_of("Error").is_some_and(|proto| obj.inherits_from(&proto))
}

/// Integer or floating-point typed array.
///
/// BigInt64Array and BigUint64Array fall outside the family.
pub fn is_typed_array(value: &JsValue) -> bool {
    is_object_like(value)
        && matches!(classify(value), CategoryTag::TypedArray(kind) if !kind.is_bigint())
}

/// Function `arguments` object
pub fn is_arguments(value: &JsValue) -> bool {
    is_object_like(value) && classify(value) == CategoryTag::Arguments
}

/// A number usable as a `length`: greater than -1 and at most
/// `Number.MAX_SAFE_INTEGER`.
pub fn is_length(value: &JsValue) -> bool {
    matches!(value, JsValue::Number(n) if *n > -1.0 && *n <= MAX_SAFE_INTEGER)
}

/// Not nullish, not callable, and carrying a valid `length`
pub fn is_array_like(value: &JsValue) -> bool {
    !value.is_nullish() && value.type_of() != TypeOf::Function && is_length(&value.get_str("length"))
}

/// Plain object whose `nodeType` loosely equals 1 (element node)
pub fn is_element(value: &JsValue) -> bool {
    is_object_like(value)
        && is_plain_object(value)
        && value.get_str("nodeType").loosely_equals_number(ELEMENT_NODE)
}
