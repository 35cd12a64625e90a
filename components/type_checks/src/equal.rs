//! Structural equality
//!
//! Two object operands are equal when they have the same number of own
//! enumerable keys and every `for…in` key of the left operand is owned by
//! the right one with an equal value. Values tagged `Object` on either
//! side are compared recursively; everything else (arrays and functions
//! included) must be strictly equal.
//!
//! [`is_equal`] never tracks visited objects, so a cyclic structure
//! recurses without bound. [`compare`] offers the same algorithm with a
//! depth limit, cycle detection and a symmetric key check.

use js_value::{JsObject, JsValue};
use tracing::{debug, trace};

use crate::error::CompareError;
use crate::options::CompareOptions;
use crate::predicates::is_object;
use crate::tag::{classify, CategoryTag};

/// Structural equality of two objects.
///
/// Non-object operands are never equal, even when they are the same
/// primitive.
///
/// # Examples
///
/// ```
/// use js_value::JsValue;
/// use type_checks::is_equal;
///
/// let nested = || JsValue::object_from([("c", JsValue::number(2.0))]);
/// let a = JsValue::object_from([("a", JsValue::number(1.0)), ("b", nested())]);
/// let b = JsValue::object_from([("a", JsValue::number(1.0)), ("b", nested())]);
/// assert!(is_equal(&a, &b));
///
/// assert!(!is_equal(&JsValue::number(5.0), &JsValue::number(5.0)));
/// ```
pub fn is_equal(a: &JsValue, b: &JsValue) -> bool {
    // unguarded options never fail
    Comparer::new(CompareOptions::default())
        .equal(a, b, 0)
        .unwrap_or(false)
}

/// Structural equality under `options`.
///
/// With default options the answer is the same as [`is_equal`].
pub fn compare(a: &JsValue, b: &JsValue, options: &CompareOptions) -> Result<bool, CompareError> {
    let result = Comparer::new(*options).equal(a, b, 0);
    if let Err(err) = &result {
        debug!(%err, ?options, "structural comparison aborted");
    }
    result
}

struct Comparer {
    options: CompareOptions,
    /// Object pairs currently being compared, outermost first
    active: Vec<(usize, usize)>,
}

impl Comparer {
    fn new(options: CompareOptions) -> Self {
        Comparer {
            options,
            active: Vec::new(),
        }
    }

    fn equal(&mut self, a: &JsValue, b: &JsValue, depth: usize) -> Result<bool, CompareError> {
        if !is_object(a) || !is_object(b) {
            return Ok(false);
        }
        if a.own_keys().len() != b.own_keys().len() {
            return Ok(false);
        }
        if let Some(max_depth) = self.options.max_depth {
            if depth > max_depth {
                return Err(CompareError::DepthExceeded { max_depth });
            }
        }

        let pair = (identity(a), identity(b));
        if self.options.detect_cycles {
            if self.active.contains(&pair) {
                return Err(CompareError::Cycle);
            }
            self.active.push(pair);
        }

        let mut result = self.keys_match(a, b, depth);
        if self.options.symmetric && matches!(result, Ok(true)) {
            result = self.keys_match(b, a, depth);
        }

        if self.options.detect_cycles {
            self.active.pop();
        }
        result
    }

    /// Every `for…in` key of `from` is owned by `to` with an equal value
    fn keys_match(&mut self, from: &JsValue, to: &JsValue, depth: usize) -> Result<bool, CompareError> {
        for key in from.for_in_keys() {
            if !to.has_own(&key) {
                return Ok(false);
            }
            let left = from.get_str(&key);
            let right = to.get_str(&key);
            let same = if classify(&left) == CategoryTag::Object
                || classify(&right) == CategoryTag::Object
            {
                trace!(%key, depth, "comparing nested objects");
                self.equal(&left, &right, depth + 1)?
            } else {
                left.strict_equals(&right)
            };
            if !same {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

fn identity(value: &JsValue) -> usize {
    value.as_object().map_or(0, JsObject::id)
}
