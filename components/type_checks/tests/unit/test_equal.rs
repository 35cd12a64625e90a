//! Unit tests for is_equal and compare

use js_value::JsValue;
use type_checks::{compare, is_equal, CompareError, CompareOptions};

fn record(name: &str, age: f64) -> JsValue {
    JsValue::object_from([
        ("name", JsValue::string(name)),
        ("age", JsValue::number(age)),
        ("tags", JsValue::object_from([("admin", JsValue::boolean(false))])),
    ])
}

#[cfg(test)]
mod is_equal_tests {
    use super::*;

    #[test]
    fn test_equal_records() {
        assert!(is_equal(&record("ada", 36.0), &record("ada", 36.0)));
        assert!(!is_equal(&record("ada", 36.0), &record("ada", 37.0)));
    }

    #[test]
    fn test_same_keys_different_order() {
        let a = JsValue::object_from([("x", JsValue::number(1.0)), ("y", JsValue::number(2.0))]);
        let b = JsValue::object_from([("y", JsValue::number(2.0)), ("x", JsValue::number(1.0))]);
        assert!(is_equal(&a, &b));
    }

    #[test]
    fn test_functions_compare_by_identity() {
        let f = JsValue::function("f");
        let a = JsValue::object_from([("cb", f.clone())]);
        let b = JsValue::object_from([("cb", f)]);
        let c = JsValue::object_from([("cb", JsValue::function("f"))]);
        assert!(is_equal(&a, &b));
        assert!(!is_equal(&a, &c));
    }

    #[test]
    fn test_undefined_valued_keys() {
        let a = JsValue::object_from([("k", JsValue::Undefined)]);
        let b = JsValue::object_from([("k", JsValue::Undefined)]);
        let c = JsValue::object_from([("other", JsValue::Undefined)]);
        assert!(is_equal(&a, &b));
        assert!(!is_equal(&a, &c));
    }

    #[test]
    fn test_same_object_is_equal_to_itself() {
        let a = record("ada", 36.0);
        assert!(is_equal(&a, &a));
    }

    #[test]
    fn test_empty_containers() {
        assert!(is_equal(&JsValue::object(), &JsValue::object()));
        assert!(is_equal(&JsValue::array(), &JsValue::object()));
        assert!(is_equal(&JsValue::map(), &JsValue::set_collection()));
    }
}

#[cfg(test)]
mod compare_tests {
    use super::*;

    #[test]
    fn test_default_options_match_is_equal() {
        let pairs = [
            (record("a", 1.0), record("a", 1.0)),
            (record("a", 1.0), record("b", 1.0)),
            (JsValue::number(1.0), JsValue::number(1.0)),
        ];
        for (a, b) in &pairs {
            assert_eq!(compare(a, b, &CompareOptions::default()), Ok(is_equal(a, b)));
        }
    }

    #[test]
    fn test_guarded_detects_mutual_cycle() {
        let a = JsValue::object();
        let b = JsValue::object();
        a.set("peer", b.clone());
        b.set("peer", a.clone());
        let result = compare(&a, &b, &CompareOptions::guarded());
        assert_eq!(result, Err(CompareError::Cycle));
    }

    #[test]
    fn test_depth_limit_without_cycle_detection() {
        let a = JsValue::object();
        a.set("self", a.clone());
        let options = CompareOptions::new().with_max_depth(8);
        assert_eq!(
            compare(&a, &a, &options),
            Err(CompareError::DepthExceeded { max_depth: 8 })
        );
    }

    #[test]
    fn test_flat_values_never_hit_the_limit() {
        let options = CompareOptions::new().with_max_depth(0);
        let a = JsValue::object_from([("n", JsValue::number(1.0))]);
        let b = JsValue::object_from([("n", JsValue::number(1.0))]);
        assert_eq!(compare(&a, &b, &options), Ok(true));
    }
}
