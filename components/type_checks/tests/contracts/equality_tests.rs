//! Contract tests for structural equality

use js_value::JsValue;
use type_checks::{compare, is_equal, CompareError, CompareOptions};

fn nested() -> JsValue {
    JsValue::object_from([
        ("a", JsValue::number(1.0)),
        ("b", JsValue::object_from([("c", JsValue::number(2.0))])),
    ])
}

mod is_equal_contract_tests {
    use super::*;

    #[test]
    fn test_nested_objects_are_equal() {
        assert!(is_equal(&nested(), &nested()));
    }

    #[test]
    fn test_extra_key_is_unequal() {
        let a = JsValue::object_from([("a", JsValue::number(1.0))]);
        let b = JsValue::object_from([("a", JsValue::number(1.0)), ("b", JsValue::number(2.0))]);
        assert!(!is_equal(&a, &b));
    }

    #[test]
    fn test_primitives_are_never_equal() {
        assert!(!is_equal(&JsValue::number(5.0), &JsValue::number(5.0)));
        assert!(!is_equal(&JsValue::string("x"), &JsValue::string("x")));
    }

    #[test]
    fn test_nested_difference() {
        let other = JsValue::object_from([
            ("a", JsValue::number(1.0)),
            ("b", JsValue::object_from([("c", JsValue::number(3.0))])),
        ]);
        assert!(!is_equal(&nested(), &other));
    }
}

mod compare_contract_tests {
    use super::*;

    #[test]
    fn test_options_from_json() {
        let options: CompareOptions =
            serde_json::from_value(serde_json::json!({"max_depth": 0, "detect_cycles": true}))
                .unwrap();
        assert_eq!(options.max_depth, Some(0));
        assert!(options.detect_cycles);
        assert!(!options.symmetric);
        assert_eq!(
            compare(&nested(), &nested(), &options),
            Err(CompareError::DepthExceeded { max_depth: 0 })
        );
    }

    #[test]
    fn test_guarded_compare_agrees_on_acyclic_input() {
        assert_eq!(compare(&nested(), &nested(), &CompareOptions::guarded()), Ok(true));
    }
}
