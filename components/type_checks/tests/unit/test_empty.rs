//! Unit tests for is_empty

use js_value::JsValue;
use type_checks::{is_empty, is_key_exist};

#[cfg(test)]
mod is_empty_tests {
    use super::*;

    #[test]
    fn test_arrays() {
        assert!(is_empty(&JsValue::array()));
        assert!(!is_empty(&JsValue::array_from(vec![JsValue::number(1.0)])));
    }

    #[test]
    fn test_array_written_past_end() {
        let arr = JsValue::array();
        arr.set(3u32, JsValue::number(1.0));
        assert_eq!(arr.get_str("length"), JsValue::number(4.0));
        assert!(!is_empty(&arr));
        assert!(is_key_exist(&arr, &JsValue::number(3.0)));
        assert!(!is_key_exist(&arr, &JsValue::number(0.0)));
    }

    #[test]
    fn test_strings() {
        assert!(is_empty(&JsValue::string("")));
        assert!(!is_empty(&JsValue::string(" ")));
        assert!(is_empty(&JsValue::boxed(&JsValue::string(""))));
        assert!(!is_empty(&JsValue::boxed(&JsValue::string("x"))));
    }

    #[test]
    fn test_objects() {
        assert!(is_empty(&JsValue::object()));
        assert!(!is_empty(&JsValue::object_from([("k", JsValue::Undefined)])));
        assert!(is_empty(&JsValue::create(&JsValue::Null).unwrap()));
    }

    #[test]
    fn test_length_property_alone_does_not_decide() {
        let fake = JsValue::object_from([("length", JsValue::number(0.0))]);
        assert!(!is_empty(&fake));
    }

    #[test]
    fn test_maps() {
        assert!(is_empty(&JsValue::map()));
        let map = JsValue::map_from([(JsValue::number(1.0), JsValue::string("x"))]);
        assert!(!is_empty(&map));
    }

    #[test]
    fn test_functions_without_own_keys() {
        assert!(is_empty(&JsValue::function("f")));
        let func = JsValue::function("g");
        func.set("meta", JsValue::boolean(true));
        assert!(!is_empty(&func));
    }
}
