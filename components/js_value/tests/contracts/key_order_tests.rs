//! Contract tests for own-key ordering and enumeration

use js_value::JsValue;

mod key_order_tests {
    use super::*;

    #[test]
    fn test_integer_keys_come_first_ascending() {
        let obj = JsValue::object();
        obj.set("b", JsValue::number(1.0));
        obj.set("10", JsValue::number(2.0));
        obj.set("a", JsValue::number(3.0));
        obj.set("2", JsValue::number(4.0));
        assert_eq!(obj.own_keys(), vec!["2", "10", "b", "a"]);
    }

    #[test]
    fn test_non_canonical_numeric_keys_keep_insertion_order() {
        let obj = JsValue::object();
        obj.set("01", JsValue::Null);
        obj.set("1", JsValue::Null);
        obj.set("-1", JsValue::Null);
        assert_eq!(obj.own_keys(), vec!["1", "01", "-1"]);
    }

    #[test]
    fn test_array_keys_are_indices_then_extras() {
        let arr = JsValue::array_from(vec![JsValue::string("x"), JsValue::string("y")]);
        arr.set("extra", JsValue::Null);
        assert_eq!(arr.own_keys(), vec!["0", "1", "extra"]);
        assert!(arr.has_own("length"));
    }

    #[test]
    fn test_string_primitive_keys_are_code_unit_indices() {
        assert_eq!(JsValue::string("a\u{1F600}").own_keys(), vec!["0", "1", "2"]);
        assert!(JsValue::string("").own_keys().is_empty());
    }

    #[test]
    fn test_json_object_keeps_document_order() {
        let value = JsValue::parse_json(r#"{"z": 1, "a": {"k": [true]}}"#).unwrap();
        assert_eq!(value.own_keys(), vec!["z", "a"]);
        assert_eq!(value.get_str("a").get_str("k").get_str("0"), JsValue::boolean(true));
    }
}
