//! Unit tests for prototype links and key enumeration

use js_value::{realm, JsValue};

#[cfg(test)]
mod prototype_chain_tests {
    use super::*;

    #[test]
    fn test_literal_inherits_object_prototype() {
        let obj = JsValue::object();
        let proto = obj.prototype().unwrap();
        assert!(proto.ptr_eq(&realm::object_prototype()));
        assert!(proto.prototype().is_none());
    }

    #[test]
    fn test_array_chain() {
        let arr = JsValue::array();
        let array_proto = arr.prototype().unwrap();
        assert!(array_proto.ptr_eq(&realm::prototype_of("Array").unwrap()));
        assert!(array_proto.prototype().unwrap().ptr_eq(&realm::object_prototype()));
    }

    #[test]
    fn test_create_with_explicit_prototype() {
        let parent = JsValue::object_from([("inherited", JsValue::number(1.0))]);
        let child = JsValue::create(&parent).unwrap();
        child.set("own", JsValue::number(2.0));
        assert_eq!(child.own_keys(), vec!["own"]);
        assert_eq!(child.for_in_keys(), vec!["own", "inherited"]);
        assert_eq!(child.get_str("inherited"), JsValue::number(1.0));
        assert!(!child.has_own("inherited"));
    }

    #[test]
    fn test_builtin_members_are_not_enumerable() {
        let obj = JsValue::object();
        assert!(obj.for_in_keys().is_empty());
        let func = JsValue::function("f");
        assert!(func.own_keys().is_empty());
        assert!(func.get_str("prototype").as_object().is_some());
    }

    #[test]
    fn test_function_prototype_backlink() {
        let func = JsValue::function("Point");
        let proto = func.get_str("prototype");
        assert_eq!(proto.get_str("constructor"), func);
        assert!(JsValue::arrow_function("g").get_str("prototype").is_undefined());
    }
}
