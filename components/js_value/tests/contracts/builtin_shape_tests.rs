//! Contract tests for built-in instances and their prototypes

use js_value::{realm, ErrorKind, JsValue, ObjectClass, TypedArrayKind};

mod builtin_instance_tests {
    use super::*;

    fn assert_instance_of(value: &JsValue, ctor: &str) {
        let proto = realm::prototype_of(ctor).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.inherits_from(&proto), "{} should inherit {}.prototype", value, ctor);
    }

    #[test]
    fn test_every_builtin_links_to_its_constructor() {
        assert_instance_of(&JsValue::array(), "Array");
        assert_instance_of(&JsValue::date(0.0), "Date");
        assert_instance_of(&JsValue::regexp("x", "g").unwrap(), "RegExp");
        assert_instance_of(&JsValue::map(), "Map");
        assert_instance_of(&JsValue::set_collection(), "Set");
        assert_instance_of(&JsValue::weak_map(), "WeakMap");
        assert_instance_of(&JsValue::weak_set(), "WeakSet");
        assert_instance_of(&JsValue::boxed(&JsValue::number(1.0)), "Number");
    }

    #[test]
    fn test_error_instances_inherit_error_prototype() {
        for kind in ErrorKind::ALL {
            let err = JsValue::error(kind, "boom");
            assert_instance_of(&err, kind.name());
            assert_instance_of(&err, "Error");
            assert!(matches!(&*err.as_object().unwrap().class(), ObjectClass::Error(k) if *k == kind));
        }
    }

    #[test]
    fn test_error_message_is_not_enumerable() {
        let err = JsValue::error(ErrorKind::TypeError, "boom");
        assert!(err.own_keys().is_empty());
        assert!(err.has_own("message"));
        assert_eq!(err.to_string(), "TypeError: boom");
    }

    #[test]
    fn test_typed_arrays_have_own_constructor() {
        for kind in TypedArrayKind::ALL {
            let arr = JsValue::typed_array(kind, &[1.0, 2.0]);
            assert_instance_of(&arr, kind.name());
            assert_eq!(arr.as_object().unwrap().class_name(), kind.name());
            assert_eq!(arr.get_str("length"), JsValue::number(2.0));
        }
    }

    #[test]
    fn test_class_extends_builtin() {
        let base = realm::constructor_of("Map").map(JsValue::Object).unwrap();
        let derived = JsValue::class("Registry", Some(&base)).unwrap();
        let instance = JsValue::construct(&derived).unwrap();
        assert_instance_of(&instance, "Map");
        // instances built through construct() are ordinary objects
        assert_eq!(instance.as_object().unwrap().class_name(), "Object");
    }

    #[test]
    fn test_class_extends_non_constructor() {
        let err = JsValue::class("Bad", Some(&JsValue::number(1.0))).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeError);
    }
}
