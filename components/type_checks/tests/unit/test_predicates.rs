//! Unit tests for the category predicates

use js_value::{JsValue, TypedArrayKind};
use type_checks::*;

#[cfg(test)]
mod primitive_predicate_tests {
    use super::*;

    #[test]
    fn test_is_string() {
        assert!(!is_string(&JsValue::string("")));
        assert!(is_string(&JsValue::string("a")));
        assert!(is_string(&JsValue::boxed(&JsValue::string("a"))));
        assert!(!is_string(&JsValue::number(1.0)));
        assert!(!is_string(&JsValue::array_from(vec![JsValue::string("a")])));
    }

    #[test]
    fn test_is_number() {
        assert!(!is_number(&JsValue::number(0.0)));
        assert!(is_number(&JsValue::number(42.0)));
        assert!(is_number(&JsValue::number(f64::INFINITY)));
    }

    #[test]
    fn test_is_number_accepts_numeric_conversions() {
        assert!(is_number(&JsValue::string("42")));
        assert!(is_number(&JsValue::boolean(true)));
        assert!(is_number(&JsValue::bigint(42)));
        assert!(is_number(&JsValue::array_from(vec![JsValue::number(5.0)])));
        assert!(is_number(&JsValue::date(1000.0)));
        assert!(is_number(&JsValue::boxed(&JsValue::number(0.0))));
        assert!(!is_number(&JsValue::string("abc")));
        assert!(!is_number(&JsValue::string("0")));
        assert!(!is_number(&JsValue::boolean(false)));
        assert!(!is_number(&JsValue::date(f64::NAN)));
        assert!(!is_number(&JsValue::object()));
        assert!(!is_number(&JsValue::array_from(vec![1.0.into(), 2.0.into()])));
        assert!(!is_number(&JsValue::symbol(Some("n"))));
    }

    #[test]
    fn test_is_boolean() {
        assert!(is_boolean(&JsValue::boolean(false)));
        assert!(is_boolean(&JsValue::boolean(true)));
        assert!(!is_boolean(&JsValue::number(1.0)));
        assert!(!is_boolean(&JsValue::string("true")));
    }

    #[test]
    fn test_is_symbol() {
        assert!(is_symbol(&JsValue::symbol(Some("s"))));
        assert!(is_symbol(&JsValue::boxed(&JsValue::symbol(None))));
        assert!(!is_symbol(&JsValue::string("Symbol(s)")));
    }

    #[test]
    fn test_is_object() {
        assert!(is_object(&JsValue::object()));
        assert!(is_object(&JsValue::function("f")));
        assert!(is_object(&JsValue::array()));
        assert!(!is_object(&JsValue::Null));
        assert!(!is_object(&JsValue::Undefined));
        assert!(!is_object(&JsValue::string("s")));
    }

    #[test]
    fn test_is_object_like() {
        assert!(is_object_like(&JsValue::array()));
        assert!(!is_object_like(&JsValue::function("f")));
        assert!(!is_object_like(&JsValue::Null));
    }
}

#[cfg(test)]
mod object_predicate_tests {
    use super::*;

    #[test]
    fn test_is_array() {
        assert!(is_array(&JsValue::array()));
        assert!(!is_array(&JsValue::object()));
        assert!(!is_array(&JsValue::arguments(vec![])));
        assert!(!is_array(&JsValue::typed_array(TypedArrayKind::Uint8, &[1.0])));
    }

    #[test]
    fn test_collections() {
        assert!(is_map(&JsValue::map()));
        assert!(!is_map(&JsValue::weak_map()));
        assert!(is_weak_map(&JsValue::weak_map()));
        assert!(is_set(&JsValue::set_collection()));
        assert!(!is_set(&JsValue::weak_set()));
        assert!(is_weak_set(&JsValue::weak_set()));
        assert!(!is_map(&JsValue::object()));
    }

    #[test]
    fn test_is_reg_exp() {
        assert!(is_reg_exp(&JsValue::regexp("^a$", "gm").unwrap()));
        assert!(!is_reg_exp(&JsValue::string("/a/")));
    }

    #[test]
    fn test_is_arguments() {
        assert!(is_arguments(&JsValue::arguments(vec![JsValue::Null])));
        assert!(!is_arguments(&JsValue::array()));
    }

    #[test]
    fn test_is_array_like() {
        assert!(is_array_like(&JsValue::string("")));
        assert!(is_array_like(&JsValue::array()));
        assert!(is_array_like(&JsValue::object_from([("length", JsValue::number(3.0))])));
        assert!(!is_array_like(&JsValue::object_from([("length", JsValue::number(-1.0))])));
        assert!(!is_array_like(&JsValue::function("f")));
        assert!(!is_array_like(&JsValue::Null));
        assert!(!is_array_like(&JsValue::number(3.0)));
    }
}

#[cfg(test)]
mod date_predicate_tests {
    use super::*;

    #[test]
    fn test_date_objects() {
        assert!(is_date(&JsValue::date(0.0)));
        assert!(is_date(&JsValue::date_now()));
        assert!(is_date(&JsValue::date_from_str("not a date")));
        assert!(!is_date(&JsValue::number(0.0)));
        assert!(!is_date(&JsValue::object()));
    }

    #[test]
    fn test_date_strings() {
        assert!(is_date(&JsValue::string("2022-1-21 12:24:11")));
        assert!(is_date(&JsValue::string("2024-02-29T10:00:00Z")));
        assert!(is_date(&JsValue::boxed(&JsValue::string("2024-02-29"))));
        assert!(!is_date(&JsValue::string("2023-02-30")));
        assert!(!is_date(&JsValue::string("")));
        assert!(!is_date(&JsValue::string("soon")));
    }
}
