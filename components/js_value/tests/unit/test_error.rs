//! Unit tests for JsError and ErrorKind

use js_value::{ErrorKind, JsError, JsValue, TypedArrayKind};

#[cfg(test)]
mod error_kind_tests {
    use super::*;

    #[test]
    fn test_error_kind_names_match_constructors() {
        for kind in ErrorKind::ALL {
            assert_eq!(kind.to_string(), kind.name());
            assert!(js_value::realm::constructor_of(kind.name()).is_some());
        }
    }

    #[test]
    fn test_error_kind_equality() {
        assert_eq!(ErrorKind::TypeError, ErrorKind::TypeError);
        assert_ne!(ErrorKind::TypeError, ErrorKind::RangeError);
    }
}

#[cfg(test)]
mod js_error_tests {
    use super::*;

    #[test]
    fn test_js_error_creation() {
        let error = JsError::new(ErrorKind::EvalError, "test");
        assert_eq!(error.kind, ErrorKind::EvalError);
        assert_eq!(error.message, "test");
    }

    #[test]
    fn test_js_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        let error = JsError::syntax_error("bad");
        assert_error(&error);
        assert_eq!(error.to_string(), "SyntaxError: bad");
    }

    #[test]
    fn test_invalid_regexp_is_syntax_error() {
        let err = JsValue::regexp("[", "").unwrap_err();
        assert_eq!(err.kind, ErrorKind::SyntaxError);
        assert!(err.message.contains("Invalid regular expression"));
    }

    #[test]
    fn test_invalid_regexp_flags() {
        let err = JsValue::regexp("a", "uv").unwrap_err();
        assert_eq!(err.kind, ErrorKind::SyntaxError);
    }

    #[test]
    fn test_new_on_non_constructor_is_type_error() {
        let err = JsValue::construct(&JsValue::async_function("f")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::TypeError);
        let err = JsValue::construct(&JsValue::Undefined).unwrap_err();
        assert_eq!(err.message, "undefined is not a constructor");
    }

    #[test]
    fn test_oversized_typed_array_is_range_error() {
        let err =
            JsValue::typed_array_with_length(TypedArrayKind::Int32, 1 << 30).unwrap_err();
        assert_eq!(err.kind, ErrorKind::RangeError);
    }
}
