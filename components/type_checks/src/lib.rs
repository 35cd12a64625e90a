//! Runtime value classification for host values.
//!
//! Answers "what kind of value is this?", "is it empty?", "does this key
//! exist on it?" and "are these two values structurally equal?" for
//! [`js_value::JsValue`], without relying on `typeof`, which reports
//! arrays, dates and regular expressions alike as `"object"`.
//!
//! # Overview
//!
//! - [`classify`] - Canonical [`CategoryTag`] of any value
//! - Predicates - [`is_string`], [`is_map`], [`is_typed_array`], ...
//! - [`is_plain_object`] / [`is_prototype`] - Prototype-chain checks
//! - [`is_empty`] - Category-aware emptiness
//! - [`is_key_exist`] - Category-aware key lookup
//! - [`is_equal`] / [`compare`] - Structural equality
//!
//! Every function is pure: arguments are only read, and nothing is
//! retained after a call returns.
//!
//! # Examples
//!
//! ```
//! use js_value::JsValue;
//! use type_checks::{classify, is_array, is_empty, CategoryTag};
//!
//! let list = JsValue::array();
//! assert_eq!(classify(&list), CategoryTag::Array);
//! assert!(is_array(&list));
//! assert!(is_empty(&list));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod empty;
mod equal;
mod error;
mod key_exist;
mod options;
mod predicates;
mod prototype;
mod tag;

pub use empty::is_empty;
pub use equal::{compare, is_equal};
pub use error::CompareError;
pub use key_exist::is_key_exist;
pub use options::{CompareOptions, DEFAULT_MAX_DEPTH};
pub use predicates::{
    is_arguments, is_array, is_array_like, is_boolean, is_date, is_element, is_error,
    is_function, is_length, is_map, is_null, is_number, is_object, is_object_like, is_reg_exp,
    is_set, is_string, is_symbol, is_typed_array, is_undefined, is_weak_map, is_weak_set,
};
pub use prototype::{is_plain_object, is_prototype};
pub use tag::{classify, CategoryTag};
