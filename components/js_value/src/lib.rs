//! Host value model for runtime value classification.
//!
//! This crate provides the dynamically typed values the classification
//! library inspects: primitives, heap objects with an internal class,
//! ordered properties, and a `[[Prototype]]` link resolved against
//! per-thread intrinsics.
//!
//! # Overview
//!
//! - [`JsValue`] - Tagged representation of host values
//! - [`JsObject`] - Shared heap object with class, properties and prototype
//! - [`ObjectClass`] - Internal class of a heap object
//! - [`PropertyKey`] - String or symbol property key
//! - [`JsError`] - Errors raised while constructing values
//! - [`realm`] - Per-thread intrinsic constructors and prototypes
//!
//! # Examples
//!
//! ```
//! use js_value::{JsValue, TypeOf};
//!
//! let point = JsValue::object();
//! point.set("x", JsValue::number(1.0));
//!
//! assert_eq!(point.type_of(), TypeOf::Object);
//! assert_eq!(point.get_str("x"), JsValue::number(1.0));
//! assert!(point.get_str("constructor").is_callable());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod date;
mod error;
mod json;
mod key;
mod object;
pub mod realm;
mod symbol;
mod typed_array;
mod value;

pub use date::{parse_date, time_clip, MAX_TIME_MS};
pub use error::{ErrorKind, JsError, JsResult};
pub use key::PropertyKey;
pub use object::{FunctionData, FunctionKind, JsObject, ObjectClass, RegExpData};
pub use symbol::SymbolValue;
pub use typed_array::TypedArrayKind;
pub use value::{number_to_string, string_to_number, JsValue, TypeOf};
