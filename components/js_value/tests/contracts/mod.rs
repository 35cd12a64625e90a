//! Contract tests for js_value component
//!
//! These tests pin the public value model that type checks build on:
//! prototype shapes, key order and built-in enumerability.

mod builtin_shape_tests;
mod key_order_tests;
