//! Error types for value construction.
//!
//! The kinds mirror the host's built-in error constructors. They are used
//! both for failures reported to Rust callers and as the internal class
//! data of error objects.

use std::fmt;

use thiserror::Error;

/// The kind of host error.
///
/// These correspond to the host's built-in error constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Generic Error
    Error,
    /// Type error (e.g., calling a non-function)
    TypeError,
    /// Reference to an undefined variable
    ReferenceError,
    /// Value out of allowed range
    RangeError,
    /// Syntax error (also raised for invalid regular expressions)
    SyntaxError,
    /// Error in eval() function
    EvalError,
    /// Error in URI handling functions
    URIError,
    /// Multiple errors combined
    AggregateError,
}

impl ErrorKind {
    /// Every kind, base `Error` first.
    pub const ALL: [ErrorKind; 8] = [
        ErrorKind::Error,
        ErrorKind::TypeError,
        ErrorKind::ReferenceError,
        ErrorKind::RangeError,
        ErrorKind::SyntaxError,
        ErrorKind::EvalError,
        ErrorKind::URIError,
        ErrorKind::AggregateError,
    ];

    /// Constructor name of this kind
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Error => "Error",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::EvalError => "EvalError",
            ErrorKind::URIError => "URIError",
            ErrorKind::AggregateError => "AggregateError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An error raised while building or mutating a value.
///
/// # Examples
///
/// ```
/// use js_value::{ErrorKind, JsError};
///
/// let error = JsError::type_error("undefined is not a constructor");
/// assert_eq!(error.kind, ErrorKind::TypeError);
/// assert_eq!(error.to_string(), "TypeError: undefined is not a constructor");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct JsError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl JsError {
    /// Create an error of the given kind
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        JsError {
            kind,
            message: message.into(),
        }
    }

    /// Create a TypeError
    pub fn type_error(message: impl Into<String>) -> Self {
        JsError::new(ErrorKind::TypeError, message)
    }

    /// Create a SyntaxError
    pub fn syntax_error(message: impl Into<String>) -> Self {
        JsError::new(ErrorKind::SyntaxError, message)
    }

    /// Create a RangeError
    pub fn range_error(message: impl Into<String>) -> Self {
        JsError::new(ErrorKind::RangeError, message)
    }
}

/// Result type for value construction
pub type JsResult<T> = Result<T, JsError>;
