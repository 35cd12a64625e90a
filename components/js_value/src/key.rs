//! Property keys.

use std::fmt;

use crate::symbol::SymbolValue;

/// A property key: either a string or a symbol.
///
/// Numeric keys are always canonicalised to their string form before they
/// reach an object, matching the host's `ToPropertyKey`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// String-keyed property (also used for array indices)
    String(String),
    /// Symbol-keyed property
    Symbol(SymbolValue),
}

impl PropertyKey {
    /// String form of the key, `None` for symbols
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyKey::String(s) => Some(s),
            PropertyKey::Symbol(_) => None,
        }
    }

    /// The key as an array index, if it is one.
    ///
    /// Only canonical decimal forms below `2^32 - 1` qualify, so `"01"`
    /// and `"-0"` are ordinary string keys.
    pub fn array_index(&self) -> Option<u32> {
        self.as_str().and_then(array_index)
    }
}

pub(crate) fn array_index(s: &str) -> Option<u32> {
    if s.is_empty() || (s.len() > 1 && s.starts_with('0')) {
        return None;
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok().filter(|&n| n != u32::MAX)
}

impl From<&str> for PropertyKey {
    fn from(s: &str) -> Self {
        PropertyKey::String(s.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(s: String) -> Self {
        PropertyKey::String(s)
    }
}

impl From<&String> for PropertyKey {
    fn from(s: &String) -> Self {
        PropertyKey::String(s.clone())
    }
}

impl From<SymbolValue> for PropertyKey {
    fn from(sym: SymbolValue) -> Self {
        PropertyKey::Symbol(sym)
    }
}

impl From<u32> for PropertyKey {
    fn from(index: u32) -> Self {
        PropertyKey::String(index.to_string())
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::String(s) => write!(f, "{}", s),
            PropertyKey::Symbol(sym) => write!(f, "{}", sym),
        }
    }
}
