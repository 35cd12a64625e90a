//! Symbol primitive values
//!
//! Symbols are unique, immutable primitive values that can be used as
//! property keys. Identity is a process-wide counter, so two symbols with
//! the same description are still distinct.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique symbol IDs
static SYMBOL_COUNTER: AtomicU64 = AtomicU64::new(1);

/// A host Symbol value
///
/// Each symbol has a unique internal ID and an optional description for debugging.
#[derive(Debug, Clone)]
pub struct SymbolValue {
    id: u64,
    description: Option<String>,
}

impl SymbolValue {
    /// Create a new unique symbol with optional description
    pub fn new(description: Option<&str>) -> Self {
        let id = SYMBOL_COUNTER.fetch_add(1, Ordering::SeqCst);
        SymbolValue {
            id,
            description: description.map(str::to_string),
        }
    }

    /// Get the unique ID of this symbol
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the description of this symbol
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// Renders `Symbol(description)`, or `Symbol()` without a description.
impl fmt::Display for SymbolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "Symbol({})", desc),
            None => write!(f, "Symbol()"),
        }
    }
}

impl PartialEq for SymbolValue {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SymbolValue {}

impl Hash for SymbolValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
