//! Comparison options

use serde::{Deserialize, Serialize};

/// Depth limit used by [`CompareOptions::guarded`]
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration for [`compare`](crate::compare).
///
/// The default reproduces [`is_equal`](crate::is_equal): unlimited depth,
/// no cycle tracking, keys enumerated from the left operand only.
///
/// Options can be loaded from JSON; missing fields take their defaults.
///
/// ```
/// use type_checks::CompareOptions;
///
/// let options: CompareOptions = serde_json::from_str(r#"{"symmetric": true}"#).unwrap();
/// assert!(options.symmetric);
/// assert_eq!(options.max_depth, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    /// Maximum nesting depth of recursive comparison (None = unlimited)
    pub max_depth: Option<usize>,
    /// Fail with a cycle error when a pair of objects is revisited
    pub detect_cycles: bool,
    /// Also require every key of the right operand to be owned by the left
    pub symmetric: bool,
}

impl CompareOptions {
    /// Same as `CompareOptions::default()`
    pub fn new() -> Self {
        Self::default()
    }

    /// Depth-limited, cycle-detecting comparison
    pub fn guarded() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            detect_cycles: true,
            symmetric: false,
        }
    }

    /// Set the depth limit
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Enable or disable cycle detection
    pub fn with_cycle_detection(mut self, enabled: bool) -> Self {
        self.detect_cycles = enabled;
        self
    }

    /// Enable or disable the symmetric key check
    pub fn with_symmetry(mut self, enabled: bool) -> Self {
        self.symmetric = enabled;
        self
    }
}
