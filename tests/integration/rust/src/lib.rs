//! Integration test suite for value classification
//!
//! This crate provides integration tests that verify the value model and
//! the classification library work together across component boundaries.

use js_value::JsValue;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Re-export components for test convenience
pub mod components {
    pub use js_value;
    pub use type_checks;
}

/// Install a test-friendly subscriber honouring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer().without_time())
        .try_init();
}

/// Build a value from JSON text, panicking on malformed fixtures
pub fn fixture(json: &str) -> JsValue {
    match JsValue::parse_json(json) {
        Ok(value) => value,
        Err(err) => panic!("invalid fixture {}: {}", json, err),
    }
}
