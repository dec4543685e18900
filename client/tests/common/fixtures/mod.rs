//! Reusable test utilities: a mock agent bank API server and client builders.

// Allow unused code in test fixtures - they are utilities shared across test files
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_api;

pub use mock_api::MockApiServer;

/// API key every mock-backed test client is configured with.
pub const TEST_API_KEY: &str = "test-key";

/// Initialize tracing output for a test binary; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
