//! Tracing/logging setup shared by every process embedding the larder crates.

/// Environment-driven logging configuration.
pub mod config;

/// Subscriber installation.
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide logging from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    let _ = tracing::init_with(&ObservabilityConfig::from_env());
}

/// Initialize process-wide logging from an explicit configuration.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_with(config: &ObservabilityConfig) -> bool {
    tracing::init_with(config)
}
