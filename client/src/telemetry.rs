//! Tracing subscriber set-up for binaries.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the JSON subscriber, filtered by `RUST_LOG`.
///
/// Logs go to stderr so command output on stdout stays machine-readable.
/// A second call, or one made after another subscriber was installed, is a
/// no-op that logs a warning.
pub fn init() {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .try_init()
    {
        tracing::warn!(%error, "tracing subscriber already installed");
    }
}
