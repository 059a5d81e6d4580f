#![forbid(unsafe_code)]

//! Logging glue.
//!
//! Crates in this workspace log through `tracing` directly. With
//! `tracing-json` a one-call JSON subscriber is available for production
//! hosts; the filter comes from `RUST_LOG` (default `warn`).
//!
//! ```rust,ignore
//! osk_core::logging::init_json_logging()?;
//! ```

/// Default filter directive when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a global JSON `tracing` subscriber.
///
/// Fails if a global subscriber is already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
}
