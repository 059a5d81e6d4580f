#![forbid(unsafe_code)]

use osk_core::ConfigError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised while starting the resolution engine.
///
/// Press handling itself has no error path: stale notifications are ignored.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid timing configuration: {0}")]
    Config(#[from] ConfigError),
}
