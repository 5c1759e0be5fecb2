// crates/foodframe-core/src/error.rs

use thiserror::Error;

/// Errors surfaced by frame collaborators and configuration.
///
/// None of these are fatal to the widget: the controller degrades to
/// in-memory state or to the default list and keeps going.
#[derive(Debug, Error)]
pub enum FrameError {
    /// The key-value storage collaborator failed or is unavailable.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The host context query rejected.
    #[error("Host context error: {0}")]
    HostContext(String),

    /// Configuration could not be applied.
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = FrameError> = std::result::Result<T, E>;
