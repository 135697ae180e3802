//! Typed error definitions for safe_trash.
//! Every variant renders to the plain text that lands in `MoveOutcome::errors`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrashError {
    #[error("Refusing to move protected path to Trash: {0}")]
    Refused(String),

    #[error("HOME is not set; cannot locate the Trash directory")]
    HomeUnset,

    #[error("Trash directory not found: {0}")]
    TrashDirMissing(PathBuf),

    #[error("Trash helper '{command}' exited with status {code}")]
    HelperExit { command: String, code: i32 },

    #[error("Trash helper '{0}' was terminated by a signal")]
    HelperSignal(String),

    #[error("Failed to run trash helper '{command}': {reason}")]
    HelperSpawn { command: String, reason: String },

    #[error("Failed to move {raw} to Trash: {reason}")]
    MoveFailed { raw: String, reason: String },

    #[error("Source has no file name: {0}")]
    NoFileName(PathBuf),
}

impl TrashError {
    /// Stable short tag used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            TrashError::Refused(_) => "refused",
            TrashError::HomeUnset | TrashError::TrashDirMissing(_) => "environment",
            TrashError::HelperExit { .. }
            | TrashError::HelperSignal(_)
            | TrashError::HelperSpawn { .. } => "helper",
            TrashError::MoveFailed { .. } | TrashError::NoFileName(_) => "move",
        }
    }
}
