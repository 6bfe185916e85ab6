// Error types for chord templates and table configuration.
//
// `HarmonyError` covers everything that can go wrong before a search starts:
// bad note names in templates and unreadable or inconsistent graph files.
// The search itself cannot fail.

use harmony_lattice::NoteNameError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarmonyError {
    #[error(transparent)]
    Note(#[from] NoteNameError),
    #[error("chord template '{0}' has no notes")]
    EmptyTemplate(String),
    #[error("transition refers to unknown template '{0}'")]
    UnknownTemplate(String),
    #[error("unknown interval name '{0}'")]
    UnknownInterval(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid table JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HarmonyError>;
