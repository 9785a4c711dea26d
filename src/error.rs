//! Error types for post construction and output

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::post::PostKind;

/// Errors raised while building, displaying, or reporting posts
#[derive(Debug, Error)]
pub enum PostError {
    /// A draft lacks a field its variant requires
    #[error("{kind} post is missing required field `{field}`")]
    MissingField { kind: PostKind, field: &'static str },

    /// Writing a display or report line failed
    #[error("failed to write post output: {0}")]
    Output(#[from] io::Error),

    /// A drafts file could not be read
    #[error("failed to read drafts from {path:?}: {source}")]
    Load { path: PathBuf, source: io::Error },

    /// Drafts were not valid JSON or did not match the draft schema
    #[error("failed to parse drafts: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for post operations
pub type Result<T> = std::result::Result<T, PostError>;
