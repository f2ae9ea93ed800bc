//! Error types for the chat widget.
//!
//! The widget's public operations never hard-fail a chat turn: collaborator
//! lookups that come up empty are logged and dropped at the call site. The
//! error type here exists for the internal seams and for the fallible
//! loading paths (catalog/config from JSON).

use thiserror::Error;

use crate::surface::NodeId;

/// Result type alias for chat widget operations.
pub type Result<T> = std::result::Result<T, ChatError>;

/// Main error type for the chat widget.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no node {id} in transcript")]
    NodeNotFound { id: NodeId },

    #[error("node {id} is not a {expected}")]
    NodeKindMismatch { id: NodeId, expected: &'static str },
}
