//! Error types for sampcef-bridge.
//!
//! Only the bridge's own registration and lookup paths have an error
//! taxonomy. A failure raised by a native handler is not translated:
//! it travels through [`BridgeError::Native`] unchanged.

use thiserror::Error;

/// Errors surfaced by the namespace bridge.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// A native binding name is already declared by a different extension.
    #[error("native binding already declared: {0}")]
    DuplicateBinding(String),

    /// Dispatch targeted a native binding that was never declared.
    #[error("unknown native binding: {0}")]
    UnknownBinding(String),

    /// No namespace with this name exists in the global.
    #[error("unknown namespace: {0}")]
    UnknownNamespace(String),

    /// The namespace has no entry with this name.
    #[error("no such namespace entry: {0}")]
    UnknownEntry(String),

    /// A plain value entry was called like a function.
    #[error("namespace entry is not callable: {0}")]
    NotCallable(String),

    /// Failure raised by a native handler, forwarded unchanged.
    #[error(transparent)]
    Native(#[from] anyhow::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;
