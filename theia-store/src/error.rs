//! Error types and result definitions for local-storage access.

use std::path::PathBuf;

use thiserror::Error;

use crate::keys::StoreKey;

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures raised while accessing the local-storage database.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store path does not exist or is not a directory.
    #[error("{} is not a local storage database", .path.display())]
    Path {
        /// The offending path.
        path: PathBuf,
    },

    /// The engine refused to open the store directory. The usual cause is
    /// the IDE still running and holding the store lock.
    #[error("cannot open local storage at {}: {reason}", .path.display())]
    Open {
        /// The store directory.
        path: PathBuf,
        /// Message from the underlying engine.
        reason: String,
    },

    /// A stored value could not be decoded as an enveloped JSON document.
    #[error("malformed document under key {key}: {reason}")]
    Decode {
        /// Key whose value is malformed.
        key: StoreKey,
        /// Parser message.
        reason: String,
    },

    /// The underlying engine rejected a write.
    #[error("write failed for key {key}: {reason}")]
    Write {
        /// Key being written.
        key: StoreKey,
        /// Message from the underlying engine.
        reason: String,
    },
}
