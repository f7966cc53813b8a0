//! Catalog error types.
//!
//! Lookups never fail: an unknown card is a routine outcome and comes back as
//! `None`. Errors are reserved for loading edition data, configuration and
//! snapshots.

use thiserror::Error;

/// Errors raised while loading or snapshotting catalog inputs.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("Edition code {0:?} is defined more than once")]
    DuplicateEdition(String),
}

/// Result alias used by fallible catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
