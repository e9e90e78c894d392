//! Shared error types for the license metafield workflow

use thiserror::Error;

/// Failure talking to the external commerce store.
///
/// Split the way the workflow needs it: a response that came back non-2xx
/// (upstream status available for pass-through) versus a transport-level
/// failure with no status at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreFailure {
    #[error("store returned HTTP {status}")]
    Http { status: u16 },

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response from store: {0}")]
    InvalidResponse(String),
}

impl StoreFailure {
    /// Upstream HTTP status, when the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self {
            StoreFailure::Http { status } => Some(*status),
            StoreFailure::Network(_) | StoreFailure::InvalidResponse(_) => None,
        }
    }
}
