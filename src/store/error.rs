//! Remote store error types.

use thiserror::Error;

/// Errors from a single call against the remote todo API.
///
/// Callers of the synchronizer never see these as `Err`: they are folded
/// into the error notice and reported through `Outcome::Failed`.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The server answered with a non-success status.
    #[error("server returned status {status}")]
    Rejected { status: u16 },

    /// The request never completed (connection refused, reset, DNS, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not the JSON we expected.
    #[error("invalid response body: {0}")]
    Decode(String),
}
