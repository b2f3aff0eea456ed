//! Synchronizer error types.

/// Misuse of the edit/delete contract by the caller.
///
/// Remote failures are not errors at this level; see `Outcome::Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// The operation is not allowed in the current edit state
    InvalidState(String),
    /// No local item has this id
    UnknownItem(String),
}

impl std::fmt::Display for SyncError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncError::InvalidState(e) => write!(f, "Invalid state: {}", e),
            SyncError::UnknownItem(id) => write!(f, "Todo item not found: {}", id),
        }
    }
}

impl std::error::Error for SyncError {}
