//! Errors reported by storage collaborators.

use thiserror::Error;

/// Result alias for storage collaborator calls.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// A storage collaborator failed. The reward attempt it was part of did not happen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    /// The store could not be reached or timed out.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The write conflicts with stored state (e.g., a reused confirmation number).
    #[error("Conflicting write: {0}")]
    Conflict(String),

    /// The unit of work was used outside its contract.
    #[error("Invalid unit of work: {0}")]
    InvalidUnitOfWork(String),
}
