/// Errors from the ledger boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// The invocation's identity context is not available.
    #[error("identity context unavailable: {0}")]
    Identity(String),

    /// The underlying ledger backend failed.
    #[error("ledger backend error: {0}")]
    Backend(String),
}

/// Result alias for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;
