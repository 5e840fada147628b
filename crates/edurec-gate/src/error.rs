use edurec_ledger::LedgerError;

/// Errors from gating transient inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GateError {
    /// The transient map lacks a required key.
    #[error("the transient map is missing {key:?}")]
    MissingInput { key: String },

    /// The transient payload for a key failed shape validation.
    #[error("invalid transient input {key:?}: {reason}")]
    InvalidInput { key: String, reason: String },

    /// The transient map itself could not be read.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Result alias for gate operations.
pub type GateResult<T> = Result<T, GateError>;

impl From<GateError> for edurec_types::AssetError {
    fn from(err: GateError) -> Self {
        use edurec_types::AssetError;
        match err {
            GateError::MissingInput { .. } => AssetError::not_found(err.to_string()),
            GateError::InvalidInput { .. } | GateError::Ledger(_) => {
                AssetError::invalid(err.to_string())
            }
        }
    }
}
