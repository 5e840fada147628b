use edurec_codec::CodecError;
use edurec_keys::KeyError;
use edurec_ledger::LedgerError;
use edurec_types::EntityKind;

/// Errors from typed store operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// The requested entity does not exist.
    #[error("{kind} {id} does not exist")]
    NotFound { kind: EntityKind, id: u64 },

    /// Key composition or verification failed.
    #[error(transparent)]
    Key(#[from] KeyError),

    /// A stored or supplied payload failed to (de)serialize.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// The underlying ledger failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for edurec_types::AssetError {
    fn from(err: StoreError) -> Self {
        use edurec_types::AssetError;
        match err {
            StoreError::NotFound { .. } => AssetError::not_found(err.to_string()),
            StoreError::Key(_) | StoreError::Codec(_) | StoreError::Ledger(_) => {
                AssetError::invalid(err.to_string())
            }
        }
    }
}
