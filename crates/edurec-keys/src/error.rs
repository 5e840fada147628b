/// Errors from composing or verifying physical keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    /// A key segment was empty.
    #[error("empty key segment")]
    EmptySegment,

    /// A key segment contained the reserved delimiter.
    #[error("key segment contains reserved delimiter: {segment:?}")]
    DelimiterInSegment { segment: String },

    /// The key does not have the delimited segment structure.
    #[error("malformed key: {0}")]
    Malformed(String),

    /// The decoded kind segment does not match the expected kind.
    #[error("key kind mismatch: expected {expected:?}, found {found:?}")]
    KindMismatch { expected: String, found: String },

    /// The decoded tenant segments do not match the expected scope.
    #[error("key tenant mismatch: expected {expected:?}, found {found:?}")]
    TenantMismatch { expected: String, found: String },

    /// The id segment is not a valid numeric id.
    #[error("invalid id segment: {0:?}")]
    InvalidId(String),
}

/// Result alias for key operations.
pub type KeyResult<T> = Result<T, KeyError>;
