/// Errors from encoding or decoding entity payloads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The input was empty where a serialized entity was required.
    #[error("empty payload")]
    Empty,

    /// The payload is not valid UTF-8 JSON for the target shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// The value could not be serialized.
    #[error("encode error: {0}")]
    Encode(String),
}

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
