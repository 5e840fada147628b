use std::fmt;

/// Machine-readable error codes surfaced to the invocation layer.
///
/// The codes mirror the asset-oriented taxonomy of the ledger platform:
/// every failure a caller can observe is one of these three.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetCode {
    /// The requested entity, or a required transient input, does not exist.
    NotFound,
    /// A create-only flow found a pre-existing entity.
    AlreadyExists,
    /// Malformed payload, decode failure, or key verification failure.
    Invalid,
}

impl AssetCode {
    /// The stable wire representation of the code.
    pub fn as_str(self) -> &'static str {
        match self {
            AssetCode::NotFound => "ASSET_NOT_FOUND",
            AssetCode::AlreadyExists => "ASSET_ALREADY_EXISTS",
            AssetCode::Invalid => "ASSET_INVALID",
        }
    }
}

impl fmt::Display for AssetCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-facing error: a machine-readable code plus a human-readable message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct AssetError {
    pub code: AssetCode,
    pub message: String,
}

impl AssetError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: AssetCode::NotFound,
            message: message.into(),
        }
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self {
            code: AssetCode::AlreadyExists,
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            code: AssetCode::Invalid,
            message: message.into(),
        }
    }
}
