use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{CodecError, CodecResult};

/// Codec for the persisted entity encoding.
///
/// Encoding is canonical JSON over the entity types (camelCase fields,
/// `BTreeMap` collections), so encoding the same value twice yields the
/// same bytes and `decode(encode(v)) == v` for every decodable `v`.
pub struct RecordCodec;

impl RecordCodec {
    /// Decode a serialized entity, failing closed on any shape violation.
    pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> CodecResult<T> {
        if bytes.is_empty() {
            return Err(CodecError::Empty);
        }
        serde_json::from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }

    /// Encode an entity to its persisted byte form.
    pub fn encode<T: Serialize>(value: &T) -> CodecResult<Vec<u8>> {
        serde_json::to_vec(value).map_err(|e| CodecError::Encode(e.to_string()))
    }
}
