use std::collections::HashMap;

use edurec_codec::RecordCodec;
use edurec_ledger::LedgerStore;
use serde::de::DeserializeOwned;

use crate::error::{GateError, GateResult};

/// Transient key carrying a Personal payload.
pub const TRANSIENT_PERSONAL: &str = "personal";
/// Transient key carrying a Record payload.
pub const TRANSIENT_RECORD: &str = "record";
/// Transient key carrying a ClassRecord payload.
pub const TRANSIENT_CLASS_RECORD: &str = "classRecord";

/// Validates the invocation's transient inputs before they reach the store.
pub struct TransactionGate {
    inputs: HashMap<String, Vec<u8>>,
}

impl TransactionGate {
    /// Gate an explicit transient map.
    pub fn new(inputs: HashMap<String, Vec<u8>>) -> Self {
        Self { inputs }
    }

    /// Gate the current invocation's transient map.
    pub fn from_ledger<L: LedgerStore>(ledger: &L) -> GateResult<Self> {
        Ok(Self::new(ledger.transient_inputs()?))
    }

    /// The raw payload for `key`, or a missing-input failure.
    pub fn require(&self, key: &str) -> GateResult<&[u8]> {
        self.inputs
            .get(key)
            .map(Vec::as_slice)
            .ok_or_else(|| GateError::MissingInput {
                key: key.to_string(),
            })
    }

    /// The payload for `key`, decoded as `T`. A present but malformed
    /// payload is invalid, never reported as missing.
    pub fn decode_as<T: DeserializeOwned>(&self, key: &str) -> GateResult<T> {
        let bytes = self.require(key)?;
        RecordCodec::decode(bytes).map_err(|e| GateError::InvalidInput {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use edurec_ledger::InMemoryLedgerStore;
    use edurec_types::{Classification, Record};

    use super::*;

    #[test]
    fn require_returns_present_payload() {
        let gate = TransactionGate::new(HashMap::from([(
            "record".to_string(),
            b"{}".to_vec(),
        )]));
        assert_eq!(gate.require("record").unwrap(), b"{}");
    }

    #[test]
    fn missing_key_is_missing() {
        let gate = TransactionGate::new(HashMap::new());
        let err = gate.decode_as::<Record>(TRANSIENT_RECORD).unwrap_err();
        assert_eq!(
            err,
            GateError::MissingInput {
                key: "record".into()
            }
        );
    }

    #[test]
    fn malformed_payload_is_invalid_not_missing() {
        let gate = TransactionGate::new(HashMap::from([(
            "classification".to_string(),
            b"eror".to_vec(),
        )]));
        let err = gate.decode_as::<Classification>("classification").unwrap_err();
        assert!(matches!(err, GateError::InvalidInput { .. }));
    }

    #[test]
    fn decodes_well_formed_payload() {
        let classification = Classification {
            first_half_classify: Some("Good".into()),
            second_half_classify: Some("Bad".into()),
            final_classify: Some("Empty".into()),
        };
        let bytes = serde_json::to_vec(&classification).unwrap();
        let gate = TransactionGate::new(HashMap::from([("classification".to_string(), bytes)]));

        let decoded: Classification = gate.decode_as("classification").unwrap();
        assert_eq!(decoded, classification);
    }

    #[test]
    fn from_ledger_reads_the_invocation_map() {
        let ledger = InMemoryLedgerStore::new().with_transient("record", b"{}".to_vec());
        let gate = TransactionGate::from_ledger(&ledger).unwrap();
        assert!(gate.decode_as::<Record>(TRANSIENT_RECORD).is_ok());
    }
}
