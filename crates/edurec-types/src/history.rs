use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::Record;

/// One reconstructed entry of a record's mutation log: the record snapshot
/// at that point, when it was written, and the opaque id of the mutation
/// that wrote it. Produced only by history reconstruction, never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecordHistory {
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub record: Record,
    pub updated_by: String,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn timestamp_is_epoch_millis() {
        let entry = RecordHistory {
            timestamp: Utc.timestamp_millis_opt(1_000_000).unwrap(),
            record: Record::fresh(),
            updated_by: "tx1".into(),
        };
        let encoded = serde_json::to_string(&entry).unwrap();
        assert!(encoded.contains("\"timestamp\":1000000"));
        assert!(encoded.contains("\"updatedBy\":\"tx1\""));

        let decoded: RecordHistory = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, entry);
    }
}
