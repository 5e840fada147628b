use edurec_codec::RecordCodec;
use edurec_ledger::HistoryEntry;
use edurec_types::{Record, RecordHistory};

use crate::error::StoreResult;

/// Replays a key's ordered mutation log into a caller-facing audit trail.
///
/// The ledger guarantees per-key mutation order; entries are taken oldest
/// first and never re-sorted here. A decode failure on any entry fails the
/// whole reconstruction; a partial audit trail would read as complete.
pub struct HistoryReconstructor;

impl HistoryReconstructor {
    pub fn reconstruct(entries: &[HistoryEntry]) -> StoreResult<Vec<RecordHistory>> {
        let mut trail = Vec::with_capacity(entries.len());
        for entry in entries {
            let record: Record = RecordCodec::decode(&entry.value)?;
            trail.push(RecordHistory {
                timestamp: entry.timestamp,
                record,
                updated_by: entry.mutation_id.clone(),
            });
        }
        Ok(trail)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use edurec_types::ClassRecord;

    use crate::error::StoreError;

    use super::*;

    fn entry(tx: &str, millis: i64, record: &Record) -> HistoryEntry {
        HistoryEntry {
            mutation_id: tx.into(),
            timestamp: Utc.timestamp_millis_opt(millis).unwrap(),
            value: RecordCodec::encode(record).unwrap(),
        }
    }

    #[test]
    fn empty_log_is_an_empty_trail() {
        assert!(HistoryReconstructor::reconstruct(&[]).unwrap().is_empty());
    }

    #[test]
    fn trail_preserves_order_and_attribution() {
        let mut v1 = Record::fresh();
        v1.class_records.insert(
            0,
            ClassRecord {
                year: 2020,
                ..ClassRecord::default()
            },
        );
        let mut v2 = v1.clone();
        v2.class_records.insert(
            1,
            ClassRecord {
                year: 2021,
                ..ClassRecord::default()
            },
        );

        let trail = HistoryReconstructor::reconstruct(&[
            entry("tx1", 0, &v1),
            entry("tx2", 1_000_000, &v2),
        ])
        .unwrap();

        assert_eq!(trail.len(), 2);
        assert_eq!(trail[0].updated_by, "tx1");
        assert_eq!(trail[0].record, v1);
        assert_eq!(trail[1].updated_by, "tx2");
        assert_eq!(trail[1].record, v2);
        assert!(trail[0].timestamp < trail[1].timestamp);
    }

    #[test]
    fn one_bad_entry_fails_the_whole_reconstruction() {
        let good = entry("tx1", 0, &Record::fresh());
        let bad = HistoryEntry {
            mutation_id: "tx2".into(),
            timestamp: Utc.timestamp_millis_opt(1).unwrap(),
            value: b"eror".to_vec(),
        };
        let err = HistoryReconstructor::reconstruct(&[good, bad]).unwrap_err();
        assert!(matches!(err, StoreError::Codec(_)));
    }
}
