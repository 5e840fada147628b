use edurec_codec::RecordCodec;
use edurec_keys::KeyComposer;
use edurec_ledger::LedgerStore;
use edurec_types::{
    ClassRecord, EntityKind, Personal, PersonalMap, Record, RecordHistory, RecordMap, TenantScope,
};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::history::HistoryReconstructor;

/// Typed, tenant-scoped access to the ledger partitions.
///
/// Records live on the public partition under composed
/// `(record, org, student)` keys; personals live in the organization's
/// private partition under `(personal, org, identity, student)` keys. All
/// writes are whole-value replaces and pure functions of their input, so the
/// ledger's own concurrency control may retry them safely.
pub struct RecordStore<L> {
    ledger: L,
}

impl<L: LedgerStore> RecordStore<L> {
    pub fn new(ledger: L) -> Self {
        Self { ledger }
    }

    /// The underlying ledger boundary.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    // -- Records (public partition) --

    /// Read a student's record. Absent or empty stored values are NotFound
    /// on this read path; the merge path treats them as a fresh record.
    pub fn get_record(&self, scope: &TenantScope, student_id: u64) -> StoreResult<Record> {
        let key = KeyComposer::compose_key(EntityKind::Record, scope, student_id)?;
        match self.ledger.get_public(&key)? {
            Some(bytes) if !bytes.is_empty() => Ok(RecordCodec::decode(&bytes)?),
            _ => Err(StoreError::NotFound {
                kind: EntityKind::Record,
                id: student_id,
            }),
        }
    }

    /// Read a student's record for a merge, treating an absent or empty
    /// stored value as a fresh record so an upsert works on a brand-new
    /// student.
    pub fn record_for_merge(&self, scope: &TenantScope, student_id: u64) -> StoreResult<Record> {
        let key = KeyComposer::compose_key(EntityKind::Record, scope, student_id)?;
        match self.ledger.get_public(&key)? {
            Some(bytes) if !bytes.is_empty() => Ok(RecordCodec::decode(&bytes)?),
            _ => Ok(Record::fresh()),
        }
    }

    /// Replace a student's whole record unconditionally.
    pub fn put_record(
        &self,
        scope: &TenantScope,
        student_id: u64,
        record: &Record,
    ) -> StoreResult<()> {
        let key = KeyComposer::compose_key(EntityKind::Record, scope, student_id)?;
        let bytes = RecordCodec::encode(record)?;
        self.ledger.put_public(&key, &bytes)?;
        info!(
            student_id,
            org = %scope.org_id(),
            classes = record.class_records.len(),
            "record replaced"
        );
        Ok(())
    }

    /// Insert or overwrite one class record without touching its siblings.
    ///
    /// The current aggregate is re-read inside this call (never carried
    /// over from an earlier read) and the successor is a fully-owned value,
    /// so the stored siblings are preserved byte-for-byte and no cached
    /// alias can leak into the write. Returns the stored successor.
    pub fn upsert_class_record(
        &self,
        scope: &TenantScope,
        student_id: u64,
        class_id: u64,
        class_record: ClassRecord,
    ) -> StoreResult<Record> {
        let mut next = self.record_for_merge(scope, student_id)?;
        debug!(
            student_id,
            class_id,
            existing_classes = next.class_records.len(),
            "merging class record"
        );
        next.class_records.insert(class_id, class_record);
        self.put_record(scope, student_id, &next)?;
        Ok(next)
    }

    /// The time-ordered audit trail of a student's record, oldest first.
    /// A never-written record yields an empty trail.
    pub fn record_history(
        &self,
        scope: &TenantScope,
        student_id: u64,
    ) -> StoreResult<Vec<RecordHistory>> {
        let key = KeyComposer::compose_key(EntityKind::Record, scope, student_id)?;
        let entries = self.ledger.history_of(&key)?;
        HistoryReconstructor::reconstruct(&entries)
    }

    /// All records of the tenant, keyed by student id.
    ///
    /// Every scanned key is re-verified against the expected kind and
    /// tenant; a physically adjacent foreign key fails the whole listing
    /// instead of being silently skipped.
    pub fn list_records(&self, scope: &TenantScope) -> StoreResult<RecordMap> {
        let prefix = KeyComposer::compose_prefix(EntityKind::Record, scope)?;
        let mut records = RecordMap::new();
        for (key, bytes) in self.ledger.scan_public_prefix(&prefix)? {
            let student_id = KeyComposer::split_and_verify(&key, EntityKind::Record, scope)?;
            records.insert(student_id, RecordCodec::decode(&bytes)?);
        }
        Ok(records)
    }

    // -- Personals (private partition) --

    /// Read a student's personal profile from the tenant's private
    /// partition.
    pub fn get_personal(&self, scope: &TenantScope, student_id: u64) -> StoreResult<Personal> {
        let partition = KeyComposer::private_partition(scope);
        let key = KeyComposer::compose_key(EntityKind::Personal, scope, student_id)?;
        match self.ledger.get_private(&partition, &key)? {
            Some(bytes) if !bytes.is_empty() => Ok(RecordCodec::decode(&bytes)?),
            _ => Err(StoreError::NotFound {
                kind: EntityKind::Personal,
                id: student_id,
            }),
        }
    }

    /// Replace a student's whole personal profile. No partial-field merge:
    /// callers submit the complete value.
    pub fn put_personal(
        &self,
        scope: &TenantScope,
        student_id: u64,
        personal: &Personal,
    ) -> StoreResult<()> {
        let partition = KeyComposer::private_partition(scope);
        let key = KeyComposer::compose_key(EntityKind::Personal, scope, student_id)?;
        let bytes = RecordCodec::encode(personal)?;
        self.ledger.put_private(&partition, &key, &bytes)?;
        info!(student_id, org = %scope.org_id(), "personal replaced");
        Ok(())
    }

    /// All personal profiles in the scope's namespace, keyed by student id.
    /// Fails fast on foreign or malformed keys, like [`Self::list_records`].
    pub fn list_personals(&self, scope: &TenantScope) -> StoreResult<PersonalMap> {
        let partition = KeyComposer::private_partition(scope);
        let prefix = KeyComposer::compose_prefix(EntityKind::Personal, scope)?;
        let (start, end) = KeyComposer::prefix_range(&prefix);
        let mut personals = PersonalMap::new();
        for (key, bytes) in self.ledger.scan_private_range(&partition, &start, &end)? {
            let student_id = KeyComposer::split_and_verify(&key, EntityKind::Personal, scope)?;
            personals.insert(student_id, RecordCodec::decode(&bytes)?);
        }
        Ok(personals)
    }
}

#[cfg(test)]
mod tests {
    use edurec_keys::KeyError;
    use edurec_ledger::InMemoryLedgerStore;
    use edurec_types::{Classification, Subject};

    use super::*;

    fn store() -> RecordStore<InMemoryLedgerStore> {
        RecordStore::new(InMemoryLedgerStore::new())
    }

    fn org_a() -> TenantScope {
        TenantScope::org("OrgA")
    }

    fn class(year: i32, subject_name: &str) -> ClassRecord {
        let mut class = ClassRecord {
            year,
            grade: 10,
            class_name: Some(format!("{year}-A")),
            ..ClassRecord::default()
        };
        class.subjects.insert(
            1,
            Subject {
                name: Some(subject_name.into()),
                first_half_score: 5.0,
                second_half_score: 6.0,
                final_score: 7.0,
            },
        );
        class.classification = Classification {
            first_half_classify: Some("Good".into()),
            ..Classification::default()
        };
        class
    }

    // -----------------------------------------------------------------------
    // Record read/write
    // -----------------------------------------------------------------------

    #[test]
    fn get_record_on_absent_is_not_found() {
        let err = store().get_record(&org_a(), 0).unwrap_err();
        assert_eq!(
            err,
            StoreError::NotFound {
                kind: EntityKind::Record,
                id: 0
            }
        );
    }

    #[test]
    fn get_record_on_empty_stored_value_is_not_found() {
        let store = store();
        let key = KeyComposer::compose_key(EntityKind::Record, &org_a(), 0).unwrap();
        store.ledger().put_public(&key, b"").unwrap();
        assert!(matches!(
            store.get_record(&org_a(), 0),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn put_then_get_roundtrips() {
        let store = store();
        let mut record = Record::fresh();
        record.class_records.insert(1, class(2020, "Math"));

        store.put_record(&org_a(), 7, &record).unwrap();
        assert_eq!(store.get_record(&org_a(), 7).unwrap(), record);
    }

    #[test]
    fn put_is_idempotent() {
        let store = store();
        let mut record = Record::fresh();
        record.class_records.insert(1, class(2020, "Math"));

        store.put_record(&org_a(), 7, &record).unwrap();
        let key = KeyComposer::compose_key(EntityKind::Record, &org_a(), 7).unwrap();
        let first = store.ledger().get_public(&key).unwrap().unwrap();

        store.put_record(&org_a(), 7, &record).unwrap();
        let second = store.ledger().get_public(&key).unwrap().unwrap();
        assert_eq!(first, second);
    }

    // -----------------------------------------------------------------------
    // Merge-path asymmetry
    // -----------------------------------------------------------------------

    #[test]
    fn record_for_merge_on_absent_is_fresh() {
        let record = store().record_for_merge(&org_a(), 0).unwrap();
        assert!(record.is_empty());
    }

    #[test]
    fn record_for_merge_on_empty_stored_value_is_fresh() {
        let store = store();
        let key = KeyComposer::compose_key(EntityKind::Record, &org_a(), 0).unwrap();
        store.ledger().put_public(&key, b"").unwrap();
        assert!(store.record_for_merge(&org_a(), 0).unwrap().is_empty());
    }

    // -----------------------------------------------------------------------
    // Copy-on-write upsert
    // -----------------------------------------------------------------------

    #[test]
    fn upsert_preserves_siblings_byte_for_byte() {
        let store = store();
        let class_a = class(2020, "Math");
        let class_b = class(2021, "Literature");
        let mut record = Record::fresh();
        record.class_records.insert(1, class_a.clone());
        record.class_records.insert(2, class_b.clone());
        store.put_record(&org_a(), 7, &record).unwrap();

        let class_c = class(2022, "History");
        store
            .upsert_class_record(&org_a(), 7, 3, class_c.clone())
            .unwrap();

        let stored = store.get_record(&org_a(), 7).unwrap();
        assert_eq!(stored.class_records.len(), 3);
        assert_eq!(stored.class_records[&3], class_c);
        assert_eq!(
            RecordCodec::encode(&stored.class_records[&1]).unwrap(),
            RecordCodec::encode(&class_a).unwrap()
        );
        assert_eq!(
            RecordCodec::encode(&stored.class_records[&2]).unwrap(),
            RecordCodec::encode(&class_b).unwrap()
        );
    }

    #[test]
    fn upsert_overwrites_existing_class() {
        let store = store();
        let mut record = Record::fresh();
        record.class_records.insert(1, class(2020, "Math"));
        store.put_record(&org_a(), 7, &record).unwrap();

        let replacement = class(2023, "Physics");
        store
            .upsert_class_record(&org_a(), 7, 1, replacement.clone())
            .unwrap();

        let stored = store.get_record(&org_a(), 7).unwrap();
        assert_eq!(stored.class_records.len(), 1);
        assert_eq!(stored.class_records[&1], replacement);
    }

    #[test]
    fn upsert_on_absent_record_creates_it() {
        let store = store();
        let class_c = class(2020, "Math");
        let stored = store
            .upsert_class_record(&org_a(), 7, 5, class_c.clone())
            .unwrap();

        assert_eq!(stored.class_records.len(), 1);
        assert_eq!(stored.class_records[&5], class_c);
        // And it is durably visible on the read path.
        assert_eq!(store.get_record(&org_a(), 7).unwrap(), stored);
    }

    // -----------------------------------------------------------------------
    // Personals
    // -----------------------------------------------------------------------

    fn tester() -> Personal {
        Personal {
            first_name: Some("Tester".into()),
            last_name: Some("Org".into()),
            male: false,
            ..Personal::default()
        }
    }

    #[test]
    fn personal_roundtrip_and_tenant_isolation() {
        let store = store();
        let scope_a = TenantScope::scoped("OrgA", "teacher-1");
        store.put_personal(&scope_a, 0, &tester()).unwrap();

        assert_eq!(store.get_personal(&scope_a, 0).unwrap(), tester());

        // The same student id under another organization is a different
        // (and absent) entity.
        let scope_b = TenantScope::scoped("OrgB", "teacher-1");
        assert!(matches!(
            store.get_personal(&scope_b, 0),
            Err(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn personal_is_namespaced_per_identity() {
        let store = store();
        let teacher_1 = TenantScope::scoped("OrgA", "teacher-1");
        let teacher_2 = TenantScope::scoped("OrgA", "teacher-2");
        store.put_personal(&teacher_1, 0, &tester()).unwrap();

        assert!(store.get_personal(&teacher_1, 0).is_ok());
        assert!(matches!(
            store.get_personal(&teacher_2, 0),
            Err(StoreError::NotFound { .. })
        ));
    }

    // -----------------------------------------------------------------------
    // Listings
    // -----------------------------------------------------------------------

    #[test]
    fn list_records_returns_only_the_tenant() {
        let store = store();
        let mut record = Record::fresh();
        record.class_records.insert(1, class(2020, "Math"));
        store.put_record(&org_a(), 1, &record).unwrap();
        store.put_record(&org_a(), 2, &record).unwrap();
        store
            .put_record(&TenantScope::org("OrgB"), 3, &record)
            .unwrap();

        let listed = store.list_records(&org_a()).unwrap();
        assert_eq!(listed.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn list_records_fails_fast_on_foreign_key() {
        let store = store();
        let mut record = Record::fresh();
        record.class_records.insert(1, class(2020, "Math"));
        store.put_record(&org_a(), 1, &record).unwrap();

        // A physically interleaved key under our prefix with a non-numeric
        // id segment must fail the listing, not be skipped.
        store
            .ledger()
            .put_public("record\u{0}OrgA\u{0}seven\u{0}", b"{}")
            .unwrap();

        let err = store.list_records(&org_a()).unwrap_err();
        assert!(matches!(err, StoreError::Key(KeyError::InvalidId(_))));
    }

    #[test]
    fn list_personals_is_scoped_to_the_identity() {
        let store = store();
        let teacher_1 = TenantScope::scoped("OrgA", "teacher-1");
        let teacher_2 = TenantScope::scoped("OrgA", "teacher-2");
        store.put_personal(&teacher_1, 1, &tester()).unwrap();
        store.put_personal(&teacher_1, 2, &tester()).unwrap();
        store.put_personal(&teacher_2, 9, &tester()).unwrap();

        let listed = store.list_personals(&teacher_1).unwrap();
        assert_eq!(listed.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
    }
}
