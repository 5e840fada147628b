use edurec_gate::{
    TransactionGate, TRANSIENT_CLASS_RECORD, TRANSIENT_PERSONAL, TRANSIENT_RECORD,
};
use edurec_ledger::LedgerStore;
use edurec_store::RecordStore;
use edurec_types::{
    AssetError, ClassRecord, Personal, PersonalMap, Record, RecordHistory, RecordMap, TenantScope,
};
use tracing::debug;

/// The student-record contract: every externally invocable operation.
///
/// Tenant scoping is implicit: each call derives it from the ledger's
/// caller identity context, so an invocation can only ever address its own
/// organization's keys.
pub struct RecordContract<L> {
    store: RecordStore<L>,
}

impl<L: LedgerStore> RecordContract<L> {
    /// The contract's registered name.
    pub const NAME: &'static str = "RecordContract";

    pub fn new(ledger: L) -> Self {
        Self {
            store: RecordStore::new(ledger),
        }
    }

    /// The contract name, for the invocation layer's init handshake.
    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    // -- Queries --

    /// A student's personal profile from the caller's private namespace.
    pub fn get_student_personal(&self, student_id: u64) -> Result<Personal, AssetError> {
        let scope = self.personal_scope()?;
        Ok(self.store.get_personal(&scope, student_id)?)
    }

    /// A student's academic record.
    pub fn get_student_record(&self, student_id: u64) -> Result<Record, AssetError> {
        let scope = self.record_scope()?;
        Ok(self.store.get_record(&scope, student_id)?)
    }

    /// The full audit trail of a student's record, oldest first. A student
    /// with no recorded mutations has an empty trail.
    pub fn get_student_record_history(
        &self,
        student_id: u64,
    ) -> Result<Vec<RecordHistory>, AssetError> {
        let scope = self.record_scope()?;
        Ok(self.store.record_history(&scope, student_id)?)
    }

    /// All personal profiles in the caller's private namespace.
    pub fn list_student_personals(&self) -> Result<PersonalMap, AssetError> {
        let scope = self.personal_scope()?;
        Ok(self.store.list_personals(&scope)?)
    }

    /// All records of the caller's organization.
    pub fn list_student_records(&self) -> Result<RecordMap, AssetError> {
        let scope = self.record_scope()?;
        Ok(self.store.list_records(&scope)?)
    }

    // -- Mutations --

    /// Replace a student's personal profile with the transient `"personal"`
    /// payload. Whole-value: callers submit the complete profile.
    pub fn update_student_personal(&self, student_id: u64) -> Result<Personal, AssetError> {
        let personal: Personal = self.gate()?.decode_as(TRANSIENT_PERSONAL)?;
        let scope = self.personal_scope()?;
        debug!(student_id, org = %scope.org_id(), "updating student personal");
        self.store.put_personal(&scope, student_id, &personal)?;
        Ok(personal)
    }

    /// Replace a student's whole record with the transient `"record"`
    /// payload. The first write for a student implicitly creates the record.
    pub fn update_student_record(&self, student_id: u64) -> Result<Record, AssetError> {
        let record: Record = self.gate()?.decode_as(TRANSIENT_RECORD)?;
        let scope = self.record_scope()?;
        debug!(student_id, org = %scope.org_id(), "updating student record");
        self.store.put_record(&scope, student_id, &record)?;
        Ok(record)
    }

    /// Insert or overwrite one class record from the transient
    /// `"classRecord"` payload, preserving all sibling classes. Usable on a
    /// student with no record yet.
    pub fn update_student_class_record(
        &self,
        student_id: u64,
        class_id: u64,
    ) -> Result<Record, AssetError> {
        let class_record: ClassRecord = self.gate()?.decode_as(TRANSIENT_CLASS_RECORD)?;
        let scope = self.record_scope()?;
        debug!(student_id, class_id, org = %scope.org_id(), "upserting class record");
        Ok(self
            .store
            .upsert_class_record(&scope, student_id, class_id, class_record)?)
    }

    // -- Invocation context --

    fn gate(&self) -> Result<TransactionGate, AssetError> {
        Ok(TransactionGate::from_ledger(self.store.ledger())?)
    }

    fn record_scope(&self) -> Result<TenantScope, AssetError> {
        let org = self
            .store
            .ledger()
            .caller_org_id()
            .map_err(|e| AssetError::invalid(e.to_string()))?;
        Ok(TenantScope::org(org))
    }

    fn personal_scope(&self) -> Result<TenantScope, AssetError> {
        let ledger = self.store.ledger();
        let org = ledger
            .caller_org_id()
            .map_err(|e| AssetError::invalid(e.to_string()))?;
        let identity = ledger
            .caller_identity_id()
            .map_err(|e| AssetError::invalid(e.to_string()))?;
        Ok(TenantScope::scoped(org, identity))
    }
}
