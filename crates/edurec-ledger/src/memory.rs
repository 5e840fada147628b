use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use chrono::{DateTime, Utc};

use crate::error::{LedgerError, LedgerResult};
use crate::traits::{HistoryEntry, LedgerStore};

/// In-memory ledger for tests and embedding.
///
/// Partitions are `BTreeMap`-backed so scans are key-ordered. Every public
/// put appends to the key's mutation log, stamped with the configured
/// transaction id (or a generated one) and the configured clock.
pub struct InMemoryLedgerStore {
    inner: RwLock<LedgerState>,
}

struct LedgerState {
    public: BTreeMap<String, Vec<u8>>,
    private: BTreeMap<String, BTreeMap<String, Vec<u8>>>,
    history: BTreeMap<String, Vec<HistoryEntry>>,
    caller_org: Option<String>,
    caller_identity: Option<String>,
    transient: HashMap<String, Vec<u8>>,
    tx_id: Option<String>,
    clock: DateTime<Utc>,
}

impl Default for LedgerState {
    fn default() -> Self {
        Self {
            public: BTreeMap::new(),
            private: BTreeMap::new(),
            history: BTreeMap::new(),
            caller_org: None,
            caller_identity: None,
            transient: HashMap::new(),
            tx_id: None,
            clock: DateTime::UNIX_EPOCH,
        }
    }
}

impl InMemoryLedgerStore {
    /// Create an empty ledger with no caller context.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(LedgerState::default()),
        }
    }

    /// Builder: set the caller organization and identity.
    pub fn with_caller(self, org: impl Into<String>, identity: impl Into<String>) -> Self {
        self.set_caller(org, identity);
        self
    }

    /// Builder: add one transient input.
    pub fn with_transient(self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.insert_transient(key, value);
        self
    }

    /// Set the caller organization and identity for subsequent invocations.
    pub fn set_caller(&self, org: impl Into<String>, identity: impl Into<String>) {
        let mut state = self.inner.write().expect("lock poisoned");
        state.caller_org = Some(org.into());
        state.caller_identity = Some(identity.into());
    }

    /// Add one transient input for the current invocation.
    pub fn insert_transient(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let mut state = self.inner.write().expect("lock poisoned");
        state.transient.insert(key.into(), value.into());
    }

    /// Drop all transient inputs.
    pub fn clear_transient(&self) {
        self.inner.write().expect("lock poisoned").transient.clear();
    }

    /// Pin the transaction id and timestamp stamped onto subsequent
    /// mutation-log entries.
    pub fn set_tx(&self, tx_id: impl Into<String>, timestamp: DateTime<Utc>) {
        let mut state = self.inner.write().expect("lock poisoned");
        state.tx_id = Some(tx_id.into());
        state.clock = timestamp;
    }

    /// Number of live public keys.
    pub fn public_len(&self) -> usize {
        self.inner.read().expect("lock poisoned").public.len()
    }
}

impl Default for InMemoryLedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn get_public(&self, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.public.get(key).cloned())
    }

    fn put_public(&self, key: &str, value: &[u8]) -> LedgerResult<()> {
        let mut state = self.inner.write().expect("lock poisoned");
        let mutation_id = state
            .tx_id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let timestamp = state.clock;
        state.public.insert(key.to_string(), value.to_vec());
        state
            .history
            .entry(key.to_string())
            .or_default()
            .push(HistoryEntry {
                mutation_id,
                timestamp,
                value: value.to_vec(),
            });
        Ok(())
    }

    fn get_private(&self, partition: &str, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state
            .private
            .get(partition)
            .and_then(|p| p.get(key))
            .cloned())
    }

    fn put_private(&self, partition: &str, key: &str, value: &[u8]) -> LedgerResult<()> {
        let mut state = self.inner.write().expect("lock poisoned");
        state
            .private
            .entry(partition.to_string())
            .or_default()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn scan_public_prefix(&self, prefix: &str) -> LedgerResult<Vec<(String, Vec<u8>)>> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state
            .public
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }

    fn scan_private_range(
        &self,
        partition: &str,
        start: &str,
        end: &str,
    ) -> LedgerResult<Vec<(String, Vec<u8>)>> {
        let state = self.inner.read().expect("lock poisoned");
        let Some(entries) = state.private.get(partition) else {
            return Ok(Vec::new());
        };
        Ok(entries
            .range(start.to_string()..end.to_string())
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }

    fn history_of(&self, key: &str) -> LedgerResult<Vec<HistoryEntry>> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.history.get(key).cloned().unwrap_or_default())
    }

    fn caller_org_id(&self) -> LedgerResult<String> {
        let state = self.inner.read().expect("lock poisoned");
        state
            .caller_org
            .clone()
            .ok_or_else(|| LedgerError::Identity("caller organization not set".into()))
    }

    fn caller_identity_id(&self) -> LedgerResult<String> {
        let state = self.inner.read().expect("lock poisoned");
        state
            .caller_identity
            .clone()
            .ok_or_else(|| LedgerError::Identity("caller identity not set".into()))
    }

    fn transient_inputs(&self) -> LedgerResult<HashMap<String, Vec<u8>>> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.transient.clone())
    }
}

impl std::fmt::Debug for InMemoryLedgerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.read().expect("lock poisoned");
        f.debug_struct("InMemoryLedgerStore")
            .field("public_keys", &state.public.len())
            .field("private_partitions", &state.private.len())
            .finish()
    }
}
