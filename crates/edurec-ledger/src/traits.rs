use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::error::LedgerResult;

/// One recorded version of a key: the mutation that wrote it, when, and the
/// serialized value at that point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Opaque id of the originating mutation (e.g. a transaction id).
    pub mutation_id: String,
    pub timestamp: DateTime<Utc>,
    pub value: Vec<u8>,
}

/// The versioned key-value ledger consumed by the core.
///
/// Implementations must guarantee:
/// - Puts are whole-value replaces; the previous version stays in the
///   per-key mutation log returned by [`Self::history_of`], oldest first.
/// - Scans return keys in lexicographic order.
/// - Private partitions are isolated from one another and from the public
///   partition.
/// - One logical invocation runs to completion before the next observes its
///   effects; concurrency control between invocations is the ledger's.
pub trait LedgerStore: Send + Sync {
    /// Read a public-partition value. `Ok(None)` if the key has never been
    /// written.
    fn get_public(&self, key: &str) -> LedgerResult<Option<Vec<u8>>>;

    /// Replace a public-partition value.
    fn put_public(&self, key: &str, value: &[u8]) -> LedgerResult<()>;

    /// Read a value from a private partition.
    fn get_private(&self, partition: &str, key: &str) -> LedgerResult<Option<Vec<u8>>>;

    /// Replace a value in a private partition.
    fn put_private(&self, partition: &str, key: &str, value: &[u8]) -> LedgerResult<()>;

    /// All public entries whose key starts with `prefix`, key-ordered.
    fn scan_public_prefix(&self, prefix: &str) -> LedgerResult<Vec<(String, Vec<u8>)>>;

    /// All entries of a private partition with `start <= key < end`,
    /// key-ordered.
    fn scan_private_range(
        &self,
        partition: &str,
        start: &str,
        end: &str,
    ) -> LedgerResult<Vec<(String, Vec<u8>)>>;

    /// The ordered mutation log of a public key, oldest first. Empty if the
    /// key has never been written.
    fn history_of(&self, key: &str) -> LedgerResult<Vec<HistoryEntry>>;

    /// The invoking caller's organization id.
    fn caller_org_id(&self) -> LedgerResult<String>;

    /// The invoking caller's individual identity id.
    fn caller_identity_id(&self) -> LedgerResult<String>;

    /// The side-channel payloads supplied with the current invocation.
    fn transient_inputs(&self) -> LedgerResult<HashMap<String, Vec<u8>>>;
}
