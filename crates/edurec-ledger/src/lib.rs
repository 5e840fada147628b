//! Ledger boundary for edurec.
//!
//! The append-only, versioned key-value ledger (consensus, conflict
//! detection, persistence) is an external collaborator. This crate defines
//! the [`LedgerStore`] interface the core consumes, together with the
//! per-invocation identity context and transient side-channel inputs, and
//! ships [`InMemoryLedgerStore`] for tests and embedding.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{LedgerError, LedgerResult};
pub use memory::InMemoryLedgerStore;
pub use traits::{HistoryEntry, LedgerStore};
