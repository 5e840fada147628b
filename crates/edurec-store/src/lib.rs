//! Typed record storage for edurec.
//!
//! [`RecordStore`] addresses the ledger through composed tenant-scoped keys
//! and the fail-closed codec, and implements the copy-on-write protocol for
//! nested partial updates: a class-record upsert re-reads the current
//! aggregate, builds a fully-owned successor, and replaces the whole value,
//! so sibling classes are never lost and a first-ever write lands on a fresh
//! record. [`HistoryReconstructor`] replays a key's ordered mutation log
//! into a caller-facing audit trail.

pub mod error;
pub mod history;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use history::HistoryReconstructor;
pub use store::RecordStore;
