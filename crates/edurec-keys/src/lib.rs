//! Tenant-scoped composite keys for the edurec ledger partitions.
//!
//! Every logical entity address (an [`EntityKind`](edurec_types::EntityKind),
//! a [`TenantScope`](edurec_types::TenantScope), and a numeric id) maps to
//! exactly one physical ledger key, and the (kind, tenant) pair alone maps to
//! a prefix matching all of that tenant's keys of that kind and nothing else.
//! [`KeyComposer::split_and_verify`] is the inverse, rejecting keys that fail
//! kind or tenant verification so a physically interleaved foreign key can
//! never be mistaken for one of ours.

pub mod composer;
pub mod error;

pub use composer::KeyComposer;
pub use error::{KeyError, KeyResult};
