//! Transaction entry points for edurec.
//!
//! This is the thin layer the invocation transport calls into. Each entry
//! point derives its tenant scope from the caller's identity context, pulls
//! mutation payloads through the transient-input gate, delegates to the
//! record store, and maps every failure to the caller-facing
//! [`AssetError`](edurec_types::AssetError) taxonomy. No retries, no
//! partial application: an entry point either fully applies its write or
//! returns an error having written nothing.

pub mod contract;

pub use contract::RecordContract;
pub use edurec_types::{AssetCode, AssetError};
