//! Transient-input gate for edurec.
//!
//! Mutation payloads arrive as side-channel ("transient") inputs next to the
//! invocation, never as persisted state. [`TransactionGate`] is the only
//! path from that side channel to the record store: it checks presence and
//! decodes shape, and keeps the two failures distinct: a missing key is
//! missing, a present-but-malformed payload is invalid, never the reverse.

pub mod error;
pub mod gate;

pub use error::{GateError, GateResult};
pub use gate::{
    TransactionGate, TRANSIENT_CLASS_RECORD, TRANSIENT_PERSONAL, TRANSIENT_RECORD,
};
