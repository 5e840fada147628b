//! Fail-closed JSON codec for edurec entity payloads.
//!
//! Student records are compliance-sensitive: a missing grade or
//! classification must surface as an error, never silently default. The
//! entity types carry the shape contract (unknown fields rejected, primitive
//! fields required and non-nullable, nested collections defaulting to
//! empty); [`RecordCodec`] adds the byte-level boundary: empty input is a
//! decode error, and every serde failure is wrapped with the offending
//! context.

pub mod codec;
pub mod error;

pub use codec::RecordCodec;
pub use error::{CodecError, CodecResult};
