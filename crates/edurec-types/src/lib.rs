//! Foundation types for edurec.
//!
//! This crate provides the entity model, tenant scoping, and error taxonomy
//! used throughout the edurec system. Every other edurec crate depends on
//! `edurec-types`.
//!
//! # Key Types
//!
//! - [`Personal`] — A student's personal profile (private partition)
//! - [`Record`] — A student's academic record aggregate (public partition)
//! - [`ClassRecord`] / [`Subject`] / [`Classification`] — Nested record values
//! - [`RecordHistory`] — One reconstructed entry of a record's mutation log
//! - [`TenantScope`] — The owning organization (and optionally caller identity)
//! - [`EntityKind`] — The addressable entity kinds
//! - [`AssetError`] — The caller-facing error taxonomy

pub mod error;
pub mod history;
pub mod personal;
pub mod record;
pub mod tenant;

pub use error::{AssetCode, AssetError};
pub use history::RecordHistory;
pub use personal::{Personal, PersonalMap};
pub use record::{ClassRecord, Classification, Record, RecordMap, Subject};
pub use tenant::{EntityKind, TenantScope};
