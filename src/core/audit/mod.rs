//! Append-only security audit trail. Storage partitioning, retention
//! eviction, and the 50ms critical-path budget for synchronous writes are
//! adapter concerns; this module defines the record shape, the
//! synchronous/buffered write-mode classification, and query filters.

mod auth_event;
mod query;

pub use auth_event::{write_mode_for, AuthEvent, WriteMode};
pub use query::AuditQuery;
