//! Audit logging system for passkeep
//!
//! Records create, update and delete operations on the credential store in an
//! append-only JSON-lines log. Entries carry category and username, never
//! passwords.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
