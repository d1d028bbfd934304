//! Service layer for passkeep
//!
//! Business logic sitting between the CLI and the storage layer.

pub mod credential;
pub mod password;

pub use credential::{CategoryListing, CredentialService};
