//! passkeep - categorized credential organizer
//!
//! Holds username/password records grouped by category, edits them through
//! simple CRUD operations, generates random passwords, and persists everything
//! to a line-oriented text file. Passwords are stored in plain text.
//!
//! # Architecture
//!
//! - `config`: Data directory and settings
//! - `error`: Custom error types
//! - `models`: `Account` and the in-memory `AccountStore`
//! - `storage`: Store file format, atomic file writes, and the `Storage` coordinator
//! - `audit`: Append-only audit log of store mutations
//! - `services`: Credential operations and password generation
//! - `display`: Terminal formatting
//! - `cli`: clap subcommands and the interactive menu
//!
//! # Example
//!
//! ```rust,ignore
//! use passkeep::models::AccountStore;
//! use passkeep::storage::{deserialize, serialize};
//!
//! let mut store = AccountStore::new();
//! store.add_account("Email", "alice", "pw1");
//! let text = serialize(&store);
//! assert_eq!(deserialize(&text).store, store);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::PasskeepError;
