//! Core data models for passkeep
//!
//! - `Account`: a username/password pair
//! - `AccountStore`: categories of accounts held in memory

pub mod account;
pub mod store;

pub use account::Account;
pub use store::{AccountStore, DEFAULT_CATEGORY};
