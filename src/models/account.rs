//! Account model
//!
//! A single username/password pair stored under a category.

use std::fmt;

/// A stored credential
///
/// Both fields are plain text and may be rewritten in place. Empty strings
/// are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    pub password: String,
}

impl Account {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Username: {}, Password: {}", self.username, self.password)
    }
}
