//! Audit entry data structures
//!
//! Entries identify the affected account by category and username only.
//! Passwords never appear in the audit log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Account,
    Category,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Account => write!(f, "Account"),
            EntityType::Category => write!(f, "Category"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// Category the operation applied to
    pub category: String,

    /// Username of the affected account, if the entry is about an account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Human-readable change summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl AuditEntry {
    fn new(
        operation: Operation,
        entity_type: EntityType,
        category: impl Into<String>,
        username: Option<String>,
        summary: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            category: category.into(),
            username,
            summary,
        }
    }

    /// Entry for a newly created category
    pub fn category_created(category: impl Into<String>) -> Self {
        Self::new(Operation::Create, EntityType::Category, category, None, None)
    }

    /// Entry for an account appended to a category
    pub fn account_created(category: impl Into<String>, username: impl Into<String>) -> Self {
        Self::new(
            Operation::Create,
            EntityType::Account,
            category,
            Some(username.into()),
            None,
        )
    }

    /// Entry for an account rewritten in place
    pub fn account_updated(
        category: impl Into<String>,
        username: impl Into<String>,
        new_username: &str,
        password_changed: bool,
    ) -> Self {
        let username = username.into();
        let mut changes = Vec::new();
        if username != new_username {
            changes.push(format!("username: {:?} -> {:?}", username, new_username));
        }
        if password_changed {
            changes.push("password changed".to_string());
        }

        let summary = if changes.is_empty() {
            None
        } else {
            Some(changes.join(", "))
        };

        Self::new(
            Operation::Update,
            EntityType::Account,
            category,
            Some(username),
            summary,
        )
    }

    /// Entry for accounts removed from a category
    pub fn accounts_deleted(
        category: impl Into<String>,
        username: impl Into<String>,
        removed: usize,
    ) -> Self {
        Self::new(
            Operation::Delete,
            EntityType::Account,
            category,
            Some(username.into()),
            Some(format!("{} removed", removed)),
        )
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.category
        );

        if let Some(username) = &self.username {
            output.push_str(&format!("/{}", username));
        }

        if let Some(summary) = &self.summary {
            output.push_str(&format!(" ({})", summary));
        }

        output
    }
}
