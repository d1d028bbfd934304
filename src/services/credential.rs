//! Credential service
//!
//! Business operations over the account store: adding, finding, deleting and
//! modifying accounts, with every successful mutation recorded in the audit log.
//! A failed audit write never undoes or fails the mutation; it surfaces through
//! [`Storage::take_audit_warnings`].

use crate::audit::AuditEntry;
use crate::error::PasskeepResult;
use crate::models::{Account, DEFAULT_CATEGORY};
use crate::storage::Storage;

/// Service for credential management
pub struct CredentialService<'a> {
    storage: &'a Storage,
}

/// A category and a snapshot of its accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListing {
    pub name: String,
    pub accounts: Vec<Account>,
}

impl<'a> CredentialService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add an account to the "Default" category
    pub fn add_user(&self, username: &str, password: &str) -> PasskeepResult<()> {
        self.add_account(DEFAULT_CATEGORY, username, password)
    }

    /// Add an account, creating the category if needed
    pub fn add_account(&self, category: &str, username: &str, password: &str) -> PasskeepResult<()> {
        let created_category = self.storage.write(|store| {
            let is_new = !store.contains_category(category);
            store.add_account(category, username, password);
            Ok(is_new)
        })?;

        if created_category {
            self.storage.log(AuditEntry::category_created(category));
        }
        self.storage.log(AuditEntry::account_created(category, username));
        Ok(())
    }

    /// Add an account to a category that must already exist
    pub fn add_to_category(
        &self,
        category: &str,
        username: &str,
        password: &str,
    ) -> PasskeepResult<()> {
        self.storage
            .write(|store| store.add_to_category(category, username, password))?;

        self.storage.log(AuditEntry::account_created(category, username));
        Ok(())
    }

    pub fn category_exists(&self, category: &str) -> PasskeepResult<bool> {
        self.storage.read(|store| store.contains_category(category))
    }

    /// Delete every account named `username` in `category`
    ///
    /// Returns the number of accounts removed, which may be zero.
    pub fn delete_account(&self, category: &str, username: &str) -> PasskeepResult<usize> {
        let removed = self
            .storage
            .write(|store| store.delete_account(category, username))?;

        if removed > 0 {
            self.storage
                .log(AuditEntry::accounts_deleted(category, username, removed));
        }

        Ok(removed)
    }

    /// Rewrite the first account named `username` in `category`
    pub fn modify_account(
        &self,
        category: &str,
        username: &str,
        new_username: &str,
        new_password: &str,
    ) -> PasskeepResult<()> {
        let password_changed = self.storage.write(|store| {
            let changed = store
                .find_account(category, username)
                .map(|a| a.password != new_password)
                .unwrap_or(false);
            store.modify_account(category, username, new_username, new_password)?;
            Ok(changed)
        })?;

        self.storage.log(AuditEntry::account_updated(
            category,
            username,
            new_username,
            password_changed,
        ));
        Ok(())
    }

    /// Find the first account named `username` in `category`
    pub fn find(&self, category: &str, username: &str) -> PasskeepResult<Option<Account>> {
        self.storage
            .read(|store| store.find_account(category, username).cloned())
    }

    /// Snapshot every category with its accounts
    pub fn list(&self) -> PasskeepResult<Vec<CategoryListing>> {
        self.storage.read(|store| {
            store
                .iter()
                .map(|(name, accounts)| CategoryListing {
                    name: name.to_string(),
                    accounts: accounts.to_vec(),
                })
                .collect()
        })
    }

    /// Total number of stored accounts
    pub fn account_count(&self) -> PasskeepResult<usize> {
        self.storage.read(|store| store.account_count())
    }

    /// Persist the store, overwriting the store file
    pub fn save(&self) -> PasskeepResult<()> {
        self.storage.save()
    }
}
