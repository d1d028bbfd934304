//! Account store model
//!
//! Maps category names to ordered lists of accounts. Categories are created
//! implicitly by [`AccountStore::add_account`] and are never removed, even when
//! their last account is deleted.

use std::collections::BTreeMap;

use super::account::Account;
use crate::error::{PasskeepError, PasskeepResult};

/// Category used by the "add user" operation
pub const DEFAULT_CATEGORY: &str = "Default";

/// In-memory collection of categorized accounts
///
/// Categories iterate in name order. Accounts within a category keep their
/// insertion order, and duplicate usernames are permitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountStore {
    categories: BTreeMap<String, Vec<Account>>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an account, creating the category if it doesn't exist yet
    pub fn add_account(
        &mut self,
        category: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) {
        self.categories
            .entry(category.into())
            .or_default()
            .push(Account::new(username, password));
    }

    /// Append an account to a category that must already exist
    pub fn add_to_category(
        &mut self,
        category: &str,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> PasskeepResult<()> {
        let accounts = self
            .categories
            .get_mut(category)
            .ok_or_else(|| PasskeepError::category_not_found(category))?;

        accounts.push(Account::new(username, password));
        Ok(())
    }

    /// Create an empty category if it isn't present
    pub fn ensure_category(&mut self, category: impl Into<String>) {
        self.categories.entry(category.into()).or_default();
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Remove every account in `category` whose username matches exactly
    ///
    /// Returns how many accounts were removed. Zero matches is still a
    /// success once the category exists.
    pub fn delete_account(&mut self, category: &str, username: &str) -> PasskeepResult<usize> {
        let accounts = self
            .categories
            .get_mut(category)
            .ok_or_else(|| PasskeepError::category_not_found(category))?;

        let before = accounts.len();
        accounts.retain(|a| a.username != username);
        Ok(before - accounts.len())
    }

    /// Rewrite the first account matching `username`; later duplicates are untouched
    pub fn modify_account(
        &mut self,
        category: &str,
        username: &str,
        new_username: impl Into<String>,
        new_password: impl Into<String>,
    ) -> PasskeepResult<()> {
        let accounts = self
            .categories
            .get_mut(category)
            .ok_or_else(|| PasskeepError::category_not_found(category))?;

        let account = accounts
            .iter_mut()
            .find(|a| a.username == username)
            .ok_or_else(|| PasskeepError::account_not_found(category, username))?;

        account.username = new_username.into();
        account.password = new_password.into();
        Ok(())
    }

    /// Get the accounts of a category in insertion order
    pub fn accounts(&self, category: &str) -> Option<&[Account]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Find the first account with a matching username
    pub fn find_account(&self, category: &str, username: &str) -> Option<&Account> {
        self.categories
            .get(category)?
            .iter()
            .find(|a| a.username == username)
    }

    /// Iterate over all categories and their accounts
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Account])> {
        self.categories
            .iter()
            .map(|(name, accounts)| (name.as_str(), accounts.as_slice()))
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// Total number of accounts across all categories
    pub fn account_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
