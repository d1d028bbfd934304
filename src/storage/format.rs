//! Line-oriented store file format
//!
//! ```text
//! Category: Bank
//! alice,secret
//! Category: Mail
//! bob,pw2
//! ```
//!
//! Account lines split on the first comma only, so passwords may contain
//! commas but usernames may not. A username starting with `Category: ` is
//! read back as a category header. Category names and values containing
//! newlines are not representable, and a value ending in `\r` loses it on
//! load because `\r\n` is treated as a line ending. None of these
//! restrictions is checked on save.

use crate::models::AccountStore;

/// Prefix that marks a category header line
pub const CATEGORY_PREFIX: &str = "Category: ";

/// Result of parsing a store file
#[derive(Debug, Default)]
pub struct ParsedStore {
    pub store: AccountStore,
    /// Non-blank lines that were ignored (no category yet, or no comma)
    pub skipped_lines: usize,
}

/// Render the store in the line-oriented file format
pub fn serialize(store: &AccountStore) -> String {
    let mut output = String::new();

    for (category, accounts) in store.iter() {
        output.push_str(CATEGORY_PREFIX);
        output.push_str(category);
        output.push('\n');

        for account in accounts {
            output.push_str(&account.username);
            output.push(',');
            output.push_str(&account.password);
            output.push('\n');
        }
    }

    output
}

/// Parse the line-oriented file format
///
/// Malformed lines are skipped rather than rejected.
pub fn deserialize(text: &str) -> ParsedStore {
    let mut parsed = ParsedStore::default();
    let mut current: Option<&str> = None;

    for line in text.lines() {
        if let Some(name) = line.strip_prefix(CATEGORY_PREFIX) {
            parsed.store.ensure_category(name);
            current = Some(name);
            continue;
        }

        if line.trim().is_empty() {
            continue;
        }

        match (current, line.split_once(',')) {
            (Some(category), Some((username, password))) => {
                parsed.store.add_account(category, username, password);
            }
            _ => parsed.skipped_lines += 1,
        }
    }

    parsed
}
