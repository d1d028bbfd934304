//! Credential display formatting
//!
//! Formats category listings for terminal output, either grouped under
//! category headings or as a single table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::services::CategoryListing;

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Password")]
    password: String,
}

/// Format categories with their accounts indented beneath each heading
pub fn format_grouped(listings: &[CategoryListing]) -> String {
    let mut output = String::from("Categories and Accounts:\n");

    for listing in listings {
        output.push_str(&format!("Category: {}\n", listing.name));
        for account in &listing.accounts {
            output.push_str(&format!("\t{}\n", account));
        }
    }

    output
}

/// Format every account as a row in a table
pub fn format_table(listings: &[CategoryListing]) -> String {
    let rows: Vec<AccountRow> = listings
        .iter()
        .flat_map(|listing| {
            listing.accounts.iter().map(move |account| AccountRow {
                category: listing.name.clone(),
                username: account.username.clone(),
                password: account.password.clone(),
            })
        })
        .collect();

    if rows.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let mut table = Table::new(rows);
    table.with(Style::modern());
    format!("{}\n", table)
}
