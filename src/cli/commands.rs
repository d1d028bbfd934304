//! Non-interactive CLI commands
//!
//! The store is loaded once by `main`; each mutating command applies one
//! change and saves the store before returning.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_grouped, format_table};
use crate::error::{PasskeepError, PasskeepResult};
use crate::services::{password, CredentialService};
use crate::storage::Storage;

/// Credential subcommands
#[derive(Subcommand)]
pub enum CredentialCommands {
    /// Add an account, creating the category if needed
    Add {
        /// Category name
        category: String,
        /// Account username
        username: String,
        /// Account password (generated if omitted)
        password: Option<String>,
    },
    /// Add an account to the Default category
    AddUser {
        username: String,
        /// Account password (generated if omitted)
        password: Option<String>,
    },
    /// Add an account to a category that already exists
    AddTo {
        category: String,
        username: String,
        /// Account password (generated if omitted)
        password: Option<String>,
    },
    /// Delete every account with the given username from a category
    Delete { category: String, username: String },
    /// Change the first account with the given username in a category
    Modify {
        category: String,
        username: String,
        /// Replacement username
        #[arg(long)]
        new_username: Option<String>,
        /// Replacement password
        #[arg(long)]
        new_password: Option<String>,
    },
    /// List all categories and accounts
    List {
        /// Show a single table instead of grouped output
        #[arg(short, long)]
        table: bool,
    },
    /// Generate a random password
    Generate {
        /// Password length (defaults to the configured length)
        #[arg(short, long, value_parser = parse_length_arg)]
        length: Option<usize>,
    },
    /// Show recent audit log entries
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
}

/// Parse `--length`, rejecting values above the generator's maximum
pub fn parse_length_arg(value: &str) -> Result<usize, String> {
    let length: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a valid length", value))?;
    password::check_length(length).map_err(|e| e.to_string())
}

/// Handle a credential command
pub fn handle_credential_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CredentialCommands,
) -> PasskeepResult<()> {
    let service = CredentialService::new(storage);
    let fill_password = |given: Option<String>| match given {
        Some(value) => Ok(value),
        None => password::generate(settings.password_length),
    };

    match cmd {
        CredentialCommands::Add {
            category,
            username,
            password,
        } => {
            let password = fill_password(password)?;
            service.add_account(&category, &username, &password)?;
            service.save()?;
            println!("Added {} to category: {}", username, category);
            println!("  Password: {}", password);
        }

        CredentialCommands::AddUser { username, password } => {
            let password = fill_password(password)?;
            service.add_user(&username, &password)?;
            service.save()?;
            println!("Added {} to the Default category", username);
            println!("  Password: {}", password);
        }

        CredentialCommands::AddTo {
            category,
            username,
            password,
        } => {
            let password = fill_password(password)?;
            service.add_to_category(&category, &username, &password)?;
            service.save()?;
            println!("Added {} to category: {}", username, category);
            println!("  Password: {}", password);
        }

        CredentialCommands::Delete { category, username } => {
            let removed = service.delete_account(&category, &username)?;
            service.save()?;
            println!("Removed {} account(s) from category: {}", removed, category);
        }

        CredentialCommands::Modify {
            category,
            username,
            new_username,
            new_password,
        } => {
            if !service.category_exists(&category)? {
                return Err(PasskeepError::category_not_found(category));
            }
            let current = service
                .find(&category, &username)?
                .ok_or_else(|| PasskeepError::account_not_found(&category, &username))?;

            if new_username.is_none() && new_password.is_none() {
                println!("No changes specified. Use --new-username or --new-password.");
                return Ok(());
            }

            let new_username = new_username.unwrap_or(current.username);
            let new_password = new_password.unwrap_or(current.password);
            service.modify_account(&category, &username, &new_username, &new_password)?;
            service.save()?;
            println!("Updated account: {}/{}", category, new_username);
        }

        CredentialCommands::List { table } => {
            let listings = service.list()?;
            if table {
                print!("{}", format_table(&listings));
            } else {
                print!("{}", format_grouped(&listings));
            }
        }

        CredentialCommands::Generate { length } => {
            let length = length.unwrap_or(settings.password_length);
            println!("{}", password::generate(length)?);
        }

        CredentialCommands::History { limit } => match storage.audit_logger() {
            Some(logger) => {
                let entries = logger.read_recent(limit)?;
                if entries.is_empty() {
                    println!("No audit entries.");
                }
                for entry in entries {
                    println!("{}", entry.format_human_readable());
                }
            }
            None => println!("Audit logging is disabled."),
        },
    }

    for warning in storage.take_audit_warnings()? {
        eprintln!("Warning: {}", warning);
    }

    Ok(())
}
