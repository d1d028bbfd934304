//! Interactive menu
//!
//! A numbered text menu over the credential service. Reads from any
//! `BufRead` and writes to any `Write` so it can be driven from tests.
//! Errors from individual options are printed and the loop continues;
//! end of input behaves like choosing Exit.

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::format_grouped;
use crate::error::{PasskeepError, PasskeepResult};
use crate::services::{password, CredentialService};
use crate::storage::Storage;

const MENU: &str = "\nMenu:\n\
    1. Add a User\n\
    2. Add an Account\n\
    3. Add an Account to a Category\n\
    4. Delete an Account\n\
    5. View Categories\n\
    6. Modify an Account\n\
    7. Save to File\n\
    8. Generate a Password\n\
    9. Exit\n";

/// Outcome of a single menu choice
enum Step {
    Continue,
    Exit,
}

/// Interactive menu state
pub struct Menu<'a, R, W> {
    service: CredentialService<'a>,
    storage: &'a Storage,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(storage: &'a Storage, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            service: CredentialService::new(storage),
            storage,
            settings,
            input,
            output,
        }
    }

    /// Run until the user exits or input ends
    ///
    /// Only a failure to read the menu choice ends the loop early.
    pub fn run(&mut self) -> PasskeepResult<()> {
        writeln!(self.output, "Welcome to passkeep.")?;

        loop {
            write!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                return self.exit();
            };

            let result = match choice.trim() {
                "1" => self.add_user(),
                "2" => self.add_account(),
                "3" => self.add_account_to_category(),
                "4" => self.delete_account(),
                "5" => self.view_categories(),
                "6" => self.modify_account(),
                "7" => self.save(),
                "8" => self.generate_password(),
                "9" => return self.exit(),
                _ => {
                    writeln!(self.output, "Invalid choice. Try again.")?;
                    Ok(Step::Continue)
                }
            };

            for warning in self.storage.take_audit_warnings()? {
                writeln!(self.output, "Warning: {}", warning)?;
            }

            match result {
                Ok(Step::Continue) => {}
                Ok(Step::Exit) => return self.exit(),
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
        }
    }

    fn add_user(&mut self) -> PasskeepResult<Step> {
        let Some(username) = self.prompt("Enter the username for the new user: ")? else {
            return Ok(Step::Exit);
        };
        let Some(password) = self.prompt("Enter the password for the new user: ")? else {
            return Ok(Step::Exit);
        };

        self.service.add_user(&username, &password)?;
        writeln!(self.output, "User added successfully to Default category.")?;
        Ok(Step::Continue)
    }

    fn add_account(&mut self) -> PasskeepResult<Step> {
        let Some(category) = self.prompt("Enter category name: ")? else {
            return Ok(Step::Exit);
        };
        let Some(username) = self.prompt("Enter username: ")? else {
            return Ok(Step::Exit);
        };
        let Some(password) = self.prompt("Enter password: ")? else {
            return Ok(Step::Exit);
        };

        self.service.add_account(&category, &username, &password)?;
        writeln!(self.output, "Account added successfully to category: {}", category)?;
        Ok(Step::Continue)
    }

    fn add_account_to_category(&mut self) -> PasskeepResult<Step> {
        let Some(category) = self.prompt("Enter category name to add an account: ")? else {
            return Ok(Step::Exit);
        };
        if !self.service.category_exists(&category)? {
            return Err(PasskeepError::category_not_found(category));
        }

        let Some(username) = self.prompt("Enter username: ")? else {
            return Ok(Step::Exit);
        };
        let Some(password) = self.prompt("Enter password: ")? else {
            return Ok(Step::Exit);
        };

        self.service.add_to_category(&category, &username, &password)?;
        writeln!(self.output, "Account added to category: {}", category)?;
        Ok(Step::Continue)
    }

    fn delete_account(&mut self) -> PasskeepResult<Step> {
        let Some(category) = self.prompt("Enter category name to delete an account from: ")?
        else {
            return Ok(Step::Exit);
        };
        if !self.service.category_exists(&category)? {
            return Err(PasskeepError::category_not_found(category));
        }

        let Some(username) = self.prompt("Enter username of account to delete: ")? else {
            return Ok(Step::Exit);
        };

        let removed = self.service.delete_account(&category, &username)?;
        writeln!(
            self.output,
            "Account deleted (if it existed). {} removed from category: {}",
            removed, category
        )?;
        Ok(Step::Continue)
    }

    fn view_categories(&mut self) -> PasskeepResult<Step> {
        let listings = self.service.list()?;
        write!(self.output, "{}", format_grouped(&listings))?;
        Ok(Step::Continue)
    }

    fn modify_account(&mut self) -> PasskeepResult<Step> {
        let Some(category) = self.prompt("Enter category name to modify an account: ")? else {
            return Ok(Step::Exit);
        };
        if !self.service.category_exists(&category)? {
            return Err(PasskeepError::category_not_found(category));
        }

        let Some(username) = self.prompt("Enter username of account to modify: ")? else {
            return Ok(Step::Exit);
        };
        if self.service.find(&category, &username)?.is_none() {
            return Err(PasskeepError::account_not_found(&category, &username));
        }

        let Some(new_username) = self.prompt("Enter new username: ")? else {
            return Ok(Step::Exit);
        };
        let Some(new_password) = self.prompt("Enter new password: ")? else {
            return Ok(Step::Exit);
        };

        self.service
            .modify_account(&category, &username, &new_username, &new_password)?;
        writeln!(self.output, "Account updated successfully.")?;
        Ok(Step::Continue)
    }

    fn save(&mut self) -> PasskeepResult<Step> {
        self.service.save()?;
        writeln!(
            self.output,
            "Accounts saved to {}.",
            self.storage.store_path().display()
        )?;
        Ok(Step::Continue)
    }

    fn generate_password(&mut self) -> PasskeepResult<Step> {
        let default_length = self.settings.password_length;
        let Some(answer) = self.prompt(&format!("Password length [{}]: ", default_length))? else {
            return Ok(Step::Exit);
        };

        let length = parse_length(&answer, default_length)?;
        let generated = password::generate(length)?;
        writeln!(self.output, "Generated Password: {}", generated)?;
        Ok(Step::Continue)
    }

    fn exit(&mut self) -> PasskeepResult<()> {
        if self.storage.has_unsaved_changes()? {
            writeln!(self.output, "Unsaved changes were discarded.")?;
        }
        writeln!(self.output, "Exiting passkeep. Goodbye!")?;
        Ok(())
    }

    /// Print a prompt and read one line; `None` at end of input
    ///
    /// Only the line terminator is stripped so values keep their spaces.
    fn prompt(&mut self, prompt: &str) -> PasskeepResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

/// Parse a requested password length, using `default` for blank input
///
/// Lengths above [`password::MAX_LENGTH`] are rejected.
pub fn parse_length(answer: &str, default: usize) -> PasskeepResult<usize> {
    let answer = answer.trim();
    if answer.is_empty() {
        return password::check_length(default);
    }

    let length = answer.parse().map_err(|_| {
        PasskeepError::Validation(format!("Invalid password length: '{}'", answer))
    })?;
    password::check_length(length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditLogger;
    use crate::models::Account;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_script(storage: &Storage, script: &str) -> String {
        let settings = Settings::default();
        let mut output = Vec::new();
        Menu::new(storage, &settings, Cursor::new(script.as_bytes()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn create_test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(temp_dir.path().join("accounts.txt"), None);
        (storage, temp_dir)
    }

    #[test]
    fn test_add_and_view() {
        let (storage, _temp) = create_test_storage();

        let output = run_script(&storage, "2\nEmail\nalice\npw 1\n5\n9\n");

        assert!(output.contains("Account added successfully to category: Email"));
        assert!(output.contains("Category: Email\n\tUsername: alice, Password: pw 1\n"));
        assert!(output.contains("Unsaved changes were discarded."));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_add_user_and_save() {
        let (storage, temp) = create_test_storage();

        let output = run_script(&storage, "1\nbob\npw2\n7\n9\n");

        assert!(output.contains("User added successfully to Default category."));
        assert!(!output.contains("Unsaved changes"));
        assert_eq!(
            std::fs::read_to_string(temp.path().join("accounts.txt")).unwrap(),
            "Category: Default\nbob,pw2\n"
        );
    }

    #[test]
    fn test_audit_failure_reported_as_warning() {
        let temp_dir = TempDir::new().unwrap();
        let audit_path = temp_dir.path().join("audit.log");
        std::fs::create_dir(&audit_path).unwrap();
        let storage = Storage::new(
            temp_dir.path().join("accounts.txt"),
            Some(AuditLogger::new(audit_path)),
        );

        let output = run_script(&storage, "2\nEmail\nalice\npw\n9\n");

        assert!(output.contains("Account added successfully to category: Email"));
        assert!(output.contains("Warning: Audit log not updated"));
        assert!(!output.contains("Error:"));
        assert_eq!(storage.read(|s| s.account_count()).unwrap(), 1);
    }

    #[test]
    fn test_missing_category_reported() {
        let (storage, _temp) = create_test_storage();

        let output = run_script(&storage, "3\nNowhere\n4\nNowhere\n6\nNowhere\n9\n");

        assert_eq!(output.matches("Category not found: Nowhere").count(), 3);
        assert!(storage.read(|s| s.is_empty()).unwrap());
    }

    #[test]
    fn test_delete_and_modify() {
        let (storage, _temp) = create_test_storage();
        storage
            .write(|s| {
                s.add_account("Email", "alice", "pw1");
                s.add_account("Email", "bob", "pw2");
                s.add_account("Email", "bob", "pw3");
                Ok(())
            })
            .unwrap();

        let output = run_script(&storage, "4\nEmail\nalice\n6\nEmail\nbob\nrobert\nnew\n9\n");

        assert!(output.contains("1 removed from category: Email"));
        assert!(output.contains("Account updated successfully."));
        let accounts = storage
            .read(|s| s.accounts("Email").unwrap().to_vec())
            .unwrap();
        assert_eq!(
            accounts,
            vec![Account::new("robert", "new"), Account::new("bob", "pw3")]
        );
    }

    #[test]
    fn test_modify_unknown_account() {
        let (storage, _temp) = create_test_storage();
        storage
            .write(|s| {
                s.add_account("Email", "alice", "pw1");
                Ok(())
            })
            .unwrap();

        let output = run_script(&storage, "6\nEmail\nzed\n9\n");

        assert!(output.contains("Account not found: Email/zed"));
    }

    #[test]
    fn test_generate_password() {
        let (storage, _temp) = create_test_storage();

        let output = run_script(&storage, "8\n30\n8\n\n8\nabc\n9\n");

        let generated: Vec<&str> = output
            .lines()
            .filter_map(|l| l.split("Generated Password: ").nth(1))
            .collect();
        assert_eq!(generated.len(), 2);
        assert_eq!(generated[0].len(), 30);
        assert_eq!(generated[1].len(), 12);
        assert!(output.contains("Invalid password length: 'abc'"));
    }

    #[test]
    fn test_oversized_length_keeps_menu_running() {
        let (storage, _temp) = create_test_storage();

        let output = run_script(&storage, "8\n18446744073709551615\n8\n10000000000000\n8\n5\n9\n");

        assert_eq!(output.matches("exceeds the maximum").count(), 2);
        assert!(output.contains("Generated Password: "));
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_invalid_choice_and_eof() {
        let (storage, _temp) = create_test_storage();

        let output = run_script(&storage, "x\n42\n");

        assert_eq!(output.matches("Invalid choice. Try again.").count(), 2);
        assert!(output.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("", 12).unwrap(), 12);
        assert_eq!(parse_length(" 30 ", 12).unwrap(), 30);
        assert!(parse_length("-1", 12).is_err());
        assert!(parse_length("18446744073709551615", 12).is_err());
        assert!(parse_length("", usize::MAX).is_err());
    }
}
