use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn passkeep(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("passkeep").unwrap();
    cmd.env("PASSKEEP_DATA_DIR", data_dir.path())
        .env_remove("PASSKEEP_FILE");
    cmd
}

#[test]
fn test_add_then_list() {
    let dir = TempDir::new().unwrap();

    passkeep(&dir)
        .args(["add", "Email", "alice", "pw1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added alice to category: Email"));

    passkeep(&dir)
        .args(["add", "Email", "bob", "pw2"])
        .assert()
        .success();

    passkeep(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Category: Email\n\tUsername: alice, Password: pw1\n\tUsername: bob, Password: pw2\n",
        ));

    assert_eq!(
        fs::read_to_string(dir.path().join("accounts.txt")).unwrap(),
        "Category: Email\nalice,pw1\nbob,pw2\n"
    );
}

#[test]
fn test_delete_missing_category_fails() {
    let dir = TempDir::new().unwrap();

    passkeep(&dir)
        .args(["delete", "Nonexistent", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category not found: Nonexistent"));

    assert!(!dir.path().join("accounts.txt").exists());
}

#[test]
fn test_delete_and_modify() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("accounts.txt"),
        "Category: Email\nalice,pw1\nbob,pw2\nbob,pw3\n",
    )
    .unwrap();

    passkeep(&dir)
        .args(["delete", "Email", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 account(s)"));

    passkeep(&dir)
        .args(["modify", "Email", "bob", "--new-password", "changed"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("accounts.txt")).unwrap(),
        "Category: Email\nbob,changed\nbob,pw3\n"
    );
}

#[test]
fn test_add_to_requires_category() {
    let dir = TempDir::new().unwrap();

    passkeep(&dir)
        .args(["add-to", "Bank", "alice", "secret"])
        .assert()
        .failure();

    passkeep(&dir)
        .args(["add-user", "carol", "pw"])
        .assert()
        .success();

    passkeep(&dir)
        .args(["add-to", "Default", "dave", "pw"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(dir.path().join("accounts.txt")).unwrap(),
        "Category: Default\ncarol,pw\ndave,pw\n"
    );
}

#[test]
fn test_generate_length() {
    let dir = TempDir::new().unwrap();

    passkeep(&dir)
        .args(["generate", "--length", "30"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[A-Za-z0-9!@#$%^&*()]{30}\n$").unwrap());
}

#[test]
fn test_menu_session_saves() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("accounts.txt"), "Category: Bank\nalice,secret\n").unwrap();

    passkeep(&dir)
        .write_stdin("2\nMail\nbob\npw2\n7\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Accounts loaded from"))
        .stdout(predicate::str::contains("Goodbye!"));

    assert_eq!(
        fs::read_to_string(dir.path().join("accounts.txt")).unwrap(),
        "Category: Bank\nalice,secret\nCategory: Mail\nbob,pw2\n"
    );
}

#[test]
fn test_custom_store_file_and_history() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("custom.txt");

    passkeep(&dir)
        .args(["--file", store.to_str().unwrap(), "add", "Web", "eve", "pw"])
        .assert()
        .success();

    assert!(store.exists());
    assert!(!dir.path().join("accounts.txt").exists());

    passkeep(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Category Web"))
        .stdout(predicate::str::contains("CREATE Account Web/eve"))
        .stdout(predicate::str::contains("pw").not());
}

#[test]
fn test_generate_rejects_oversized_length() {
    let dir = TempDir::new().unwrap();

    passkeep(&dir)
        .args(["generate", "--length", "5000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum"));
}

#[test]
fn test_config_updates_settings() {
    let dir = TempDir::new().unwrap();

    passkeep(&dir)
        .args(["config", "--password-length", "20", "--audit", "off"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved"))
        .stdout(predicate::str::contains("Password length: 20"))
        .stdout(predicate::str::contains("Audit enabled:   false"));

    passkeep(&dir)
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[A-Za-z0-9!@#$%^&*()]{20}\n$").unwrap());

    passkeep(&dir)
        .args(["add", "Bank", "alice", "secret"])
        .assert()
        .success();
    assert!(!dir.path().join("audit.log").exists());

    passkeep(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved").not())
        .stdout(predicate::str::contains("Password length: 20"));
}
