//! Configuration CLI command
//!
//! Shows the resolved paths and settings, and updates persisted settings.

use std::path::Path;

use clap::{Args, ValueEnum};

use super::commands::parse_length_arg;
use crate::config::{PasskeepPaths, Settings};
use crate::error::PasskeepResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl From<Toggle> for bool {
    fn from(toggle: Toggle) -> Self {
        toggle == Toggle::On
    }
}

/// Arguments for the `config` command
#[derive(Debug, Default, Args)]
pub struct ConfigArgs {
    /// Default length for generated passwords
    #[arg(long, value_parser = parse_length_arg)]
    pub password_length: Option<usize>,

    /// Record create/update/delete operations in the audit log
    #[arg(long, value_enum)]
    pub audit: Option<Toggle>,
}

impl ConfigArgs {
    fn is_update(&self) -> bool {
        self.password_length.is_some() || self.audit.is_some()
    }
}

/// Handle the `config` command
///
/// Any given option is written to the settings file before the current
/// configuration is printed. Changes take effect on the next run.
pub fn handle_config_command(
    paths: &PasskeepPaths,
    settings: &mut Settings,
    store_path: &Path,
    args: ConfigArgs,
) -> PasskeepResult<()> {
    if args.is_update() {
        apply_config_args(settings, &args);
        settings.save(paths)?;
        println!("Settings saved to {}.", paths.settings_file().display());
        println!();
    }

    print!("{}", format_config(paths, settings, store_path));
    Ok(())
}

fn apply_config_args(settings: &mut Settings, args: &ConfigArgs) {
    if let Some(length) = args.password_length {
        settings.password_length = length;
    }
    if let Some(audit) = args.audit {
        settings.audit_enabled = audit.into();
    }
}

fn format_config(paths: &PasskeepPaths, settings: &Settings, store_path: &Path) -> String {
    let mut output = String::new();
    output.push_str("passkeep Configuration\n");
    output.push_str("======================\n");
    output.push_str(&format!("Data directory: {}\n", paths.base_dir().display()));
    output.push_str(&format!("Store file:     {}\n", store_path.display()));
    output.push_str(&format!("Settings file:  {}\n", paths.settings_file().display()));
    output.push_str(&format!("Audit log:      {}\n", paths.audit_log().display()));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Password length: {}\n", settings.password_length));
    output.push_str(&format!("  Audit enabled:   {}\n", settings.audit_enabled));
    output
}
