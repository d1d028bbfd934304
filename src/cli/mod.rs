//! CLI command handlers
//!
//! Bridges clap argument parsing and the interactive menu with the service
//! layer.

pub mod commands;
pub mod config;
pub mod menu;

pub use commands::{handle_credential_command, CredentialCommands};
pub use config::{handle_config_command, ConfigArgs};
pub use menu::Menu;
