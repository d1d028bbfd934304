use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use passkeep::cli::{
    handle_config_command, handle_credential_command, ConfigArgs, CredentialCommands, Menu,
};
use passkeep::config::{PasskeepPaths, Settings};
use passkeep::storage::Storage;

#[derive(Parser)]
#[command(
    name = "passkeep",
    version,
    about = "Categorized credential organizer with flat-file storage",
    long_about = "passkeep keeps username/password records grouped by category \
                  in a plain text file. Run without a subcommand for the \
                  interactive menu. Passwords are stored unencrypted."
)]
struct Cli {
    /// Store file to use instead of accounts.txt in the data directory
    #[arg(short, long, global = true, env = "PASSKEEP_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu
    Menu,

    #[command(flatten)]
    Credential(CredentialCommands),

    /// Show current configuration and paths, or update settings
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PasskeepPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    let storage = Storage::from_config(&paths, &settings, cli.file)?;

    match cli.command {
        None | Some(Commands::Menu) => {
            // A failed load leaves the store empty and the menu usable
            match storage.load() {
                Ok(report) if report.file_found => {
                    println!("Accounts loaded from {}.", storage.store_path().display());
                    if report.skipped_lines > 0 {
                        println!("Skipped {} malformed line(s).", report.skipped_lines);
                    }
                }
                Ok(_) => {}
                Err(e) => eprintln!("An error occurred while loading from file: {}", e),
            }

            let stdin = io::stdin();
            Menu::new(&storage, &settings, stdin.lock(), io::stdout()).run()?;
        }
        Some(Commands::Credential(cmd)) => {
            storage.load().with_context(|| {
                format!("Failed to load {}", storage.store_path().display())
            })?;
            handle_credential_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Config(args)) => {
            handle_config_command(&paths, &mut settings, storage.store_path(), args)?;
        }
    }

    Ok(())
}
