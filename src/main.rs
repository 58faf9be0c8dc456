//! Phonebook - Main entry point
//!
//! Loads the phonebook, runs the console menu on stdin/stdout, and saves
//! once on exit.

use anyhow::Result;
use phonebook::console::Console;
use phonebook::repositories::JsonFileRepository;
use phonebook::{Config, DirectoryRepository, PhonebookService};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL from .env is honoured
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());

    // Initialize logging (stderr only so stdout stays the console)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Opening phonebook at {} (save policy: {:?})",
        config.phonebook_path.display(),
        config.save_policy
    );

    let repository = JsonFileRepository::new(config.phonebook_path.clone());
    let mut service = PhonebookService::open(Box::new(repository), config.save_policy);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = Console::new(&mut service, stdin.lock(), stdout.lock()).run();
    if let Err(e) = &session {
        error!("Console session ended with error: {}", e);
    }

    // Shutdown hook: the final save runs even if the session failed
    if let Err(e) = service.shutdown() {
        let rescue = JsonFileRepository::new(rescue_path(&config.phonebook_path));
        match rescue.save(&e.directory) {
            Ok(()) => eprintln!(
                "Could not save phonebook to {}. Contacts were written to {} instead.",
                config.phonebook_path.display(),
                rescue.path().display()
            ),
            Err(rescue_err) => error!("Rescue save failed: {}", rescue_err),
        }
        return Err(e.into());
    }
    println!("Phonebook saved to {}.", config.phonebook_path.display());

    session
}

/// Fallback file for a directory whose final save failed.
fn rescue_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".rescue");
    PathBuf::from(name)
}
