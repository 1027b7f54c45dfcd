//! Clap config
use crate::config::{BACKUP_HOST, BACKUP_PORT};
use clap::Parser;
use std::path::PathBuf;

/// backup-console - terminal client for triggering database backups.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Backup server host (default: "localhost")
    #[arg(long, default_value = BACKUP_HOST)]
    pub host: String,

    /// Backup server port (default: 8000)
    #[arg(long, default_value_t = BACKUP_PORT)]
    pub port: u16,

    /// Read the access token from this file instead of the system keyring
    #[arg(long, value_name = "PATH")]
    pub token_file: Option<PathBuf>,

    /// Store an access token (in the keyring, or the token file if given) and exit
    #[arg(long, value_name = "TOKEN")]
    pub save_token: Option<String>,
}
