//! Credential handling for backup-console.
//!
//! The backup endpoint requires a bearer token issued by an external
//! admin login flow. This module only reads (and, for convenience,
//! seeds) that token; it never refreshes or validates it.

pub mod store;

pub use store::{FileTokenStore, KeyringTokenStore, StoreChain, TokenStore};

use crate::config::KEYRING_SERVICE;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Open the token store selected by the CLI.
///
/// With an explicit token file, that file is the only source. Otherwise
/// the system keyring is consulted first, falling back to the default
/// token file for hosts without a secret service.
pub fn open_store(token_file: Option<PathBuf>) -> Box<dyn TokenStore> {
    match token_file {
        Some(path) => Box::new(FileTokenStore::new(path)),
        None => {
            let mut stores: Vec<Box<dyn TokenStore>> =
                vec![Box::new(KeyringTokenStore::new(KEYRING_SERVICE))];
            if let Some(path) = FileTokenStore::default_path() {
                stores.push(Box::new(FileTokenStore::new(path)));
            }
            Box::new(StoreChain::new(stores))
        }
    }
}

/// Persist a token for later backup requests (`--save-token`).
pub fn save_token(token_file: Option<&Path>, token: &str) -> Result<()> {
    match token_file {
        Some(path) => FileTokenStore::new(path.to_path_buf()).save_token(token),
        None => KeyringTokenStore::new(KEYRING_SERVICE).save_token(token),
    }
}
