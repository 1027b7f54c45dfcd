//! Token stores: where the bearer token lives between sessions.

use crate::config::TOKEN_KEY;
use crate::error::{ConsoleError, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Read access to a previously stored bearer token.
///
/// A missing token is an expected state, not an error: the backup flow
/// short-circuits on `None` before making any network call. Store-level
/// failures (locked keyring, unreadable file) are logged and read as
/// absent for the same reason.
pub trait TokenStore {
    /// The stored token, if any.
    fn access_token(&self) -> Option<String>;
}

/// Token store backed by the system keyring.
#[derive(Debug)]
pub struct KeyringTokenStore {
    service: String,
}

impl KeyringTokenStore {
    pub fn new(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    fn entry(&self) -> Result<keyring::Entry> {
        keyring::Entry::new(&self.service, TOKEN_KEY)
            .map_err(|e| ConsoleError::Keyring(e.to_string()))
    }

    /// Store a token in the keyring.
    pub fn save_token(&self, token: &str) -> Result<()> {
        self.entry()?
            .set_password(token)
            .map_err(|e| ConsoleError::Keyring(e.to_string()))?;
        info!("Token stored in system keyring");
        Ok(())
    }
}

impl TokenStore for KeyringTokenStore {
    fn access_token(&self) -> Option<String> {
        let entry = match self.entry() {
            Ok(entry) => entry,
            Err(e) => {
                error!("Keyring unavailable: {}", e);
                return None;
            }
        };

        match entry.get_password() {
            Ok(token) => {
                debug!("Loaded token from keyring");
                Some(token)
            }
            Err(keyring::Error::NoEntry) => {
                debug!("No token in keyring");
                None
            }
            Err(e) => {
                error!("Failed to read token from keyring: {}", e);
                None
            }
        }
    }
}

/// Token store backed by a plain file holding the token on one line.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default token file location under the user's config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("backup-console").join(TOKEN_KEY))
    }

    /// Store a token in the file, creating parent directories as needed.
    pub fn save_token(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        info!("Token stored in {}", self.path.display());
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn access_token(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    debug!("Token file {} is empty", self.path.display());
                    None
                } else {
                    debug!("Loaded token from {}", self.path.display());
                    Some(token.to_string())
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                error!("Failed to read token file {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

/// Tries a sequence of stores; the first token found wins.
pub struct StoreChain {
    stores: Vec<Box<dyn TokenStore>>,
}

impl StoreChain {
    pub fn new(stores: Vec<Box<dyn TokenStore>>) -> Self {
        Self { stores }
    }
}

impl TokenStore for StoreChain {
    fn access_token(&self) -> Option<String> {
        self.stores.iter().find_map(|store| store.access_token())
    }
}
