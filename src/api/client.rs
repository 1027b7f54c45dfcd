//! Backup endpoint client.
//!
//! One operation: trigger a server-side database backup with a single
//! authenticated POST. The server answers 2xx with an optional `message`
//! field, or an error status with an optional `error` field.

use crate::config::BACKUP_PATH;
use crate::error::{ConsoleError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Interface to the backup endpoint.
///
/// The requester is generic over this trait so tests can substitute a
/// fake that never touches the network.
pub trait BackupApi {
    /// Trigger a backup, authenticating with the given bearer token.
    async fn trigger_backup(&self, token: &str) -> Result<BackupReceipt>;
}

/// Success response body from the backup endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupReceipt {
    /// Human-readable confirmation from the server, if it sent one.
    pub message: Option<String>,
}

/// Error response body from the backup endpoint.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// HTTP client for the backup server.
#[derive(Debug, Clone)]
pub struct BackupClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackupClient {
    /// Create a client for the backup server at `host:port`.
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: format!("http://{}:{}", host, port),
        }
    }

    /// Full URL of the backup endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, BACKUP_PATH)
    }
}

impl BackupApi for BackupClient {
    async fn trigger_backup(&self, token: &str) -> Result<BackupReceipt> {
        let endpoint = self.endpoint();
        debug!("POST {}", endpoint);

        let response = self
            .http
            .post(&endpoint)
            .bearer_auth(token)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let receipt = response.json::<BackupReceipt>().await?;
            info!("Backup accepted by server");
            return Ok(receipt);
        }

        debug!("Backup request rejected with status {}", status);
        let body = response.json::<ErrorBody>().await.unwrap_or_default();
        match body.error {
            Some(message) => Err(ConsoleError::Server(message)),
            None => Err(ConsoleError::Status(status)),
        }
    }
}
