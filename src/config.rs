//! Fixed configuration constants.

/// Default backup server host.
pub const BACKUP_HOST: &str = "localhost";

/// Default backup server port.
pub const BACKUP_PORT: u16 = 8000;

/// Path of the backup endpoint on the server.
pub const BACKUP_PATH: &str = "/api/backup/";

/// Service name used for keyring entries.
pub const KEYRING_SERVICE: &str = "backup-console";

/// Key under which the bearer token is stored.
pub const TOKEN_KEY: &str = "access_token";

/// Maximum number of entries kept in the activity log.
pub const ACTIVITY_CAPACITY: usize = 32;

/// Fixed user-facing status messages.
pub mod messages {
    pub const INITIATING: &str = "Initiating database backup...";
    pub const MISSING_TOKEN: &str =
        "Authentication token is missing. Please log in as an admin user.";
    pub const SUCCESS_FALLBACK: &str = "Database backup successfully initiated!";
}
