//! Backup trigger flow.
//!
//! `BackupRequester` owns the whole "press button, send one POST, show
//! the result" cycle: it reads the stored bearer token, calls the backup
//! endpoint, and projects the outcome into a status record plus a
//! notification, always as a matching pair.

pub mod notify;
pub mod requester;
pub mod status;

pub use notify::{ActivityLog, Notification, Notifier};
pub use requester::BackupRequester;
pub use status::{BackupOutcome, Severity, Status};
