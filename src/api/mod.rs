//! HTTP interface to the backup server.

pub mod client;

pub use client::{BackupApi, BackupClient, BackupReceipt};
