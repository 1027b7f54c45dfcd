//! Application state.

use crate::api::BackupClient;
use crate::backup::{ActivityLog, BackupRequester};
use std::rc::Rc;

/// Which screen is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The backup trigger screen.
    Backup,
    /// The admin dashboard screen.
    Dashboard,
}

/// Top-level application state.
pub struct App {
    pub running: bool,
    pub view: View,
    pub requester: BackupRequester<BackupClient>,
    /// Shared with the requester, which writes notifications into it.
    pub activity: Rc<ActivityLog>,
    /// Backup endpoint URL, shown on the dashboard.
    pub endpoint: String,
}

impl App {
    pub fn new(
        requester: BackupRequester<BackupClient>,
        activity: Rc<ActivityLog>,
        endpoint: String,
    ) -> Self {
        Self {
            running: true,
            view: View::Backup,
            requester,
            activity,
            endpoint,
        }
    }
}
