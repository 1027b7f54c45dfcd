//! Notification sink for status transitions.

use super::status::Severity;
use std::cell::RefCell;
use tracing::info;

/// External notification sink, injected by the surrounding application.
///
/// Every status transition is sent here with exactly the message and
/// severity that the inline status display shows.
pub trait Notifier {
    fn notify(&self, message: &str, severity: Severity);
}

/// One notification entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

/// In-app notification sink: a capped log of recent notifications,
/// rendered as the activity panel.
pub struct ActivityLog {
    entries: RefCell<Vec<Notification>>,
    capacity: usize,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
            capacity,
        }
    }

    /// Snapshot of the current entries, oldest first.
    pub fn entries(&self) -> Vec<Notification> {
        self.entries.borrow().clone()
    }
}

impl Notifier for ActivityLog {
    fn notify(&self, message: &str, severity: Severity) {
        info!("[{}] {}", severity.as_str(), message);

        let mut entries = self.entries.borrow_mut();
        entries.push(Notification {
            message: message.to_string(),
            severity,
        });
        if entries.len() > self.capacity {
            let excess = entries.len() - self.capacity;
            entries.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_records_in_order() {
        let log = ActivityLog::new(8);
        log.notify("first", Severity::Info);
        log.notify("second", Severity::Success);

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[0].severity, Severity::Info);
        assert_eq!(entries[1].message, "second");
        assert_eq!(entries[1].severity, Severity::Success);
    }

    #[test]
    fn test_log_caps_oldest_entries() {
        let log = ActivityLog::new(2);
        log.notify("a", Severity::Info);
        log.notify("b", Severity::Info);
        log.notify("c", Severity::Error);

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "b");
        assert_eq!(entries[1].message, "c");
    }
}
