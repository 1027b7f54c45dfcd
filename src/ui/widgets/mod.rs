//! Widget implementations.

pub mod activity;
pub mod backup_panel;
pub mod dashboard;
pub mod help;

pub use activity::ActivityWidget;
pub use backup_panel::BackupPanelWidget;
pub use dashboard::DashboardWidget;
pub use help::HelpWidget;

use crate::backup::Severity;
use ratatui::style::Color;

/// Display color for a status severity.
pub(crate) fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Cyan,
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
    }
}
