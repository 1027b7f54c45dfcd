//! Terminal UI widgets and layout.

pub mod layout;
pub mod widgets;

pub use layout::Layout;
pub use widgets::{ActivityWidget, BackupPanelWidget, DashboardWidget, HelpWidget};
