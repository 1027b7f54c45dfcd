//! Key binding help bar.

use crate::app::View;
use ratatui::{
    prelude::*,
    widgets::Paragraph,
};

pub struct HelpWidget;

impl HelpWidget {
    pub fn render(f: &mut Frame, area: Rect, view: View) {
        let bindings = match view {
            View::Backup => "Enter/b: trigger backup | d: dashboard | q: quit",
            View::Dashboard => "Esc/Backspace: back | q: quit",
        };

        let help = Paragraph::new(bindings).style(Style::default().fg(Color::DarkGray));
        f.render_widget(help, area);
    }
}
