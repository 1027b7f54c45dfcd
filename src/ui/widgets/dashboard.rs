//! Admin dashboard screen.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

pub struct DashboardWidget;

impl DashboardWidget {
    pub fn render(f: &mut Frame, area: Rect, endpoint: &str) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Admin Dashboard ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let lines = vec![
            Line::from(vec![
                Span::styled("Backup endpoint: ", Style::default().fg(Color::Gray)),
                Span::raw(endpoint),
            ]),
            Line::default(),
            Line::from(Span::styled(
                "Press Esc or Backspace to return to the backup screen.",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let body = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().padding(Padding::uniform(1)));
        f.render_widget(body, inner);
    }
}
