//! Main backup trigger panel.

use super::severity_color;
use crate::backup::Status;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub struct BackupPanelWidget;

impl BackupPanelWidget {
    pub fn render(f: &mut Frame, area: Rect, status: Option<&Status>, busy: bool) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Get Database Backup ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Min(3),
            ])
            .margin(1)
            .split(inner);

        let description = Paragraph::new(
            "Generate a full backup of the database, including all tables and records.",
        )
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
        f.render_widget(description, chunks[0]);

        let trigger = if busy {
            Paragraph::new("Backing up...").style(Style::default().fg(Color::Yellow).dim())
        } else {
            Paragraph::new("[ Enter: Retrieve Backup ]")
                .style(Style::default().add_modifier(Modifier::BOLD))
        };
        f.render_widget(trigger, chunks[1]);

        if let Some(status) = status {
            let color = severity_color(status.severity);
            let message = Paragraph::new(status.message.as_str())
                .style(Style::default().fg(color))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                );
            f.render_widget(message, chunks[2]);
        }
    }
}
