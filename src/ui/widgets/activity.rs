//! Activity log panel: recent notifications, newest at the bottom.

use super::severity_color;
use crate::backup::Notification;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

pub struct ActivityWidget;

impl ActivityWidget {
    pub fn render(f: &mut Frame, area: Rect, entries: &[Notification]) {
        let block = Block::default().borders(Borders::ALL).title(" Activity ");
        let inner_height = block.inner(area).height as usize;

        // Keep the newest entries visible when the log outgrows the panel.
        let start = entries.len().saturating_sub(inner_height);
        let items: Vec<ListItem> = entries[start..]
            .iter()
            .map(|entry| {
                let color = severity_color(entry.severity);
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("[{}] ", entry.severity.as_str()),
                        Style::default().fg(color),
                    ),
                    Span::raw(entry.message.as_str()),
                ]))
            })
            .collect();

        let list = List::new(items).block(block);
        f.render_widget(list, area);
    }
}
