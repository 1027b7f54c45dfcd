//! Screen layout.

use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Resolved screen regions.
pub struct Rects {
    pub help: Rect,
    pub main: Rect,
    pub activity: Rect,
}

/// Splits the frame into help bar, main panel and activity log.
pub struct Layout;

impl Layout {
    pub fn split(area: Rect) -> Rects {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(10),
                Constraint::Length(8),
            ])
            .split(area);

        Rects {
            help: chunks[0],
            main: chunks[1],
            activity: chunks[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_covers_frame_height() {
        let rects = Layout::split(Rect::new(0, 0, 80, 24));
        assert_eq!(rects.help.height, 1);
        assert_eq!(rects.activity.height, 8);
        assert_eq!(
            rects.help.height + rects.main.height + rects.activity.height,
            24
        );
    }
}
