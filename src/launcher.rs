//! Application init

use crate::app::{App, Handler, View};
use crate::error::Result;
use crate::ui::{ActivityWidget, BackupPanelWidget, DashboardWidget, HelpWidget, Layout};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::io;

/// Initialize
fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(())
}

/// Restore to normal state
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Main
async fn run_app(app: &mut App) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    while app.running {
        terminal.draw(|f| ui_render(f, app))?;

        if crossterm::event::poll(std::time::Duration::from_millis(200))?
            && let Event::Key(key) = event::read()?
        {
            Handler::handle_key(app, key).await?;
        }
    }

    tracing::debug!("Application exiting");
    Ok(())
}

/// Render the UI frame.
fn ui_render(f: &mut Frame, app: &App) {
    let rects = Layout::split(f.area());

    HelpWidget::render(f, rects.help, app.view);

    match app.view {
        View::Backup => {
            let status = app.requester.status();
            BackupPanelWidget::render(f, rects.main, status.as_ref(), app.requester.is_busy());
        }
        View::Dashboard => {
            DashboardWidget::render(f, rects.main, &app.endpoint);
        }
    }

    ActivityWidget::render(f, rects.activity, &app.activity.entries());
}

/// Start app.
pub async fn start(mut app: App) -> Result<()> {
    setup_terminal()?;
    let res = run_app(&mut app).await;
    restore_terminal()?;

    res
}
