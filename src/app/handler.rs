//! Keyboard event handling.

use super::state::{App, View};
use crate::error::Result;
use crossterm::event::{KeyCode, KeyEvent};
use tracing::{debug, info};

/// Handles keyboard input events.
pub struct Handler;

impl Handler {
    /// Process a keyboard event and update app state.
    pub async fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => {
                info!("Quit requested");
                app.running = false;
            }
            KeyCode::Char('d') if app.view == View::Backup => {
                debug!("Navigating to admin dashboard");
                app.view = View::Dashboard;
            }
            KeyCode::Esc | KeyCode::Backspace if app.view == View::Dashboard => {
                debug!("Returning to backup screen");
                app.view = View::Backup;
            }
            KeyCode::Enter | KeyCode::Char('b') if app.view == View::Backup => {
                // The trigger is disabled while a request is in flight.
                if app.requester.is_busy() {
                    debug!("Backup already in flight, ignoring trigger");
                    return Ok(());
                }
                app.requester.initiate_backup().await;
            }
            _ => {}
        }
        Ok(())
    }
}
