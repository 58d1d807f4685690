use super::app_logic::ComposerApp;
use anyhow::Result;
use crossterm::event::{self, Event};
use std::time::Duration;

pub(super) fn handle_events(app: &mut ComposerApp) -> Result<()> {
    if event::poll(Duration::from_millis(50))? {
        if let Event::Key(key_event) = event::read()? {
            app.handle_key_event(key_event);
        }
    }
    Ok(())
}
