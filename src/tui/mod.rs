mod app_logic;
mod app_state;
mod event_handler;
mod ui_renderer;

// The main function to run the composer
pub use self::run_tui::run_composer;

// Terminal setup/teardown and the draw/handle loop
mod run_tui {
    use super::app_logic::ComposerApp;
    use super::app_state::KeyDelivery;
    use super::event_handler::handle_events;
    use super::ui_renderer::ui_frame;
    use anyhow::Result;
    use crossterm::{
        event::{
            KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
        },
        execute,
        terminal::{
            EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
            supports_keyboard_enhancement,
        },
    };
    use ratatui::prelude::{CrosstermBackend, Terminal};
    use std::io::{self, Stdout};

    /// Runs the interactive composer. Returns the message when the user
    /// confirmed it, `None` when they quit.
    pub fn run_composer(initial_message: String) -> Result<Option<String>> {
        // Fail before touching the terminal if the counter can't be bound.
        let mut app = ComposerApp::new(initial_message, KeyDelivery::PressOnly)?;

        let (mut terminal, key_delivery) = init_terminal()?;
        app.key_delivery = key_delivery;
        tracing::info!(?key_delivery, "composer started");

        let loop_result = run_loop(&mut terminal, &mut app);
        let restore_result = restore_terminal(terminal, key_delivery);
        loop_result?;
        restore_result?;

        if app.confirmed {
            tracing::info!(remaining = app.remaining_text(), "message confirmed");
            Ok(Some(app.into_message()))
        } else {
            tracing::info!("composer closed without confirming");
            Ok(None)
        }
    }

    fn run_loop(
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        app: &mut ComposerApp,
    ) -> Result<()> {
        while !app.quit {
            terminal.draw(|frame| ui_frame(frame, app))?;
            handle_events(app)?;
        }
        Ok(())
    }

    fn init_terminal() -> Result<(Terminal<CrosstermBackend<Stdout>>, KeyDelivery)> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        // Release events only arrive under the kitty keyboard protocol, and
        // only for plain-text keys when every key is sent as an escape code.
        let key_delivery = if supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
                        | KeyboardEnhancementFlags::REPORT_ALL_KEYS_AS_ESCAPE_CODES
                        | KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
                )
            )?;
            KeyDelivery::PressAndRelease
        } else {
            KeyDelivery::PressOnly
        };

        let backend = CrosstermBackend::new(stdout);
        Ok((Terminal::new(backend)?, key_delivery))
    }

    fn restore_terminal(
        mut terminal: Terminal<CrosstermBackend<Stdout>>,
        key_delivery: KeyDelivery,
    ) -> Result<()> {
        if key_delivery == KeyDelivery::PressAndRelease {
            execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
        }
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor().map_err(Into::into)
    }
}
