use super::app_state::{KeyDelivery, MessageField, RemainingLabel};
use crate::binding::{Counter, CounterError};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub struct ComposerApp {
    pub(super) counter: Counter<MessageField, RemainingLabel>,
    pub(super) key_delivery: KeyDelivery,
    pub(super) quit: bool,
    pub(super) confirmed: bool,
}

impl ComposerApp {
    pub(super) fn new(
        initial_message: String,
        key_delivery: KeyDelivery,
    ) -> Result<Self, CounterError> {
        let counter = Counter::bind(
            Some(MessageField::with_text(initial_message)),
            Some(RemainingLabel::default()),
        )?;
        Ok(ComposerApp {
            counter,
            key_delivery,
            quit: false,
            confirmed: false,
        })
    }

    pub(super) fn field(&self) -> &MessageField {
        self.counter.input()
    }

    pub(super) fn remaining_text(&self) -> &str {
        &self.counter.output().0
    }

    pub(super) fn into_message(self) -> String {
        self.counter.into_parts().0.text
    }

    pub(super) fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.kind {
            KeyEventKind::Release => {
                if self.key_delivery == KeyDelivery::PressAndRelease {
                    self.counter.on_key_release();
                }
            }
            // Some keys never report a release, even under the kitty protocol,
            // so every press recounts too.
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.handle_key_press(key_event);
                self.counter.on_key_release();
            }
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent) {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        let field = self.counter.input_mut();
        match key_event.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Char('y') if ctrl => {
                self.confirmed = true;
                self.quit = true;
            }
            KeyCode::Char('u') if ctrl => field.clear(),
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Char(c) => field.insert(c),
            KeyCode::Enter => field.insert('\n'),
            KeyCode::Backspace => field.backspace(),
            KeyCode::Delete => field.delete(),
            KeyCode::Left => field.move_left(),
            KeyCode::Right => field.move_right(),
            KeyCode::Home => field.move_home(),
            KeyCode::End => field.move_end(),
            _ => {}
        }
    }
}
