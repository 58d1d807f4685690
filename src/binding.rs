//! Wires the pure counter to a text input and a display element.
//!
//! Elements are handed in by the caller, so the same handler drives the
//! terminal composer, headless mode and the tests.

use crate::counter::{DisplayState, compute_display};
use crate::utils::text_length;
use thiserror::Error;

/// Identifier of the monitored message field.
pub const INPUT_ELEMENT_ID: &str = "msg";
/// Identifier of the element that shows the remaining count.
pub const DISPLAY_ELEMENT_ID: &str = "remaining";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CounterError {
    #[error("element '{id}' is missing, counter cannot be bound")]
    MissingElement { id: &'static str },
}

pub trait InputElement {
    /// Current text of the field.
    fn value(&self) -> String;
}

pub trait DisplayElement {
    fn set_text_content(&mut self, text: &str);
}

impl InputElement for String {
    fn value(&self) -> String {
        self.clone()
    }
}

impl InputElement for &str {
    fn value(&self) -> String {
        (*self).to_string()
    }
}

impl DisplayElement for String {
    fn set_text_content(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// A counter attached to its input and display elements.
#[derive(Debug)]
pub struct Counter<I, O> {
    input: I,
    output: O,
}

impl<I: InputElement, O: DisplayElement> Counter<I, O> {
    /// Attaches the counter and renders the initial label.
    ///
    /// Fails with [`CounterError::MissingElement`] when either element is
    /// absent, checking the input first.
    pub fn bind(input: Option<I>, output: Option<O>) -> Result<Self, CounterError> {
        let input = input.ok_or(CounterError::MissingElement {
            id: INPUT_ELEMENT_ID,
        })?;
        let output = output.ok_or(CounterError::MissingElement {
            id: DISPLAY_ELEMENT_ID,
        })?;
        let mut counter = Counter { input, output };
        counter.on_key_release();
        tracing::debug!(
            input = INPUT_ELEMENT_ID,
            output = DISPLAY_ELEMENT_ID,
            "counter bound"
        );
        Ok(counter)
    }

    /// Recomputes the label from the input's current text and writes it out.
    pub fn on_key_release(&mut self) -> DisplayState {
        let length = text_length(&self.input.value());
        let state = compute_display(length);
        self.output.set_text_content(&state.to_string());
        tracing::trace!(
            length,
            remaining = state.remaining,
            segments = ?state.segments,
            "recounted"
        );
        state
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn into_parts(self) -> (I, O) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_renders_initial_label() {
        let counter = Counter::bind(Some(String::new()), Some(String::new())).unwrap();
        assert_eq!(counter.output(), "160/160 remaining");
    }

    #[test]
    fn missing_input_fails_fast() {
        let err = Counter::<String, String>::bind(None, Some(String::new())).unwrap_err();
        assert_eq!(err, CounterError::MissingElement { id: "msg" });
        assert_eq!(
            err.to_string(),
            "element 'msg' is missing, counter cannot be bound"
        );
    }

    #[test]
    fn missing_output_fails_fast() {
        let err = Counter::<String, String>::bind(Some(String::new()), None).unwrap_err();
        assert_eq!(err, CounterError::MissingElement { id: "remaining" });
    }

    #[test]
    fn input_is_checked_before_output() {
        let err = Counter::<String, String>::bind(None, None).unwrap_err();
        assert_eq!(err, CounterError::MissingElement { id: "msg" });
    }

    #[test]
    fn key_release_reflects_edits() {
        let mut counter = Counter::bind(Some(String::new()), Some(String::new())).unwrap();

        counter.input_mut().push_str(&"a".repeat(160));
        counter.on_key_release();
        assert_eq!(counter.output(), "0/160 remaining");

        counter.input_mut().push('b');
        let state = counter.on_key_release();
        assert_eq!(state.segments, Some(2));
        assert_eq!(counter.output(), "(2 messages) 159/160 remaining");
    }

    #[test]
    fn repeated_release_without_edit_is_stable() {
        let mut counter = Counter::bind(Some("hello there"), Some(String::new())).unwrap();
        let first = counter.on_key_release();
        let label = counter.output().clone();
        let second = counter.on_key_release();
        assert_eq!(first, second);
        assert_eq!(counter.output(), &label);
        assert_eq!(label, "149/160 remaining");
    }

    #[test]
    fn output_is_replaced_not_appended() {
        let mut counter =
            Counter::bind(Some(String::from("x")), Some(String::from("stale text"))).unwrap();
        assert_eq!(counter.output(), "159/160 remaining");
        counter.input_mut().clear();
        counter.on_key_release();
        assert_eq!(counter.output(), "160/160 remaining");
    }

    #[test]
    fn emoji_count_as_two() {
        let counter = Counter::bind(Some("👍"), Some(String::new())).unwrap();
        assert_eq!(counter.output(), "158/160 remaining");
    }
}
