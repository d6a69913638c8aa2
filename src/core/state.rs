//! Input state of the generator page.
//!
//! The page holds exactly one piece of state: the text the user typed or
//! pasted. Everything else (the rendered code, the download) is derived from
//! it. Transitions go through [`QrState::apply`].

use serde::{Deserialize, Serialize};

/// Whether there is anything to encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Empty,
    HasText,
}

/// A transition of the input state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the text with the literal field value.
    SetText(String),
    /// Clear the text.
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrState {
    text: String,
}

impl QrState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A state already holding `text`, as if typed into a fresh page.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn phase(&self) -> Phase {
        if self.text.is_empty() {
            Phase::Empty
        } else {
            Phase::HasText
        }
    }

    pub fn has_text(&self) -> bool {
        self.phase() == Phase::HasText
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetText(value) => self.text = value,
            Action::Reset => self.text.clear(),
        }
    }

    /// Replace the text verbatim. No trimming, no validation.
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.apply(Action::SetText(value.into()));
    }

    pub fn reset(&mut self) {
        self.apply(Action::Reset);
    }
}
