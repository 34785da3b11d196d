mod sink;
pub use sink::*;

use serde::Serialize;

/// Event delivered to the UI/broker, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "char", rename_all = "snake_case")]
pub enum KeyEvent {
    /// A printable character.
    Char(char),
    /// Retract one previously emitted character.
    Backspace,
    Select,
    /// Request to leave the input interface.
    Escape,
}

/// Apply an event stream to an empty text field.
pub fn render(events: &[KeyEvent]) -> String {
    let mut text = String::new();
    for event in events {
        match event {
            KeyEvent::Char(c) => text.push(*c),
            KeyEvent::Backspace => {
                text.pop();
            }
            KeyEvent::Select | KeyEvent::Escape => {}
        }
    }
    text
}

/// Transient banner shown when the input mode changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    EnteringPredictive,
    EnteringMultiTap,
}

impl Notification {
    pub fn message(self) -> &'static str {
        match self {
            Self::EnteringPredictive => "Predictive mode",
            Self::EnteringMultiTap => "Multi-tap mode",
        }
    }
}

/// Scanner-facing condition gating press and release callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadState {
    /// Scanner not configured yet; all events ignored.
    Init,
    Idle,
    /// A press decoded successfully and awaits its release.
    Held,
    /// A press was abandoned after the clock went backwards.
    Busy,
}

/// Predictive word lifecycle: exactly one of three states, so a word can
/// never be both pending and committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordState {
    /// No predictive word on screen.
    Idle,
    /// A live prediction (or raw digits) is on screen and still editable.
    Pending,
    /// The word and a trailing space are on screen; candidates can still be cycled.
    Committed,
}
