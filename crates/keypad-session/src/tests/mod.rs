mod predictive;

use std::sync::Arc;

use keypad_core::dict::{Dictionary, WordList};
use keypad_core::keymap::KeyIndex;
use keypad_core::settings::Settings;

use super::types::{Notification, Notifier};
use super::{EventQueue, InputMode, KeypadSession};

pub(super) use super::render;

pub(super) fn make_test_dict() -> Arc<dyn Dictionary> {
    Arc::new(WordList::from_words(
        [
            "the", "of", "and", "a", "to", "in", "good", "home", "gone", "hood", "hello", "ago",
            "they", "then", "me",
        ],
        100,
    ))
}

/// Notifier that keeps every banner it was asked to show.
#[derive(Debug, Default)]
pub(super) struct RecordingNotifier {
    pub shown: Vec<(Notification, u32)>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notification: Notification, duration_ms: u32) {
        self.shown.push((notification, duration_ms));
    }
}

pub(super) fn make_session(
    mode: InputMode,
    settings: Option<Settings>,
) -> KeypadSession<EventQueue, RecordingNotifier> {
    let mut settings = settings.unwrap_or_default();
    settings.input.default_mode = mode;
    let mut session = KeypadSession::with_settings(
        make_test_dict(),
        EventQueue::new(),
        RecordingNotifier::default(),
        &settings,
    );
    session.begin();
    session
}

/// Decimal-packed scancode for the key labelled `label`.
pub(super) fn raw(label: char) -> u8 {
    let key = KeyIndex::from_label(label).unwrap();
    key.row() * 10 + key.col() + 1
}
