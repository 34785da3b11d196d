use tracing::{debug, debug_span, warn};

use keypad_core::keymap::{decode, KeyAction, KeyClass, KeyIndex};

use super::timing::{Gesture, PressOutcome, Release};
use super::types::{EventSink, KeyEvent, KeypadState, Notifier, WordState};
use super::{InputMode, KeypadSession};

impl<S: EventSink, N: Notifier> KeypadSession<S, N> {
    /// Scanner callback for a key going down. `now_ms` is a monotonic
    /// millisecond timestamp.
    pub fn on_press(&mut self, raw: u8, now_ms: u32) {
        let _span = debug_span!("on_press", raw, now_ms).entered();

        if self.state != KeypadState::Idle {
            debug!(state = ?self.state, "press ignored");
            return;
        }

        let key = match decode(raw) {
            Ok(decoded) => decoded.key,
            Err(e) => {
                warn!("ignoring key: {e}");
                self.state = KeypadState::Idle;
                return;
            }
        };

        match self.timer.press(key, now_ms) {
            PressOutcome::ClockWrapped => {
                warn!("clock went backwards, abandoning gesture");
                self.state = KeypadState::Busy;
                return;
            }
            PressOutcome::Accepted { .. } => {}
        }
        self.state = KeypadState::Held;

        if self.mode == InputMode::Predictive {
            if let KeyClass::Letters(digit) = key.class() {
                self.handle_predictive_digit(digit);
            }
        }
    }

    /// Scanner callback for the held key going up.
    pub fn on_release(&mut self, now_ms: u32) {
        let _span = debug_span!("on_release", now_ms).entered();

        match self.state {
            KeypadState::Held => {}
            KeypadState::Busy => {
                // The abandoned press has ended; accept the next one.
                self.state = KeypadState::Idle;
                return;
            }
            KeypadState::Init | KeypadState::Idle => {
                debug!(state = ?self.state, "release ignored");
                return;
            }
        }
        self.state = KeypadState::Idle;

        let Some(release) = self.timer.release(now_ms) else {
            warn!("clock went backwards while held, abandoning gesture");
            return;
        };

        match self.mode {
            InputMode::MultiTap => self.handle_multitap_release(release),
            InputMode::Predictive => self.handle_predictive_release(release),
        }
    }

    fn handle_multitap_release(&mut self, release: Release) {
        if release.retract_previous {
            self.emit(KeyEvent::Backspace);
        }
        match release.gesture {
            Gesture::LongPress => self.handle_long_press(release.key),
            Gesture::Tap => {
                let c = release.key.tap_char(release.cycle);
                debug!(key = %release.key, cycle = release.cycle, %c, "tap");
                self.emit(KeyEvent::Char(c));
            }
        }
    }

    fn handle_predictive_release(&mut self, release: Release) {
        match release.key.class() {
            // Digits act when pressed.
            KeyClass::Letters(_) => {}
            KeyClass::Punctuation => {
                self.finalize_word();
                self.handle_multitap_release(release);
            }
            KeyClass::Space => self.commit_space(),
            KeyClass::Hash => match release.gesture {
                Gesture::LongPress => self.handle_long_press(release.key),
                Gesture::Tap => self.cycle_candidate(),
            },
            KeyClass::Star => match release.gesture {
                Gesture::LongPress => self.handle_long_press(release.key),
                Gesture::Tap => self.contextual_backspace(),
            },
        }
    }

    fn handle_long_press(&mut self, key: KeyIndex) {
        let action = self.long_press[key.get() as usize];
        debug!(%key, ?action, "long press");
        match action {
            KeyAction::Char(c) => self.emit(KeyEvent::Char(c)),
            KeyAction::Select => self.emit(KeyEvent::Select),
            KeyAction::Escape => self.emit(KeyEvent::Escape),
            KeyAction::Backspace if self.mode == InputMode::Predictive => {
                self.contextual_backspace()
            }
            KeyAction::Backspace => self.emit(KeyEvent::Backspace),
            KeyAction::ToggleMode => self.toggle_input_mode(),
        }
    }

    /// Digit key 2–9 pressed in predictive mode.
    fn handle_predictive_digit(&mut self, digit: char) {
        if self.word == WordState::Committed {
            // The committed word already ended with a space.
            self.engine.reset();
            self.word = WordState::Idle;
        }
        if self.engine.is_full() {
            debug!("sequence full, digit ignored");
            return;
        }

        let shown = self.displayed_len();
        let had_matches = self.engine.has_matches();
        self.engine.add_digit(digit);
        self.word = WordState::Pending;

        if self.engine.has_matches() || had_matches {
            self.retract(shown);
            self.emit_engine_display();
        } else {
            self.emit(KeyEvent::Char(digit));
        }
    }
}
