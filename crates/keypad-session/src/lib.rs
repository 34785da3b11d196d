//! Stateful keypad session: timing, input modes, and the on-screen edit stream.
//!
//! `KeypadSession` is driven by the key-matrix scanner's press and release
//! callbacks. It turns each gesture into output events pushed to an injected
//! `EventSink`, in either multi-tap or predictive mode.

pub(crate) mod types;

mod commit;
mod key_handlers;
mod response;
mod timing;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use keypad_core::dict::Dictionary;
use keypad_core::keymap::{KeyAction, KeyIndex, NUM_KEYS};
use keypad_core::predictive::PredictiveEngine;
use keypad_core::settings::{settings, Settings};

pub use keypad_core::settings::InputMode;
pub use timing::Gesture;
pub use types::{
    render, EventQueue, EventSink, KeyEvent, KeypadState, Notification, Notifier, NullNotifier,
    WordState,
};

use timing::TapTimer;

/// Keypad input session encapsulating decoding, timing and mode handling.
///
/// Methods take `&mut self`; the scanner delivers one press/release pair
/// at a time.
pub struct KeypadSession<S: EventSink = EventQueue, N: Notifier = NullNotifier> {
    sink: S,
    notifier: N,
    engine: PredictiveEngine,
    timer: TapTimer,

    state: KeypadState,
    mode: InputMode,
    word: WordState,

    // Settings
    default_mode: InputMode,
    long_press: [KeyAction; NUM_KEYS],
    notify_ms: u32,
}

impl<S: EventSink, N: Notifier> KeypadSession<S, N> {
    /// Build a session from the global settings. The session starts in
    /// `KeypadState::Init` until `begin()` is called.
    pub fn new(dict: Arc<dyn Dictionary>, sink: S, notifier: N) -> Self {
        Self::with_settings(dict, sink, notifier, settings())
    }

    pub fn with_settings(
        dict: Arc<dyn Dictionary>,
        sink: S,
        notifier: N,
        settings: &Settings,
    ) -> Self {
        let mut long_press = [KeyAction::Escape; NUM_KEYS];
        for key in KeyIndex::all() {
            long_press[key.get() as usize] = settings.long_press_action(key);
        }
        Self {
            sink,
            notifier,
            engine: PredictiveEngine::new(dict),
            timer: TapTimer::new(&settings.timing),
            state: KeypadState::Init,
            mode: settings.input.default_mode,
            word: WordState::Idle,
            default_mode: settings.input.default_mode,
            long_press,
            notify_ms: settings.notification.duration_ms,
        }
    }

    /// Mark the scanner as configured; events are accepted from now on.
    pub fn begin(&mut self) {
        if self.state == KeypadState::Init {
            self.state = KeypadState::Idle;
        }
    }

    /// Return to a fresh idle session in the configured default mode.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.timer.forget_cycle();
        self.word = WordState::Idle;
        self.mode = self.default_mode;
        self.state = KeypadState::Idle;
    }

    pub fn input_mode(&self) -> InputMode {
        self.mode
    }

    pub fn state(&self) -> KeypadState {
        self.state
    }

    pub fn word_state(&self) -> WordState {
        self.word
    }

    /// Read-only view of the predictive engine (sequence, candidates).
    pub fn engine(&self) -> &PredictiveEngine {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn into_parts(self) -> (S, N) {
        (self.sink, self.notifier)
    }
}
