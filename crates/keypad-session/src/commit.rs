use tracing::debug;

use super::types::{EventSink, KeyEvent, Notification, Notifier, WordState};
use super::{InputMode, KeypadSession};

impl<S: EventSink, N: Notifier> KeypadSession<S, N> {
    /// Switch between multi-tap and predictive entry.
    ///
    /// A pending prediction is committed first so nothing is left
    /// unfinalized, then the mode banner is sent to the display.
    pub fn toggle_input_mode(&mut self) {
        if self.mode == InputMode::Predictive {
            self.commit_pending();
        }
        self.engine.reset();
        self.word = WordState::Idle;
        self.timer.forget_cycle();

        self.mode = self.mode.toggled();
        let notification = match self.mode {
            InputMode::Predictive => Notification::EnteringPredictive,
            InputMode::MultiTap => Notification::EnteringMultiTap,
        };
        debug!(mode = ?self.mode, "input mode toggled");
        self.notifier.notify(notification, self.notify_ms);
    }

    /// Space key in predictive mode.
    pub(super) fn commit_space(&mut self) {
        match self.word {
            WordState::Pending if self.engine.has_matches() => {
                // The word is already on screen; keep the engine for cycling.
                self.word = WordState::Committed;
            }
            WordState::Pending | WordState::Committed => {
                self.engine.reset();
                self.word = WordState::Idle;
            }
            WordState::Idle => {}
        }
        self.emit(KeyEvent::Char(' '));
    }

    /// Finish a pending word with a trailing space and drop all predictive state.
    pub(super) fn commit_pending(&mut self) {
        if self.word == WordState::Pending {
            self.emit(KeyEvent::Char(' '));
        }
        self.finalize_word();
    }

    /// Leave whatever is on screen as plain text and forget the sequence.
    pub(super) fn finalize_word(&mut self) {
        if self.word != WordState::Idle {
            self.engine.reset();
            self.word = WordState::Idle;
        }
    }

    /// Short press of `#` in predictive mode: show the next candidate.
    pub(super) fn cycle_candidate(&mut self) {
        if self.word == WordState::Idle || self.engine.candidate_count() < 2 {
            debug!("no candidate to cycle");
            return;
        }
        let shown = self.displayed_len();
        self.engine.next_candidate();
        self.retract(shown);
        self.emit_engine_display();
        if self.word == WordState::Committed {
            self.emit(KeyEvent::Char(' '));
        }
    }

    /// Short press of `*` in predictive mode.
    pub(super) fn contextual_backspace(&mut self) {
        match self.word {
            WordState::Committed => {
                self.emit(KeyEvent::Backspace);
                self.engine.reset();
                self.word = WordState::Idle;
            }
            WordState::Pending => {
                let shown = self.displayed_len();
                self.retract(shown);
                self.engine.backspace();
                if self.engine.key_sequence().is_empty() {
                    self.word = WordState::Idle;
                } else {
                    self.emit_engine_display();
                }
            }
            WordState::Idle => self.emit(KeyEvent::Backspace),
        }
    }
}
