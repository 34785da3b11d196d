use super::types::{EventSink, KeyEvent, Notifier, WordState};
use super::KeypadSession;

impl<S: EventSink, N: Notifier> KeypadSession<S, N> {
    pub(super) fn emit(&mut self, event: KeyEvent) {
        self.sink.push(event);
    }

    /// Retract `count` previously emitted characters.
    pub(super) fn retract(&mut self, count: usize) {
        for _ in 0..count {
            self.sink.push(KeyEvent::Backspace);
        }
    }

    /// Emit what the engine shows: the active candidate, or the raw digits.
    pub(super) fn emit_engine_display(&mut self) {
        for c in self.engine.display().chars() {
            self.sink.push(KeyEvent::Char(c));
        }
    }

    /// Characters the current predictive word occupies on screen.
    pub(super) fn displayed_len(&self) -> usize {
        let shown = self.engine.display().chars().count();
        match self.word {
            WordState::Idle => 0,
            WordState::Pending => shown,
            WordState::Committed => shown + 1,
        }
    }
}
