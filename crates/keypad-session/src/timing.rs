//! Press/release timing: tap vs. long press, and same-key repeats.

use keypad_core::keymap::KeyIndex;
use keypad_core::settings::TimingSettings;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    LongPress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PressOutcome {
    /// `repeat` is true when the same key was pressed again inside the window.
    Accepted { repeat: bool },
    /// The clock went backwards since the last event.
    ClockWrapped,
}

/// A completed press/release pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Release {
    pub key: KeyIndex,
    pub gesture: Gesture,
    /// Position of this tap within its same-key burst.
    pub cycle: usize,
    /// The character shown by the previous tap of this burst must be retracted.
    pub retract_previous: bool,
}

/// Rolling timing state shared by both input modes.
#[derive(Debug, Clone)]
pub(crate) struct TapTimer {
    window_ms: i64,
    long_press_ms: i64,
    last_key: Option<KeyIndex>,
    /// Time of the last press or release.
    last_event_ms: u32,
    tap_interval_ms: i64,
    cycle: usize,
    backspace_on_repeat: bool,
}

impl TapTimer {
    pub fn new(timing: &TimingSettings) -> Self {
        Self {
            window_ms: i64::from(timing.multi_tap_window_ms),
            long_press_ms: i64::from(timing.long_press_ms),
            last_key: None,
            last_event_ms: 0,
            tap_interval_ms: 0,
            cycle: 0,
            backspace_on_repeat: false,
        }
    }

    pub fn press(&mut self, key: KeyIndex, now: u32) -> PressOutcome {
        let interval = i64::from(now) - i64::from(self.last_event_ms);
        self.tap_interval_ms = interval;
        if interval < 0 {
            self.last_event_ms = 0;
            self.forget_cycle();
            return PressOutcome::ClockWrapped;
        }

        let repeat = self.last_key == Some(key) && interval <= self.window_ms;
        if repeat {
            self.cycle += 1;
            self.backspace_on_repeat = true;
        } else {
            self.cycle = 0;
            self.backspace_on_repeat = false;
        }
        debug!(key = key.get(), interval, cycle = self.cycle, "press");

        self.last_key = Some(key);
        self.last_event_ms = now;
        PressOutcome::Accepted { repeat }
    }

    /// Classify the release of the key last accepted by `press`. `None` when
    /// there is no such key or the clock went backwards while it was held.
    pub fn release(&mut self, now: u32) -> Option<Release> {
        let key = self.last_key?;
        let held = i64::from(now) - i64::from(self.last_event_ms);
        if held < 0 {
            self.last_event_ms = 0;
            self.forget_cycle();
            return None;
        }
        self.last_event_ms = now;

        let gesture = if held > self.long_press_ms {
            Gesture::LongPress
        } else {
            Gesture::Tap
        };
        let release = Release {
            key,
            gesture,
            cycle: self.cycle,
            retract_previous: self.backspace_on_repeat && self.tap_interval_ms <= self.window_ms,
        };
        debug!(key = key.get(), held, ?gesture, "release");

        if gesture == Gesture::LongPress {
            // The next press always starts a fresh burst.
            self.forget_cycle();
        }
        Some(release)
    }

    /// Drop the current burst so the next press starts at cycle 0.
    pub fn forget_cycle(&mut self) {
        self.last_key = None;
        self.cycle = 0;
        self.backspace_on_repeat = false;
    }

    #[cfg(test)]
    pub fn cycle(&self) -> usize {
        self.cycle
    }
}
