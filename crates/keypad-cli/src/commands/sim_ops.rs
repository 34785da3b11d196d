use std::process;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use keypad_core::dict::Dictionary;
use keypad_core::keymap::KeyIndex;
use keypad_core::settings::{InputMode, Settings};
use keypad_session::{render, EventQueue, KeyEvent, KeypadSession, Notification, Notifier};

use crate::dict_source::DictSource;
use crate::script::{self, Step};

/// Unwrap a Result or print the error and exit.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

const START_MS: u32 = 1_000;
const TAP_HOLD_MS: u32 = 50;
const KEY_GAP_MS: u32 = 150;

/// Banners the session asked the display to show, as text.
#[derive(Debug, Default)]
struct BannerLog(Vec<String>);

impl Notifier for BannerLog {
    fn notify(&mut self, notification: Notification, _duration_ms: u32) {
        self.0.push(notification.message().to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub events: Vec<KeyEvent>,
    pub text: String,
    pub mode: InputMode,
    pub banners: Vec<String>,
}

/// Feed `steps` through a fresh session on a simulated clock.
///
/// Taps are held for 50 ms, long presses just past the configured
/// threshold, and keys are 150 ms apart unless a gap step adds more.
pub fn simulate(steps: &[Step], dict: Arc<dyn Dictionary>, settings: &Settings) -> Report {
    let long_hold = settings.timing.long_press_ms + 1;
    let mut session =
        KeypadSession::with_settings(dict, EventQueue::new(), BannerLog::default(), settings);
    session.begin();

    let mut events = Vec::new();
    let mut now = START_MS;
    for step in steps {
        match *step {
            Step::Gap(ms) => now = now.saturating_add(ms),
            Step::Key { key, long } => {
                let hold = if long { long_hold } else { TAP_HOLD_MS };
                debug!(%key, long, now, "simulated press");
                session.on_press(raw_code(key), now);
                now = now.saturating_add(hold);
                session.on_release(now);
                now = now.saturating_add(KEY_GAP_MS);
                events.extend(session.sink_mut().drain());
            }
        }
    }

    let mode = session.input_mode();
    let (_, banners) = session.into_parts();
    Report {
        text: render(&events),
        events,
        mode,
        banners: banners.0,
    }
}

/// Decimal-packed scancode for `key`.
fn raw_code(key: KeyIndex) -> u8 {
    key.row() * 10 + key.col() + 1
}

pub struct SimOptions<'a> {
    pub source: DictSource,
    pub settings: Settings,
    pub mode: Option<InputMode>,
    pub json: bool,
    pub script: &'a str,
}

pub fn run(opts: SimOptions<'_>) {
    let steps = die!(script::parse_script(opts.script), "Error: {}");
    let dict = die!(opts.source.load(), "Error loading dictionary: {}");
    let mut settings = opts.settings;
    if let Some(mode) = opts.mode {
        settings.input.default_mode = mode;
    }

    let report = simulate(&steps, dict, &settings);
    if opts.json {
        let json = die!(serde_json::to_string_pretty(&report), "Error: {}");
        println!("{json}");
        return;
    }

    for event in &report.events {
        match event {
            KeyEvent::Char(c) => println!("char      {c:?}"),
            KeyEvent::Backspace => println!("backspace"),
            KeyEvent::Select => println!("select"),
            KeyEvent::Escape => println!("escape"),
        }
    }
    for banner in &report.banners {
        println!("banner    {banner}");
    }
    println!("text      {:?}", report.text);
    println!("mode      {:?}", report.mode);
}
