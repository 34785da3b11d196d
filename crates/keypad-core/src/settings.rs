//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//!
//! Timing thresholds are read once when a session is built and stay fixed
//! for its lifetime.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::keymap::{KeyAction, KeyIndex, LONG_PRESS_MAP};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Same-key presses within this many milliseconds cycle characters.
pub const MULTI_TAP_WINDOW_MS: u32 = 500;
/// Presses held longer than this many milliseconds are long presses.
pub const LONG_PRESS_THRESHOLD_MS: u32 = 1000;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

/// Active text-entry method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputMode {
    MultiTap,
    Predictive,
}

impl InputMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::MultiTap => Self::Predictive,
            Self::Predictive => Self::MultiTap,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub timing: TimingSettings,
    pub notification: NotificationSettings,
    pub input: InputSettings,
    pub long_press: LongPressSettings,
}

impl Settings {
    /// Long-press action for `key`, with the `#` and `*` overrides applied.
    pub fn long_press_action(&self, key: KeyIndex) -> KeyAction {
        if key == KeyIndex::HASH {
            match self.long_press.hash {
                HashLongPress::ToggleMode => KeyAction::ToggleMode,
                HashLongPress::Select => KeyAction::Select,
            }
        } else if key == KeyIndex::STAR {
            match self.long_press.star {
                StarLongPress::Escape => KeyAction::Escape,
                StarLongPress::Backspace => KeyAction::Backspace,
            }
        } else {
            LONG_PRESS_MAP[key.get() as usize]
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timing: TimingSettings {
                multi_tap_window_ms: MULTI_TAP_WINDOW_MS,
                long_press_ms: LONG_PRESS_THRESHOLD_MS,
            },
            notification: NotificationSettings { duration_ms: 2000 },
            input: InputSettings {
                default_mode: InputMode::MultiTap,
            },
            long_press: LongPressSettings {
                hash: HashLongPress::ToggleMode,
                star: StarLongPress::Escape,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TimingSettings {
    pub multi_tap_window_ms: u32,
    pub long_press_ms: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationSettings {
    pub duration_ms: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    pub default_mode: InputMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LongPressSettings {
    pub hash: HashLongPress,
    pub star: StarLongPress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HashLongPress {
    ToggleMode,
    Select,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StarLongPress {
    Escape,
    Backspace,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_positive {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    check_positive!(timing.multi_tap_window_ms);
    check_positive!(timing.long_press_ms);

    if s.timing.long_press_ms <= s.timing.multi_tap_window_ms {
        return Err(SettingsError::InvalidValue {
            field: "timing.long_press_ms".to_string(),
            reason: "must exceed timing.multi_tap_window_ms".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.timing.multi_tap_window_ms, MULTI_TAP_WINDOW_MS);
        assert_eq!(s.timing.long_press_ms, LONG_PRESS_THRESHOLD_MS);
        assert_eq!(s.notification.duration_ms, 2000);
        assert_eq!(s.input.default_mode, InputMode::MultiTap);
        assert_eq!(s.long_press.hash, HashLongPress::ToggleMode);
        assert_eq!(s.long_press.star, StarLongPress::Escape);
    }

    #[test]
    fn default_impl_matches_embedded_toml() {
        let parsed = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        let built = Settings::default();
        assert_eq!(
            parsed.timing.multi_tap_window_ms,
            built.timing.multi_tap_window_ms
        );
        assert_eq!(parsed.timing.long_press_ms, built.timing.long_press_ms);
        assert_eq!(parsed.input.default_mode, built.input.default_mode);
        for key in KeyIndex::all() {
            assert_eq!(parsed.long_press_action(key), built.long_press_action(key));
        }
    }

    #[test]
    fn legacy_long_press_layout() {
        let toml = r#"
[timing]
multi_tap_window_ms = 400
long_press_ms = 800

[notification]
duration_ms = 1500

[input]
default_mode = "predictive"

[long_press]
hash = "select"
star = "backspace"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.input.default_mode, InputMode::Predictive);
        assert_eq!(s.long_press_action(KeyIndex::HASH), KeyAction::Select);
        assert_eq!(s.long_press_action(KeyIndex::STAR), KeyAction::Backspace);
        assert_eq!(s.long_press_action(KeyIndex::ZERO), KeyAction::Char('0'));
    }

    #[test]
    fn error_zero_window() {
        let toml = DEFAULT_SETTINGS_TOML.replace("multi_tap_window_ms = 500", "multi_tap_window_ms = 0");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("timing.multi_tap_window_ms"));
    }

    #[test]
    fn error_long_press_inside_window() {
        let toml = DEFAULT_SETTINGS_TOML.replace("long_press_ms = 1000", "long_press_ms = 300");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("timing.long_press_ms"));
    }

    #[test]
    fn error_unknown_mode() {
        let toml = DEFAULT_SETTINGS_TOML.replace("\"multi-tap\"", "\"qwerty\"");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[timing]
multi_tap_window_ms = 500
long_press_ms = 1000
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn toggled_flips_mode() {
        assert_eq!(InputMode::MultiTap.toggled(), InputMode::Predictive);
        assert_eq!(InputMode::Predictive.toggled(), InputMode::MultiTap);
    }
}
