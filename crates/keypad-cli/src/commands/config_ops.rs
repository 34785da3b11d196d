use std::fs;
use std::process;

use keypad_core::settings::{self, Settings};

/// Unwrap a Result or print the error and exit.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let s = die!(load_settings(file), "Error: {}");
    println!("{}", summary(&s));
}

/// Read and validate a settings file.
pub fn load_settings(file: &str) -> Result<Settings, String> {
    let content = fs::read_to_string(file).map_err(|e| format!("reading {file}: {e}"))?;
    settings::parse_settings_toml(&content).map_err(|e| e.to_string())
}

fn summary(s: &Settings) -> String {
    format!(
        "OK: timing.multi_tap_window_ms={}, timing.long_press_ms={}, input.default_mode={:?}, long_press.hash={:?}, long_press.star={:?}",
        s.timing.multi_tap_window_ms,
        s.timing.long_press_ms,
        s.input.default_mode,
        s.long_press.hash,
        s.long_press.star,
    )
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn exported_defaults_validate() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", settings::default_toml()).unwrap();
        let s = load_settings(file.path().to_str().unwrap()).unwrap();
        assert!(summary(&s).contains("timing.multi_tap_window_ms=500"));
        assert!(summary(&s).contains("input.default_mode=MultiTap"));
    }

    #[test]
    fn invalid_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            settings::default_toml().replace("long_press_ms = 1000", "long_press_ms = 100")
        )
        .unwrap();
        let err = load_settings(file.path().to_str().unwrap()).unwrap_err();
        assert!(err.contains("timing.long_press_ms"));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = load_settings("/nonexistent/settings.toml").unwrap_err();
        assert!(err.starts_with("reading /nonexistent/settings.toml"));
    }
}
