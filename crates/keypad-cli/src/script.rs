//! Key scripts for the simulator.
//!
//! A script is a whitespace-separated list of tokens:
//!
//! - `2`, `#`, `*`: tap a key
//! - `444`: tap the same or different keys back to back
//! - `2:L`: long-press a single key
//! - `+600`: let `600` ms pass before the next key

use keypad_core::keymap::KeyIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Key { key: KeyIndex, long: bool },
    Gap(u32),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("token {index} ({token:?}): {c:?} is not a key label")]
    UnknownKey { index: usize, token: String, c: char },

    #[error("token {index} ({token:?}): invalid gap")]
    InvalidGap { index: usize, token: String },

    #[error("token {index} ({token:?}): long press takes exactly one key")]
    LongPressRun { index: usize, token: String },
}

pub fn parse_script(text: &str) -> Result<Vec<Step>, ScriptError> {
    let mut steps = Vec::new();
    for (index, token) in text.split_whitespace().enumerate() {
        if let Some(ms) = token.strip_prefix('+') {
            let ms = ms.parse().map_err(|_| ScriptError::InvalidGap {
                index,
                token: token.to_string(),
            })?;
            steps.push(Step::Gap(ms));
            continue;
        }

        let (labels, long) = match token.strip_suffix(":L") {
            Some(labels) => (labels, true),
            None => (token, false),
        };
        if long && labels.chars().count() != 1 {
            return Err(ScriptError::LongPressRun {
                index,
                token: token.to_string(),
            });
        }
        for c in labels.chars() {
            let key = KeyIndex::from_label(c).ok_or_else(|| ScriptError::UnknownKey {
                index,
                token: token.to_string(),
                c,
            })?;
            steps.push(Step::Key { key, long });
        }
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(label: char, long: bool) -> Step {
        Step::Key {
            key: KeyIndex::from_label(label).unwrap(),
            long,
        }
    }

    #[test]
    fn parses_taps_gaps_and_long_presses() {
        let steps = parse_script("44 +600\n# *:L").unwrap();
        assert_eq!(
            steps,
            vec![
                key('4', false),
                key('4', false),
                Step::Gap(600),
                key('#', false),
                key('*', true),
            ]
        );
    }

    #[test]
    fn empty_script_has_no_steps() {
        assert_eq!(parse_script("  \n"), Ok(Vec::new()));
    }

    #[test]
    fn rejects_unknown_labels() {
        let err = parse_script("2 a").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownKey {
                index: 1,
                token: "a".to_string(),
                c: 'a',
            }
        );
    }

    #[test]
    fn rejects_bad_gaps_and_long_runs() {
        assert!(matches!(
            parse_script("+abc"),
            Err(ScriptError::InvalidGap { index: 0, .. })
        ));
        assert!(matches!(
            parse_script("2 22:L"),
            Err(ScriptError::LongPressRun { index: 1, .. })
        ));
        assert!(matches!(
            parse_script(":L"),
            Err(ScriptError::LongPressRun { .. })
        ));
    }
}
