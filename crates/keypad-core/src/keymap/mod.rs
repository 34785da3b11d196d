//! Fixed per-key tables for the 3×4 keypad.
//!
//! Keys are addressed by a row-major index over the physical layout:
//!
//! ```text
//! 1 2 3 #
//! 4 5 6 0
//! 7 8 9 *
//! ```

mod decode;

pub use decode::{decode, DecodeError, DecodeScheme, DecodedKey};

use std::fmt;

pub const ROWS: u8 = 3;
pub const COLS: u8 = 4;
pub const NUM_KEYS: usize = (ROWS * COLS) as usize;

/// Index of one physical key, always `< NUM_KEYS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyIndex(u8);

impl KeyIndex {
    pub const ONE: KeyIndex = KeyIndex(0);
    pub const HASH: KeyIndex = KeyIndex(3);
    pub const ZERO: KeyIndex = KeyIndex(7);
    pub const STAR: KeyIndex = KeyIndex(11);

    pub fn new(index: u8) -> Option<Self> {
        if (index as usize) < NUM_KEYS {
            Some(Self(index))
        } else {
            None
        }
    }

    pub fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if row < ROWS && col < COLS {
            Some(Self(row * COLS + col))
        } else {
            None
        }
    }

    /// Look up the key carrying `label` on its cap (`'0'..='9'`, `'#'`, `'*'`).
    pub fn from_label(label: char) -> Option<Self> {
        KEY_LABELS
            .iter()
            .position(|&l| l == label)
            .map(|i| Self(i as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn row(self) -> u8 {
        self.0 / COLS
    }

    pub fn col(self) -> u8 {
        self.0 % COLS
    }

    pub fn label(self) -> char {
        KEY_LABELS[self.0 as usize]
    }

    pub fn class(self) -> KeyClass {
        match self.label() {
            '2'..='9' => KeyClass::Letters(self.label()),
            '1' => KeyClass::Punctuation,
            '0' => KeyClass::Space,
            '#' => KeyClass::Hash,
            _ => KeyClass::Star,
        }
    }

    /// Characters cycled by repeated taps, in order.
    pub fn tap_chars(self) -> &'static [char] {
        TAP_MAP[self.0 as usize]
    }

    /// Number of distinct characters a tap burst cycles through.
    pub fn tap_modulus(self) -> usize {
        TAP_MAP[self.0 as usize].len()
    }

    /// Character for the `cycle`-th tap of a burst, wrapping after the last option.
    pub fn tap_char(self, cycle: usize) -> char {
        let chars = self.tap_chars();
        chars[cycle % chars.len()]
    }

    pub fn all() -> impl Iterator<Item = KeyIndex> {
        (0..NUM_KEYS as u8).map(KeyIndex)
    }
}

impl fmt::Display for KeyIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Role of a key in predictive mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    /// Keys 2–9, carrying the digit fed to the predictive engine.
    Letters(char),
    Punctuation,
    Space,
    Hash,
    Star,
}

/// Action produced by a long press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Char(char),
    Select,
    Backspace,
    Escape,
    ToggleMode,
}

const KEY_LABELS: [char; NUM_KEYS] = ['1', '2', '3', '#', '4', '5', '6', '0', '7', '8', '9', '*'];

const TAP_MAP: [&[char]; NUM_KEYS] = [
    &['.', ',', '?', '!', ':', ';', '-', '_', '\\', '/', '(', ')'],
    &['a', 'b', 'c', 'A', 'B', 'C'],
    &['d', 'e', 'f', 'D', 'E', 'F'],
    &['#', '@'],
    &['g', 'h', 'i', 'G', 'H', 'I'],
    &['j', 'k', 'l', 'J', 'K', 'L'],
    &['m', 'n', 'o', 'M', 'N', 'O'],
    &[' '],
    &['p', 'q', 'r', 's', 'P', 'Q', 'R', 'S'],
    &['t', 'u', 'v', 'T', 'U', 'V'],
    &['w', 'x', 'y', 'z', 'W', 'X', 'Y', 'Z'],
    &['*', '+'],
];

/// Default long-press actions. `#` and `*` can be remapped through settings.
pub const LONG_PRESS_MAP: [KeyAction; NUM_KEYS] = [
    KeyAction::Char('1'),
    KeyAction::Char('2'),
    KeyAction::Char('3'),
    KeyAction::ToggleMode,
    KeyAction::Char('4'),
    KeyAction::Char('5'),
    KeyAction::Char('6'),
    KeyAction::Char('0'),
    KeyAction::Char('7'),
    KeyAction::Char('8'),
    KeyAction::Char('9'),
    KeyAction::Escape,
];

/// Digit key (`'2'..='9'`) whose letter group contains `c`, case-insensitively.
pub fn letter_to_digit(c: char) -> Option<char> {
    match c.to_ascii_lowercase() {
        'a'..='c' => Some('2'),
        'd'..='f' => Some('3'),
        'g'..='i' => Some('4'),
        'j'..='l' => Some('5'),
        'm'..='o' => Some('6'),
        'p'..='s' => Some('7'),
        't'..='v' => Some('8'),
        'w'..='z' => Some('9'),
        _ => None,
    }
}

/// Key sequence typed for `word`, or `None` if it contains a character
/// outside `a`–`z`.
pub fn word_to_sequence(word: &str) -> Option<String> {
    word.chars().map(letter_to_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_physical_layout() {
        let labels: String = KeyIndex::all().map(|k| k.label()).collect();
        assert_eq!(labels, "123#4560789*");
        assert_eq!(KeyIndex::from_row_col(2, 3), Some(KeyIndex::STAR));
        assert_eq!(KeyIndex::from_row_col(3, 0), None);
        assert_eq!(KeyIndex::from_label('0'), Some(KeyIndex::ZERO));
    }

    #[test]
    fn modulus_matches_character_set() {
        let moduli: Vec<usize> = KeyIndex::all().map(|k| k.tap_modulus()).collect();
        assert_eq!(moduli, vec![12, 6, 6, 2, 6, 6, 6, 1, 8, 6, 8, 2]);
    }

    #[test]
    fn tap_char_wraps() {
        let two = KeyIndex::from_label('2').unwrap();
        let cycled: String = (0..7).map(|i| two.tap_char(i)).collect();
        assert_eq!(cycled, "abcABCa");
    }

    #[test]
    fn letter_groups_agree_with_tap_map() {
        for key in KeyIndex::all() {
            if let KeyClass::Letters(digit) = key.class() {
                for &c in key.tap_chars() {
                    assert_eq!(letter_to_digit(c), Some(digit), "char {c}");
                }
            }
        }
    }

    #[test]
    fn word_sequences() {
        assert_eq!(word_to_sequence("hello").as_deref(), Some("43556"));
        assert_eq!(word_to_sequence("Good").as_deref(), Some("4663"));
        assert_eq!(word_to_sequence("don't"), None);
    }
}
