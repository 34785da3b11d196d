use super::simulator::Keypad;
use crate::types::{KeyEvent, Notification, WordState};
use crate::InputMode;

use KeyEvent::{Backspace, Char};

fn typed(keys: &str) -> Keypad {
    let mut pad = Keypad::new(InputMode::Predictive);
    pad.type_keys(keys);
    pad
}

#[test]
fn test_prediction_follows_each_digit() {
    let mut pad = Keypad::new(InputMode::Predictive);
    assert_eq!(pad.tap('2'), vec![Char('a')]);
    pad.pause(600);
    assert_eq!(pad.tap('4'), vec![Backspace, Char('a'), Char('g'), Char('o')]);
    pad.pause(600);
    pad.tap('6');
    assert_eq!(pad.text(), "ago");
    assert_eq!(pad.session.word_state(), WordState::Pending);
    assert_eq!(pad.session.engine().key_sequence(), "246");
}

#[test]
fn test_digits_act_on_press() {
    let mut pad = Keypad::new(InputMode::Predictive);
    pad.session.on_press(super::raw('2'), pad.now);
    assert_eq!(pad.session.sink_mut().drain(), vec![Char('a')]);
    pad.session.on_release(pad.now + 50);
    assert!(pad.session.sink().is_empty());
}

#[test]
fn test_prefix_candidates_change_with_sequence() {
    let mut pad = Keypad::new(InputMode::Predictive);
    let mut shown = Vec::new();
    for digit in "4663".chars() {
        pad.tap(digit);
        pad.pause(600);
        shown.push(pad.text());
    }
    assert_eq!(shown, vec!["hello", "in", "good", "good"]);
    assert_eq!(pad.session.engine().candidate_count(), 4);
}

#[test]
fn test_space_commits_then_new_word_starts() {
    let mut pad = typed("246");
    assert_eq!(pad.tap('0'), vec![Char(' ')]);
    assert_eq!(pad.session.word_state(), WordState::Committed);
    pad.pause(600);
    assert_eq!(pad.tap('9'), vec![Char('9')]);
    assert_eq!(pad.text(), "ago 9");
    assert_eq!(pad.session.engine().key_sequence(), "9");
}

#[test]
fn test_hash_cycles_pending_candidates() {
    let mut pad = typed("4663");
    let mut words = Vec::new();
    for _ in 0..4 {
        pad.tap('#');
        words.push(pad.text());
    }
    assert_eq!(words, vec!["home", "gone", "hood", "good"]);
}

#[test]
fn test_hash_cycles_committed_word() {
    let mut pad = typed("4663");
    pad.tap('0');
    assert_eq!(pad.text(), "good ");
    pad.tap('#');
    assert_eq!(pad.text(), "home ");
    assert_eq!(pad.session.word_state(), WordState::Committed);
}

#[test]
fn test_hash_without_choice_does_nothing() {
    let mut pad = typed("26");
    assert_eq!(pad.text(), "and");
    assert!(pad.tap('#').is_empty());

    let mut idle = Keypad::new(InputMode::Predictive);
    assert!(idle.tap('#').is_empty());
}

#[test]
fn test_star_walks_back_through_sequence() {
    let mut pad = typed("4663");
    let mut shown = Vec::new();
    for _ in 0..4 {
        pad.tap('*');
        pad.pause(600);
        shown.push(pad.text());
    }
    assert_eq!(shown, vec!["good", "in", "hello", ""]);
    assert_eq!(pad.session.word_state(), WordState::Idle);
}

#[test]
fn test_star_after_commit_removes_space_only() {
    let mut pad = typed("4663");
    pad.tap('0');
    assert_eq!(pad.tap('*'), vec![Backspace]);
    assert_eq!(pad.text(), "good");
    assert_eq!(pad.session.word_state(), WordState::Idle);
    pad.pause(600);
    assert_eq!(pad.tap('*'), vec![Backspace]);
    assert_eq!(pad.text(), "goo");
}

#[test]
fn test_unknown_sequence_shows_digits() {
    let pad = typed("99");
    assert_eq!(pad.text(), "99");
    assert!(!pad.session.engine().has_matches());
}

#[test]
fn test_losing_matches_falls_back_to_digits() {
    let mut pad = typed("843");
    assert_eq!(pad.text(), "the");
    pad.tap('5');
    assert_eq!(pad.text(), "8435");
    pad.pause(600);
    pad.tap('*');
    assert_eq!(pad.text(), "the");
}

#[test]
fn test_space_after_raw_digits_finalizes() {
    let mut pad = typed("99");
    pad.tap('0');
    assert_eq!(pad.text(), "99 ");
    assert_eq!(pad.session.word_state(), WordState::Idle);
    assert_eq!(pad.session.engine().key_sequence(), "");
}

#[test]
fn test_full_sequence_ignores_digits() {
    let mut pad = typed("9999999999");
    assert!(pad.session.engine().is_full());
    assert!(pad.tap('9').is_empty());
    assert_eq!(pad.text(), "9999999999");
}

#[test]
fn test_punctuation_finalizes_word() {
    let mut pad = typed("4663");
    pad.tap('1');
    assert_eq!(pad.text(), "good.");
    pad.tap('1');
    assert_eq!(pad.text(), "good,");
    assert_eq!(pad.session.word_state(), WordState::Idle);
}

#[test]
fn test_long_hash_commits_and_switches_mode() {
    let mut pad = typed("4663");
    assert_eq!(pad.long('#'), vec![Char(' ')]);
    assert_eq!(pad.text(), "good ");
    assert_eq!(pad.session.input_mode(), InputMode::MultiTap);
    assert_eq!(
        pad.session.notifier().shown,
        vec![(Notification::EnteringMultiTap, 2000)]
    );

    pad.tap('2');
    pad.tap('2');
    assert_eq!(pad.text(), "good b");
}

#[test]
fn test_reset_returns_to_default_mode() {
    let mut pad = typed("4663");
    pad.long('#');
    pad.session.reset();
    assert_eq!(pad.session.input_mode(), InputMode::Predictive);
    assert_eq!(pad.session.word_state(), WordState::Idle);
    assert_eq!(pad.session.engine().key_sequence(), "");
}
