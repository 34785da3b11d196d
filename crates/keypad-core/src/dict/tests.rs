use super::*;

#[test]
fn default_dictionary_is_valid() {
    DEFAULT_DICTIONARY.validate().unwrap();
    assert!(DEFAULT_DICTIONARY.len() > 400);
}

#[test]
fn default_dictionary_keeps_frequency_order_within_sequence() {
    let words: Vec<&str> = DEFAULT_DICTIONARY
        .entries()
        .iter()
        .filter(|e| e.seq == "4663")
        .map(|e| e.word)
        .collect();
    assert_eq!(words, vec!["good", "home", "gone", "hood", "hoof"]);
}

#[test]
fn word_list_sorts_and_filters() {
    let list = WordList::from_words(["the", "Hello", "can't", "the", "be", "a"], 10);
    let rows: Vec<(&str, &str)> = list
        .entries()
        .iter()
        .map(|(s, w)| (s.as_str(), w.as_str()))
        .collect();
    assert_eq!(
        rows,
        vec![("2", "a"), ("23", "be"), ("43556", "hello"), ("843", "the")]
    );
    list.validate().unwrap();
}

#[test]
fn word_list_respects_max_words() {
    let list = WordList::from_words(["of", "and", "to", "in"], 2);
    assert_eq!(list.len(), 2);
    let words: Vec<&str> = (0..list.len()).filter_map(|i| list.word(i)).collect();
    assert_eq!(words, vec!["and", "of"]);
}

#[test]
fn validate_rejects_unsorted() {
    let err = WordList::from_sorted(vec![
        ("843".to_string(), "the".to_string()),
        ("2".to_string(), "a".to_string()),
    ])
    .unwrap_err();
    assert!(matches!(err, DictError::Unsorted { index: 1, .. }));
}

#[test]
fn validate_rejects_bad_rows() {
    let err = WordList::from_sorted(vec![("21".to_string(), "a".to_string())]).unwrap_err();
    assert!(matches!(err, DictError::InvalidSequence { index: 0, .. }));

    let err = WordList::from_sorted(vec![("3".to_string(), "a".to_string())]).unwrap_err();
    assert!(matches!(err, DictError::Mismatch { index: 0, .. }));

    let err = WordList::from_sorted(Vec::new()).unwrap_err();
    assert!(matches!(err, DictError::Empty));
}
