use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::process;
use std::sync::Arc;

use keypad_core::dict::{Dictionary, WordList};
use keypad_core::keymap::word_to_sequence;
use keypad_core::predictive::{PredictiveEngine, MAX_SEQUENCE_LENGTH};

use crate::dict_source::{self, DictSource};

/// Unwrap a Result or print the error and exit.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

/// Generate the Rust source of a static dictionary table on stdout.
pub fn gen(input: &str, max_words: usize) {
    eprintln!("Reading words from {input}...");
    let words = die!(
        dict_source::read_word_file(Path::new(input)),
        "Error reading {input}: {}"
    );
    let list = WordList::from_words(&words, max_words);
    if list.is_empty() {
        eprintln!("Error: no usable words in {input}");
        process::exit(1);
    }

    let source_name = Path::new(input)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.to_string());
    print!("{}", render_table(&list, &source_name));

    eprintln!(
        "Generated {} entries from {} words (max {max_words})",
        list.len(),
        words.len()
    );
    eprintln!("Word length distribution:");
    for (len, count) in length_distribution(&list) {
        eprintln!("  {len:>2} letters: {count} words");
    }
}

/// Rust source for a `[T9Entry; N]` table, rows in dictionary order.
pub fn render_table(list: &WordList, source_name: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("// Generated by `dictool gen` from {source_name}.\n"));
    out.push_str("// Sorted by key sequence; entries sharing a sequence keep frequency order.\n\n");
    out.push_str("use super::T9Entry;\n\n");
    out.push_str(&format!(
        "pub(super) static ENTRIES: [T9Entry; {}] = [\n",
        list.len()
    ));
    for (seq, word) in list.entries() {
        out.push_str(&format!("    T9Entry::new({seq:?}, {word:?}),\n"));
    }
    out.push_str("];\n");
    out
}

/// Word count per word length (in characters).
pub fn length_distribution(dict: &dyn Dictionary) -> BTreeMap<usize, usize> {
    let mut by_len = BTreeMap::new();
    for word in (0..dict.len()).filter_map(|i| dict.word(i)) {
        *by_len.entry(word.chars().count()).or_insert(0) += 1;
    }
    by_len
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictStats {
    pub entries: usize,
    pub sequences: usize,
    pub longest_sequence: usize,
    /// Sequence shared by the most words, and how many.
    pub most_ambiguous: Option<(String, usize)>,
}

pub fn stats(dict: &dyn Dictionary) -> DictStats {
    let mut per_seq: HashMap<&str, usize> = HashMap::new();
    for seq in (0..dict.len()).filter_map(|i| dict.key_sequence(i)) {
        *per_seq.entry(seq).or_insert(0) += 1;
    }
    let most_ambiguous = per_seq
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(seq, count)| (seq.to_string(), *count));
    DictStats {
        entries: dict.len(),
        sequences: per_seq.len(),
        longest_sequence: per_seq.keys().map(|s| s.len()).max().unwrap_or(0),
        most_ambiguous,
    }
}

pub fn info(source: &DictSource) {
    let dict = die!(source.load(), "Error loading dictionary: {}");
    let s = stats(&*dict);

    println!("Source:           {source}");
    println!("Entries:          {}", s.entries);
    println!("Sequences:        {}", s.sequences);
    println!("Longest sequence: {}", s.longest_sequence);
    if let Some((seq, count)) = &s.most_ambiguous {
        println!("Most ambiguous:   {seq} ({count} words)");
    }
    match dict.validate() {
        Ok(()) => println!("Valid:            yes"),
        Err(e) => println!("Valid:            no ({e})"),
    }
    println!("Word lengths:");
    for (len, count) in length_distribution(&*dict) {
        println!("  {len:>2}: {count}");
    }
}

/// Every `(sequence, word)` row the predictive engine offers for `digits`,
/// in cycling order.
pub fn candidates(dict: Arc<dyn Dictionary>, digits: &str) -> Vec<(String, String)> {
    let mut engine = PredictiveEngine::new(Arc::clone(&dict));
    for d in digits.chars() {
        engine.add_digit(d);
    }
    engine
        .match_range()
        .filter_map(|i| Some((dict.key_sequence(i)?.to_string(), dict.word(i)?.to_string())))
        .collect()
}

pub fn lookup(source: &DictSource, digits: &str) {
    if digits.is_empty() || !digits.chars().all(|c| ('2'..='9').contains(&c)) {
        eprintln!("Error: key sequence must be digits 2-9");
        process::exit(1);
    }
    if digits.len() > MAX_SEQUENCE_LENGTH {
        eprintln!("Warning: only the first {MAX_SEQUENCE_LENGTH} digits are used");
    }
    let dict = die!(source.load(), "Error loading dictionary: {}");

    let found = candidates(dict, digits);
    if found.is_empty() {
        println!("{digits}: no match");
        return;
    }
    println!("{digits}: {} candidates", found.len());
    for (i, (seq, word)) in found.iter().enumerate() {
        let kind = if seq == digits { "exact" } else { "prefix" };
        println!("  {i:>3}  {word:<16} {seq:<11} {kind}");
    }
}

pub fn encode(word: &str) {
    match word_to_sequence(word) {
        Some(seq) => println!("{seq}"),
        None => {
            eprintln!("Error: {word:?} has characters outside a-z");
            process::exit(1);
        }
    }
}

pub fn validate(file: &str, max_words: usize) {
    let words = die!(
        dict_source::read_word_file(Path::new(file)),
        "Error reading {file}: {}"
    );
    let unusable = words
        .iter()
        .filter(|w| word_to_sequence(w).is_none())
        .count();
    let list = WordList::from_words(&words, max_words);
    die!(list.validate(), "Error: {}");
    println!(
        "OK: {} entries ({} words read, {unusable} unusable)",
        list.len(),
        words.len()
    );
}

#[cfg(test)]
mod tests {
    use keypad_core::dict::DEFAULT_DICTIONARY;

    use super::*;

    fn sample() -> WordList {
        WordList::from_words(["the", "of", "good", "home", "gone", "in", "hello"], 100)
    }

    #[test]
    fn table_rows_are_sorted() {
        let src = render_table(&sample(), "words.txt");
        assert!(src.starts_with("// Generated by `dictool gen` from words.txt."));
        assert!(src.contains("pub(super) static ENTRIES: [T9Entry; 7] = ["));
        let rows: Vec<&str> = src
            .lines()
            .filter(|l| l.trim_start().starts_with("T9Entry::new"))
            .collect();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].trim(), r#"T9Entry::new("43556", "hello"),"#);
        assert_eq!(rows[2].trim(), r#"T9Entry::new("4663", "good"),"#);
        assert_eq!(rows[6].trim(), r#"T9Entry::new("843", "the"),"#);
    }

    #[test]
    fn length_distribution_counts_words() {
        let dist = length_distribution(&sample());
        assert_eq!(dist.get(&2), Some(&2));
        assert_eq!(dist.get(&3), Some(&1));
        assert_eq!(dist.get(&4), Some(&3));
        assert_eq!(dist.get(&5), Some(&1));
    }

    #[test]
    fn stats_finds_most_ambiguous_sequence() {
        let s = stats(&sample());
        assert_eq!(s.entries, 7);
        assert_eq!(s.sequences, 5);
        assert_eq!(s.longest_sequence, 5);
        assert_eq!(s.most_ambiguous, Some(("4663".to_string(), 3)));
    }

    #[test]
    fn candidates_follow_engine_order() {
        let dict: Arc<dyn Dictionary> = Arc::new(sample());
        let words: Vec<String> = candidates(Arc::clone(&dict), "46")
            .into_iter()
            .map(|(_, w)| w)
            .collect();
        assert_eq!(words, vec!["in", "good", "home", "gone"]);
        assert!(candidates(dict, "99").is_empty());
    }

    #[test]
    fn builtin_dictionary_knows_hello() {
        let found = candidates(Arc::new(DEFAULT_DICTIONARY), "43556");
        assert_eq!(found.first().map(|(_, w)| w.as_str()), Some("hello"));
    }
}
