//! Where a dictionary comes from: the compiled-in table or a word-list file.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use keypad_core::dict::{DictError, Dictionary, WordList, DEFAULT_DICTIONARY};

/// Words kept from a word-list file unless told otherwise.
pub const DEFAULT_MAX_WORDS: usize = 1000;

#[derive(Debug, thiserror::Error)]
pub enum DictSourceError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Dict(#[from] DictError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictSource {
    Builtin,
    /// Frequency-ordered word list, one word per line.
    WordFile { path: PathBuf, max_words: usize },
}

impl DictSource {
    pub fn from_args(words: Option<&str>, max_words: usize) -> Self {
        match words {
            Some(path) => Self::WordFile {
                path: PathBuf::from(path),
                max_words,
            },
            None => Self::Builtin,
        }
    }

    pub fn load(&self) -> Result<Arc<dyn Dictionary>, DictSourceError> {
        let dict: Arc<dyn Dictionary> = match self {
            Self::Builtin => Arc::new(DEFAULT_DICTIONARY),
            Self::WordFile { path, max_words } => {
                let words = read_word_file(path)?;
                let list = WordList::from_words(&words, *max_words);
                if list.is_empty() {
                    return Err(DictSourceError::Parse(format!(
                        "no usable words in {}",
                        path.display()
                    )));
                }
                Arc::new(list)
            }
        };
        Ok(dict)
    }
}

impl fmt::Display for DictSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("built-in"),
            Self::WordFile { path, max_words } => {
                write!(f, "{} (top {max_words})", path.display())
            }
        }
    }
}

/// Read a word-list file. See [`parse_word_list`] for the format.
pub fn read_word_file(path: &Path) -> Result<Vec<String>, DictSourceError> {
    let text = fs::read_to_string(path)?;
    Ok(parse_word_list(&text))
}

/// One word per line, most frequent first. Blank lines and `#` comments are
/// skipped; anything after the first whitespace (e.g. a count) is ignored.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn parse_skips_comments_and_counts() {
        let words = parse_word_list("# header\nthe 23135851162\n\n  of\nand\t1000\n");
        assert_eq!(words, vec!["the", "of", "and"]);
    }

    #[test]
    fn builtin_source_is_valid() {
        let dict = DictSource::Builtin.load().unwrap();
        assert!(dict.validate().is_ok());
        assert_eq!(DictSource::from_args(None, 10), DictSource::Builtin);
    }

    #[test]
    fn word_file_source_respects_max_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "good\nhome\ngone\nhood\nhello").unwrap();
        let path = file.path().to_str().unwrap();

        let dict = DictSource::from_args(Some(path), 3).load().unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.word(0), Some("good"));
        assert_eq!(dict.key_sequence(0), Some("4663"));
    }

    #[test]
    fn word_file_without_usable_words_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# nothing\n123\ncafé").unwrap();
        let source = DictSource::from_args(file.path().to_str(), 10);
        assert!(matches!(source.load(), Err(DictSourceError::Parse(_))));
    }

    #[test]
    fn missing_word_file_is_io_error() {
        let source = DictSource::from_args(Some("/nonexistent/words.txt"), 10);
        assert!(matches!(source.load(), Err(DictSourceError::Io(_))));
    }
}
