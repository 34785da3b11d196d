use clap::{Parser, Subcommand};

use keypad_cli::commands::{config_ops, dict_ops};
use keypad_cli::dict_source::{DictSource, DEFAULT_MAX_WORDS};

#[derive(Parser)]
#[command(name = "dictool", about = "Keypad T9 dictionary tool")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a static dictionary table (Rust source) from a word list
    Gen {
        /// Word list, one word per line, most frequent first
        input: String,
        /// Maximum number of words to keep
        max_words: usize,
    },
    /// Show dictionary statistics
    Info {
        /// Word list to build the dictionary from (default: built-in table)
        #[arg(long)]
        words: Option<String>,
        /// Maximum number of words kept from --words
        #[arg(long, default_value_t = DEFAULT_MAX_WORDS)]
        max_words: usize,
    },
    /// List the candidates offered for a key sequence
    Lookup {
        /// Word list to build the dictionary from (default: built-in table)
        #[arg(long)]
        words: Option<String>,
        /// Maximum number of words kept from --words
        #[arg(long, default_value_t = DEFAULT_MAX_WORDS)]
        max_words: usize,
        /// Digits 2-9
        digits: String,
    },
    /// Print the key sequence that types a word
    Encode {
        word: String,
    },
    /// Check that a word list yields a valid dictionary
    Validate {
        /// Word list file
        file: String,
        /// Maximum number of words to keep
        #[arg(long, default_value_t = DEFAULT_MAX_WORDS)]
        max_words: usize,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Gen { input, max_words } => dict_ops::gen(&input, max_words),
        Command::Info { words, max_words } => {
            dict_ops::info(&DictSource::from_args(words.as_deref(), max_words))
        }
        Command::Lookup {
            words,
            max_words,
            digits,
        } => dict_ops::lookup(&DictSource::from_args(words.as_deref(), max_words), &digits),
        Command::Encode { word } => dict_ops::encode(&word),
        Command::Validate { file, max_words } => dict_ops::validate(&file, max_words),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
