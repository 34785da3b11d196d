use std::io::{self, Read};
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use keypad_cli::commands::{config_ops, sim_ops};
use keypad_cli::dict_source::{DictSource, DEFAULT_MAX_WORDS};
use keypad_core::settings::{self, InputMode};

/// Unwrap a Result or print the error and exit.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(
    name = "keytool",
    about = "Drive a keypad session from a key script",
    after_help = "Script tokens: `2` tap, `444` taps, `2:L` long press, `+600` pause (ms).\n\
                  With no script arguments the script is read from stdin."
)]
struct Cli {
    /// Starting input mode (default: from settings)
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    /// Settings TOML file
    #[arg(long)]
    settings: Option<String>,
    /// Word list to build the dictionary from (default: built-in table)
    #[arg(long)]
    words: Option<String>,
    /// Maximum number of words kept from --words
    #[arg(long, default_value_t = DEFAULT_MAX_WORDS)]
    max_words: usize,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
    /// Log session decisions to stderr
    #[arg(short, long)]
    verbose: bool,
    /// Script tokens
    script: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    MultiTap,
    Predictive,
}

impl From<ModeArg> for InputMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::MultiTap => InputMode::MultiTap,
            ModeArg::Predictive => InputMode::Predictive,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("keypad_session=debug,keypad_core=debug")),
            )
            .init();
    }

    let settings = match &cli.settings {
        Some(file) => die!(config_ops::load_settings(file), "Error: {}"),
        None => settings::settings().clone(),
    };

    let script = if cli.script.is_empty() {
        let mut buf = String::new();
        die!(io::stdin().read_to_string(&mut buf), "Error reading stdin: {}");
        buf
    } else {
        cli.script.join(" ")
    };

    sim_ops::run(sim_ops::SimOptions {
        source: DictSource::from_args(cli.words.as_deref(), cli.max_words),
        settings,
        mode: cli.mode.map(InputMode::from),
        json: cli.json,
        script: &script,
    });
}
