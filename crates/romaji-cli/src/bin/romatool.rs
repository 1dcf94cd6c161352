use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use romaji_cli::commands::pattern_ops;
use romaji_cli::commands::replay_ops::{self, ReplayOptions};
use romaji_cli::trace_init::init_tracing;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "romatool", about = "Romaji pattern table and typing diagnostics")]
struct Cli {
    /// Write a JSONL trace into this directory (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the embedded default pattern TOML
    Export,

    /// Validate a pattern TOML file
    Validate {
        /// Path to the pattern TOML file
        file: PathBuf,
    },

    /// Split text into units and list the spellings of each
    Spell {
        /// Kana text
        text: String,
        /// Pattern TOML file to use instead of the default table
        #[arg(long)]
        patterns: Option<PathBuf>,
    },

    /// Find the unit a complete romaji spelling belongs to
    Reverse {
        /// Romaji spelling
        romaji: String,
        /// Pattern TOML file to use instead of the default table
        #[arg(long)]
        patterns: Option<PathBuf>,
    },

    /// Type keys against text and show the result of every keystroke
    Replay {
        /// Kana text to type
        text: String,
        /// Keys to feed, one character at a time
        keys: String,
        /// Pattern TOML file to use instead of the default table
        #[arg(long)]
        patterns: Option<PathBuf>,
        /// Keep the partial spelling after a rejected key
        #[arg(long)]
        keep_on_reject: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let _trace = cli.trace_dir.as_deref().map(init_tracing);

    match cli.command {
        Command::Export => print!("{}", pattern_ops::export()),
        Command::Validate { file } => {
            let msg = die!(pattern_ops::validate(&file), "Error: {}");
            println!("{msg}");
        }
        Command::Spell { text, patterns } => {
            let table = die!(pattern_ops::load_table(patterns.as_deref()), "Error: {}");
            print!("{}", pattern_ops::spell(&table, &text));
        }
        Command::Reverse { romaji, patterns } => {
            let table = die!(pattern_ops::load_table(patterns.as_deref()), "Error: {}");
            match pattern_ops::reverse(&table, &romaji) {
                Some(unit) => println!("{unit}"),
                None => {
                    eprintln!("No unit is spelled {romaji:?}");
                    process::exit(1);
                }
            }
        }
        Command::Replay {
            text,
            keys,
            patterns,
            keep_on_reject,
            json,
        } => {
            let table = die!(pattern_ops::load_table(patterns.as_deref()), "Error: {}");
            let opts = ReplayOptions {
                clear_on_reject: !keep_on_reject,
            };
            let replay = replay_ops::replay(table, &text, &keys, opts);
            if json {
                println!("{}", die!(replay_ops::format_json(&replay), "Error: {}"));
            } else {
                print!("{}", replay_ops::format_text(&replay));
            }
            if !replay.completed {
                process::exit(2);
            }
        }
    }
}
