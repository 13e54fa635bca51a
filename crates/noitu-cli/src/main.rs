//! CLI frontend for the Noitu word-chain game.

mod chat;
mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "noitu",
    about = "Noitu — a word-chain game against the machine",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively; each stdin line is a chat message
    Play {
        /// Word list, one word or phrase per line
        #[arg(short, long, env = "NOITU_DICT", default_value = "words_vi.txt")]
        dict: PathBuf,

        /// Command prefix
        #[arg(short, long, env = "NOITU_PREFIX", default_value = "!")]
        prefix: String,

        /// RNG seed for a reproducible opponent
        #[arg(short, long)]
        seed: Option<u64>,

        /// Name of the simulated play-space
        #[arg(long, default_value = "local")]
        space: String,

        /// Channel the session starts in
        #[arg(short, long, default_value = "game")]
        channel: String,
    },

    /// Print the canonical form of each argument
    Normalize {
        /// Text to normalize
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Look words up in the dictionary
    Check {
        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,

        /// Word list, one word or phrase per line
        #[arg(short, long, env = "NOITU_DICT", default_value = "words_vi.txt")]
        dict: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    // A missing .env file is fine; real environment variables still apply.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            dict,
            prefix,
            seed,
            space,
            channel,
        } => commands::play::run(&dict, &prefix, seed, &space, &channel),
        Commands::Normalize { text } => commands::normalize::run(&text),
        Commands::Check { words, dict, json } => commands::check::run(&dict, &words, json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
