// Command-line helper for Advent of Code.
//
// Usage:
//  aoc session [KEY]                          - Store or show the session key
//  aoc task <day> <part> [output] [--year Y]  - Fetch a puzzle description as Markdown
//  aoc input <day> [output] [--year Y]        - Fetch the puzzle input
//  aoc submit <day> <part> <answer> [--year Y] - Submit an answer
//
// Task output is rendered on a terminal and printed raw when piped. With an
// output path it is appended to a .md file or as a new cell to a .ipynb notebook.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Context;
use aoc_cli::client::Client;
use aoc_cli::commands;
use aoc_cli::output::OutputMode;
use aoc_cli::puzzle::{current_year, validate_part, Puzzle};
use aoc_cli::session::SessionStore;
use aoc_config::AocConfig;
use aoc_markdown::MarkdownTranscoder;
use clap::{ArgAction, Parser, Subcommand, ValueHint};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "aoc", version)]
#[command(about = "Advent of Code helper")]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Path to an aoc.toml configuration file
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Set session key for adventofcode.com.
    Session {
        /// Session cookie value; omit to show the stored key
        key: Option<String>,
    },
    /// Fetches requested task. If output file exists, the new task will be appended.
    Task {
        day: u32,
        part: u32,
        /// .md or .ipynb file to append to
        #[arg(value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
        /// Event year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Fetches the input for the requested task.
    Input {
        day: u32,
        /// File to write the input to
        #[arg(value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
        /// Event year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Submits solution for the requested task.
    Submit {
        day: u32,
        part: u32,
        answer: String,
        /// Event year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Build a client, warning when no session key is stored.
fn connect(config: &AocConfig) -> aoc_cli::Result<Client> {
    let session = SessionStore::from_config(&config.session)?.load()?;
    if session.is_none() {
        tracing::warn!(
            "Session key has not been set! You will only be able to request the first part of each puzzle."
        );
    }
    Client::new(&config.site, session)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = aoc_config::load(cli.config.as_deref()).context("failed to load configuration")?;
    let transcoder = MarkdownTranscoder::with_options((&config.markdown).into());
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Session { key } => {
            let store = SessionStore::from_config(&config.session)?;
            commands::session(&store, key.as_deref(), &mut stdout)?;
        }
        Commands::Task {
            day,
            part,
            output,
            year,
        } => {
            let puzzle = Puzzle::new(year.unwrap_or_else(current_year), day)?;
            let part = validate_part(part)?;
            let client = connect(&config)?;
            let mode = OutputMode::for_path(output).interactive(io::stdout().is_terminal());
            commands::task(&client, &transcoder, &puzzle, part, &mode, &mut stdout)?;
        }
        Commands::Input { day, output, year } => {
            let puzzle = Puzzle::new(year.unwrap_or_else(current_year), day)?;
            let client = connect(&config)?;
            commands::input(&client, &puzzle, output.as_deref(), &mut stdout)?;
        }
        Commands::Submit {
            day,
            part,
            answer,
            year,
        } => {
            let puzzle = Puzzle::new(year.unwrap_or_else(current_year), day)?;
            let part = validate_part(part)?;
            let client = connect(&config)?;
            commands::submit(&client, &transcoder, &puzzle, part, &answer, &mut stdout)?;
        }
    }

    Ok(())
}
