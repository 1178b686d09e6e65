use std::path::PathBuf;

use clap::{Parser, Subcommand};
use evaluation::scores::DEFAULT_K_FACTOR;

#[derive(Parser, Debug)]
#[command(name = "Taper")]
#[command(about = "Static evaluation of chess positions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Write debug logs to a file instead of the terminal.
    #[arg(short, long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Log progress and skipped positions to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override one evaluation parameter, e.g. `--set doubled_pawn_penalty=30`.
    /// Repeatable; goes before the subcommand.
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_override)]
    pub overrides: Vec<(String, String)>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a single position for the side to move.
    Eval {
        /// Position in FEN; the six fields may be passed quoted or unquoted.
        #[arg(required = true, num_args = 1..)]
        fen: Vec<String>,

        /// Also print the phase and each White-relative component.
        #[arg(long)]
        breakdown: bool,
    },

    /// Score every position in a file, one FEN per line.
    Batch {
        file: PathBuf,

        /// Worker threads. Defaults to the number of CPUs.
        #[arg(long)]
        threads: Option<usize>,

        /// Sigmoid scale used for the win-probability column.
        #[arg(long, default_value_t = DEFAULT_K_FACTOR)]
        k_factor: f64,
    },

    /// Print every evaluation parameter in tuning-vector order.
    Params,
}

fn parse_override(input: &str) -> Result<(String, String), String> {
    match input.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{}'", input)),
    }
}
