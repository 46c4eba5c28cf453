//! Command-line arguments.

use clap::Parser;

/// Cordan - set up a new four-player game board
#[derive(Parser, Debug)]
#[command(name = "cordan")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Names of the four players
    #[arg(required = true, num_args = 1..)]
    pub players: Vec<String>,

    /// Random seed (default: random)
    #[arg(short, long, env = "CORDAN_SEED")]
    pub seed: Option<u64>,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,
}
