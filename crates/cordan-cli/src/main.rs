//! Cordan game setup command.
//!
//! Sets up one game for four players and prints the board and turn tracker
//! as JSON on stdout. Logs go to stderr.

use clap::Parser;
use cordan_core::setup_game_with_rng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod args;
mod roster;

use args::Args;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    debug!(?args, "parsed arguments");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let parties = roster::roster(&args.players, &mut rng)?;
    let setup = setup_game_with_rng(&parties, &mut rng)?;

    info!(
        game = %setup.board.linear_id(),
        first = ?setup.turn_tracker.current_player().map(|p| &p.name),
        seed = ?args.seed,
        "Game set up"
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&setup)?
    } else {
        serde_json::to_string(&setup)?
    };
    println!("{}", json);

    Ok(())
}
