//! chess_play CLI
//!
//! Play chess in the terminal against the alpha-beta engine, or watch it play
//! itself.

use std::env;
use std::io;

use alphabeta_engine::AlphaBetaEngine;
use anyhow::Result;
use chess_play::{play_game, CliOptions, USAGE};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let opts = CliOptions::parse(&args)?;
    if opts.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = opts.resolve()?;
    debug!(?config, "starting game");

    let mut engine = AlphaBetaEngine::new(config.engine);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play_game(&config, &mut engine, stdin.lock(), &mut stdout)?;
    Ok(())
}
