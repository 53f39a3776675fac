//! Command-line flags

use std::path::PathBuf;

use alphabeta_engine::EngineConfig;
use anyhow::{bail, Context, Result};

use crate::config::{HumanSide, PlayConfig};

pub const USAGE: &str = "\
Usage: chess_play [options]

Options:
  --config <file>    Load settings from a TOML file
  --depth, -d <n>    Search depth in plies (0-8, default 3)
  --fen <fen>        Start from this position instead of the initial one
  --white            Play White (default)
  --black            Play Black (the engine plays White)
  --self-play        Let the engine play both sides
  --max-plies <n>    Stop after n plies (0 = no limit)
  --no-board         Do not print the board before each move
  --help, -h         Show this message

Set RUST_LOG (e.g. RUST_LOG=debug) for search logs.";

/// Flags given on the command line. Anything left `None` keeps the value
/// from the config file or the default.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub config: Option<PathBuf>,
    pub depth: Option<u8>,
    pub fen: Option<String>,
    pub human_side: Option<HumanSide>,
    pub max_plies: Option<u32>,
    pub no_board: bool,
    pub help: bool,
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    match args.get(i + 1) {
        Some(v) => Ok(v.as_str()),
        None => bail!("{flag} needs a value"),
    }
}

impl CliOptions {
    /// Parses everything after the program name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut opts = CliOptions::default();

        let mut i = 0;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--config" | "-c" => {
                    opts.config = Some(PathBuf::from(value(args, i, flag)?));
                    i += 1;
                }
                "--depth" | "-d" => {
                    let v = value(args, i, flag)?;
                    opts.depth = Some(v.parse().with_context(|| format!("bad depth {v:?}"))?);
                    i += 1;
                }
                "--fen" => {
                    opts.fen = Some(value(args, i, flag)?.to_string());
                    i += 1;
                }
                "--max-plies" => {
                    let v = value(args, i, flag)?;
                    opts.max_plies = Some(v.parse().with_context(|| format!("bad ply count {v:?}"))?);
                    i += 1;
                }
                "--black" => opts.human_side = Some(HumanSide::Black),
                "--white" => opts.human_side = Some(HumanSide::White),
                "--self-play" => opts.human_side = Some(HumanSide::None),
                "--no-board" => opts.no_board = true,
                "--help" | "-h" => opts.help = true,
                other => bail!("unknown argument {other:?}"),
            }
            i += 1;
        }

        Ok(opts)
    }

    /// Loads the config file, if any, and applies the flags on top.
    pub fn resolve(&self) -> Result<PlayConfig> {
        let mut config = match &self.config {
            Some(path) => PlayConfig::load(path)?,
            None => PlayConfig::default(),
        };
        self.apply(&mut config)?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut PlayConfig) -> Result<()> {
        if let Some(depth) = self.depth {
            config.engine = EngineConfig::with_depth(depth)?;
        }
        if let Some(fen) = &self.fen {
            config.start_fen = fen.clone();
        }
        if let Some(side) = self.human_side {
            config.human_side = side;
        }
        if let Some(plies) = self.max_plies {
            config.max_plies = plies;
        }
        if self.no_board {
            config.show_board = false;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
