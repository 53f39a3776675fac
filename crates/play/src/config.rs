//! Driver configuration
//!
//! Read from a TOML file; every key is optional. Command-line flags are
//! applied on top by `main`.
//!
//! ```toml
//! human_side = "black"
//! show_board = true
//! max_plies = 200
//!
//! [engine]
//! max_depth = 4
//! ```

use std::path::Path;

use alphabeta_engine::EngineConfig;
use anyhow::{Context, Result};
use chess_core::{Color, Position, STARTPOS_FEN};
use serde::{Deserialize, Serialize};

/// Which side the person at the keyboard plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HumanSide {
    #[default]
    White,
    Black,
    /// Engine plays both sides.
    None,
}

impl HumanSide {
    pub fn color(self) -> Option<Color> {
        match self {
            HumanSide::White => Some(Color::White),
            HumanSide::Black => Some(Color::Black),
            HumanSide::None => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    pub human_side: HumanSide,
    pub start_fen: String,
    pub show_board: bool,
    /// Stop after this many plies; 0 plays to the end.
    pub max_plies: u32,
    pub engine: EngineConfig,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human_side: HumanSide::White,
            start_fen: STARTPOS_FEN.to_string(),
            show_board: true,
            max_plies: 0,
            engine: EngineConfig::default(),
        }
    }
}

impl PlayConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("invalid play config")?;
        config.engine.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    pub fn start_position(&self) -> Result<Position> {
        Position::from_fen(&self.start_fen)
            .with_context(|| format!("bad start FEN {:?}", self.start_fen))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
