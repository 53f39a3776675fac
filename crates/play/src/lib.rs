//! Terminal chess against the alpha-beta engine

pub mod cli;
pub mod config;
pub mod game;
pub mod render;

pub use cli::{CliOptions, USAGE};
pub use config::{HumanSide, PlayConfig};
pub use game::{play_game, result_message, GameEnd, GameRecord};
pub use render::render_board;
