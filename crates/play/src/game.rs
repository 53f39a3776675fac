//! Text game loop: a human against the engine, or the engine against itself

use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::Result;
use chess_core::{parse_uci_move, Engine, Move, MoveParseError, Outcome, Position};
use tracing::{info, warn};

use crate::config::PlayConfig;
use crate::render::render_board;

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    Finished(Outcome),
    /// The human typed `quit`.
    Quit,
    /// Input ran out while waiting for a human move.
    InputClosed,
    PlyLimit,
}

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub position: Position,
    pub moves: Vec<Move>,
    pub end: GameEnd,
}

/// The closing line printed for a finished game.
pub fn result_message(outcome: Outcome) -> String {
    match outcome {
        Outcome::Checkmate { winner } => format!("Checkmate! {} wins!", winner),
        Outcome::Stalemate => "Stalemate! Draw.".to_string(),
        Outcome::InsufficientMaterial => "Draw due to insufficient material.".to_string(),
        Outcome::FiftyMoveRule | Outcome::ThreefoldRepetition => {
            "Draw by repetition or 50-move rule.".to_string()
        }
    }
}

enum HumanInput {
    Move(Move),
    Quit,
    Closed,
}

fn read_human_move<R: BufRead, W: Write>(
    pos: &Position,
    input: &mut R,
    out: &mut W,
) -> Result<HumanInput> {
    let mut line = String::new();
    loop {
        write!(out, "Enter move (e.g., e2e4, g1f3, a7a8q) or 'quit': ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(HumanInput::Closed);
        }
        let text = line.trim();
        if text.eq_ignore_ascii_case("quit") {
            return Ok(HumanInput::Quit);
        }

        match parse_uci_move(pos, text) {
            Ok(mv) => return Ok(HumanInput::Move(mv)),
            Err(MoveParseError::Illegal(_)) => writeln!(out, "Invalid move! Try again.")?,
            Err(MoveParseError::Syntax(_)) => {
                writeln!(out, "Invalid input! Use UCI format (e.g., e2e4).")?
            }
        }
    }
}

/// Asks the engine for a move. `None` only when the position has no legal
/// moves at all.
fn engine_move<W: Write>(engine: &mut dyn Engine, pos: &Position, out: &mut W) -> Result<Option<Move>> {
    writeln!(out, "{} is thinking...", engine.name())?;
    let start = Instant::now();
    let report = engine.choose_move(pos);
    let elapsed = start.elapsed();
    writeln!(out, "{} thought for {:.2} seconds", engine.name(), elapsed.as_secs_f64())?;

    info!(
        engine = engine.name(),
        depth = report.depth,
        nodes = report.nodes,
        score = report.score,
        elapsed_ms = elapsed.as_millis() as u64,
        "engine move"
    );

    let (mv, fallback) = match report.best_move {
        Some(mv) => (mv, report.fallback),
        None => match pos.legal_moves().first() {
            Some(&first) => {
                warn!(fen = %pos, "engine returned no move, playing first legal move");
                (first, true)
            }
            None => return Ok(None),
        },
    };

    if fallback {
        writeln!(out, "{} plays (fallback): {}", engine.name(), mv)?;
    } else {
        writeln!(out, "{} plays: {}", engine.name(), mv)?;
    }
    Ok(Some(mv))
}

/// Plays one game from the configured start position until it ends, the
/// human quits, input runs out or the ply limit is reached.
pub fn play_game<R: BufRead, W: Write>(
    config: &PlayConfig,
    engine: &mut dyn Engine,
    mut input: R,
    out: &mut W,
) -> Result<GameRecord> {
    let mut pos = config.start_position()?;
    let human = config.human_side.color();
    engine.new_game();

    writeln!(out, "Chess: minimax with alpha-beta pruning")?;
    match human {
        Some(color) => writeln!(out, "You are playing as {} (UCI format, e.g., e2e4)", color)?,
        None => writeln!(out, "{} plays both sides", engine.name())?,
    }

    let mut moves = Vec::new();
    let end = loop {
        if let Some(outcome) = pos.outcome() {
            break GameEnd::Finished(outcome);
        }
        if config.max_plies > 0 && moves.len() as u32 >= config.max_plies {
            break GameEnd::PlyLimit;
        }
        if config.show_board {
            write!(out, "\n{}", render_board(&pos))?;
        }

        let mv = if human == Some(pos.side_to_move()) {
            match read_human_move(&pos, &mut input, out)? {
                HumanInput::Move(mv) => mv,
                HumanInput::Quit => break GameEnd::Quit,
                HumanInput::Closed => break GameEnd::InputClosed,
            }
        } else {
            match engine_move(engine, &pos, out)? {
                Some(mv) => mv,
                // Unreachable while outcome() is checked first; stop cleanly.
                None => break GameEnd::PlyLimit,
            }
        };

        pos = pos.play(mv);
        moves.push(mv);
    };

    writeln!(out, "\nGame Over!")?;
    if config.show_board {
        write!(out, "{}", render_board(&pos))?;
    }
    match end {
        GameEnd::Finished(outcome) => writeln!(out, "{}", result_message(outcome))?,
        GameEnd::Quit => writeln!(out, "Game abandoned.")?,
        GameEnd::InputClosed => writeln!(out, "Input closed, game abandoned.")?,
        GameEnd::PlyLimit => writeln!(out, "Stopped after {} plies.", moves.len())?,
    }

    info!(plies = moves.len(), end = ?end, fen = %pos, "game over");
    Ok(GameRecord {
        position: pos,
        moves,
        end,
    })
}
