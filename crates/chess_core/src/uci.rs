use crate::{error::MoveParseError, position::Position, types::*};

pub fn move_to_uci(mv: Move) -> String {
    let mut s = String::with_capacity(5);
    s.push_str(&sq_to_coord(mv.from));
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promo {
        s.push(match p {
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            _ => 'q',
        });
    }
    s
}

/// Reads a move like `e2e4` or `a7a8q` and resolves it against the legal
/// moves of `pos`, so castle and en-passant flags come out right.
///
/// A pawn move onto the last rank needs its promotion letter; `a7a8` alone is
/// not a legal move.
pub fn parse_uci_move(pos: &Position, txt: &str) -> Result<Move, MoveParseError> {
    let txt = txt.trim();
    let syntax = || MoveParseError::Syntax(txt.to_string());

    if !(4..=5).contains(&txt.len()) || !txt.is_ascii() {
        return Err(syntax());
    }
    let from = coord_to_sq(&txt[0..2]).ok_or_else(syntax)?;
    let to = coord_to_sq(&txt[2..4]).ok_or_else(syntax)?;
    let promo = match txt.as_bytes().get(4).map(|b| b.to_ascii_lowercase()) {
        None => None,
        Some(b'q') => Some(PieceKind::Queen),
        Some(b'r') => Some(PieceKind::Rook),
        Some(b'b') => Some(PieceKind::Bishop),
        Some(b'n') => Some(PieceKind::Knight),
        Some(_) => return Err(syntax()),
    };

    pos.legal_moves()
        .into_iter()
        .filter(|m| m.from == from && m.to == to)
        .find(|m| m.promo == promo)
        .ok_or_else(|| MoveParseError::Illegal(txt.to_string()))
}

/// Applies a sequence of UCI moves, e.g. from `position startpos moves ...`.
pub fn play_uci_moves<'a>(
    pos: &Position,
    moves: impl IntoIterator<Item = &'a str>,
) -> Result<Position, MoveParseError> {
    let mut current = pos.clone();
    for txt in moves {
        let mv = parse_uci_move(&current, txt)?;
        current = current.play(mv);
    }
    Ok(current)
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
