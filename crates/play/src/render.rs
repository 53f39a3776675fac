//! Plain-text board rendering

use chess_core::{sq, Position};

/// Draws the board from White's side, rank 8 at the top. White pieces are
/// uppercase, empty squares are dots.
pub fn render_board(pos: &Position) -> String {
    let mut out = String::new();
    for rank in (0..8i8).rev() {
        out.push_str(&format!("{} ", rank + 1));
        for file in 0..8i8 {
            let ch = sq(file, rank)
                .and_then(|s| pos.piece_at(s))
                .map_or('.', |pc| pc.to_char());
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }
    out.push_str("   a b c d e f g h\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startpos_rendering() {
        let text = render_board(&Position::startpos());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[4], "4  . . . . . . . .");
        assert_eq!(lines[7], "1  R N B Q K B N R");
        assert_eq!(lines[8], "   a b c d e f g h");
    }
}
