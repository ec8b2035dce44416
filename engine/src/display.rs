use std::fmt::{self, Display};

use util::Cell;

use crate::{board::Board, position::Position};

const VERTICAL_LINE: &str = "  +---+---+---+---+---+---+---+---+";

/// `*` marks an available destination, `!` a king under hit.
fn cell_marker(cell: &Cell) -> char {
    if cell.is_under_hit() {
        '!'
    } else if cell.is_available() {
        '*'
    } else {
        ' '
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    0   1   2   3   4   5   6   7")?;
        writeln!(f, "{VERTICAL_LINE}")?;
        for (row, cells) in self.rows().enumerate() {
            write!(f, "{row} |")?;
            for cell in cells {
                let piece = match cell.piece().to_fen_char() {
                    Some(c) => c,
                    None if cell.is_available() => '.',
                    None => ' ',
                };
                write!(f, "{}{piece} |", cell_marker(cell))?;
            }
            writeln!(f, " {}", 8 - row)?;
            writeln!(f, "{VERTICAL_LINE}")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board())?;
        writeln!(f, "Current turn: {:?}", self.side_to_move())?;
        match self.picked() {
            Some(sq) => writeln!(f, "Picked: {sq}")?,
            None => writeln!(f, "Picked: -")?,
        }
        match self.state().en_passant {
            Some(ep) => writeln!(f, "En passant square: {}", ep.target)?,
            None => writeln!(f, "En passant square: -")?,
        }
        let threatened = self.threatened_kings();
        if !threatened.is_empty() {
            let list: Vec<String> = threatened.iter().map(|sq| sq.to_string()).collect();
            writeln!(f, "Kings under hit: {}", list.join(", "))?;
        }
        write!(f, "FEN: {}", self.fen())
    }
}
