//! Pseudo-legal destinations for a single piece. Nothing here looks ahead:
//! a move that leaves the mover's own king capturable is still generated.

mod king;
mod knight;
mod pawn;
mod slider;
mod util;

pub use king::king_moves;
pub use knight::knight_moves;
pub use pawn::pawn_moves;
pub use slider::{bishop_moves, queen_moves, rook_moves};

use ::util::{Coord, Kind};

use crate::{board::Board, state::EnPassant};

/// Destinations of the piece on `from`; empty when the square is empty.
pub fn destinations(board: &Board, from: Coord, en_passant: Option<EnPassant>) -> Vec<Coord> {
    match board[from].piece().kind() {
        None => Vec::new(),
        Some(Kind::King) => king_moves(board, from),
        Some(Kind::Queen) => queen_moves(board, from),
        Some(Kind::Rook) => rook_moves(board, from),
        Some(Kind::Bishop) => bishop_moves(board, from),
        Some(Kind::Knight) => knight_moves(board, from),
        Some(Kind::Pawn) => pawn_moves(board, from, en_passant),
    }
}
