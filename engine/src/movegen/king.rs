use util::Coord;

use super::util::step_moves;
use crate::board::Board;

const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Castling is never produced here; it only happens through an explicit
/// king and rook pick.
pub fn king_moves(board: &Board, from: Coord) -> Vec<Coord> {
    step_moves(board, from, &KING_STEPS)
}
