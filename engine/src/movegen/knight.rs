use util::Coord;

use super::util::step_moves;
use crate::board::Board;

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-1, -2),
    (-2, 1),
    (-1, 2),
    (1, -2),
    (2, -1),
    (1, 2),
    (2, 1),
];

pub fn knight_moves(board: &Board, from: Coord) -> Vec<Coord> {
    step_moves(board, from, &KNIGHT_JUMPS)
}
