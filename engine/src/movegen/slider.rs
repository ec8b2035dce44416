use util::Coord;

use super::util::ray_moves;
use crate::board::Board;

const ROOK_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_RAYS: [(i8, i8); 4] = [(-1, -1), (1, 1), (-1, 1), (1, -1)];

pub fn rook_moves(board: &Board, from: Coord) -> Vec<Coord> {
    ray_moves(board, from, &ROOK_RAYS)
}

pub fn bishop_moves(board: &Board, from: Coord) -> Vec<Coord> {
    ray_moves(board, from, &BISHOP_RAYS)
}

pub fn queen_moves(board: &Board, from: Coord) -> Vec<Coord> {
    let mut moves = rook_moves(board, from);
    moves.extend(bishop_moves(board, from));
    moves
}
