//! Advisory check markers. Nothing here blocks or reverts a move.

use util::Coord;

use crate::{board::Board, movegen::destinations};

/// Kings that some enemy piece could capture on its next move.
pub fn threatened_kings(board: &Board) -> Vec<Coord> {
    let mut kings = Vec::new();
    for cell in board.cells().filter(|cell| !cell.is_empty()) {
        for to in destinations(board, cell.coord(), None) {
            if board[to].is_king() && !kings.contains(&to) {
                kings.push(to);
            }
        }
    }
    kings
}

/// Clears every under-hit marker, then marks the kings found by
/// [`threatened_kings`].
pub fn mark_threatened_kings(board: &mut Board) {
    board.clear_under_hit();
    for king in threatened_kings(board) {
        log::trace!("king on {king} is under hit");
        board.mark_under_hit(king);
    }
}
