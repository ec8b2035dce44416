use util::Coord;

use crate::board::Board;

/// Single hops: every delta that lands on the board and not on a friendly piece.
pub fn step_moves(board: &Board, from: Coord, deltas: &[(i8, i8)]) -> Vec<Coord> {
    let team = board[from].team();
    deltas
        .iter()
        .filter_map(|delta| from.apply_delta(*delta))
        .filter(|to| board[*to].team() != team)
        .collect()
}

/// Walks each ray until the edge or the first piece. An enemy piece is
/// included as a capture, a friendly one is not.
pub fn ray_moves(board: &Board, from: Coord, deltas: &[(i8, i8)]) -> Vec<Coord> {
    let team = board[from].team();
    let mut moves = Vec::new();
    for delta in deltas {
        let mut sq = from;
        while let Some(next) = sq.apply_delta(*delta) {
            let cell = &board[next];
            if cell.team() == team {
                break;
            }
            moves.push(next);
            if !cell.is_empty() {
                break;
            }
            sq = next;
        }
    }
    moves
}
