use util::Coord;

use crate::{board::Board, state::EnPassant};

/// Black pawns walk toward row 7, White pawns toward row 0.
///
/// The double step needs both squares in front empty. The en-passant target
/// is included when it sits diagonally ahead, was left by the other side's
/// advance, and that side's pawn is still on the victim square.
pub fn pawn_moves(board: &Board, from: Coord, en_passant: Option<EnPassant>) -> Vec<Coord> {
    let Some(color) = board[from].piece().color() else {
        return Vec::new();
    };
    let forward = color.forward();
    let mut moves = Vec::with_capacity(4);

    if let Some(one) = from.apply_delta((forward, 0)) {
        if board[one].is_empty() {
            moves.push(one);
            if from.row() == color.pawn_row() {
                if let Some(two) = one.apply_delta((forward, 0)) {
                    if board[two].is_empty() {
                        moves.push(two);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(to) = from.apply_delta((forward, d_col)) else {
            continue;
        };
        let target = &board[to];
        let capture = !target.is_empty() && target.piece().color() != Some(color);
        let en_passant =
            en_passant.is_some_and(|ep| ep.target == to && ep.takeable_by(board, color));
        if capture || en_passant {
            moves.push(to);
        }
    }

    moves
}
