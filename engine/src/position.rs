use std::str::FromStr;

use log::{debug, info};
use util::{ChessError, Color, Coord, Kind, Piece};

use crate::{
    board::Board,
    movegen::destinations,
    parse::fen,
    state::{CastleSide, EnPassant, State},
    threat, START_FEN,
};

/// What a [`Position::try_select`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Picked,
    Castled,
}

/// A game in progress: the board, whose turn it is, the current selection,
/// and the FEN of all of it.
///
/// Callers drive it with [`Position::pick`], [`Position::make_move`] and
/// [`Position::castle`]. Each of them either applies completely or rejects
/// without touching anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    state: State,
    picked: Option<Coord>,
    fen: String,
}

impl Default for Position {
    fn default() -> Self {
        Position::from_fen(START_FEN).expect("default fen is valid")
    }
}

impl FromStr for Position {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_fen(s)
    }
}

impl Position {
    pub fn from_fen(input: &str) -> Result<Self, ChessError> {
        let (mut board, state) = fen::decode(input)?;
        threat::mark_threatened_kings(&mut board);
        let fen = fen::encode(&board, &state);
        Ok(Self {
            board,
            state,
            picked: None,
            fen,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn fen(&self) -> &str {
        &self.fen
    }

    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move()
    }

    pub fn picked(&self) -> Option<Coord> {
        self.picked
    }

    /// Destinations marked by the current selection.
    pub fn available(&self) -> Vec<Coord> {
        self.board.available()
    }

    pub fn threatened_kings(&self) -> Vec<Coord> {
        threat::threatened_kings(&self.board)
    }

    /// Selects the piece on (row, col) and marks where it can go.
    ///
    /// With a king or rook already selected, picking its same-colored
    /// partner attempts castling first.
    pub fn pick(&mut self, row: i8, col: i8) -> bool {
        report("pick", self.try_select(row, col).map(|_| ()))
    }

    /// [`Position::pick`] with the outcome: castled when (row, col) completes
    /// a castling pair with the selection, picked otherwise.
    pub fn try_select(&mut self, row: i8, col: i8) -> Result<Selection, ChessError> {
        if self.is_castling_pair(row, col) && self.castle(row, col) {
            return Ok(Selection::Castled);
        }
        self.try_pick(row, col).map(|()| Selection::Picked)
    }

    /// True when the selection and (row, col) are a king and a rook of the
    /// same side, in either order.
    pub fn is_castling_pair(&self, row: i8, col: i8) -> bool {
        let (Some(origin), Ok(target)) = (self.picked, Coord::new(row, col)) else {
            return false;
        };
        let (a, b) = (self.board[origin], self.board[target]);
        !a.is_empty()
            && a.team() == b.team()
            && ((a.is_king() && b.is_rook()) || (a.is_rook() && b.is_king()))
    }

    pub fn try_pick(&mut self, row: i8, col: i8) -> Result<(), ChessError> {
        let coord = Coord::new(row, col)?;
        let cell = self.board[coord];
        let Some(color) = cell.piece().color() else {
            return Err(ChessError::IllegalSelection(format!("{coord} is empty")));
        };
        match self.picked {
            Some(origin) if self.board[origin].team() != cell.team() => {
                return Err(ChessError::IllegalSelection(format!(
                    "{coord} does not belong to the picked piece's side"
                )));
            }
            None if color != self.side_to_move() => {
                return Err(ChessError::IllegalSelection(format!(
                    "{coord} holds a {color:?} piece but {:?} is to move",
                    self.side_to_move()
                )));
            }
            _ => {}
        }

        let moves = destinations(&self.board, coord, self.state.en_passant);
        if moves.is_empty() {
            return Err(ChessError::IllegalSelection(format!(
                "{} on {coord} has nowhere to go",
                cell.piece()
            )));
        }

        self.board.clear_available();
        for to in &moves {
            self.board.mark_available(*to);
        }
        self.picked = Some(coord);
        debug!("picked {} on {coord}, {} destinations", cell.piece(), moves.len());
        Ok(())
    }

    /// Moves the picked piece onto (row, col), which must have been marked
    /// available by the pick.
    pub fn make_move(&mut self, row: i8, col: i8) -> bool {
        report("move", self.try_make_move(row, col))
    }

    pub fn try_make_move(&mut self, row: i8, col: i8) -> Result<(), ChessError> {
        let from = self
            .picked
            .ok_or_else(|| ChessError::IllegalMove("nothing is picked".to_string()))?;
        let to = Coord::new(row, col)?;
        if !self.board[to].is_available() {
            return Err(ChessError::IllegalMove(format!(
                "{to} is not a destination of {from}"
            )));
        }
        let mover = self.board[from].piece();
        let Some(color) = mover.color() else {
            return Err(ChessError::IllegalMove(format!("{from} is empty")));
        };

        self.board.clear_under_hit();

        let is_pawn = mover.is(Kind::Pawn);
        let placed = if is_pawn && to.row() == color.promotion_row() {
            Piece::new(color, Kind::Queen)
        } else {
            mover
        };

        if is_pawn {
            if let Some(ep) = self.state.en_passant {
                if ep.target == to && ep.takeable_by(&self.board, color) {
                    debug!("{color:?} takes en passant on {to}");
                    self.board.clear(ep.victim());
                }
            }
        }

        // A rook taken on its corner can no longer castle.
        let captured = self.board[to].piece();
        if captured.is(Kind::Rook) {
            if let Some(opp) = captured.color() {
                if to.row() == opp.home_row() {
                    self.state.moved[opp].rook_left(to.col());
                }
            }
        }

        self.board.place(to, placed);
        self.board.clear(from);
        self.board.clear_available();

        match mover.kind() {
            Some(Kind::King) => self.state.moved[color].king = true,
            Some(Kind::Rook) if from.row() == color.home_row() => {
                self.state.moved[color].rook_left(from.col())
            }
            _ => {}
        }

        self.state.en_passant = if is_pawn && from.row().abs_diff(to.row()) == 2 {
            Some(EnPassant {
                target: Coord::from_u8((to.row() as i8 - color.forward()) as u8, to.col()),
                set_by: color,
            })
        } else {
            None
        };

        info!("{color:?} {mover} {from}-{to}");
        self.finish(color);
        Ok(())
    }

    /// Castles the picked king with the rook on (row, col), or the picked rook
    /// with the king on (row, col).
    ///
    /// Only the rights, the moved flags and the squares between are checked.
    /// Whether the king currently stands in check, crosses an attacked square,
    /// or lands on one is not verified.
    pub fn castle(&mut self, row: i8, col: i8) -> bool {
        report("castle", self.try_castle(row, col))
    }

    pub fn try_castle(&mut self, row: i8, col: i8) -> Result<(), ChessError> {
        let origin = self
            .picked
            .ok_or_else(|| ChessError::IllegalMove("nothing is picked".to_string()))?;
        let target = Coord::new(row, col)?;
        let (a, b) = (self.board[origin], self.board[target]);
        let Some(color) = a.piece().color() else {
            return Err(ChessError::IllegalMove(format!("{origin} is empty")));
        };
        if a.team() != b.team() {
            return Err(ChessError::IllegalMove(format!(
                "{origin} and {target} are not on the same side"
            )));
        }
        let (king, rook) = match (a.is_king(), a.is_rook(), b.is_king(), b.is_rook()) {
            (true, _, _, true) => (a.coord(), b.coord()),
            (_, true, true, _) => (b.coord(), a.coord()),
            _ => {
                return Err(ChessError::IllegalMove(format!(
                    "{origin} and {target} are not a king and a rook"
                )))
            }
        };

        let home = color.home_row();
        let side = match CastleSide::from_rook_col(rook.col()) {
            Some(side) if rook.row() == home => side,
            _ => {
                return Err(ChessError::IllegalMove(format!(
                    "rook on {rook} is not on a home corner"
                )))
            }
        };
        if king != Coord::from_u8(home, CastleSide::KING_COL) {
            return Err(ChessError::IllegalMove(format!(
                "king on {king} is not on its home square"
            )));
        }
        if !self.state.can_castle(color, side) {
            return Err(ChessError::IllegalMove(format!(
                "{color:?} has no right to castle {side:?}"
            )));
        }
        if let Some(col) = side
            .between()
            .iter()
            .find(|col| !self.board[Coord::from_u8(home, **col)].is_empty())
        {
            return Err(ChessError::IllegalMove(format!(
                "{} is occupied",
                Coord::from_u8(home, *col)
            )));
        }

        self.board.clear_under_hit();
        self.board.clear_available();
        self.board.clear(king);
        self.board.clear(rook);
        self.board.place(
            Coord::from_u8(home, side.king_dest_col()),
            Piece::new(color, Kind::King),
        );
        self.board.place(
            Coord::from_u8(home, side.rook_dest_col()),
            Piece::new(color, Kind::Rook),
        );

        let moved = &mut self.state.moved[color];
        moved.king = true;
        moved.rook_left(side.rook_col());
        self.state.en_passant = None;

        info!("{color:?} castles {side:?}");
        self.finish(color);
        Ok(())
    }

    fn finish(&mut self, mover: Color) {
        self.picked = None;
        self.state.finish_ply(mover);
        self.fen = fen::encode(&self.board, &self.state);
        threat::mark_threatened_kings(&mut self.board);
    }
}

fn report(operation: &str, result: Result<(), ChessError>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            debug!("{operation} rejected: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use util::Team;

    use super::*;

    fn pos(fen: &str) -> Position {
        Position::from_fen(fen).expect("test fen is valid")
    }

    fn sq(row: u8, col: u8) -> Coord {
        Coord::from_u8(row, col)
    }

    fn play(position: &mut Position, from: (i8, i8), to: (i8, i8)) {
        assert!(position.pick(from.0, from.1), "pick {from:?} in {}", position.fen());
        assert!(position.make_move(to.0, to.1), "move {to:?} in {}", position.fen());
    }

    fn castling_field(position: &Position) -> String {
        position.fen().split(' ').nth(2).unwrap_or_default().to_string()
    }

    const CASTLING_FEN: &str = "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1";

    #[test]
    fn starts_with_white_to_move() {
        let position = Position::default();
        assert_eq!(position.fen(), START_FEN);
        assert_eq!(position.side_to_move(), Color::White);
        assert_eq!(position.picked(), None);
        assert!(position.available().is_empty());
        assert!(position.threatened_kings().is_empty());
        assert_eq!(position.board()[sq(7, 4)].piece(), Piece::White(Kind::King));
        assert_eq!(position.board()[sq(0, 3)].piece(), Piece::Black(Kind::Queen));
    }

    #[test]
    fn construct_rejects_malformed_fen() {
        assert!(matches!(
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"),
            Err(ChessError::MalformedFen(_))
        ));
        assert!(matches!(
            "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".parse::<Position>(),
            Err(ChessError::MalformedFen(_))
        ));
    }

    #[test]
    fn opposing_pick_changes_nothing() {
        let mut position = Position::default();
        let before = position.clone();
        for col in 0..8 {
            assert!(!position.pick(1, col));
            assert!(!position.pick(0, col));
        }
        assert_eq!(position, before);
    }

    #[test]
    fn empty_and_out_of_range_picks_fail() {
        let mut position = Position::default();
        let before = position.clone();
        assert!(!position.pick(4, 4));
        assert!(!position.pick(8, 0));
        assert!(!position.pick(-1, 3));
        assert_eq!(
            position.try_pick(-1, 3),
            Err(ChessError::InvalidCoordinate { row: -1, col: 3 })
        );
        assert_eq!(position, before);
    }

    #[test]
    fn king_pawn_opening() {
        let mut position = Position::default();
        assert!(position.pick(6, 4));
        assert_eq!(position.picked(), Some(sq(6, 4)));
        let mut available = position.available();
        available.sort_by_key(|c| (c.row(), c.col()));
        assert_eq!(available, vec![sq(4, 4), sq(5, 4)]);

        assert!(position.make_move(4, 4));
        assert_eq!(position.picked(), None);
        assert!(position.available().is_empty());
        assert_eq!(position.side_to_move(), Color::Black);
        assert_eq!(
            position.fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 1 1"
        );
    }

    #[test]
    fn pieces_without_moves_cannot_be_picked() {
        let mut position = Position::default();
        assert!(!position.pick(7, 0));
        assert!(!position.pick(7, 4));
        assert_eq!(position.picked(), None);

        let mut blocked = pos("rnbqkbnr/pppppppp/8/8/8/4n3/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(!blocked.pick(6, 4), "pawn cannot hop over the knight");
    }

    #[test]
    fn repick_switches_to_another_own_piece() {
        let mut position = Position::default();
        assert!(position.pick(6, 4));
        assert!(position.pick(7, 6));
        assert_eq!(position.picked(), Some(sq(7, 6)));
        let mut available = position.available();
        available.sort_by_key(|c| (c.row(), c.col()));
        assert_eq!(available, vec![sq(5, 5), sq(5, 7)]);
    }

    #[test]
    fn failed_repick_keeps_the_selection() {
        let mut position = Position::default();
        assert!(position.pick(6, 4));
        let selected = position.clone();
        assert!(!position.pick(7, 0), "rook has no destinations");
        assert!(!position.pick(1, 4), "enemy piece");
        assert!(!position.pick(3, 3), "empty square");
        assert_eq!(position, selected);
        assert!(position.make_move(5, 4));
    }

    #[test]
    fn move_needs_an_available_destination() {
        let mut position = Position::default();
        let before = position.clone();
        assert!(!position.make_move(4, 4), "nothing picked");
        assert_eq!(position, before);

        assert!(position.pick(6, 4));
        let picked = position.clone();
        for (row, col) in [(3, 4), (6, 4), (5, 5), (7, 4), (9, 9), (-1, 0)] {
            assert!(!position.make_move(row, col));
            assert_eq!(position, picked);
        }
    }

    #[test]
    fn en_passant_captures_the_advanced_pawn() {
        let mut position = pos("rnbqkbnr/pppppppp/8/4P3/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1");
        play(&mut position, (1, 3), (3, 3));
        assert_eq!(
            position.state().en_passant,
            Some(EnPassant {
                target: sq(2, 3),
                set_by: Color::Black
            })
        );
        assert!(position.fen().contains(" d6 "));

        assert!(position.pick(3, 4));
        assert!(position.board()[sq(2, 3)].is_available());
        assert!(position.make_move(2, 3));
        assert!(position.board()[sq(3, 3)].is_empty());
        assert!(position.board()[sq(3, 4)].is_empty());
        assert_eq!(position.board()[sq(2, 3)].piece(), Piece::White(Kind::Pawn));
        assert_eq!(position.state().en_passant, None);
        assert!(position.fen().contains(" - "));
    }

    #[test]
    fn black_takes_en_passant_too() {
        let mut position = pos("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1");
        play(&mut position, (6, 4), (4, 4));
        assert!(position.fen().contains(" e3 "));
        play(&mut position, (4, 3), (5, 4));
        assert!(position.board()[sq(4, 4)].is_empty());
        assert_eq!(position.board()[sq(5, 4)].piece(), Piece::Black(Kind::Pawn));
    }

    #[test]
    fn en_passant_lasts_one_ply() {
        let mut position = pos("4k3/pp6/8/2P5/8/8/7P/4K3 b - - 0 1");
        play(&mut position, (1, 1), (3, 1));
        play(&mut position, (6, 7), (5, 7));
        assert_eq!(position.state().en_passant, None);
        play(&mut position, (1, 0), (2, 0));
        assert!(position.pick(3, 2));
        assert!(!position.board()[sq(2, 1)].is_available());
    }

    #[test]
    fn only_pawns_take_en_passant() {
        let mut position = pos("4k3/8/8/3n4/8/8/4P3/4K3 w - - 0 1");
        play(&mut position, (6, 4), (4, 4));
        play(&mut position, (3, 3), (5, 4));
        assert_eq!(position.board()[sq(4, 4)].piece(), Piece::White(Kind::Pawn));
        assert_eq!(position.board()[sq(5, 4)].piece(), Piece::Black(Kind::Knight));
    }

    #[test]
    fn select_reports_pick_or_castle() {
        let mut position = pos(CASTLING_FEN);
        assert_eq!(position.try_select(7, 4), Ok(Selection::Picked));
        assert_eq!(position.try_select(7, 0), Ok(Selection::Castled));
        assert!(position.fen().starts_with("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/2KR3R b kq"));
        assert!(matches!(
            position.try_select(7, 2),
            Err(ChessError::IllegalSelection(_))
        ));
    }

    #[test]
    fn en_passant_from_fen_needs_an_enemy_pawn_to_take() {
        let mut position = pos("4k3/8/8/3PP3/8/8/8/4K3 w - d6 0 1");
        assert!(position.pick(3, 4));
        assert_eq!(position.available(), vec![sq(2, 4)]);
        assert!(!position.make_move(2, 3));
        assert_eq!(position.board()[sq(3, 3)].piece(), Piece::White(Kind::Pawn));
        assert_eq!(position.board()[sq(3, 4)].piece(), Piece::White(Kind::Pawn));

        let mut empty = pos("4k3/8/8/4P3/8/8/8/4K3 w - d6 0 1");
        assert!(empty.pick(3, 4));
        assert!(!empty.board()[sq(2, 3)].is_available());
    }

    #[test]
    fn kingside_castle_by_picking_king_then_rook() {
        let mut position = pos(CASTLING_FEN);
        assert!(position.pick(7, 4));
        assert!(position.pick(7, 7));
        assert_eq!(position.board()[sq(7, 6)].piece(), Piece::White(Kind::King));
        assert_eq!(position.board()[sq(7, 5)].piece(), Piece::White(Kind::Rook));
        assert!(position.board()[sq(7, 4)].is_empty());
        assert!(position.board()[sq(7, 7)].is_empty());
        assert_eq!(position.picked(), None);
        assert!(position.available().is_empty());
        assert_eq!(
            position.fen(),
            "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R4RK1 b kq - 1 1"
        );
    }

    #[test]
    fn queenside_castle_by_picking_rook_then_king() {
        let mut position = pos("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R b KQkq - 0 1");
        assert!(position.pick(0, 0));
        assert!(position.is_castling_pair(0, 4));
        assert!(position.pick(0, 4));
        assert_eq!(position.board()[sq(0, 2)].piece(), Piece::Black(Kind::King));
        assert_eq!(position.board()[sq(0, 3)].piece(), Piece::Black(Kind::Rook));
        assert!(position.board()[sq(0, 0)].is_empty());
        assert!(position.board()[sq(0, 4)].is_empty());
        assert_eq!(
            position.fen(),
            "2kr3r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQ - 1 2"
        );
    }

    #[test]
    fn castle_entry_point_matches_pick() {
        let mut picked = pos(CASTLING_FEN);
        assert!(picked.pick(7, 4));
        let mut direct = picked.clone();
        assert!(picked.pick(7, 0));
        assert!(direct.castle(7, 0));
        assert_eq!(picked, direct);
        assert_eq!(castling_field(&direct), "kq");
    }

    #[test]
    fn castle_needs_empty_squares_between() {
        let mut position = pos("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/RN2K1NR w KQkq - 0 1");
        assert!(position.pick(7, 4));
        assert!(matches!(
            position.try_castle(7, 7),
            Err(ChessError::IllegalMove(_))
        ));
        assert!(matches!(
            position.try_castle(7, 0),
            Err(ChessError::IllegalMove(_))
        ));
        // the rooks have nowhere to go either, so the king stays picked
        assert!(!position.pick(7, 7));
        assert!(!position.pick(7, 0));
        assert_eq!(position.picked(), Some(sq(7, 4)));
        assert_eq!(position.board()[sq(7, 4)].piece(), Piece::White(Kind::King));
    }

    #[test]
    fn queenside_checks_its_own_home_row() {
        // d8 is occupied, which must not matter to White
        let mut position = pos("r2qk2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w KQkq - 0 1");
        assert!(position.pick(7, 4));
        assert!(position.castle(7, 0));
        assert_eq!(position.board()[sq(7, 2)].piece(), Piece::White(Kind::King));
    }

    #[test]
    fn castle_needs_the_right() {
        let mut position = pos("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R w Qkq - 0 1");
        assert!(position.pick(7, 4));
        assert!(!position.castle(7, 7));
        // falls back to an ordinary re-pick of the rook
        assert!(position.pick(7, 7));
        assert_eq!(position.picked(), Some(sq(7, 7)));
        assert_eq!(position.board()[sq(7, 4)].piece(), Piece::White(Kind::King));
    }

    #[test]
    fn king_that_moved_cannot_castle() {
        let mut position = pos(CASTLING_FEN);
        play(&mut position, (7, 4), (7, 5));
        assert_eq!(castling_field(&position), "kq");
        play(&mut position, (1, 0), (2, 0));
        play(&mut position, (7, 5), (7, 4));
        play(&mut position, (2, 0), (3, 0));
        assert!(position.pick(7, 4));
        assert!(!position.castle(7, 7));
        assert!(!position.castle(7, 0));
        assert!(position.state().moved[Color::White].king);
    }

    #[test]
    fn white_king_rook_drops_only_white_kingside() {
        let mut position = pos(CASTLING_FEN);
        play(&mut position, (7, 7), (7, 6));
        assert_eq!(castling_field(&position), "Qkq");
    }

    #[test]
    fn white_queen_rook_drops_only_white_queenside() {
        let mut position = pos(CASTLING_FEN);
        play(&mut position, (7, 0), (7, 1));
        assert_eq!(castling_field(&position), "Kkq");
    }

    #[test]
    fn black_king_rook_drops_only_black_kingside() {
        let mut position = pos("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R b KQkq - 0 1");
        play(&mut position, (0, 7), (0, 6));
        assert_eq!(castling_field(&position), "KQq");
    }

    #[test]
    fn black_queen_rook_drops_only_black_queenside() {
        let mut position = pos("r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R b KQkq - 0 1");
        play(&mut position, (0, 0), (0, 1));
        assert_eq!(castling_field(&position), "KQk");
    }

    #[test]
    fn capturing_a_corner_rook_drops_its_right() {
        let mut position = pos("r3k2r/1ppppppp/8/8/8/8/1PPPPPPP/R3K2R w KQkq - 0 1");
        play(&mut position, (7, 0), (0, 0));
        assert_eq!(castling_field(&position), "Kk");
        assert!(position.state().moved[Color::Black].queen_rook);
    }

    #[test]
    fn pawns_promote_to_queens() {
        let mut white = pos("k7/4P3/8/8/8/8/8/7K w - - 0 1");
        play(&mut white, (1, 4), (0, 4));
        assert_eq!(white.board()[sq(0, 4)].piece(), Piece::White(Kind::Queen));

        let mut black = pos("k7/8/8/8/8/8/4p3/7K b - - 0 1");
        play(&mut black, (6, 4), (7, 4));
        assert_eq!(black.board()[sq(7, 4)].piece(), Piece::Black(Kind::Queen));

        let mut capture = pos("k4n2/4P3/8/8/8/8/8/7K w - - 0 1");
        play(&mut capture, (1, 4), (0, 5));
        assert_eq!(capture.board()[sq(0, 5)].piece(), Piece::White(Kind::Queen));
    }

    #[test]
    fn other_pieces_do_not_promote() {
        let mut position = pos("1k6/8/8/8/8/8/8/R6K w - - 0 1");
        play(&mut position, (7, 0), (0, 0));
        assert_eq!(position.board()[sq(0, 0)].piece(), Piece::White(Kind::Rook));
    }

    #[test]
    fn counters_follow_every_ply() {
        let mut position = Position::default();
        play(&mut position, (6, 4), (4, 4));
        play(&mut position, (1, 3), (3, 3));
        assert!(position.fen().ends_with(" 2 2"));
        play(&mut position, (4, 4), (3, 3));
        assert!(position.fen().ends_with(" 3 2"), "captures still count");
        assert_eq!(position.side_to_move(), Color::Black);
    }

    #[test]
    fn self_check_is_allowed_and_flagged() {
        let mut position = pos("3rk3/8/8/8/8/8/8/4K3 w - - 0 1");
        play(&mut position, (7, 4), (7, 3));
        assert_eq!(position.board()[sq(7, 3)].piece(), Piece::White(Kind::King));
        assert!(position.board()[sq(7, 3)].is_under_hit());
        assert_eq!(position.threatened_kings(), vec![sq(7, 3)]);
    }

    #[test]
    fn check_is_advisory() {
        let mut position = pos("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
        play(&mut position, (7, 0), (0, 0));
        assert!(position.board()[sq(0, 4)].is_under_hit());
        assert_eq!(position.board()[sq(0, 4)].team(), Team::Black);
        // Black may ignore it
        play(&mut position, (0, 4), (1, 4));
        assert!(!position.board()[sq(1, 4)].is_under_hit());
        assert!(position.board().cells().all(|cell| !cell.is_under_hit()));
    }

    #[test]
    fn fen_reloads_to_the_same_position() {
        let mut position = Position::default();
        play(&mut position, (6, 4), (4, 4));
        play(&mut position, (1, 3), (3, 3));
        play(&mut position, (4, 4), (3, 3));
        play(&mut position, (0, 3), (3, 3));
        let reloaded = pos(position.fen());
        assert_eq!(reloaded.board(), position.board());
        assert_eq!(reloaded.fen(), position.fen());
    }
}
