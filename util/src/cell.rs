use serde::Serialize;

use crate::{
    color::Team,
    coord::Coord,
    piece::{Kind, Piece},
};

/// One square of the board. Cells are values: marking one builds a new cell
/// that replaces the old one in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    coord: Coord,
    piece: Piece,
    team: Team,
    available: bool,
    under_hit: bool,
}

impl Cell {
    pub const fn new(coord: Coord, piece: Piece) -> Self {
        Self {
            coord,
            piece,
            team: piece.team(),
            available: false,
            under_hit: false,
        }
    }

    pub const fn empty(coord: Coord) -> Self {
        Self::new(coord, Piece::None)
    }

    pub const fn coord(&self) -> Coord {
        self.coord
    }

    pub const fn piece(&self) -> Piece {
        self.piece
    }

    pub const fn team(&self) -> Team {
        self.team
    }

    /// Marked as a destination of the currently picked piece.
    pub const fn is_available(&self) -> bool {
        self.available
    }

    /// Holds a king that some enemy piece could capture next.
    pub const fn is_under_hit(&self) -> bool {
        self.under_hit
    }

    pub const fn is_empty(&self) -> bool {
        self.piece.is_empty()
    }

    pub const fn is_king(&self) -> bool {
        self.piece.is(Kind::King)
    }

    pub const fn is_rook(&self) -> bool {
        self.piece.is(Kind::Rook)
    }

    pub const fn with_available(self, available: bool) -> Self {
        Self { available, ..self }
    }

    pub const fn with_under_hit(self, under_hit: bool) -> Self {
        Self { under_hit, ..self }
    }
}
