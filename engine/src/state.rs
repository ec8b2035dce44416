use util::{Color, Coord, Kind, Piece};

use crate::{board::Board, both_colors::BothColors};

/// Everything about the game besides piece placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub last_mover: Color,
    /// Rights as read from the FEN; moved flags only ever take them away.
    pub castling: BothColors<Castling>,
    pub moved: BothColors<Moved>,
    pub en_passant: Option<EnPassant>,
    pub half_move_count: u16,
    pub full_move_count: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Castling {
    pub king_side: bool,
    pub queen_side: bool,
}

impl Castling {
    pub const fn allows(&self, side: CastleSide) -> bool {
        match side {
            CastleSide::KingSide => self.king_side,
            CastleSide::QueenSide => self.queen_side,
        }
    }
}

/// Set once a piece leaves its starting square; never cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Moved {
    pub king: bool,
    /// Rook from the a-file corner.
    pub queen_rook: bool,
    /// Rook from the h-file corner.
    pub king_rook: bool,
}

impl Moved {
    /// Flags the rook that started in `col`, if that is a corner.
    pub fn rook_left(&mut self, col: u8) {
        match CastleSide::from_rook_col(col) {
            Some(CastleSide::KingSide) => self.king_rook = true,
            Some(CastleSide::QueenSide) => self.queen_rook = true,
            None => {}
        }
    }

    const fn rook(&self, side: CastleSide) -> bool {
        match side {
            CastleSide::KingSide => self.king_rook,
            CastleSide::QueenSide => self.queen_rook,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [Self; 2] = [Self::KingSide, Self::QueenSide];
    pub const KING_COL: u8 = 4;

    pub const fn from_rook_col(col: u8) -> Option<Self> {
        match col {
            7 => Some(Self::KingSide),
            0 => Some(Self::QueenSide),
            _ => None,
        }
    }

    pub const fn rook_col(&self) -> u8 {
        match self {
            Self::KingSide => 7,
            Self::QueenSide => 0,
        }
    }

    pub const fn king_dest_col(&self) -> u8 {
        match self {
            Self::KingSide => 6,
            Self::QueenSide => 2,
        }
    }

    pub const fn rook_dest_col(&self) -> u8 {
        match self {
            Self::KingSide => 5,
            Self::QueenSide => 3,
        }
    }

    /// Columns strictly between king and rook.
    pub const fn between(&self) -> &'static [u8] {
        match self {
            Self::KingSide => &[5, 6],
            Self::QueenSide => &[1, 2, 3],
        }
    }

    pub const fn fen_letter(&self, color: Color) -> char {
        match (color, self) {
            (Color::White, Self::KingSide) => 'K',
            (Color::White, Self::QueenSide) => 'Q',
            (Color::Black, Self::KingSide) => 'k',
            (Color::Black, Self::QueenSide) => 'q',
        }
    }
}

/// Square a pawn skipped over on its two-square advance, and who advanced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnPassant {
    pub target: Coord,
    pub set_by: Color,
}

impl EnPassant {
    /// Square of the pawn that gets removed when `target` is taken.
    pub fn victim(&self) -> Coord {
        Coord::from_u8(
            (self.target.row() as i8 + self.set_by.forward()) as u8,
            self.target.col(),
        )
    }

    /// True when `by` may capture on `target`: the other side set it and its
    /// pawn still stands on the victim square.
    pub fn takeable_by(&self, board: &Board, by: Color) -> bool {
        self.set_by != by && board[self.victim()].piece() == Piece::new(self.set_by, Kind::Pawn)
    }
}

impl State {
    pub fn side_to_move(&self) -> Color {
        !self.last_mover
    }

    /// Rights still held: the initial letter survives only while neither the
    /// king nor the rook of that wing has moved.
    pub fn rights(&self) -> BothColors<Castling> {
        let mut rights = self.castling;
        for color in Color::ALL {
            for side in CastleSide::ALL {
                if !self.can_castle(color, side) {
                    match side {
                        CastleSide::KingSide => rights[color].king_side = false,
                        CastleSide::QueenSide => rights[color].queen_side = false,
                    }
                }
            }
        }
        rights
    }

    pub fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        let moved = &self.moved[color];
        self.castling[color].allows(side) && !moved.king && !moved.rook(side)
    }

    /// Bookkeeping shared by every executed move and castle.
    pub(crate) fn finish_ply(&mut self, mover: Color) {
        self.last_mover = mover;
        self.half_move_count = self.half_move_count.saturating_add(1);
        if mover == Color::Black {
            self.full_move_count = self.full_move_count.saturating_add(1);
        }
    }
}
