use serde::Serialize;

use crate::helper::impl_table;

/// One of the two sides of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Self; 2] = [Self::White, Self::Black];

    /// Row delta of a single pawn step.
    pub const fn forward(&self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// Row the pawns start on, the only row a two-square advance is allowed from.
    pub const fn pawn_row(&self) -> u8 {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }

    pub const fn promotion_row(&self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }

    /// Row of the king and rooks in the starting layout.
    pub const fn home_row(&self) -> u8 {
        match self {
            Self::White => 7,
            Self::Black => 0,
        }
    }
}

impl_table! {
    Color => char, from_fen, to_fen {
        'w' => White,
        'b' => Black,
    }
}

impl std::ops::Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

/// Owner of a square: a color, or nobody for an empty square.
///
/// Always derived from a [`crate::Piece`], never stored on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Team {
    #[default]
    None,
    White,
    Black,
}

impl Team {
    pub const fn color(&self) -> Option<Color> {
        match self {
            Self::None => None,
            Self::White => Some(Color::White),
            Self::Black => Some(Color::Black),
        }
    }
}
