use std::fmt::Display;

use serde::Serialize;

use crate::{
    color::{Color, Team},
    helper::impl_table,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Kind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl_table! {
    Kind => char, from_char, to_char {
        'k' => King,
        'q' => Queen,
        'r' => Rook,
        'b' => Bishop,
        'n' => Knight,
        'p' => Pawn,
    }
}

/// Content of a square. Team and kind travel together, so there are exactly
/// thirteen values: the empty square and six kinds for each color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Piece {
    #[default]
    None,
    White(Kind),
    Black(Kind),
}

impl Piece {
    pub const fn new(color: Color, kind: Kind) -> Self {
        match color {
            Color::White => Self::White(kind),
            Color::Black => Self::Black(kind),
        }
    }

    pub const fn team(&self) -> Team {
        match self {
            Self::None => Team::None,
            Self::White(_) => Team::White,
            Self::Black(_) => Team::Black,
        }
    }

    pub const fn color(&self) -> Option<Color> {
        self.team().color()
    }

    pub const fn kind(&self) -> Option<Kind> {
        match self {
            Self::None => None,
            Self::White(kind) | Self::Black(kind) => Some(*kind),
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    pub const fn is(&self, kind: Kind) -> bool {
        match self.kind() {
            Some(k) => k as u8 == kind as u8,
            None => false,
        }
    }

    /// see https://en.wikipedia.org/wiki/Forsyth%E2%80%93Edwards_Notation#Definition
    pub const fn from_fen_char(c: char) -> Option<Self> {
        Some(match c {
            'K' => Self::White(Kind::King),
            'Q' => Self::White(Kind::Queen),
            'R' => Self::White(Kind::Rook),
            'B' => Self::White(Kind::Bishop),
            'N' => Self::White(Kind::Knight),
            'P' => Self::White(Kind::Pawn),
            'k' => Self::Black(Kind::King),
            'q' => Self::Black(Kind::Queen),
            'r' => Self::Black(Kind::Rook),
            'b' => Self::Black(Kind::Bishop),
            'n' => Self::Black(Kind::Knight),
            'p' => Self::Black(Kind::Pawn),
            _ => return None,
        })
    }

    pub const fn to_fen_char(&self) -> Option<char> {
        Some(match self {
            Self::None => return None,
            Self::White(Kind::King) => 'K',
            Self::White(Kind::Queen) => 'Q',
            Self::White(Kind::Rook) => 'R',
            Self::White(Kind::Bishop) => 'B',
            Self::White(Kind::Knight) => 'N',
            Self::White(Kind::Pawn) => 'P',
            Self::Black(Kind::King) => 'k',
            Self::Black(Kind::Queen) => 'q',
            Self::Black(Kind::Rook) => 'r',
            Self::Black(Kind::Bishop) => 'b',
            Self::Black(Kind::Knight) => 'n',
            Self::Black(Kind::Pawn) => 'p',
        })
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_fen_char().unwrap_or('.'))
    }
}
