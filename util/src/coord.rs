use std::{fmt::Display, str::FromStr};

use serde::Serialize;

use crate::error::ChessError;

/// A square addressed by row and column. Row 0 is the eighth rank (Black's
/// side), column 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    pub const SIZE: u8 = 8;

    pub fn new(row: i8, col: i8) -> Result<Self, ChessError> {
        Self::from_i8_checked(row, col).ok_or(ChessError::InvalidCoordinate { row, col })
    }

    pub const fn from_i8_checked(row: i8, col: i8) -> Option<Self> {
        if row < 0 || col < 0 || row >= Self::SIZE as i8 || col >= Self::SIZE as i8 {
            None
        } else {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        }
    }

    /// Builds a coordinate from values already known to be on the board.
    pub const fn from_u8(row: u8, col: u8) -> Self {
        assert!(row < Self::SIZE && col < Self::SIZE, "coordinate out of range");
        Self { row, col }
    }

    pub const fn row(&self) -> u8 {
        self.row
    }

    pub const fn col(&self) -> u8 {
        self.col
    }

    pub const fn apply_delta(&self, (d_row, d_col): (i8, i8)) -> Option<Self> {
        Self::from_i8_checked(self.row as i8 + d_row, self.col as i8 + d_col)
    }

    /// Every coordinate, row by row starting from row 0.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::SIZE).flat_map(|row| (0..Self::SIZE).map(move |col| Self { row, col }))
    }
}

impl Display for Coord {
    /// Algebraic name, e.g. (5, 4) is `e3`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = char::from(b'a' + self.col);
        let rank = char::from(b'8' - self.row);
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Coord {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err =
            || ChessError::MalformedFen(format!("'{s}' cannot be used to construct a square"));
        let mut chars = s.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => (file, rank),
            _ => return Err(err()),
        };
        Ok(Self {
            row: b'8' - rank as u8,
            col: file as u8 - b'a',
        })
    }
}
