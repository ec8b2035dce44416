//! Forsyth-Edwards Notation, see
//! https://en.wikipedia.org/wiki/Forsyth%E2%80%93Edwards_Notation

use util::{ChessError, Color, Coord, Piece};

use crate::{
    board::Board,
    both_colors::BothColors,
    state::{CastleSide, Castling, EnPassant, Moved, State},
};

const FIELD_COUNT: usize = 6;

fn malformed(msg: String) -> ChessError {
    ChessError::MalformedFen(msg)
}

/// Splits a FEN into board and state. All six fields are required.
pub fn decode(input: &str) -> Result<(Board, State), ChessError> {
    let chunks: Vec<&str> = input.split_whitespace().collect();
    if chunks.len() != FIELD_COUNT {
        return Err(malformed(format!(
            "expected {FIELD_COUNT} fields, found {} in '{input}'",
            chunks.len()
        )));
    }
    let board = parse_placement(chunks[0])?;
    let state = State::from_fen(&chunks[1..])?;
    Ok((board, state))
}

pub fn encode(board: &Board, state: &State) -> String {
    let en_passant = match state.en_passant {
        Some(ep) => ep.target.to_string(),
        None => "-".to_string(),
    };
    format!(
        "{} {} {} {} {} {}",
        placement(board),
        state.side_to_move().to_fen(),
        state.rights().to_fen(),
        en_passant,
        state.half_move_count,
        state.full_move_count
    )
}

pub fn parse_placement(fen_chunk: &str) -> Result<Board, ChessError> {
    let ranks: Vec<&str> = fen_chunk.split('/').collect();
    if ranks.len() != Coord::SIZE as usize {
        return Err(malformed(format!(
            "placement '{fen_chunk}' has {} ranks instead of 8",
            ranks.len()
        )));
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col: usize = 0;
        let mut last_was_number = false;
        for rank_char in rank_str.chars() {
            if let Some(number) = rank_char.to_digit(10) {
                if last_was_number {
                    return Err(malformed(format!(
                        "rank {rank_str} has two adjacent empty square numbers"
                    )));
                }
                if !(1..=8).contains(&number) {
                    return Err(malformed(format!(
                        "rank {rank_str} has an empty run of {number}"
                    )));
                }
                last_was_number = true;
                col += number as usize;
            } else {
                let piece = Piece::from_fen_char(rank_char).ok_or_else(|| {
                    malformed(format!("'{rank_char}' cannot be parsed as a piece"))
                })?;
                last_was_number = false;
                if col < Coord::SIZE as usize {
                    board.place(Coord::from_u8(row as u8, col as u8), piece);
                }
                col += 1;
            }
            if col > Coord::SIZE as usize {
                return Err(malformed(format!("rank {rank_str} has too many squares")));
            }
        }
        if col != Coord::SIZE as usize {
            return Err(malformed(format!("rank {rank_str} has too few squares")));
        }
    }
    Ok(board)
}

pub fn placement(board: &Board) -> String {
    let mut fen = String::new();
    for (i, row) in board.rows().enumerate() {
        if i > 0 {
            fen.push('/');
        }
        let mut empty_number = 0;
        for cell in row {
            match cell.piece().to_fen_char() {
                Some(c) => {
                    if empty_number > 0 {
                        fen += &empty_number.to_string();
                        empty_number = 0;
                    }
                    fen.push(c);
                }
                None => empty_number += 1,
            }
        }
        if empty_number > 0 {
            fen += &empty_number.to_string();
        }
    }
    fen
}

impl State {
    /// Reads the five fields after the placement.
    fn from_fen(fen_chunks: &[&str]) -> Result<Self, ChessError> {
        let [active, castling, en_passant, half, full] = fen_chunks else {
            return Err(malformed(format!(
                "expected 5 state fields, found {}",
                fen_chunks.len()
            )));
        };

        let mut chars = active.chars();
        let side_to_move = match (chars.next().and_then(Color::from_fen), chars.next()) {
            (Some(color), None) => color,
            _ => {
                return Err(malformed(format!(
                    "'{active}' cannot be used to construct the active color"
                )))
            }
        };

        let castling = BothColors::<Castling>::from_fen(castling)?;

        let en_passant = match *en_passant {
            "-" => None,
            sq => {
                let target: Coord = sq.parse()?;
                let set_by = match target.row() {
                    2 => Color::Black,
                    5 => Color::White,
                    _ => {
                        return Err(malformed(format!(
                            "'{sq}' is not on an en passant rank"
                        )))
                    }
                };
                Some(EnPassant { target, set_by })
            }
        };

        let half_move_count = half.parse::<u16>().map_err(|_| {
            malformed(format!("half move count could not be parsed from '{half}'"))
        })?;
        let full_move_count = full.parse::<u16>().map_err(|_| {
            malformed(format!("full move count could not be parsed from '{full}'"))
        })?;

        Ok(Self {
            last_mover: !side_to_move,
            castling,
            moved: BothColors::<Moved>::default(),
            en_passant,
            half_move_count,
            full_move_count,
        })
    }
}

impl BothColors<Castling> {
    fn from_fen(input: &str) -> Result<Self, ChessError> {
        let mut castling = Self::default();
        if input == "-" {
            return Ok(castling);
        }
        let err = || malformed(format!("castling input '{input}' is invalid"));
        for c in input.chars() {
            let right = match c {
                'K' => &mut castling[Color::White].king_side,
                'Q' => &mut castling[Color::White].queen_side,
                'k' => &mut castling[Color::Black].king_side,
                'q' => &mut castling[Color::Black].queen_side,
                _ => return Err(err()),
            };
            if *right {
                return Err(err());
            }
            *right = true;
        }
        Ok(castling)
    }

    fn to_fen(&self) -> String {
        let mut output = String::new();
        for color in Color::ALL {
            for side in CastleSide::ALL {
                if self[color].allows(side) {
                    output.push(side.fen_letter(color));
                }
            }
        }
        if output.is_empty() {
            "-".to_string()
        } else {
            output
        }
    }
}
