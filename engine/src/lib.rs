pub mod board;
pub mod both_colors;
pub mod cli;
pub mod display;
pub mod movegen;
pub mod parse;
pub mod position;
pub mod state;
pub mod threat;

pub use board::Board;
pub use position::{Position, Selection};
pub use state::{CastleSide, EnPassant, State};
pub use util::{Cell, ChessError, Color, Coord, Kind, Piece, Team};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
