pub mod cell;
pub mod color;
pub mod coord;
pub mod error;
pub mod piece;

mod helper;

pub use cell::Cell;
pub use color::{Color, Team};
pub use coord::Coord;
pub use error::ChessError;
pub use piece::{Kind, Piece};
