use std::collections::VecDeque;

use clap::{Parser, Subcommand};
use log::warn;

use crate::{
    position::{Position, Selection},
    START_FEN,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Position to start from
    #[arg(long, default_value = START_FEN)]
    pub fen: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Commands accepted on the command line and, one per line, in interactive mode.
#[derive(Parser, Debug)]
#[command(no_binary_name = true)]
pub struct Line {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
#[clap(rename_all = "snake_case")]
pub enum Command {
    Interactive,
    /// Replace the game with the given FEN
    Position {
        fen: String,
    },
    /// Select the piece on a square and list its destinations
    Pick {
        row: i8,
        col: i8,
    },
    /// Move the picked piece
    Move {
        row: i8,
        col: i8,
    },
    /// Castle the picked king or rook with its partner
    Castle {
        row: i8,
        col: i8,
    },
    /// Destinations of the current selection
    Moves,
    Print,
    Fen,
    Reset,
    Exit,
}

/// Runs one command against `position` and returns what to show the user.
pub fn handle_command(cmd: Command, position: &mut Position) -> String {
    match cmd {
        Command::Position { fen } => match Position::from_fen(&fen) {
            Ok(p) => {
                *position = p;
                position.to_string()
            }
            Err(err) => {
                warn!("{err}");
                format!("Error: {err}")
            }
        },
        Command::Pick { row, col } => match position.try_select(row, col) {
            Ok(Selection::Picked) => moves_line(position),
            Ok(Selection::Castled) => position.to_string(),
            Err(err) => format!("Error: {err}"),
        },
        Command::Move { row, col } => match position.try_make_move(row, col) {
            Ok(()) => position.to_string(),
            Err(err) => format!("Error: {err}"),
        },
        Command::Castle { row, col } => match position.try_castle(row, col) {
            Ok(()) => position.to_string(),
            Err(err) => format!("Error: {err}"),
        },
        Command::Moves => moves_line(position),
        Command::Print => position.to_string(),
        Command::Fen => position.fen().to_string(),
        Command::Reset => {
            *position = Position::default();
            position.to_string()
        }
        Command::Interactive | Command::Exit => String::new(),
    }
}

fn moves_line(position: &Position) -> String {
    format!(
        "Moves: {}",
        position
            .available()
            .iter()
            .fold(String::new(), |mut acc, sq| {
                if !acc.is_empty() {
                    acc += ", ";
                }
                acc += &format!("({}, {}) {sq}", sq.row(), sq.col());
                acc
            })
    )
}

pub fn split_ignore_quotes(input: &str) -> VecDeque<String> {
    let mut split_strings = VecDeque::new();
    let mut inside_quotes = false;
    let mut current_string = String::new();

    for c in input.chars() {
        match c {
            '\'' | '"' => inside_quotes = !inside_quotes,
            c if c.is_whitespace() && !inside_quotes => {
                if !current_string.is_empty() {
                    split_strings.push_back(std::mem::take(&mut current_string));
                }
            }
            _ => current_string.push(c),
        }
    }

    if !current_string.is_empty() {
        split_strings.push_back(current_string);
    }

    split_strings
}
