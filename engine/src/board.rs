use std::ops::Index;

use util::{Cell, Coord, Piece};

/// The 8×8 grid. Cells are only ever swapped wholesale; nothing hands out a
/// mutable reference into the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<Coord> for Board {
    type Output = Cell;
    fn index(&self, index: Coord) -> &Self::Output {
        &self.cells[index.row() as usize][index.col() as usize]
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: std::array::from_fn(|row| {
                std::array::from_fn(|col| Cell::empty(Coord::from_u8(row as u8, col as u8)))
            }),
        }
    }

    /// Rows from row 0 (rank 8) down to row 7 (rank 1).
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; 8]> {
        self.cells.iter()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    pub fn place(&mut self, coord: Coord, piece: Piece) {
        self.replace(Cell::new(coord, piece));
    }

    pub fn clear(&mut self, coord: Coord) {
        self.replace(Cell::empty(coord));
    }

    pub(crate) fn mark_available(&mut self, coord: Coord) {
        self.replace(self[coord].with_available(true));
    }

    pub(crate) fn mark_under_hit(&mut self, coord: Coord) {
        self.replace(self[coord].with_under_hit(true));
    }

    pub fn clear_available(&mut self) {
        for coord in Coord::all() {
            if self[coord].is_available() {
                self.replace(self[coord].with_available(false));
            }
        }
    }

    pub fn clear_under_hit(&mut self) {
        for coord in Coord::all() {
            if self[coord].is_under_hit() {
                self.replace(self[coord].with_under_hit(false));
            }
        }
    }

    pub fn available(&self) -> Vec<Coord> {
        self.cells()
            .filter(|cell| cell.is_available())
            .map(Cell::coord)
            .collect()
    }

    fn replace(&mut self, cell: Cell) {
        let coord = cell.coord();
        self.cells[coord.row() as usize][coord.col() as usize] = cell;
    }
}
