//! Board module - manages the game grid
//!
//! The board is a 4x4 grid where each cell can be empty or hold a tile value.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..3 (left to right), y ranges 0..3 (top to bottom)

use arrayvec::ArrayVec;

use crate::types::{Cell, Position, BOARD_CELLS, BOARD_SIZE};

/// The game board - 4 columns x 4 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * SIZE + x)
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Build a board from rows of values, `0` meaning empty.
    ///
    /// `rows[y][x]`, so the literal reads the way the board looks.
    pub fn from_rows(rows: [[u32; BOARD_SIZE as usize]; BOARD_SIZE as usize]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                if v != 0 {
                    board.cells[y * BOARD_SIZE as usize + x] = Some(v);
                }
            }
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: u8, y: u8) -> Option<usize> {
        if x >= BOARD_SIZE || y >= BOARD_SIZE {
            return None;
        }
        Some((y as usize) * (BOARD_SIZE as usize) + (x as usize))
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: u8, y: u8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Tile value at `pos`, `None` when empty or out of bounds.
    #[inline]
    pub fn tile(&self, pos: Position) -> Cell {
        self.get(pos.x, pos.y).flatten()
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: u8, y: u8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and holding a tile)
    pub fn is_occupied(&self, x: u8, y: u8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Empty cells in row-major scan order.
    pub fn available_cells(&self) -> ArrayVec<Position, BOARD_CELLS> {
        let mut out = ArrayVec::new();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                if !self.is_occupied(x, y) {
                    out.push(Position::new(x, y));
                }
            }
        }
        out
    }

    /// Non-empty cells in row-major scan order, with their values.
    pub fn tiles(&self) -> impl Iterator<Item = (Position, u32)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, cell)| {
            let pos = Position::new(
                (i % BOARD_SIZE as usize) as u8,
                (i / BOARD_SIZE as usize) as u8,
            );
            cell.map(|v| (pos, v))
        })
    }

    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn tile_sum(&self) -> u32 {
        self.cells.iter().flatten().sum()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
