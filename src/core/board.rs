//! The 10x20 playfield grid.
//!
//! Cells are stored in a flat row-major array for cache locality; all hot
//! paths are allocation free. Coordinates are `(x, y)` with x in 0..10 left
//! to right and y in 0..20 top to bottom.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// The game board holding locked cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; WIDTH * HEIGHT],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some(y as usize * WIDTH + x as usize)
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at `(x, y)`, or `None` if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|i| self.cells[i])
    }

    /// Write a cell. Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and empty: a mino may occupy this cell.
    pub fn is_open(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// In bounds and filled.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(Cell::is_some)
    }

    /// Remove every full row and shift the rows above down.
    ///
    /// Single bottom-up compaction pass using two cursors; rows are moved
    /// with `copy_within`, no allocation. Returns the cleared row indices,
    /// bottom to top.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * WIDTH;
                    let dst = write_y * WIDTH;
                    self.cells.copy_within(src..src + WIDTH, dst);
                }
            }
        }

        // Rows vacated at the top become empty.
        self.cells[..write_y * WIDTH].fill(None);

        cleared
    }

    /// Merge a piece into the board at `(x, y)`.
    ///
    /// All four cells are validated before any write, so a failed merge
    /// leaves the board untouched. Returns false on collision or out of
    /// bounds.
    pub fn lock_piece(&mut self, shape: &[(i8, i8)], x: i8, y: i8, kind: PieceKind) -> bool {
        if !shape.iter().all(|&(dx, dy)| self.is_open(x + dx, y + dy)) {
            return false;
        }
        for &(dx, dy) in shape {
            self.set(x + dx, y + dy, Some(kind));
        }
        true
    }

    /// True when the spawn area at the top of the board is obstructed.
    ///
    /// Spawning a piece into an occupied area ends the game.
    pub fn is_spawn_blocked(&self) -> bool {
        !self.is_open(3, 0) || !self.is_open(4, 0) || !self.is_open(5, 0)
    }

    /// Number of rows, counted from the bottom, containing at least one
    /// locked cell.
    pub fn stack_height(&self) -> usize {
        for y in 0..HEIGHT {
            let start = y * WIDTH;
            if self.cells[start..start + WIDTH].iter().any(Cell::is_some) {
                return HEIGHT - y;
            }
        }
        0
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
