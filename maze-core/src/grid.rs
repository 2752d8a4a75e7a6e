//! Flat byte-buffer grid holding cells and walls together.
//!
//! A maze of R x C cells occupies a (2R+1) x (2C+1) buffer. Positions with
//! both coordinates odd are cells; every other position is a wall or border.
//! The byte doubles as a grayscale pixel, which fixes the two values below.
//!
//! The same buffer serves both phases with inverted sentinels: during
//! carving 0 means unvisited and 255 carved, during solving 255 means
//! still-open and 0 traversed. The inversion is deliberate and load-bearing,
//! since a carved buffer is exactly the image that gets written to disk.

use crate::error::MazeError;
use crate::rng::RandomSource;

/// Byte value of a wall or an unvisited position.
pub const WALL: u8 = 0;

/// Byte value of a carved cell or an open wall.
pub const PASSAGE: u8 = 255;

/// A rectangular maze buffer with its dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub(crate) cells: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl Grid {
    /// Create an all-wall grid of `rows` x `cols` cells.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        let size = (2 * rows + 1) * (2 * cols + 1);
        Ok(Self {
            cells: vec![WALL; size],
            rows,
            cols,
        })
    }

    /// Adopt an existing buffer, checking it matches the dimensions.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<u8>) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        let expected = (2 * rows + 1) * (2 * cols + 1);
        if cells.len() != expected {
            return Err(MazeError::BufferSize {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { cells, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Buffer width including walls: 2 * cols + 1.
    pub fn width_with_walls(&self) -> usize {
        2 * self.cols + 1
    }

    /// Buffer height including walls: 2 * rows + 1.
    pub fn height_with_walls(&self) -> usize {
        2 * self.rows + 1
    }

    /// The raw buffer, row-major, `height_with_walls * width_with_walls`
    /// bytes.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Flat index of the cell at logical position (`row`, `col`), or `None`
    /// when the position is outside the maze.
    pub fn cell_index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some((2 * row + 1) * self.width_with_walls() + (2 * col + 1))
        } else {
            None
        }
    }

    /// Whether `idx` addresses a true cell: inside the buffer, on an odd
    /// row and an odd column.
    ///
    /// Rejects borders, walls, and the row wrap-arounds produced by
    /// east/west steps taken at the grid edge.
    pub fn is_cell_index(&self, idx: usize) -> bool {
        let width = self.width_with_walls();
        idx < self.cells.len() && (idx / width) % 2 == 1 && (idx % width) % 2 == 1
    }

    /// Flat index of a uniformly random cell.
    pub fn random_cell(&self, rng: &mut impl RandomSource) -> usize {
        let row = 2 * rng.randint(0, self.rows - 1) + 1;
        let col = 2 * rng.randint(0, self.cols - 1) + 1;
        row * self.width_with_walls() + col
    }
}
