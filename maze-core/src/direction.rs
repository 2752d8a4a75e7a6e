//! Compass directions over the flat wall-grid buffer.
//!
//! A grid of R x C cells is stored with its walls as a flat byte buffer of
//! (2R+1) x (2C+1) positions, `index = row * width + col`. Moving one
//! position reaches the wall bordering a cell; moving two reaches the next
//! cell over. Both step sizes are pure index math parameterized on the
//! buffer width, so no per-grid state exists.

/// One of the four cardinal moves on the wall grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Canonical scan order for neighbor checks.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Index one position over: the wall bordering the cell at `idx`.
    ///
    /// Returns `None` when the move would leave the index space entirely
    /// (step off the top or left edge of the buffer).
    pub fn step1(self, idx: usize, width: usize) -> Option<usize> {
        match self {
            Direction::North => idx.checked_sub(width),
            Direction::South => idx.checked_add(width),
            Direction::East => idx.checked_add(1),
            Direction::West => idx.checked_sub(1),
        }
    }

    /// Index two positions over: the neighboring cell beyond the wall.
    ///
    /// Equivalent to applying [`Self::step1`] twice.
    pub fn step2(self, idx: usize, width: usize) -> Option<usize> {
        match self {
            Direction::North => idx.checked_sub(2 * width),
            Direction::South => idx.checked_add(2 * width),
            Direction::East => idx.checked_add(2),
            Direction::West => idx.checked_sub(2),
        }
    }

    /// The (wall, cell) index pair for a full move, or `None` when either
    /// position would fall off the buffer.
    ///
    /// NOTE: the returned indices are raw offsets. A move can wrap to the
    /// previous or next buffer row; such wraps land on an even column and
    /// are rejected by the cell-position checks in the grid, not here.
    pub fn step_pair(self, idx: usize, width: usize) -> Option<(usize, usize)> {
        let wall = self.step1(idx, width)?;
        let cell = self.step1(wall, width)?;
        Some((wall, cell))
    }
}
