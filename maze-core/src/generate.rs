//! Maze carving with the recursive backtracker.
//!
//! Algorithm: randomized depth-first carve over the cell grid
//! 1. Mark the start cell carved, push it on the stack
//! 2. Walk: shuffle the four directions, take the first whose two-step
//!    neighbor is an in-bounds uncarved cell, open both the wall between
//!    and the neighbor, advance to it
//! 3. When no direction qualifies, pop back to the most recent cell that
//!    still has an uncarved neighbor and resume walking from it
//! 4. Done when the stack empties: every cell is carved and the open
//!    walls form a spanning tree, so exactly one path joins any two cells

use crate::direction::Direction;
use crate::error::MazeError;
use crate::grid::{Grid, PASSAGE, WALL};
use crate::rng::{shuffle, RandomSource};
use crate::stack::Stack;

/// Carve a perfect maze into `grid`, starting from the cell at flat index
/// `start`.
///
/// The grid is expected fresh from [`Grid::new`], all walls up. Carving a
/// grid twice leaves it fully carved either way; the second pass stops at
/// once since no uncarved cell remains.
///
/// # Arguments
/// * `grid` - All-wall grid to carve in place
/// * `start` - Flat index of the first cell (odd row, odd column)
/// * `rng` - Randomness for the direction shuffle
///
/// # Returns
/// * `Ok(())` - The grid now holds a perfect maze
/// * `Err(MazeError::InvalidStart)` - `start` is not a cell position
pub fn generate<R: RandomSource>(
    grid: &mut Grid,
    start: usize,
    rng: &mut R,
) -> Result<(), MazeError> {
    if !grid.is_cell_index(start) {
        return Err(MazeError::InvalidStart(start));
    }

    let mut stack = Stack::new();
    grid.cells[start] = PASSAGE;

    let mut current = Some(start);
    while let Some(resume) = current {
        // Walk until the corridor dead-ends, pushing as we go. The resume
        // cell goes back on the stack here after a backtrack popped it.
        let mut walker = Some(resume);
        while let Some(idx) = walker {
            stack.push(idx);
            walker = walk(grid, idx, rng);
        }
        current = backtrack(grid, &mut stack);
    }

    Ok(())
}

/// Try to extend the corridor from `idx` by one cell.
///
/// Scans the directions in shuffled order and carves through the first
/// wall with an uncarved cell behind it. Returns the new cell, or `None`
/// when all four neighbors are carved or out of bounds.
fn walk<R: RandomSource>(grid: &mut Grid, idx: usize, rng: &mut R) -> Option<usize> {
    let width = grid.width_with_walls();
    let mut dirs = Direction::ALL;
    shuffle(&mut dirs, rng);

    for dir in dirs {
        if let Some((wall, cell)) = dir.step_pair(idx, width) {
            if grid.is_cell_index(cell) && grid.cells[cell] == WALL {
                grid.cells[wall] = PASSAGE;
                grid.cells[cell] = PASSAGE;
                return Some(cell);
            }
        }
    }

    None
}

/// Pop back to the most recently visited cell that still has an uncarved
/// neighbor. `None` means the stack emptied and the maze is complete.
fn backtrack(grid: &Grid, stack: &mut Stack) -> Option<usize> {
    let width = grid.width_with_walls();

    while let Some(idx) = stack.pop() {
        let has_uncarved = Direction::ALL.iter().any(|dir| {
            dir.step2(idx, width)
                .is_some_and(|cell| grid.is_cell_index(cell) && grid.cells[cell] == WALL)
        });
        if has_uncarved {
            return Some(idx);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::MinstdRng;

    /// Never shuffles, so the carver always scans north, south, east, west.
    struct ZeroSource;

    impl RandomSource for ZeroSource {
        fn next_below(&mut self, _bound: usize) -> usize {
            0
        }
    }

    /// Count the cells reachable from `start` through open walls.
    fn reachable_cells(grid: &Grid, start: usize) -> usize {
        let width = grid.width_with_walls();
        let mut seen = vec![false; grid.cells().len()];
        let mut frontier = vec![start];
        seen[start] = true;
        let mut count = 0;

        while let Some(idx) = frontier.pop() {
            count += 1;
            for dir in Direction::ALL {
                if let Some((wall, cell)) = dir.step_pair(idx, width) {
                    if grid.is_cell_index(cell) && !seen[cell] && grid.cells()[wall] == PASSAGE {
                        seen[cell] = true;
                        frontier.push(cell);
                    }
                }
            }
        }

        count
    }

    #[test]
    fn test_serpentine_with_identity_shuffle() {
        // With the shuffle pinned to identity the carver always prefers
        // south, then east once a column is exhausted, then climbs north:
        // a serpentine through the 3x3 grid, traced by hand.
        let mut grid = Grid::new(3, 3).expect("3x3 grid");
        let start = grid.cell_index(0, 0).expect("start cell");
        generate(&mut grid, start, &mut ZeroSource).expect("generation succeeds");

        let carved_cells = [8, 22, 36, 38, 24, 10, 12, 26, 40];
        let open_walls = [15, 29, 37, 31, 17, 11, 19, 33];

        for idx in 0..grid.cells().len() {
            let expected = if carved_cells.contains(&idx) || open_walls.contains(&idx) {
                PASSAGE
            } else {
                WALL
            };
            assert_eq!(
                grid.cells()[idx],
                expected,
                "unexpected byte at index {}",
                idx
            );
        }
    }

    #[test]
    fn test_invalid_start_rejected() {
        let mut grid = Grid::new(3, 3).expect("3x3 grid");
        let mut rng = MinstdRng::new(1);

        // Border corner, wall position, one past the end.
        assert_eq!(
            generate(&mut grid, 0, &mut rng),
            Err(MazeError::InvalidStart(0))
        );
        assert_eq!(
            generate(&mut grid, 15, &mut rng),
            Err(MazeError::InvalidStart(15))
        );
        assert_eq!(
            generate(&mut grid, 49, &mut rng),
            Err(MazeError::InvalidStart(49))
        );
        assert!(grid.cells().iter().all(|&b| b == WALL), "grid untouched");
    }

    #[test]
    fn test_every_cell_carved() {
        let mut grid = Grid::new(5, 4).expect("5x4 grid");
        let start = grid.cell_index(2, 2).expect("start cell");
        let mut rng = MinstdRng::new(12345);
        generate(&mut grid, start, &mut rng).expect("generation succeeds");

        for row in 0..5 {
            for col in 0..4 {
                let idx = grid.cell_index(row, col).expect("cell index");
                assert_eq!(
                    grid.cells()[idx],
                    PASSAGE,
                    "cell ({}, {}) left uncarved",
                    row,
                    col
                );
            }
        }
    }

    #[test]
    fn test_spanning_tree_wall_count() {
        // A spanning tree over R*C cells opens exactly R*C - 1 walls, so
        // the buffer holds 2*R*C - 1 passage bytes in total.
        let mut grid = Grid::new(6, 7).expect("6x7 grid");
        let start = grid.cell_index(0, 0).expect("start cell");
        let mut rng = MinstdRng::new(99999);
        generate(&mut grid, start, &mut rng).expect("generation succeeds");

        let open = grid.cells().iter().filter(|&&b| b == PASSAGE).count();
        assert_eq!(open, 2 * 6 * 7 - 1);
    }

    #[test]
    fn test_every_cell_reachable() {
        let mut grid = Grid::new(8, 8).expect("8x8 grid");
        let start = grid.cell_index(3, 5).expect("start cell");
        let mut rng = MinstdRng::new(777);
        generate(&mut grid, start, &mut rng).expect("generation succeeds");

        let origin = grid.cell_index(0, 0).expect("origin cell");
        assert_eq!(reachable_cells(&grid, origin), 8 * 8);
    }

    #[test]
    fn test_determinism() {
        let mut grid1 = Grid::new(10, 10).expect("10x10 grid");
        let mut grid2 = Grid::new(10, 10).expect("10x10 grid");
        let start = grid1.cell_index(0, 0).expect("start cell");

        generate(&mut grid1, start, &mut MinstdRng::new(42)).expect("generation succeeds");
        generate(&mut grid2, start, &mut MinstdRng::new(42)).expect("generation succeeds");

        // Same seed should produce identical mazes
        assert_eq!(grid1.cells(), grid2.cells());
    }

    #[test]
    fn test_different_seeds() {
        let mut grid1 = Grid::new(10, 10).expect("10x10 grid");
        let mut grid2 = Grid::new(10, 10).expect("10x10 grid");
        let start = grid1.cell_index(0, 0).expect("start cell");

        generate(&mut grid1, start, &mut MinstdRng::new(11111)).expect("generation succeeds");
        generate(&mut grid2, start, &mut MinstdRng::new(22222)).expect("generation succeeds");

        // Different seeds should (almost certainly) produce different mazes
        assert_ne!(grid1.cells(), grid2.cells());
    }

    #[test]
    fn test_one_by_one() {
        let mut grid = Grid::new(1, 1).expect("1x1 grid");
        let start = grid.cell_index(0, 0).expect("only cell");
        generate(&mut grid, start, &mut MinstdRng::new(1)).expect("generation succeeds");

        // Width 3: the single cell sits at (1, 1), everything else stays wall.
        for (idx, &byte) in grid.cells().iter().enumerate() {
            let expected = if idx == 4 { PASSAGE } else { WALL };
            assert_eq!(byte, expected, "unexpected byte at index {}", idx);
        }
    }
}
