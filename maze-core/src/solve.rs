//! Depth-first pathfinding over a carved maze.
//!
//! The search mirrors the carver's walk/backtrack split, but runs on a
//! private copy of the buffer with the sentinels inverted: 255 now means a
//! wall or cell not yet traversed, 0 means traversed. Zeroing a wall after
//! crossing it is what stops the walk from doubling back.
//!
//! In a perfect maze exactly one path joins any two cells, so scan order
//! does not affect what is found, only how much gets explored on the way.
//! The walk checks the four directions in fixed north, south, east, west
//! order with no shuffle.

use crate::direction::Direction;
use crate::error::MazeError;
use crate::grid::{Grid, PASSAGE, WALL};
use crate::stack::Stack;

/// The cell indices of a solved route, start first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path(Vec<usize>);

impl Path {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// Flat cell indices in walking order, start to end.
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Number of cells on the route, endpoints included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Find the route from `start` to `end` through the carved maze.
///
/// The grid itself is not modified; traversal marks go into a scratch
/// copy. When `start == end` the route is that single cell.
///
/// # Arguments
/// * `grid` - A carved maze buffer
/// * `start` - Flat index of the starting cell
/// * `end` - Flat index of the target cell
///
/// # Returns
/// * `Ok(Path)` - The cells walked, start first, end last
/// * `Err(MazeError::InvalidStart)` / `Err(MazeError::InvalidEnd)` - an
///   endpoint is not a cell position
/// * `Err(MazeError::NoPathFound)` - the search exhausted every open wall
///   reachable from `start` without meeting `end`
pub fn solve(grid: &Grid, start: usize, end: usize) -> Result<Path, MazeError> {
    if !grid.is_cell_index(start) {
        return Err(MazeError::InvalidStart(start));
    }
    if !grid.is_cell_index(end) {
        return Err(MazeError::InvalidEnd(end));
    }

    let width = grid.width_with_walls();
    let mut visited = grid.cells().to_vec();
    let mut stack = Stack::new();
    visited[start] = WALL;

    let mut current = Some(start);
    while let Some(resume) = current {
        let mut walker = Some(resume);
        while let Some(idx) = walker {
            stack.push(idx);
            if idx == end {
                return Ok(Path::new(stack.into_indices()));
            }
            walker = walk(&mut visited, idx, width);
        }
        current = backtrack(&visited, &mut stack, width);
    }

    Err(MazeError::NoPathFound)
}

/// Cross the first still-open wall out of `idx`, marking both the wall and
/// the cell behind it traversed. `None` when every way out is closed.
///
/// Bounds are checked against the buffer, not trusted from it, so a
/// nonsensical loaded maze can produce a useless route but never an
/// out-of-range access.
fn walk(visited: &mut [u8], idx: usize, width: usize) -> Option<usize> {
    for dir in Direction::ALL {
        if let Some((wall, cell)) = dir.step_pair(idx, width) {
            if cell < visited.len() && visited[wall] == PASSAGE {
                visited[wall] = WALL;
                visited[cell] = WALL;
                return Some(cell);
            }
        }
    }

    None
}

/// Pop back to the most recent cell with an untraversed open wall. `None`
/// means the search space is exhausted.
///
/// Qualifies a cell with exactly the test `walk` uses, so a resumed cell
/// is always one the walk can actually advance from.
fn backtrack(visited: &[u8], stack: &mut Stack, width: usize) -> Option<usize> {
    while let Some(idx) = stack.pop() {
        let has_open = Direction::ALL.iter().any(|dir| {
            dir.step_pair(idx, width)
                .is_some_and(|(wall, cell)| cell < visited.len() && visited[wall] == PASSAGE)
        });
        if has_open {
            return Some(idx);
        }
    }

    None
}
