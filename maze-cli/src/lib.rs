//! Command implementations for the `maze` binary.
//!
//! The binary stays thin: argument parsing and result printing live in
//! `main.rs`, the work happens here, and [`files`] holds the image and
//! JSON formats the commands read and write.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use maze_core::{generate, solve, Grid, MinstdRng, Path};

pub mod files;

/// Carve a fresh maze.
///
/// The carve starts from a cell drawn at random from the grid. The seed,
/// explicit or clock-derived, fully determines the outcome, including
/// that start cell.
///
/// # Arguments
/// * `rows` - Cell rows, not counting walls
/// * `cols` - Cell columns, not counting walls
/// * `seed` - RNG seed; drawn from the clock when `None`
///
/// # Returns
/// The carved grid together with the seed that produced it.
///
/// # Example
/// ```no_run
/// use maze_cli::generate_maze;
///
/// let (grid, seed) = generate_maze(10, 10, Some(2918957128)).unwrap();
/// println!("carved {} cells with seed {}", grid.rows() * grid.cols(), seed);
/// ```
pub fn generate_maze(rows: usize, cols: usize, seed: Option<u32>) -> Result<(Grid, u32)> {
    let seed = seed.unwrap_or_else(entropy_seed);
    tracing::info!("carving {}x{} maze with seed {}", rows, cols, seed);

    let mut rng = MinstdRng::new(seed);
    let mut grid = Grid::new(rows, cols)?;
    let start = grid.random_cell(&mut rng);
    generate(&mut grid, start, &mut rng)?;

    Ok((grid, seed))
}

/// Find the route between two cells of a carved maze.
///
/// Cells are addressed by logical (row, column) position; `None` endpoints
/// default to the top-left and bottom-right corners.
///
/// # Arguments
/// * `grid` - A carved maze
/// * `start` - Starting cell, defaults to (0, 0)
/// * `end` - Target cell, defaults to (rows - 1, cols - 1)
///
/// # Returns
/// The route's cells in walking order, start first.
///
/// # Example
/// ```no_run
/// use maze_cli::{generate_maze, solve_maze};
///
/// let (grid, _) = generate_maze(10, 10, Some(7)).unwrap();
/// let path = solve_maze(&grid, None, None).unwrap();
/// println!("route visits {} cells", path.len());
/// ```
pub fn solve_maze(
    grid: &Grid,
    start: Option<(usize, usize)>,
    end: Option<(usize, usize)>,
) -> Result<Path> {
    let (start_row, start_col) = start.unwrap_or((0, 0));
    let (end_row, end_col) = end.unwrap_or((grid.rows() - 1, grid.cols() - 1));

    let from = grid.cell_index(start_row, start_col).ok_or_else(|| {
        anyhow!(
            "start cell ({}, {}) is outside the {}x{} maze",
            start_row,
            start_col,
            grid.rows(),
            grid.cols()
        )
    })?;
    let to = grid.cell_index(end_row, end_col).ok_or_else(|| {
        anyhow!(
            "end cell ({}, {}) is outside the {}x{} maze",
            end_row,
            end_col,
            grid.rows(),
            grid.cols()
        )
    })?;

    tracing::info!(
        "solving from ({}, {}) to ({}, {})",
        start_row,
        start_col,
        end_row,
        end_col
    );
    let path = solve(grid, from, to)?;
    tracing::info!("route visits {} cells", path.len());

    Ok(path)
}

/// Seed drawn from the system clock, for runs without an explicit seed.
fn entropy_seed() -> u32 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => (elapsed.as_secs() as u32) ^ elapsed.subsec_nanos(),
        Err(_) => 1,
    }
}
