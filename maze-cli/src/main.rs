use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};

use maze_cli::files;

#[derive(Parser)]
#[command(name = "maze", version, about = "Carve and solve perfect mazes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Carve a new maze and write it to a .png or .json file
    Generate {
        /// Cell rows, not counting walls
        #[arg(long, default_value_t = 25)]
        rows: usize,
        /// Cell columns, not counting walls
        #[arg(long, default_value_t = 25)]
        cols: usize,
        /// RNG seed; drawn from the clock when omitted
        #[arg(long)]
        seed: Option<u32>,
        /// Pixel size of one grid position in .png output
        #[arg(long, default_value_t = 3)]
        scale: u32,
        /// Output file, .png or .json
        #[arg(long, default_value = "maze.png")]
        output: PathBuf,
    },
    /// Solve a saved maze and write the route to a .png or .json file
    Solve {
        /// Maze file written by generate, .png or .json
        #[arg(long, default_value = "maze.png")]
        maze: PathBuf,
        /// Start cell as row,col; defaults to the top-left cell
        #[arg(long, value_parser = parse_cell)]
        start: Option<(usize, usize)>,
        /// End cell as row,col; defaults to the bottom-right cell
        #[arg(long, value_parser = parse_cell)]
        end: Option<(usize, usize)>,
        /// Pixel size of one grid position in .png output
        #[arg(long, default_value_t = 3)]
        scale: u32,
        /// Output file, .png or .json
        #[arg(long, default_value = "solution.png")]
        output: PathBuf,
    },
}

/// Parse "row,col" into a logical cell position.
fn parse_cell(value: &str) -> Result<(usize, usize), String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected row,col but got '{value}'"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|_| format!("invalid row '{row}'"))?;
    let col = col
        .trim()
        .parse()
        .map_err(|_| format!("invalid column '{col}'"))?;
    Ok((row, col))
}

fn main() -> Result<()> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    match Cli::parse().command {
        Command::Generate {
            rows,
            cols,
            seed,
            scale,
            output,
        } => {
            let begun = Instant::now();
            let (grid, seed) = maze_cli::generate_maze(rows, cols, seed)?;
            println!("✅ Carved a {}x{} maze in {:.2?}", rows, cols, begun.elapsed());
            println!("  Seed: {} (pass --seed {} to reproduce)", seed, seed);

            files::save_maze(&grid, &output, scale)?;
            println!("💾 Maze saved to: {}", output.display());
        }

        Command::Solve {
            maze,
            start,
            end,
            scale,
            output,
        } => {
            let grid = files::load_maze(&maze)?;
            println!(
                "📦 Loaded {}x{} maze from {}",
                grid.rows(),
                grid.cols(),
                maze.display()
            );

            let begun = Instant::now();
            let route = maze_cli::solve_maze(&grid, start, end)?;
            println!(
                "✅ Solved in {:.2?}: the route visits {} cells",
                begun.elapsed(),
                route.len()
            );

            files::save_solution(&grid, &route, &output, scale)?;
            println!("💾 Solution saved to: {}", output.display());
        }
    }

    Ok(())
}
