//! Maze carving, solving, and path rendering over a flat byte grid.
//!
//! A maze of R x C cells lives in a (2R+1) x (2C+1) byte buffer that holds
//! cells and walls together; the byte value doubles as a grayscale pixel.
//! [`generate`] carves a perfect maze into the buffer with a randomized
//! recursive backtracker, [`solve`] walks the unique route between two
//! cells with a depth-first search, and the render functions turn that
//! route into a color gradient or a coordinate list.
//!
//! The crate does no I/O and holds no global state: the grid, the random
//! source, and the traversal stack all travel through the calls, so
//! independent mazes can be worked on concurrently.

pub mod direction;
pub mod error;
pub mod generate;
pub mod grid;
pub mod render;
pub mod rng;
pub mod solve;
pub mod stack;

// Re-export commonly used types for convenience
pub use direction::Direction;
pub use error::MazeError;
pub use generate::generate;
pub use grid::{Grid, PASSAGE, WALL};
pub use render::{draw_path, path_coordinates};
pub use rng::{shuffle, MinstdRng, RandomSource};
pub use solve::{solve, Path};
pub use stack::Stack;
