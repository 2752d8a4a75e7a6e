//! Turn a solved route into pixels or coordinates.
//!
//! The image mode paints a red-to-blue gradient along the route into a
//! 3-channel buffer laid out like the grid, cells at their flat index and
//! the wall between consecutive cells at the half-step blend. Positions
//! off the route are never written, so the caller prepares the canvas.

use crate::error::MazeError;
use crate::solve::Path;

/// Paint the route into `output`, three bytes per grid position.
///
/// The gradient runs from pure red on the start cell toward blue on the
/// end cell: position `i` of `2 * path_len` gets the color
/// `(255 - clr, 0, clr)` with `clr = trunc(i * 255 / total)`. Cells take
/// the even positions, the connecting walls the odd half-steps.
///
/// The buffer must reach the highest route index; an empty route writes
/// nothing and succeeds.
pub fn draw_path(path: &Path, output: &mut [u8]) -> Result<(), MazeError> {
    let indices = path.indices();
    let Some(&max_idx) = indices.iter().max() else {
        return Ok(());
    };

    let expected = 3 * (max_idx + 1);
    if output.len() < expected {
        return Err(MazeError::OutputTooSmall {
            expected,
            actual: output.len(),
        });
    }

    let offset = 255.0 / (2 * indices.len()) as f32;

    for (pos, &idx) in indices.iter().enumerate() {
        paint(output, idx, ((2 * pos) as f32 * offset) as u8);
    }
    // Adjacent route cells differ by 2 or 2 * width, so the wall between
    // them is their midpoint in the flat buffer.
    for (pos, pair) in indices.windows(2).enumerate() {
        paint(output, (pair[0] + pair[1]) / 2, ((2 * pos + 1) as f32 * offset) as u8);
    }

    Ok(())
}

fn paint(output: &mut [u8], idx: usize, clr: u8) {
    let at = 3 * idx;
    output[at] = 255 - clr;
    output[at + 1] = 0;
    output[at + 2] = clr;
}

/// Decode the route into (row, col) positions on the wall grid, start
/// first.
pub fn path_coordinates(path: &Path, width_with_walls: usize) -> Vec<(usize, usize)> {
    path.indices()
        .iter()
        .map(|&idx| {
            let col = idx % width_with_walls;
            let row = (idx - col) / width_with_walls;
            (row, col)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_cell_gradient_pinned() {
        // Route through the 1x2 maze: cells 6 and 8, wall 7 between.
        // total = 4, so the blend steps by exactly 63.75 per position.
        let path = Path::new(vec![6, 8]);
        let mut output = vec![1; 3 * 15];
        draw_path(&path, &mut output).expect("buffer large enough");

        assert_eq!(&output[18..21], &[255, 0, 0], "start cell is pure red");
        assert_eq!(&output[21..24], &[192, 0, 63], "wall takes the half-step");
        assert_eq!(&output[24..27], &[128, 0, 127], "end cell");
    }

    #[test]
    fn test_untouched_positions_keep_their_bytes() {
        let path = Path::new(vec![6, 8]);
        let mut output = vec![7; 3 * 15];
        draw_path(&path, &mut output).expect("buffer large enough");

        for idx in 0..15 {
            if [6, 7, 8].contains(&idx) {
                continue;
            }
            assert_eq!(
                &output[3 * idx..3 * idx + 3],
                &[7, 7, 7],
                "position {} off the route was written",
                idx
            );
        }
    }

    #[test]
    fn test_gradient_runs_red_to_blue() {
        // Straight 5-cell route down a column of a 7-wide grid.
        let path = Path::new(vec![8, 22, 36, 50, 64]);
        let mut output = vec![0; 3 * 65];
        draw_path(&path, &mut output).expect("buffer large enough");

        let reds: Vec<u8> = path.indices().iter().map(|&i| output[3 * i]).collect();
        let blues: Vec<u8> = path.indices().iter().map(|&i| output[3 * i + 2]).collect();

        assert_eq!(reds[0], 255, "route starts pure red");
        assert!(reds.windows(2).all(|w| w[0] > w[1]), "red fades along the route");
        assert!(blues.windows(2).all(|w| w[0] < w[1]), "blue grows along the route");
        assert!(
            path.indices().iter().all(|&i| output[3 * i + 1] == 0),
            "green stays zero"
        );
        // Every step blends red and blue to full intensity.
        for (&r, &b) in reds.iter().zip(blues.iter()) {
            assert_eq!(r as u16 + b as u16, 255);
        }
    }

    #[test]
    fn test_single_cell_route() {
        let path = Path::new(vec![4]);
        let mut output = vec![0; 3 * 9];
        draw_path(&path, &mut output).expect("buffer large enough");

        assert_eq!(&output[12..15], &[255, 0, 0]);
    }

    #[test]
    fn test_empty_route_writes_nothing() {
        let path = Path::new(Vec::new());
        let mut output = vec![9; 6];
        draw_path(&path, &mut output).expect("empty route always fits");

        assert!(output.iter().all(|&b| b == 9));
    }

    #[test]
    fn test_short_buffer_rejected() {
        let path = Path::new(vec![6, 8]);
        let mut output = vec![0; 3 * 8];

        assert_eq!(
            draw_path(&path, &mut output),
            Err(MazeError::OutputTooSmall {
                expected: 27,
                actual: 24
            })
        );
    }

    #[test]
    fn test_coordinates_decode() {
        let path = Path::new(vec![8, 22, 36, 38]);

        assert_eq!(
            path_coordinates(&path, 7),
            vec![(1, 1), (3, 1), (5, 1), (5, 3)]
        );
    }

    #[test]
    fn test_coordinates_round_trip() {
        let path = Path::new(vec![8, 22, 36, 38, 24, 10, 12, 26, 40]);
        let width = 7;

        let restored: Vec<usize> = path_coordinates(&path, width)
            .into_iter()
            .map(|(row, col)| row * width + col)
            .collect();
        assert_eq!(restored, path.indices());
    }
}
