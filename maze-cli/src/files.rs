//! Maze and solution files.
//!
//! Two formats, chosen by file extension: `.png` stores the grid buffer as
//! a grayscale-valued RGB image blown up by an integer scale factor, and
//! `.json` stores the raw buffer with its dimensions. Loading a PNG
//! recovers the scale from the image itself and undoes it.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use image::{Rgb, RgbImage};
use maze_core::{draw_path, path_coordinates, Grid};
use serde::{Deserialize, Serialize};

/// On-disk form of a maze: dimensions plus the flat buffer, row-major.
#[derive(Debug, Serialize, Deserialize)]
struct MazeDoc {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

/// On-disk form of a solution: the route as (row, col) positions on the
/// wall grid, start first.
#[derive(Debug, Serialize, Deserialize)]
struct SolutionDoc {
    length: usize,
    points: Vec<(usize, usize)>,
}

enum Format {
    Png,
    Json,
}

/// Write a carved maze to `path`, format chosen by extension.
pub fn save_maze<P: AsRef<Path>>(grid: &Grid, path: P, scale: u32) -> Result<()> {
    let path = path.as_ref();
    if scale == 0 {
        bail!("scale must be at least 1");
    }
    match format_of(path)? {
        Format::Png => write_maze_png(grid, path, scale),
        Format::Json => write_maze_json(grid, path),
    }
}

/// Read a maze written by [`save_maze`], undoing the pixel scale for PNG
/// input.
pub fn load_maze<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    match format_of(path)? {
        Format::Png => read_maze_png(path),
        Format::Json => read_maze_json(path),
    }
}

/// Write a solved route to `path`: a gradient over the maze image for
/// `.png`, the coordinate list for `.json`.
pub fn save_solution<P: AsRef<Path>>(
    grid: &Grid,
    route: &maze_core::Path,
    path: P,
    scale: u32,
) -> Result<()> {
    let path = path.as_ref();
    if scale == 0 {
        bail!("scale must be at least 1");
    }
    match format_of(path)? {
        Format::Png => write_solution_png(grid, route, path, scale),
        Format::Json => write_solution_json(grid, route, path),
    }
}

fn format_of(path: &Path) -> Result<Format> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => Ok(Format::Png),
        Some("json") => Ok(Format::Json),
        _ => bail!(
            "unsupported format for {}; use a .png or .json path",
            path.display()
        ),
    }
}

fn write_maze_png(grid: &Grid, path: &Path, scale: u32) -> Result<()> {
    let width = grid.width_with_walls();
    let cells = grid.cells();
    let img = RgbImage::from_fn(
        width as u32 * scale,
        grid.height_with_walls() as u32 * scale,
        |x, y| {
            let v = cells[(y / scale) as usize * width + (x / scale) as usize];
            Rgb([v, v, v])
        },
    );
    img.save(path)
        .with_context(|| format!("cannot write {}", path.display()))
}

fn write_maze_json(grid: &Grid, path: &Path) -> Result<()> {
    let doc = MazeDoc {
        rows: grid.rows(),
        cols: grid.cols(),
        cells: grid.cells().to_vec(),
    };
    let json = serde_json::to_string_pretty(&doc)?;
    fs::write(path, json).with_context(|| format!("cannot write {}", path.display()))
}

fn read_maze_png(path: &Path) -> Result<Grid> {
    let img = image::open(path)
        .with_context(|| format!("cannot open {}", path.display()))?
        .to_rgb8();

    let scale = detect_scale(&img)?;
    let (img_w, img_h) = (img.width(), img.height());
    if img_w % scale != 0 || img_h % scale != 0 {
        bail!(
            "image size {}x{} does not divide by the detected scale {}",
            img_w,
            img_h,
            scale
        );
    }

    let (grid_w, grid_h) = (img_w / scale, img_h / scale);
    if grid_w % 2 == 0 || grid_h % 2 == 0 {
        bail!(
            "downscaled size {}x{} is not a wall grid; expected odd dimensions",
            grid_w,
            grid_h
        );
    }

    // Take the top-left pixel of each scale-sized block.
    let mut cells = Vec::with_capacity((grid_w * grid_h) as usize);
    for y in 0..grid_h {
        for x in 0..grid_w {
            cells.push(img.get_pixel(x * scale, y * scale)[0]);
        }
    }

    let rows = ((grid_h - 1) / 2) as usize;
    let cols = ((grid_w - 1) / 2) as usize;
    Ok(Grid::from_cells(rows, cols, cells)?)
}

fn read_maze_json(path: &Path) -> Result<Grid> {
    let json =
        fs::read_to_string(path).with_context(|| format!("cannot open {}", path.display()))?;
    let doc: MazeDoc = serde_json::from_str(&json)
        .with_context(|| format!("malformed maze in {}", path.display()))?;
    Ok(Grid::from_cells(doc.rows, doc.cols, doc.cells)?)
}

/// Recover the scale a maze image was written with.
///
/// Buffer row 0 is the all-wall top border, so the first pixel row with
/// any lit red channel marks where buffer row 1 begins; its index is the
/// scale factor.
fn detect_scale(img: &RgbImage) -> Result<u32> {
    for y in 0..img.height() {
        if (0..img.width()).any(|x| img.get_pixel(x, y)[0] > 0) {
            if y == 0 {
                bail!("top border row of the maze image is not blank");
            }
            return Ok(y);
        }
    }
    bail!("cannot detect the image scale: no open cell in the image")
}

fn write_solution_png(grid: &Grid, route: &maze_core::Path, path: &Path, scale: u32) -> Result<()> {
    let width = grid.width_with_walls();

    // The maze expanded to three channels, route gradient painted on top.
    let mut canvas = Vec::with_capacity(3 * grid.cells().len());
    for &byte in grid.cells() {
        canvas.extend_from_slice(&[byte, byte, byte]);
    }
    draw_path(route, &mut canvas)?;

    let img = RgbImage::from_fn(
        width as u32 * scale,
        grid.height_with_walls() as u32 * scale,
        |x, y| {
            let at = 3 * ((y / scale) as usize * width + (x / scale) as usize);
            Rgb([canvas[at], canvas[at + 1], canvas[at + 2]])
        },
    );
    img.save(path)
        .with_context(|| format!("cannot write {}", path.display()))
}

fn write_solution_json(grid: &Grid, route: &maze_core::Path, path: &Path) -> Result<()> {
    let doc = SolutionDoc {
        length: route.len(),
        points: path_coordinates(route, grid.width_with_walls()),
    };
    let json = serde_json::to_string_pretty(&doc)?;
    fs::write(path, json).with_context(|| format!("cannot write {}", path.display()))
}
