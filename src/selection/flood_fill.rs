//! Flood fill using breadth-first search over the 8-neighborhood.
//!
//! Selects the region of cells connected to a start cell that share its color.

use std::collections::{HashSet, VecDeque};

use rayon::prelude::*;
use tracing::{debug, trace};

use super::grid::ColorGrid;
use super::point::{generate_adjacent_points, is_in_bounds, Point};
use crate::error::{FillError, Result};

/// Find all points connected to `root` that have the same color as `root`.
///
/// # Arguments
/// * `root` - Starting point, must satisfy `is_in_bounds(root, width, height)`
/// * `grid` - Color grid addressed as `grid[x][y]`
/// * `width` - Exclusive upper bound for `x`
/// * `height` - Exclusive upper bound for `y`
///
/// # Returns
/// The connected same-color region, `root` included.
///
/// # Errors
/// * [`FillError::OutOfBounds`] if `root` is outside `width` x `height`
/// * [`FillError::MissingCell`] if a visited in-bounds point has no cell in `grid`
pub fn find_connected_points_with_same_color<G>(
    root: Point,
    grid: &G,
    width: usize,
    height: usize,
) -> Result<HashSet<Point>>
where
    G: ColorGrid + ?Sized,
{
    if !is_in_bounds(root, width, height) {
        return Err(FillError::OutOfBounds {
            point: root,
            width,
            height,
        });
    }

    let start_color = color_at(grid, root)?;

    let mut todo = VecDeque::from([root]);
    let mut seen = HashSet::from([root]);
    let mut same_color = HashSet::new();

    while let Some(current) = todo.pop_front() {
        // Non-matching cells are visited but never expanded
        if color_at(grid, current)? != start_color {
            continue;
        }
        same_color.insert(current);

        for adjacent in generate_adjacent_points(current) {
            if !seen.contains(&adjacent) && is_in_bounds(adjacent, width, height) {
                seen.insert(adjacent);
                todo.push_back(adjacent);
            }
        }
    }

    debug!(
        x = root.x,
        y = root.y,
        width,
        height,
        visited = seen.len(),
        selected = same_color.len(),
        "flood fill complete"
    );

    Ok(same_color)
}

fn color_at<G>(grid: &G, point: Point) -> Result<&G::Color>
where
    G: ColorGrid + ?Sized,
{
    grid.color_at(point).ok_or_else(|| {
        trace!(x = point.x, y = point.y, "in-bounds point has no cell");
        FillError::MissingCell { point }
    })
}

/// Flood fill from `point`, with width and height taken from the grid itself.
///
/// Width is the length of the first row, height the number of rows.
pub fn get_flood_fill_path<G>(point: Point, grid: &G) -> Result<HashSet<Point>>
where
    G: ColorGrid + ?Sized,
{
    if grid.height() == 0 {
        return Err(FillError::EmptyGrid);
    }
    find_connected_points_with_same_color(point, grid, grid.width(), grid.height())
}

/// Flood fill from each seed independently, in parallel.
///
/// Results are returned in seed order. A failing seed does not affect the others.
pub fn flood_fill_paths<G>(seeds: &[Point], grid: &G) -> Vec<Result<HashSet<Point>>>
where
    G: ColorGrid + Sync + ?Sized,
{
    seeds
        .par_iter()
        .map(|&seed| get_flood_fill_path(seed, grid))
        .collect()
}
