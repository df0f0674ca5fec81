//! Flood fill result as a selection mask with metadata.

use std::collections::HashSet;

use ndarray::{Array2, ArrayView2};

use super::flood_fill::get_flood_fill_path;
use super::grid::ColorGrid;
use super::point::Point;
use crate::error::{FillError, Result};

/// Flood fill result with mask and bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct FillRegion {
    /// Selected points
    pub points: HashSet<Point>,
    /// Selection mask (255 = selected, 0 = not selected), indexed `[[x, y]]`
    pub mask: Array2<u8>,
    /// Bounds of selected region
    pub bounds: Option<(usize, usize, usize, usize)>, // (x, y, x extent, y extent)
    /// Number of selected cells
    pub pixel_count: usize,
}

impl FillRegion {
    /// Build a region from a point set over a grid of `rows` x `cols` cells.
    ///
    /// Points outside the mask shape are ignored.
    pub fn from_points(points: HashSet<Point>, rows: usize, cols: usize) -> Self {
        let mut mask = Array2::<u8>::zeros((rows, cols));

        let mut pixel_count = 0;
        let mut min_x = rows;
        let mut min_y = cols;
        let mut max_x = 0;
        let mut max_y = 0;

        for (x, y) in points.iter().filter_map(|p| p.to_index()) {
            if let Some(cell) = mask.get_mut((x, y)) {
                *cell = 255;
                pixel_count += 1;
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
        }

        let bounds = if pixel_count > 0 {
            Some((min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
        } else {
            None
        };

        Self {
            points,
            mask,
            bounds,
            pixel_count,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.points.contains(&point)
    }
}

/// Flood fill from `point` and summarize the result as a mask.
///
/// The mask has the grid's shape, `(rows, columns)`. Requires a rectangular grid.
pub fn flood_fill_region<G>(point: Point, grid: &G) -> Result<FillRegion>
where
    G: ColorGrid + ?Sized,
{
    grid.check_rectangular()?;
    let points = get_flood_fill_path(point, grid)?;
    Ok(FillRegion::from_points(points, grid.height(), grid.width()))
}

/// Flood fill a flat buffer of `height` rows with `width` values each.
///
/// `point.x` selects the row and `point.y` the value within it.
pub fn flood_fill_region_flat<T: PartialEq>(
    data: &[T],
    width: usize,
    height: usize,
    point: Point,
) -> Result<FillRegion> {
    let grid = ArrayView2::from_shape((height, width), data).map_err(|_| {
        FillError::Shape(format!(
            "{} values do not fill {} rows of {}",
            data.len(),
            height,
            width
        ))
    })?;
    flood_fill_region(point, &grid)
}
