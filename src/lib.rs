//! FloodFill Rust Extensions
//!
//! Same-color region search on 2D grids, with Python bindings via PyO3 and
//! WASM bindings for JavaScript.
//!
//! ## Grid Format
//! Grids are addressed as `data[x][y]`: `x` indexes the outer dimension and
//! `y` the inner one. Supported layouts:
//! - **Nested vectors**: `Vec<Vec<T>>` or `&[Vec<T>]`
//! - **Arrays**: `[[T; N]; M]` or `&[[T; N]]`
//! - **ndarray**: any 2D `ArrayBase`, axis 0 is `x`
//!
//! Width is the length of the first row and height the number of rows.
//!
//! ## Connectivity
//! Regions use 8-connectivity: horizontal, vertical and diagonal neighbors all
//! join a region when they share the start cell's color.

pub mod error;
pub mod selection;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{FillError, Result};
pub use selection::{
    find_connected_points_with_same_color, flood_fill_paths, flood_fill_region,
    generate_adjacent_points, get_flood_fill_path, is_in_bounds, ColorGrid, FillRegion, Point,
};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use std::collections::HashSet;

    use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2};
    use pyo3::prelude::*;

    use crate::error::Result;
    use crate::selection::{
        flood_fill_paths as flood_fill_paths_impl, flood_fill_region, generate_adjacent_points,
        get_flood_fill_path, Point,
    };

    fn to_tuples(points: HashSet<Point>) -> HashSet<(isize, isize)> {
        points.into_iter().map(Into::into).collect()
    }

    // ========================================================================
    // Flood Fill
    // ========================================================================

    /// Flood fill from (x, y), returning the set of selected (x, y) tuples.
    ///
    /// The grid is indexed as grid[x, y]. Raises ValueError if (x, y) is
    /// outside the grid.
    #[pyfunction]
    pub fn flood_fill_path(
        grid: PyReadonlyArray2<'_, i64>,
        x: isize,
        y: isize,
    ) -> PyResult<HashSet<(isize, isize)>> {
        let points = get_flood_fill_path(Point::new(x, y), &grid.as_array())?;
        Ok(to_tuples(points))
    }

    /// Flood fill from (x, y), returning a uint8 mask shaped like the grid.
    #[pyfunction]
    pub fn flood_fill_mask<'py>(
        py: Python<'py>,
        grid: PyReadonlyArray2<'py, i64>,
        x: isize,
        y: isize,
    ) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let region = flood_fill_region(Point::new(x, y), &grid.as_array())?;
        Ok(region.mask.into_pyarray(py))
    }

    /// Flood fill from several seeds in parallel.
    ///
    /// Raises ValueError if any seed is outside the grid.
    #[pyfunction]
    pub fn flood_fill_paths(
        grid: PyReadonlyArray2<'_, i64>,
        seeds: Vec<(isize, isize)>,
    ) -> PyResult<Vec<HashSet<(isize, isize)>>> {
        let seeds: Vec<Point> = seeds.into_iter().map(Point::from).collect();
        let regions = flood_fill_paths_impl(&seeds, &grid.as_array())
            .into_iter()
            .map(|result| result.map(to_tuples))
            .collect::<Result<Vec<_>>>()?;
        Ok(regions)
    }

    /// The 8 neighbors of (x, y) in traversal order.
    #[pyfunction]
    pub fn adjacent_points(x: isize, y: isize) -> Vec<(isize, isize)> {
        generate_adjacent_points(Point::new(x, y))
            .map(Into::into)
            .collect()
    }

    /// FloodFill Rust extension module
    #[pymodule]
    pub fn floodfill_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(flood_fill_path, m)?)?;
        m.add_function(wrap_pyfunction!(flood_fill_mask, m)?)?;
        m.add_function(wrap_pyfunction!(flood_fill_paths, m)?)?;
        m.add_function(wrap_pyfunction!(adjacent_points, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::floodfill_rust;
