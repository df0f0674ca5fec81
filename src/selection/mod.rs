//! Flood fill selection over 2D color grids.
//!
//! This module provides:
//! - **Points**: signed cell coordinates and the 8-neighborhood (`point.rs`)
//! - **Grids**: the `ColorGrid` abstraction over nested vectors, arrays and ndarray (`grid.rs`)
//! - **Flood fill**: breadth-first same-color region search (`flood_fill.rs`)
//! - **Regions**: mask and bounds summary of a fill (`region.rs`)
//!
//! Grids are addressed as `data[x][y]`, with `x` on the outer dimension.

pub mod flood_fill;
pub mod grid;
pub mod point;
pub mod region;

pub use flood_fill::{find_connected_points_with_same_color, flood_fill_paths, get_flood_fill_path};
pub use grid::ColorGrid;
pub use point::{generate_adjacent_points, is_in_bounds, Point};
pub use region::{flood_fill_region, flood_fill_region_flat, FillRegion};
