//! WebAssembly exports for flood fill.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! Grids are passed as flat `Int32Array`s of `height` rows with `width` values
//! each. `x` selects the row and `y` the value within it.

use wasm_bindgen::prelude::*;

use crate::selection::{flood_fill_region_flat, FillRegion, Point};

fn fill_flat(
    data: &[i32],
    width: usize,
    height: usize,
    x: isize,
    y: isize,
) -> Result<FillRegion, JsError> {
    flood_fill_region_flat(data, width, height, Point::new(x, y))
        .map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// Flood Fill
// ============================================================================

/// Flood fill and return the selection mask.
///
/// # Arguments
/// * `data` - Flat array of colors (length = width * height)
/// * `width` - Values per row
/// * `height` - Number of rows
/// * `x` - Starting row
/// * `y` - Starting position within the row
///
/// # Returns
/// Flat mask in the same layout as `data` (255 = selected, 0 = not selected)
#[wasm_bindgen]
pub fn flood_fill_mask_wasm(
    data: &[i32],
    width: usize,
    height: usize,
    x: isize,
    y: isize,
) -> Result<Vec<u8>, JsError> {
    let region = fill_flat(data, width, height, x, y)?;
    Ok(region.mask.into_raw_vec_and_offset().0)
}

/// Flood fill and return the number of selected cells.
#[wasm_bindgen]
pub fn flood_fill_count_wasm(
    data: &[i32],
    width: usize,
    height: usize,
    x: isize,
    y: isize,
) -> Result<usize, JsError> {
    let region = fill_flat(data, width, height, x, y)?;
    Ok(region.pixel_count)
}
