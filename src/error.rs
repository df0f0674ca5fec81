//! Error type for flood fill operations.

use thiserror::Error;

use crate::selection::Point;

pub type Result<T> = std::result::Result<T, FillError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FillError {
    #[error("point ({}, {}) is outside the {width}x{height} grid", .point.x, .point.y)]
    OutOfBounds {
        point: Point,
        width: usize,
        height: usize,
    },

    #[error("grid has no rows")]
    EmptyGrid,

    /// The point passed the bounds check, but the grid data has no cell there.
    #[error("no cell at ({}, {}) in grid data", .point.x, .point.y)]
    MissingCell { point: Point },

    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid shape: {0}")]
    Shape(String),
}

#[cfg(feature = "python")]
impl From<FillError> for pyo3::PyErr {
    fn from(err: FillError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
