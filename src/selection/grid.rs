//! Read-only color grids addressed as `data[x][y]`.
//!
//! `x` indexes the outer dimension (rows of a `Vec<Vec<T>>`, axis 0 of an
//! ndarray) and `y` the inner one. Dimensions follow the same convention:
//!
//! - **height**: length of the outer dimension, `len(data)`
//! - **width**: length of the first inner row, `len(data[0])`
//!
//! For non-square data this means the bounds check and the storage layout
//! disagree; cells that pass the bounds check but are not stored are reported
//! as [`FillError::MissingCell`](crate::FillError::MissingCell) by the scanner.

use ndarray::{ArrayBase, Data, Ix2};

use super::point::Point;
use crate::error::{FillError, Result};

/// A 2D grid of comparable color values.
pub trait ColorGrid {
    type Color: PartialEq;

    /// Length of the outer dimension.
    fn height(&self) -> usize;

    /// Length of the first row, or 0 for an empty grid.
    fn width(&self) -> usize;

    /// Color at `data[x][y]`, if stored.
    fn cell(&self, x: usize, y: usize) -> Option<&Self::Color>;

    /// Ok if every row has the same length as the first.
    fn check_rectangular(&self) -> Result<()> {
        Ok(())
    }

    fn color_at(&self, point: Point) -> Option<&Self::Color> {
        let (x, y) = point.to_index()?;
        self.cell(x, y)
    }
}

fn check_row_lengths(lengths: impl IntoIterator<Item = usize>) -> Result<()> {
    let mut rows = lengths.into_iter().enumerate();
    let Some((_, expected)) = rows.next() else {
        return Ok(());
    };
    match rows.find(|&(_, len)| len != expected) {
        Some((row, actual)) => Err(FillError::RaggedGrid {
            row,
            expected,
            actual,
        }),
        None => Ok(()),
    }
}

impl<T: PartialEq> ColorGrid for [Vec<T>] {
    type Color = T;

    fn height(&self) -> usize {
        self.len()
    }

    fn width(&self) -> usize {
        self.first().map_or(0, Vec::len)
    }

    fn cell(&self, x: usize, y: usize) -> Option<&T> {
        self.get(x)?.get(y)
    }

    fn check_rectangular(&self) -> Result<()> {
        check_row_lengths(self.iter().map(Vec::len))
    }
}

impl<T: PartialEq> ColorGrid for Vec<Vec<T>> {
    type Color = T;

    fn height(&self) -> usize {
        self.as_slice().height()
    }

    fn width(&self) -> usize {
        self.as_slice().width()
    }

    fn cell(&self, x: usize, y: usize) -> Option<&T> {
        self.as_slice().cell(x, y)
    }

    fn check_rectangular(&self) -> Result<()> {
        self.as_slice().check_rectangular()
    }
}

impl<T: PartialEq, const N: usize> ColorGrid for [[T; N]] {
    type Color = T;

    fn height(&self) -> usize {
        self.len()
    }

    fn width(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            N
        }
    }

    fn cell(&self, x: usize, y: usize) -> Option<&T> {
        self.get(x)?.get(y)
    }
}

impl<T: PartialEq, const N: usize, const M: usize> ColorGrid for [[T; N]; M] {
    type Color = T;

    fn height(&self) -> usize {
        M
    }

    fn width(&self) -> usize {
        self.as_slice().width()
    }

    fn cell(&self, x: usize, y: usize) -> Option<&T> {
        self.as_slice().cell(x, y)
    }
}

/// Axis 0 is `x`, axis 1 is `y`.
impl<S> ColorGrid for ArrayBase<S, Ix2>
where
    S: Data,
    S::Elem: PartialEq,
{
    type Color = S::Elem;

    fn height(&self) -> usize {
        self.nrows()
    }

    fn width(&self) -> usize {
        if self.nrows() == 0 {
            0
        } else {
            self.ncols()
        }
    }

    fn cell(&self, x: usize, y: usize) -> Option<&S::Elem> {
        self.get((x, y))
    }
}
