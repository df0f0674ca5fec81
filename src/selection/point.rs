//! Grid coordinates and 8-neighborhood helpers.

/// A cell coordinate. `x` indexes the outer dimension of the grid, `y` the inner one.
///
/// Coordinates are signed so that neighbors of edge cells can be represented
/// before they are rejected by [`is_in_bounds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Point {
    pub x: isize,
    pub y: isize,
}

impl Point {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// Unsigned `(x, y)` if both coordinates are non-negative.
    pub fn to_index(self) -> Option<(usize, usize)> {
        Some((usize::try_from(self.x).ok()?, usize::try_from(self.y).ok()?))
    }
}

impl From<(isize, isize)> for Point {
    fn from((x, y): (isize, isize)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (isize, isize) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// (column offset, row offset) pairs, rows 1, 0, -1 outermost.
#[rustfmt::skip]
const ADJACENT_OFFSETS: [(isize, isize); 8] = [
    (-1, 1), (0, 1), (1, 1),
    (-1, 0), (1, 0),
    (-1, -1), (0, -1), (1, -1),
];

/// Lazily yields the 8 neighbors of `origin`, diagonals included.
///
/// The order is fixed: the row above (`y + 1`) left to right, then the same row,
/// then the row below (`y - 1`).
///
/// Neighbors that would overflow `isize` are skipped, so an origin at
/// `isize::MIN` or `isize::MAX` yields fewer than 8 points. Such neighbors can
/// never be in bounds.
pub fn generate_adjacent_points(origin: Point) -> impl Iterator<Item = Point> {
    ADJACENT_OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        Some(Point::new(origin.x.checked_add(dx)?, origin.y.checked_add(dy)?))
    })
}

/// True iff `0 <= x < width` and `0 <= y < height`.
#[inline]
pub fn is_in_bounds(point: Point, width: usize, height: usize) -> bool {
    match point.to_index() {
        Some((x, y)) => x < width && y < height,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_adjacent_order_at_origin() {
        let points: Vec<Point> = generate_adjacent_points(Point::new(0, 0)).collect();
        assert_eq!(
            points,
            vec![
                Point::new(-1, 1),
                Point::new(0, 1),
                Point::new(1, 1),
                Point::new(-1, 0),
                Point::new(1, 0),
                Point::new(-1, -1),
                Point::new(0, -1),
                Point::new(1, -1),
            ]
        );
    }

    #[test]
    fn test_adjacent_excludes_origin() {
        let origin = Point::new(7, -3);
        let points: Vec<Point> = generate_adjacent_points(origin).collect();
        assert_eq!(points.len(), 8);
        assert!(!points.contains(&origin));
        assert!(points
            .iter()
            .all(|p| (p.x - origin.x).abs() <= 1 && (p.y - origin.y).abs() <= 1));
    }

    #[test]
    fn test_adjacent_at_coordinate_extremes() {
        let points: Vec<Point> = generate_adjacent_points(Point::new(isize::MAX, 0)).collect();
        assert_eq!(
            points,
            vec![
                Point::new(isize::MAX - 1, 1),
                Point::new(isize::MAX, 1),
                Point::new(isize::MAX - 1, 0),
                Point::new(isize::MAX - 1, -1),
                Point::new(isize::MAX, -1),
            ]
        );

        let points: Vec<Point> = generate_adjacent_points(Point::new(0, isize::MIN)).collect();
        assert_eq!(
            points,
            vec![
                Point::new(-1, isize::MIN + 1),
                Point::new(0, isize::MIN + 1),
                Point::new(1, isize::MIN + 1),
                Point::new(-1, isize::MIN),
                Point::new(1, isize::MIN),
            ]
        );

        let corner = Point::new(isize::MIN, isize::MAX);
        assert_eq!(generate_adjacent_points(corner).count(), 3);
    }

    #[test]
    fn test_in_bounds_edges() {
        assert!(is_in_bounds(Point::new(0, 0), 3, 2));
        assert!(is_in_bounds(Point::new(2, 1), 3, 2));
        assert!(!is_in_bounds(Point::new(3, 1), 3, 2));
        assert!(!is_in_bounds(Point::new(2, 2), 3, 2));
        assert!(!is_in_bounds(Point::new(-1, 0), 3, 2));
        assert!(!is_in_bounds(Point::new(0, -1), 3, 2));
    }

    #[test]
    fn test_in_bounds_empty_grid() {
        assert!(!is_in_bounds(Point::new(0, 0), 0, 0));
    }

    #[test]
    fn test_point_tuple_conversion() {
        let p: Point = (4, -2).into();
        assert_eq!(p, Point::new(4, -2));
        assert_eq!(<(isize, isize)>::from(p), (4, -2));
        assert_eq!(p.to_index(), None);
        assert_eq!(Point::new(1, 2).to_index(), Some((1, 2)));
    }
}
