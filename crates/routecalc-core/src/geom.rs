//! Geometry primitives: [`Coord`] and [`Range`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downward, columns grow to
//! the right, and both are signed so that neighbour offsets can step off the
//! grid and be rejected by a bounds check instead of underflowing.

use std::fmt;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A grid cell address.
///
/// Ordering is row-major: lower row first, then lower column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four cardinal neighbours in search order: up, down, left, right.
    #[inline]
    pub const fn neighbors_4(self) -> [Coord; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Coord) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// Whether `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Coord,
    pub max: Coord,
}

impl Range {
    #[inline]
    pub const fn new(min: Coord, max: Coord) -> Self {
        Self { min, max }
    }

    /// Range `[0, height) × [0, width)`.
    #[inline]
    pub const fn sized(height: i32, width: i32) -> Self {
        Self::new(Coord::ZERO, Coord::new(height, width))
    }

    /// Number of rows.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Total number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// Whether `c` is inside the half-open range.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.row >= self.min.row && c.row < self.max.row && c.col >= self.min.col && c.col < self.max.col
    }

    /// Row-major iterator over every coordinate in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Coord;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height(), self.width())
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the coordinates in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Coord,
}

impl Iterator for RangeIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.cur.row >= self.range.max.row || self.range.is_empty() {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.range.max.col {
            self.cur.col = self.range.min.col;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.row >= self.range.max.row {
            return (0, Some(0));
        }
        let w = self.range.width() as usize;
        let remaining_in_row = (self.range.max.col - self.cur.col) as usize;
        let remaining_rows = (self.range.max.row - self.cur.row - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_shift() {
        let a = Coord::new(1, 2);
        assert_eq!(a.shift(-1, 1), Coord::new(0, 3));
        assert_eq!(a.shift(2, -3), Coord::new(3, -1));
    }

    #[test]
    fn coord_orders_row_major() {
        let mut v = vec![
            Coord::new(1, 0),
            Coord::new(0, 2),
            Coord::new(0, 1),
            Coord::new(2, 0),
        ];
        v.sort();
        assert_eq!(
            v,
            vec![
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 0),
                Coord::new(2, 0),
            ]
        );
    }

    #[test]
    fn neighbors_4_order() {
        let n = Coord::new(5, 5).neighbors_4();
        assert_eq!(
            n,
            [
                Coord::new(4, 5),
                Coord::new(6, 5),
                Coord::new(5, 4),
                Coord::new(5, 6),
            ]
        );
        assert!(n.iter().all(|&c| Coord::new(5, 5).is_adjacent(c)));
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Coord::new(0, 0).manhattan(Coord::new(2, 2)), 4);
        assert_eq!(Coord::new(3, 1).manhattan(Coord::new(3, 1)), 0);
        assert!(!Coord::new(0, 0).is_adjacent(Coord::new(1, 1)));
    }

    #[test]
    fn coord_display() {
        assert_eq!(Coord::new(2, 7).to_string(), "(2, 7)");
    }

    #[test]
    fn range_basics() {
        let r = Range::sized(2, 3);
        assert_eq!(r.height(), 2);
        assert_eq!(r.width(), 3);
        assert_eq!(r.len(), 6);
        assert!(!r.is_empty());
        assert!(r.contains(Coord::new(0, 0)));
        assert!(r.contains(Coord::new(1, 2)));
        assert!(!r.contains(Coord::new(0, 3)));
        assert!(!r.contains(Coord::new(2, 0)));
        assert!(!r.contains(Coord::new(-1, 0)));
    }

    #[test]
    fn offset_range() {
        let r = Range::new(Coord::new(2, 3), Coord::new(5, 7));
        assert_eq!((r.height(), r.width()), (3, 4));
        assert!(r.contains(Coord::new(2, 3)));
        assert!(!r.contains(Coord::new(1, 3)));
        assert_eq!(r.iter().next(), Some(Coord::new(2, 3)));
    }

    #[test]
    fn range_iter_row_major() {
        let r = Range::sized(2, 3);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Coord::new(0, 0));
        assert_eq!(pts[2], Coord::new(0, 2));
        assert_eq!(pts[3], Coord::new(1, 0));
        assert_eq!(pts[5], Coord::new(1, 2));
        assert_eq!(r.iter().len(), 6);
    }

    #[test]
    fn empty_range_iter() {
        let r = Range::sized(0, 4);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.iter().count(), 0);
    }
}
