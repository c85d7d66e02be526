//! Diagonal band bounding which cells of the cost matrix are computed.

use crate::error::WdtwError;
use std::convert::TryFrom;
use std::ops::Range;

/// Band half-width around the main diagonal.
///
/// Row `i` of the cost matrix is computed for columns
/// `max(1, i - radius)..min(m, i + radius)`. The upper bound is exclusive, so a
/// radius of 0 computes no cells at all and a radius of 1 computes the
/// diagonal and the sub-diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    radius: usize,
}

impl Window {
    pub fn new(radius: usize) -> Self {
        Self { radius }
    }

    /// A band covering every non-boundary cell, whatever the matrix size.
    pub fn unbounded() -> Self {
        Self { radius: usize::MAX }
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Columns computed in `row` of an `m × m` matrix.
    ///
    /// Column 0 is never part of the range; it belongs to the caller-seeded
    /// boundary. The range is empty for row 0.
    pub fn column_range(&self, row: usize, m: usize) -> Range<usize> {
        if row == 0 {
            return 1..1;
        }
        let start = row.saturating_sub(self.radius).max(1);
        let end = row.saturating_add(self.radius).min(m);
        start..end.max(start)
    }

    /// Number of cells the band covers in an `m × m` matrix.
    pub fn cell_count(&self, m: usize) -> usize {
        (1..m).map(|row| self.column_range(row, m).len()).sum()
    }
}

impl TryFrom<i64> for Window {
    type Error = WdtwError;

    fn try_from(window: i64) -> Result<Self, Self::Error> {
        usize::try_from(window)
            .map(Self::new)
            .map_err(|_| WdtwError::InvalidWindow { window })
    }
}
