use crate::spatial::Pixel;
use bitvec::prelude::*;
use std::fmt;

/// Visited flags for one breadth-first traversal
///
/// Scratch state scoped to a single hole search: created all-false, written
/// while the frontier grows and dropped when the search returns. Pixels are
/// stored row-major so a lookup is a single bit test.
#[derive(Clone, Debug)]
pub struct VisitedMask {
    bits: BitVec,
    rows: usize,
    cols: usize,
}

impl VisitedMask {
    /// Create a mask with no pixels visited
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            bits: bitvec![0; rows * cols],
            rows,
            cols,
        }
    }

    fn index(&self, pixel: Pixel) -> Option<usize> {
        (pixel.x < self.rows && pixel.y < self.cols).then_some(pixel.x * self.cols + pixel.y)
    }

    /// Mark a pixel as visited
    ///
    /// Returns `true` if the pixel was not visited before. Out-of-grid pixels
    /// are never marked and report `false`.
    pub fn visit(&mut self, pixel: Pixel) -> bool {
        let Some(index) = self.index(pixel) else {
            return false;
        };
        !self.bits.replace(index, true)
    }

    /// Test whether a pixel has been visited
    pub fn is_visited(&self, pixel: Pixel) -> bool {
        self.index(pixel)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Count visited pixels
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no pixel has been visited
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }
}

impl fmt::Display for VisitedMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VisitedMask({}x{}, {} visited)",
            self.rows,
            self.cols,
            self.count()
        )
    }
}
