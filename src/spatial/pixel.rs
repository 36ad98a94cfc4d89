//! Grid coordinates and neighbour adjacency under 4- or 8-connectivity

use crate::io::error::{FillError, invalid_parameter};
use std::fmt;
use std::str::FromStr;

/// Edge-sharing neighbour offsets as (row, column) deltas
const FOUR_CONNECTED_OFFSETS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Edge- and corner-sharing neighbour offsets as (row, column) deltas
const EIGHT_CONNECTED_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Adjacency rule selecting which offsets count as neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Connectivity {
    /// Pixels sharing an edge
    Four,
    /// Pixels sharing an edge or a corner
    #[default]
    Eight,
}

impl Connectivity {
    /// Offsets defining adjacency, in deterministic order
    pub const fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Self::Four => &FOUR_CONNECTED_OFFSETS,
            Self::Eight => &EIGHT_CONNECTED_OFFSETS,
        }
    }

    /// Number of neighbours an interior pixel has
    pub const fn degree(self) -> usize {
        self.offsets().len()
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degree())
    }
}

impl FromStr for Connectivity {
    type Err = FillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "4" => Ok(Self::Four),
            "8" => Ok(Self::Eight),
            other => Err(invalid_parameter(
                "connectivity",
                &other,
                &"pixel connectivity value should be 4 or 8",
            )),
        }
    }
}

/// A single grid position
///
/// `x` is the row index where `x = 0` is the topmost row and `y` is the
/// column index where `y = 0` is the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pixel {
    /// Row index
    pub x: usize,
    /// Column index
    pub y: usize,
}

impl Pixel {
    /// Create a pixel at the given row and column
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Neighbouring pixels inside a `rows × cols` grid
    ///
    /// Offsets that would leave the grid are dropped silently, so corner and
    /// edge pixels simply have fewer neighbours.
    pub fn neighbours(self, connectivity: Connectivity, rows: usize, cols: usize) -> Vec<Self> {
        connectivity
            .offsets()
            .iter()
            .filter_map(|&(dx, dy)| self.offset_within(dx, dy, rows, cols))
            .collect()
    }

    fn offset_within(self, dx: isize, dy: isize, rows: usize, cols: usize) -> Option<Self> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < rows && y < cols).then_some(Self { x, y })
    }
}

impl From<(usize, usize)> for Pixel {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
