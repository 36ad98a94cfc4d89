use crate::spatial::Pixel;
use std::fmt;

/// A connected region of missing pixels and the known pixels around it
///
/// Built once by the breadth-first search in
/// [`calculate_hole`](crate::algorithm::finder::calculate_hole) and read-only
/// afterwards. `interior` and `boundary` are disjoint and duplicate free.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hole {
    interior: Vec<Pixel>,
    boundary: Vec<Pixel>,
}

impl Hole {
    /// Create an empty hole
    pub const fn new() -> Self {
        Self {
            interior: Vec::new(),
            boundary: Vec::new(),
        }
    }

    /// Missing pixels in discovery order
    pub fn interior(&self) -> &[Pixel] {
        &self.interior
    }

    /// Known pixels adjacent to the interior, in discovery order
    pub fn boundary(&self) -> &[Pixel] {
        &self.boundary
    }

    /// Test if the hole has no interior pixels
    pub const fn is_empty(&self) -> bool {
        self.interior.is_empty()
    }

    /// Number of interior pixels
    pub const fn len(&self) -> usize {
        self.interior.len()
    }

    pub(crate) fn push_interior(&mut self, pixel: Pixel) {
        self.interior.push(pixel);
    }

    pub(crate) fn push_boundary(&mut self, pixel: Pixel) {
        self.boundary.push(pixel);
    }
}

impl fmt::Display for Hole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hole:")?;
        for pixel in &self.interior {
            write!(f, "{pixel}\t")?;
        }
        writeln!(f)?;
        writeln!(f, "Hole Boundary:")?;
        for pixel in &self.boundary {
            write!(f, "{pixel}\t")?;
        }
        Ok(())
    }
}
