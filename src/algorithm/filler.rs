use crate::{
    algorithm::hole::Hole,
    algorithm::weights::WeightFunction,
    io::error::{Result, degenerate_hole},
    spatial::{Connectivity, ImageGrid, Pixel, grid::is_missing_value},
};
use std::fmt;

/// Which known pixels contribute to a reconstructed value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum FillPolicy {
    /// Weighted average over the whole hole boundary
    #[default]
    Boundary,
    /// Weighted average over each pixel's known direct neighbours
    ///
    /// The hole is filled in layers from its rim inward. Every layer reads a
    /// snapshot taken before the layer starts, so the result does not depend
    /// on the order of the interior list.
    Neighbour,
}

impl FillPolicy {
    /// Name of the fill pass run under this policy
    pub const fn operation(self) -> &'static str {
        match self {
            Self::Boundary => "boundary fill",
            Self::Neighbour => "neighbour fill",
        }
    }
}

impl fmt::Display for FillPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boundary => write!(f, "boundary"),
            Self::Neighbour => write!(f, "neighbour"),
        }
    }
}

/// Overwrites hole pixels with weighted averages of known pixels
#[derive(Debug, Clone)]
pub struct HoleFiller<W> {
    weight: W,
    policy: FillPolicy,
    connectivity: Connectivity,
}

impl<W: WeightFunction> HoleFiller<W> {
    /// Create a filler
    ///
    /// `connectivity` must match the one the hole was discovered with; it is
    /// only consulted by [`FillPolicy::Neighbour`].
    pub const fn new(weight: W, policy: FillPolicy, connectivity: Connectivity) -> Self {
        Self {
            weight,
            policy,
            connectivity,
        }
    }

    /// Active fill policy
    pub const fn policy(&self) -> FillPolicy {
        self.policy
    }

    /// Fill every interior pixel of `hole` and return how many were written
    ///
    /// All values are computed before any is written, so on error the grid is
    /// left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`FillError::DegenerateHole`](crate::FillError::DegenerateHole)
    /// when a pixel has no known contributors or its weight sum is zero or not
    /// finite
    pub fn fill(&self, grid: &mut ImageGrid, hole: &Hole) -> Result<usize> {
        let values = match self.policy {
            FillPolicy::Boundary => self.boundary_values(grid, hole)?,
            FillPolicy::Neighbour => self.neighbour_values(grid, hole)?,
        };

        let mut written = 0;
        for (pixel, value) in values {
            if grid.set(pixel, value) {
                written += 1;
            }
        }
        Ok(written)
    }

    fn boundary_values(&self, grid: &ImageGrid, hole: &Hole) -> Result<Vec<(Pixel, f64)>> {
        let samples: Vec<(Pixel, f64)> = hole
            .boundary()
            .iter()
            .filter_map(|&pixel| known_value(grid, pixel).map(|value| (pixel, value)))
            .collect();

        hole.interior()
            .iter()
            .map(|&pixel| {
                self.weighted_average(pixel, &samples)
                    .map(|value| (pixel, value))
            })
            .collect()
    }

    fn neighbour_values(&self, grid: &ImageGrid, hole: &Hole) -> Result<Vec<(Pixel, f64)>> {
        let (rows, cols) = (grid.rows(), grid.cols());
        let mut working = grid.clone();
        let mut pending = hole.interior().to_vec();
        let mut values = Vec::with_capacity(pending.len());

        while !pending.is_empty() {
            let mut layer = Vec::new();
            let mut deferred = Vec::new();

            for &pixel in &pending {
                let samples: Vec<(Pixel, f64)> = pixel
                    .neighbours(self.connectivity, rows, cols)
                    .into_iter()
                    .filter_map(|n| known_value(&working, n).map(|value| (n, value)))
                    .collect();

                if samples.is_empty() {
                    deferred.push(pixel);
                } else {
                    layer.push((pixel, self.weighted_average(pixel, &samples)?));
                }
            }

            // Nothing left pending can see a known pixel
            if layer.is_empty()
                && let Some(&stuck) = deferred.first()
            {
                return Err(degenerate_hole(
                    stuck,
                    &format!(
                        "{} pixels have no known {}-connected neighbour",
                        deferred.len(),
                        self.connectivity
                    ),
                ));
            }

            for &(pixel, value) in &layer {
                working.set(pixel, value);
            }
            values.extend(layer);
            pending = deferred;
        }

        Ok(values)
    }

    fn weighted_average(&self, pixel: Pixel, samples: &[(Pixel, f64)]) -> Result<f64> {
        if samples.is_empty() {
            return Err(degenerate_hole(pixel, &"no known pixels to interpolate from"));
        }

        let (numerator, denominator) =
            samples
                .iter()
                .fold((0.0, 0.0), |(numerator, denominator), &(known, value)| {
                    let weight = self.weight.weight(pixel, known);
                    (numerator + weight * value, denominator + weight)
                });

        if denominator <= 0.0 || !denominator.is_finite() || !numerator.is_finite() {
            return Err(degenerate_hole(
                pixel,
                &format!("weight sum {denominator} over {} samples", samples.len()),
            ));
        }

        let value = numerator / denominator;
        if is_missing_value(value) {
            return Err(degenerate_hole(
                pixel,
                &"reconstructed value equals the missing-pixel sentinel",
            ));
        }
        Ok(value)
    }
}

fn known_value(grid: &ImageGrid, pixel: Pixel) -> Option<f64> {
    grid.get(pixel).filter(|&value| !is_missing_value(value))
}
