use crate::{
    algorithm::filler::{FillPolicy, HoleFiller},
    algorithm::finder::find_next_hole,
    algorithm::hole::Hole,
    algorithm::weights::{DefaultWeight, WeightFunction},
    io::configuration::{DEFAULT_CONNECTIVITY, DEFAULT_EPSILON, DEFAULT_Z},
    io::error::{ErrorContext, Result, WithContext, invalid_parameter},
    spatial::{Connectivity, ImageGrid},
};

/// Run-time parameters for discovering and filling holes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillConfig {
    /// Adjacency used both for discovery and neighbour filling
    pub connectivity: Connectivity,
    /// Regularizer of the default weight kernel
    pub epsilon: f64,
    /// Distance exponent of the default weight kernel
    pub z: f64,
    /// Which known pixels contribute to each reconstructed value
    pub policy: FillPolicy,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            connectivity: DEFAULT_CONNECTIVITY,
            epsilon: DEFAULT_EPSILON,
            z: DEFAULT_Z,
            policy: FillPolicy::default(),
        }
    }
}

impl FillConfig {
    /// Check the scalars before the core runs
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `epsilon` is not a finite number greater than zero
    /// - `z` is not finite
    pub fn validate(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(invalid_parameter(
                "epsilon",
                &self.epsilon,
                &"must be a finite number greater than zero",
            ));
        }
        if !self.z.is_finite() {
            return Err(invalid_parameter("z", &self.z, &"must be a finite number"));
        }
        Ok(())
    }

    /// Default kernel closed over this configuration's scalars
    pub const fn weight(&self) -> DefaultWeight {
        DefaultWeight::new(self.epsilon, self.z)
    }
}

/// A hole together with the number of pixels written while filling it
#[derive(Debug, Clone)]
pub struct FilledHole {
    /// Interior and boundary as discovered before filling
    pub hole: Hole,
    /// Interior pixels overwritten with reconstructed values
    pub pixels_written: usize,
}

/// Outcome of a multi-hole pass
#[derive(Debug, Clone, Default)]
pub struct FillReport {
    /// Filled holes in discovery order
    pub holes: Vec<FilledHole>,
}

impl FillReport {
    /// Number of holes filled
    pub const fn hole_count(&self) -> usize {
        self.holes.len()
    }

    /// Total pixels written across all holes
    pub fn pixels_filled(&self) -> usize {
        self.holes.iter().map(|filled| filled.pixels_written).sum()
    }

    /// Iterate over the discovered holes
    pub fn iter_holes(&self) -> impl Iterator<Item = &Hole> {
        self.holes.iter().map(|filled| &filled.hole)
    }
}

/// Drives seed search, hole discovery and filling over a grid
pub struct HoleFillExecutor<W = DefaultWeight> {
    filler: HoleFiller<W>,
    connectivity: Connectivity,
}

impl HoleFillExecutor<DefaultWeight> {
    /// Create an executor using the default kernel
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: FillConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_weight(
            config.weight(),
            config.policy,
            config.connectivity,
        ))
    }
}

impl<W: WeightFunction> HoleFillExecutor<W> {
    /// Create an executor with an injected weight function
    pub const fn with_weight(weight: W, policy: FillPolicy, connectivity: Connectivity) -> Self {
        Self {
            filler: HoleFiller::new(weight, policy, connectivity),
            connectivity,
        }
    }

    /// Discover and fill the first hole in row-major order
    ///
    /// Returns `Ok(None)` once the grid holds no missing pixel.
    ///
    /// # Errors
    ///
    /// Returns an error if the hole is degenerate; the grid is then unchanged
    pub fn fill_next_hole(&self, grid: &mut ImageGrid) -> Result<Option<FilledHole>> {
        let hole = match find_next_hole(grid, self.connectivity) {
            Ok(hole) => hole,
            Err(error) if error.is_no_missing_pixel() => return Ok(None),
            Err(error) => return Err(error),
        };

        let pixels_written = self.filler.fill(grid, &hole)?;
        Ok(Some(FilledHole {
            hole,
            pixels_written,
        }))
    }

    /// Fill holes until no missing pixel remains
    ///
    /// `on_hole` is called with the hole index after each hole is filled.
    ///
    /// # Errors
    ///
    /// Returns an error tagged with the hole index if any hole is degenerate.
    /// Holes filled before the failure keep their new values.
    pub fn fill_all_holes<F>(&self, grid: &mut ImageGrid, mut on_hole: F) -> Result<FillReport>
    where
        F: FnMut(usize, &FilledHole),
    {
        let mut report = FillReport::default();

        while let Some(filled) = self.fill_next_hole(grid).with_context(ErrorContext {
            hole_index: Some(report.hole_count()),
            operation: Some(self.filler.policy().operation()),
        })? {
            on_hole(report.hole_count(), &filled);
            report.holes.push(filled);
        }

        log::debug!(
            "Filled {} holes ({} pixels) with {} policy",
            report.hole_count(),
            report.pixels_filled(),
            self.filler.policy()
        );

        Ok(report)
    }
}
