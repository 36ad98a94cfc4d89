use crate::io::configuration::{DEFAULT_EPSILON, DEFAULT_Z};
use crate::math::distance::{euclidean, inverse_distance_weight};
use crate::spatial::Pixel;

/// Influence of a known pixel on a reconstructed one
///
/// Implementations must be pure and return a non-negative weight. Any
/// `Fn(Pixel, Pixel) -> f64` closure is a weight function, so alternative
/// kernels can be injected without a new type.
pub trait WeightFunction {
    /// Weight of `known` when reconstructing `target`
    fn weight(&self, target: Pixel, known: Pixel) -> f64;
}

impl<F> WeightFunction for F
where
    F: Fn(Pixel, Pixel) -> f64,
{
    fn weight(&self, target: Pixel, known: Pixel) -> f64 {
        self(target, known)
    }
}

/// Default inverse-distance kernel `1 / (‖a - b‖^z + epsilon)`
///
/// Larger `z` gives sharper locality; `epsilon` regularizes the kernel near
/// zero distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DefaultWeight {
    /// Regularizer added to the distance term
    pub epsilon: f64,
    /// Distance exponent
    pub z: f64,
}

impl DefaultWeight {
    /// Create a kernel closed over the given scalars
    pub const fn new(epsilon: f64, z: f64) -> Self {
        Self { epsilon, z }
    }
}

impl Default for DefaultWeight {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON, DEFAULT_Z)
    }
}

impl WeightFunction for DefaultWeight {
    fn weight(&self, target: Pixel, known: Pixel) -> f64 {
        let distance = euclidean(
            [target.x as f64, target.y as f64],
            [known.x as f64, known.y as f64],
        );
        inverse_distance_weight(distance, self.z, self.epsilon)
    }
}
