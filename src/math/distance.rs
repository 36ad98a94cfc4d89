//! Distance and inverse-distance kernels for reconstruction weights

use num_traits::Float;

/// Euclidean distance between two planar points
pub fn euclidean<T: Float>(a: [T; 2], b: [T; 2]) -> T {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    dx.hypot(dy)
}

/// Inverse-distance weight `1 / (distance^z + epsilon)`
///
/// The caller supplies `epsilon > 0` when `distance` may be zero with a
/// non-positive `z`; otherwise the result is infinite.
pub fn inverse_distance_weight<T: Float>(distance: T, z: T, epsilon: T) -> T {
    (distance.powf(z) + epsilon).recip()
}
