//! Tests for weight kernels and closure injection

#[cfg(test)]
mod tests {
    use holefill::algorithm::weights::{DefaultWeight, WeightFunction};
    use holefill::io::configuration::{DEFAULT_EPSILON, DEFAULT_Z};
    use holefill::spatial::Pixel;
    use proptest::prelude::*;

    // Tests the default kernel formula at a known distance
    // Verified by dropping epsilon from the denominator
    #[test]
    fn test_default_weight_value() {
        let kernel = DefaultWeight::new(0.5, 2.0);
        let weight = kernel.weight(Pixel::new(0, 0), Pixel::new(3, 4));

        assert!((weight - 1.0 / 25.5).abs() < 1e-12);
    }

    // Tests larger z decays faster with distance
    // Verified by negating z in the kernel
    #[test]
    fn test_larger_z_is_sharper() {
        let near = Pixel::new(0, 1);
        let far = Pixel::new(0, 4);
        let origin = Pixel::new(0, 0);

        let soft = DefaultWeight::new(0.01, 1.0);
        let sharp = DefaultWeight::new(0.01, 4.0);

        let soft_ratio = soft.weight(origin, near) / soft.weight(origin, far);
        let sharp_ratio = sharp.weight(origin, near) / sharp.weight(origin, far);
        assert!(sharp_ratio > soft_ratio);
    }

    // Tests default kernel uses configured defaults
    // Verified by swapping epsilon and z in Default
    #[test]
    fn test_default_parameters() {
        let kernel = DefaultWeight::default();
        assert!((kernel.epsilon - DEFAULT_EPSILON).abs() < f64::EPSILON);
        assert!((kernel.z - DEFAULT_Z).abs() < f64::EPSILON);
    }

    // Tests closures act as weight functions
    // Verified by removing the blanket closure implementation
    #[test]
    fn test_closure_weight_function() {
        let manhattan = |a: Pixel, b: Pixel| 1.0 / (a.x.abs_diff(b.x) + a.y.abs_diff(b.y)) as f64;
        assert!((manhattan.weight(Pixel::new(0, 0), Pixel::new(1, 1)) - 0.5).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn default_weight_is_symmetric_and_positive(
            ax in 0usize..500, ay in 0usize..500,
            bx in 0usize..500, by in 0usize..500,
            epsilon in 1e-6f64..1.0,
            z in -4.0f64..6.0,
        ) {
            let kernel = DefaultWeight::new(epsilon, z);
            let a = Pixel::new(ax, ay);
            let b = Pixel::new(bx, by);

            let forward = kernel.weight(a, b);
            prop_assert_eq!(forward.to_bits(), kernel.weight(b, a).to_bits());
            prop_assert!(forward >= 0.0);
        }
    }
}
