//! Tests for per-traversal visited bookkeeping

#[cfg(test)]
mod tests {
    use holefill::algorithm::visited::VisitedMask;
    use holefill::spatial::Pixel;

    // Tests first visit reports new and repeat visits do not
    // Verified by always returning true from visit
    #[test]
    fn test_visit_reports_first_discovery_only() {
        let mut mask = VisitedMask::new(3, 4);

        assert!(mask.is_empty());
        assert!(mask.visit(Pixel::new(2, 3)));
        assert!(!mask.visit(Pixel::new(2, 3)));
        assert!(mask.is_visited(Pixel::new(2, 3)));
        assert!(!mask.is_visited(Pixel::new(3, 2)));
        assert_eq!(mask.count(), 1);
    }

    // Tests row-major indexing keeps distinct pixels distinct
    // Verified by indexing with rows instead of cols as stride
    #[test]
    fn test_distinct_pixels_do_not_alias() {
        let mut mask = VisitedMask::new(2, 5);
        for x in 0..2 {
            for y in 0..5 {
                assert!(mask.visit(Pixel::new(x, y)), "({x}, {y}) aliased");
            }
        }
        assert_eq!(mask.count(), 10);
    }

    // Tests out-of-grid pixels are ignored
    // Verified by removing the bounds check in index
    #[test]
    fn test_out_of_bounds_pixels_ignored() {
        let mut mask = VisitedMask::new(2, 2);

        assert!(!mask.visit(Pixel::new(0, 2)));
        assert!(!mask.is_visited(Pixel::new(0, 2)));
        assert!(mask.is_empty());
    }

    // Tests display reports dimensions and count
    // Verified by omitting the visited count
    #[test]
    fn test_display() {
        let mut mask = VisitedMask::new(2, 3);
        mask.visit(Pixel::new(1, 1));
        assert_eq!(mask.to_string(), "VisitedMask(2x3, 1 visited)");
    }
}
