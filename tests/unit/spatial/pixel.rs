//! Tests for pixel adjacency, connectivity parsing and formatting

#[cfg(test)]
mod tests {
    use holefill::spatial::{Connectivity, Pixel};
    use std::collections::HashSet;

    // Tests interior pixel gets exactly the four edge neighbours
    // Verified by adding a diagonal to the 4-connected table
    #[test]
    fn test_four_connected_interior_neighbours() {
        let neighbours = Pixel::new(1, 1).neighbours(Connectivity::Four, 3, 3);

        assert_eq!(
            neighbours,
            vec![
                Pixel::new(2, 1),
                Pixel::new(0, 1),
                Pixel::new(1, 2),
                Pixel::new(1, 0),
            ]
        );
    }

    // Tests interior pixel gets all eight neighbours with no duplicates
    // Verified by duplicating a diagonal offset
    #[test]
    fn test_eight_connected_interior_neighbours() {
        let neighbours = Pixel::new(1, 1).neighbours(Connectivity::Eight, 3, 3);
        let unique: HashSet<Pixel> = neighbours.iter().copied().collect();

        assert_eq!(neighbours.len(), 8);
        assert_eq!(unique.len(), 8);
        assert!(!unique.contains(&Pixel::new(1, 1)));
        for x in 0..3 {
            for y in 0..3 {
                if (x, y) != (1, 1) {
                    assert!(unique.contains(&Pixel::new(x, y)), "missing ({x}, {y})");
                }
            }
        }
    }

    // Tests corner pixels drop out-of-grid offsets
    // Verified by removing the upper bound check
    #[test]
    fn test_corner_clipping() {
        let top_left = Pixel::new(0, 0).neighbours(Connectivity::Eight, 4, 5);
        assert_eq!(
            top_left,
            vec![Pixel::new(1, 0), Pixel::new(0, 1), Pixel::new(1, 1)]
        );

        let bottom_right = Pixel::new(3, 4).neighbours(Connectivity::Four, 4, 5);
        assert_eq!(bottom_right, vec![Pixel::new(2, 4), Pixel::new(3, 3)]);
    }

    // Tests every neighbour stays inside the grid for every pixel
    // Verified by allowing x == rows
    #[test]
    fn test_neighbours_always_in_bounds() {
        let (rows, cols) = (4, 3);
        for connectivity in [Connectivity::Four, Connectivity::Eight] {
            for x in 0..rows {
                for y in 0..cols {
                    for n in Pixel::new(x, y).neighbours(connectivity, rows, cols) {
                        assert!(n.x < rows && n.y < cols);
                        assert_ne!(n, Pixel::new(x, y));
                    }
                }
            }
        }
    }

    // Tests single-pixel grid has no neighbours
    // Verified by returning the pixel itself
    #[test]
    fn test_single_pixel_grid() {
        assert!(
            Pixel::new(0, 0)
                .neighbours(Connectivity::Eight, 1, 1)
                .is_empty()
        );
    }

    // Tests connectivity parsing accepts only 4 and 8
    // Verified by accepting any digit
    #[test]
    fn test_connectivity_from_str() {
        assert_eq!("4".parse::<Connectivity>().ok(), Some(Connectivity::Four));
        assert_eq!(" 8 ".parse::<Connectivity>().ok(), Some(Connectivity::Eight));
        assert!("6".parse::<Connectivity>().is_err());
        assert!("four".parse::<Connectivity>().is_err());
    }

    // Tests connectivity display round-trips through parsing
    // Verified by printing the variant name
    #[test]
    fn test_connectivity_display() {
        assert_eq!(Connectivity::Four.to_string(), "4");
        assert_eq!(Connectivity::Eight.to_string(), "8");
        assert_eq!(Connectivity::Four.degree(), 4);
        assert_eq!(Connectivity::Eight.offsets().len(), 8);
    }

    // Tests pixel display format
    // Verified by swapping coordinates in output
    #[test]
    fn test_pixel_display() {
        assert_eq!(Pixel::new(2, 7).to_string(), "(2, 7)");
        assert_eq!(Pixel::from((3, 1)), Pixel::new(3, 1));
    }
}
