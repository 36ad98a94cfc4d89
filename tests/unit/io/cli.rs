//! Tests for argument parsing, path derivation and batch processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use holefill::algorithm::filler::FillPolicy;
    use holefill::io::cli::{Cli, FileProcessor};
    use holefill::io::configuration::{DEFAULT_EPSILON, DEFAULT_SEED, DEFAULT_Z};
    use holefill::spatial::Connectivity;
    use image::{GrayImage, Luma};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("holefill").chain(args.iter().copied())).unwrap()
    }

    fn write_flat_image(path: &Path, width: u32, height: u32, value: u8) {
        GrayImage::from_pixel(width, height, Luma([value]))
            .save(path)
            .unwrap();
    }

    fn run(args: &[&str]) -> holefill::Result<()> {
        FileProcessor::new(parse(args)).process()
    }

    // Tests defaults are applied when only the target is given
    // Verified by changing the default connectivity to Four
    #[test]
    fn test_parse_defaults() {
        let cli = parse(&["photo.png"]);

        assert_eq!(cli.target, PathBuf::from("photo.png"));
        assert!((cli.epsilon - DEFAULT_EPSILON).abs() < f64::EPSILON);
        assert!((cli.z - DEFAULT_Z).abs() < f64::EPSILON);
        assert_eq!(cli.connectivity, Connectivity::Eight);
        assert_eq!(cli.policy, FillPolicy::Boundary);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
        assert!(!cli.single && !cli.boundary && !cli.random_hole);
    }

    // Tests every option is wired to its field
    // Verified by swapping the short flags of mask and seed
    #[test]
    fn test_parse_all_options() {
        let cli = parse(&[
            "dir",
            "-e",
            "0.5",
            "-z",
            "-2",
            "-c",
            "4",
            "-p",
            "neighbour",
            "-m",
            "holes.png",
            "--pixels",
            "1,1;1,2",
            "-r",
            "-s",
            "7",
            "--single",
            "-b",
            "-n",
            "-q",
            "-v",
        ]);

        assert!((cli.epsilon - 0.5).abs() < f64::EPSILON);
        assert!((cli.z + 2.0).abs() < f64::EPSILON);
        assert_eq!(cli.connectivity, Connectivity::Four);
        assert_eq!(cli.policy, FillPolicy::Neighbour);
        assert_eq!(cli.mask, Some(PathBuf::from("holes.png")));
        assert_eq!(cli.pixels.as_deref(), Some("1,1;1,2"));
        assert_eq!(cli.seed, 7);
        assert!(cli.random_hole && cli.single && cli.boundary && cli.verbose);
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());

        let config = cli.fill_config();
        assert_eq!(config.connectivity, Connectivity::Four);
        assert_eq!(config.policy, FillPolicy::Neighbour);
    }

    // Tests unsupported connectivity and policy values are rejected at parse time
    // Verified by parsing connectivity as a plain integer
    #[test]
    fn test_parse_rejects_bad_values() {
        assert!(Cli::try_parse_from(["holefill", "a.png", "-c", "6"]).is_err());
        assert!(Cli::try_parse_from(["holefill", "a.png", "-p", "nearest"]).is_err());
        assert!(Cli::try_parse_from(["holefill"]).is_err());
    }

    // Tests progress bars are only exposed for log routing when shown
    // Verified by creating the progress manager in quiet mode
    #[test]
    fn test_multi_progress_follows_quiet() {
        assert!(FileProcessor::new(parse(&["a.png"])).multi_progress().is_some());
        assert!(
            FileProcessor::new(parse(&["a.png", "-q"]))
                .multi_progress()
                .is_none()
        );
    }

    // Tests derived file names sit next to the input and are always PNG
    // Verified by keeping the input extension
    #[test]
    fn test_path_helpers() {
        let input = Path::new("/data/scan.jpg");

        assert_eq!(
            FileProcessor::get_output_path(input),
            PathBuf::from("/data/scan_filled.png")
        );
        assert_eq!(
            FileProcessor::get_boundary_path(input),
            PathBuf::from("/data/scan_boundary.png")
        );
        assert_eq!(
            FileProcessor::get_mask_path(Path::new("scan.png")),
            PathBuf::from("scan_mask.png")
        );
    }

    // Tests missing or unsupported targets are errors and empty directories are not
    // Verified by returning Ok for unknown targets
    #[test]
    fn test_target_validation() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();

        let missing = dir.join("nothing.png");
        assert!(run(&[missing.to_str().unwrap(), "-q"]).is_err());

        let text = dir.join("notes.txt");
        std::fs::write(&text, "not an image").unwrap();
        assert!(run(&[text.to_str().unwrap(), "-q"]).is_err());

        let empty = dir.join("empty");
        std::fs::create_dir(&empty).unwrap();
        assert!(run(&[empty.to_str().unwrap(), "-q"]).is_ok());
    }

    // Tests invalid fill parameters abort before any file is touched
    // Verified by validating the configuration after loading files
    #[test]
    fn test_invalid_epsilon_fails_processing() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("flat.png");
        write_flat_image(&input, 4, 4, 100);

        assert!(run(&[input.to_str().unwrap(), "-q", "-e", "0", "--pixels", "1,1"]).is_err());
        assert!(!FileProcessor::get_output_path(&input).exists());
    }

    // Tests a pixel list hole is filled and both outputs are written
    // Verified by exporting the overlay without the boundary flag check
    #[test]
    fn test_process_single_file_with_pixel_list() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("flat.png");
        write_flat_image(&input, 5, 5, 128);

        run(&[input.to_str().unwrap(), "-q", "-b", "--pixels", "2,2;2,3"]).unwrap();

        let output = FileProcessor::get_output_path(&input);
        let filled = image::open(&output).unwrap().to_luma8();
        // (row 2, col 3) sits at image x = 3, y = 2
        assert_eq!(filled.get_pixel(3, 2).0, [128]);
        assert_eq!(filled.get_pixel(2, 2).0, [128]);
        assert!(FileProcessor::get_boundary_path(&input).exists());
    }

    // Tests --single fills the first hole only, with progress reporting enabled
    // Verified by filling every hole in single mode
    #[test]
    fn test_process_single_hole_only() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("two_holes.png");
        write_flat_image(&input, 6, 6, 200);

        run(&[input.to_str().unwrap(), "--single", "--pixels", "1,1;4,4"]).unwrap();

        let filled = image::open(FileProcessor::get_output_path(&input))
            .unwrap()
            .to_luma8();
        assert_eq!(filled.get_pixel(1, 1).0, [200]);
        // Second hole is exported with the sentinel rendered black
        assert_eq!(filled.get_pixel(4, 4).0, [0]);
    }

    // Tests sibling masks are picked up and never processed as inputs
    // Verified by treating *_mask.png files as inputs
    #[test]
    fn test_process_directory_with_sibling_mask() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        let input = dir.join("scan.png");
        write_flat_image(&input, 6, 4, 200);

        let mut mask = GrayImage::new(6, 4);
        mask.put_pixel(2, 1, Luma([255]));
        mask.put_pixel(3, 1, Luma([255]));
        mask.save(dir.join("scan_mask.png")).unwrap();

        run(&[dir.to_str().unwrap(), "-q", "-c", "4"]).unwrap();

        let filled = image::open(FileProcessor::get_output_path(&input))
            .unwrap()
            .to_luma8();
        assert_eq!(filled.get_pixel(2, 1).0, [200]);
        assert!(!dir.join("scan_mask_filled.png").exists());
    }

    // Tests existing outputs are skipped unless --no-skip is given
    // Verified by ignoring skip_existing
    #[test]
    fn test_skip_existing_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("flat.png");
        write_flat_image(&input, 4, 4, 50);
        let output = FileProcessor::get_output_path(&input);
        write_flat_image(&output, 1, 1, 0);

        run(&[input.to_str().unwrap(), "-q", "-r"]).unwrap();
        assert_eq!(image::open(&output).unwrap().width(), 1);

        run(&[input.to_str().unwrap(), "-q", "-r", "-n"]).unwrap();
        assert_eq!(image::open(&output).unwrap().width(), 4);
    }
}
