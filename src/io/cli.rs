//! Command-line interface for batch hole filling of grayscale images

use crate::algorithm::executor::{FillConfig, FillReport, HoleFillExecutor};
use crate::algorithm::filler::FillPolicy;
use crate::io::configuration::{
    BOUNDARY_SUFFIX, DEFAULT_CONNECTIVITY, DEFAULT_EPSILON, DEFAULT_SEED, DEFAULT_Z, MASK_SUFFIX,
    OUTPUT_SUFFIX, SUPPORTED_EXTENSIONS,
};
use crate::io::error::{Result, path_error};
use crate::io::image::{export_grid_as_png, load_grayscale};
use crate::io::mask::HoleMask;
use crate::io::progress::ProgressManager;
use crate::io::visualization::export_boundary_overlay;
use crate::spatial::{Connectivity, ImageGrid};
use clap::Parser;
use indicatif::MultiProgress;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "holefill")]
#[command(
    author,
    version,
    about = "Fill missing-pixel holes in grayscale images by inverse-distance weighting"
)]
/// Command-line arguments for the hole filling tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Regularizer added to distance^z (must be > 0)
    #[arg(short, long, default_value_t = DEFAULT_EPSILON)]
    pub epsilon: f64,

    /// Distance exponent; larger values weight nearby pixels more sharply
    #[arg(short, long, default_value_t = DEFAULT_Z, allow_negative_numbers = true)]
    pub z: f64,

    /// Pixel connectivity, 4 or 8
    #[arg(short, long, default_value_t = DEFAULT_CONNECTIVITY, value_parser = parse_connectivity)]
    pub connectivity: Connectivity,

    /// Which known pixels contribute to a filled value
    #[arg(short, long, value_enum, default_value_t = FillPolicy::Boundary)]
    pub policy: FillPolicy,

    /// Mask image whose bright pixels mark the hole (defaults to <input>_mask.png if present)
    #[arg(short, long, value_name = "PATH")]
    pub mask: Option<PathBuf>,

    /// Explicit hole pixels as "row,col;row,col"
    #[arg(long, value_name = "PIXELS")]
    pub pixels: Option<String>,

    /// Cut a random rectangular hole when no mask is available
    #[arg(short, long)]
    pub random_hole: bool,

    /// Random seed for reproducible random holes
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Fill only the first hole found
    #[arg(long)]
    pub single: bool,

    /// Also export an overlay marking hole boundaries
    #[arg(short, long)]
    pub boundary: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log every discovered hole
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Fill parameters selected on the command line
    pub const fn fill_config(&self) -> FillConfig {
        FillConfig {
            connectivity: self.connectivity,
            epsilon: self.epsilon,
            z: self.z,
            policy: self.policy,
        }
    }
}

fn parse_connectivity(value: &str) -> std::result::Result<Connectivity, String> {
    value.parse().map_err(|e: crate::FillError| e.to_string())
}

/// Orchestrates batch processing of image files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Progress bars that log output must be routed around, if shown
    pub fn multi_progress(&self) -> Option<&MultiProgress> {
        self.progress_manager
            .as_ref()
            .map(ProgressManager::multi_progress)
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The fill parameters are invalid
    /// - The target is neither a supported image nor a directory
    /// - Any file fails to load, fill or export
    pub fn process(&mut self) -> Result<()> {
        let executor = HoleFillExecutor::new(self.cli.fill_config())?;
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(&executor, file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_supported_image(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(path_error("Target file must be a supported image"))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if is_supported_image(&path)
                    && !is_derived_file(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(path_error("Target must be an image file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            log::info!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(
        &mut self,
        executor: &HoleFillExecutor,
        input_path: &Path,
        index: usize,
    ) -> Result<()> {
        let start_time = Instant::now();
        let output_path = Self::get_output_path(input_path);

        let mut grid = load_grayscale(input_path)?;

        match self.hole_mask(input_path, &grid)? {
            Some(mask) => mask.apply(&mut grid)?,
            None => log::warn!(
                "No hole source for {} (use --mask, --pixels or --random-hole)",
                input_path.display()
            ),
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, grid.missing_count());
        }

        let report = self.fill(executor, &mut grid, index)?;
        if report.hole_count() == 0 {
            log::info!("No missing pixel in {}", input_path.display());
        }

        export_grid_as_png(&grid, &output_path)?;

        if self.cli.boundary {
            export_boundary_overlay(
                &grid,
                report.iter_holes(),
                Self::get_boundary_path(input_path),
            )?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        log::info!(
            "Filled {} holes ({} pixels) in {} -> {} [{:.2?}]",
            report.hole_count(),
            report.pixels_filled(),
            input_path.display(),
            output_path.display(),
            start_time.elapsed()
        );

        Ok(())
    }

    fn fill(
        &mut self,
        executor: &HoleFillExecutor,
        grid: &mut ImageGrid,
        index: usize,
    ) -> Result<FillReport> {
        if self.cli.single {
            let mut report = FillReport::default();
            if let Some(filled) = executor.fill_next_hole(grid)? {
                if let Some(ref mut pm) = self.progress_manager {
                    pm.update_filled(index, filled.pixels_written);
                }
                report.holes.push(filled);
            }
            return Ok(report);
        }

        let mut filled_total = 0;
        executor.fill_all_holes(grid, |_, filled| {
            filled_total += filled.pixels_written;
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_filled(index, filled_total);
            }
        })
    }

    // Explicit pixels win over a mask, which wins over a random rectangle
    fn hole_mask(&self, input_path: &Path, grid: &ImageGrid) -> Result<Option<HoleMask>> {
        let (rows, cols) = (grid.rows(), grid.cols());

        if let Some(list) = &self.cli.pixels {
            return HoleMask::from_pixel_list(list).map(Some);
        }
        if let Some(mask_path) = &self.cli.mask {
            return HoleMask::from_png(mask_path, rows, cols).map(Some);
        }

        let sibling = Self::get_mask_path(input_path);
        if sibling.exists() {
            return HoleMask::from_png(&sibling, rows, cols).map(Some);
        }
        if self.cli.random_hole {
            return HoleMask::random_rectangle(rows, cols, self.cli.seed).map(Some);
        }

        Ok(None)
    }

    /// Path of the filled image written for an input
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        sibling_path(input_path, OUTPUT_SUFFIX)
    }

    /// Path of the boundary overlay written for an input
    pub fn get_boundary_path(input_path: &Path) -> PathBuf {
        sibling_path(input_path, BOUNDARY_SUFFIX)
    }

    /// Path of the mask image picked up for an input
    pub fn get_mask_path(input_path: &Path) -> PathBuf {
        sibling_path(input_path, MASK_SUFFIX)
    }
}

fn sibling_path(input_path: &Path, suffix: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let name = format!("{}{suffix}.png", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}

fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

// Outputs and masks sitting next to their inputs are not inputs themselves
fn is_derived_file(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| {
            [OUTPUT_SUFFIX, BOUNDARY_SUFFIX, MASK_SUFFIX]
                .iter()
                .any(|suffix| stem.ends_with(suffix))
        })
}
