//! Logger backend setup for the command-line tool

use crate::io::error::{FillError, Result};
use flexi_logger::writers::LogWriter;
use flexi_logger::{DeferredNow, Logger, LoggerHandle, default_format};
use indicatif::MultiProgress;
use std::io::Write;

/// Log specification for the requested verbosity
///
/// `quiet` wins over `verbose`. `RUST_LOG` still overrides the result at
/// start-up.
pub const fn log_spec(quiet: bool, verbose: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, true) => "debug",
        (false, false) => "info",
    }
}

/// Stderr writer that hides live progress bars while a line is printed
///
/// Without it log lines land in the middle of redrawn bars.
pub struct ProgressLogWriter {
    multi_progress: MultiProgress,
}

impl ProgressLogWriter {
    /// Create a writer coordinating with the given bars
    pub const fn new(multi_progress: MultiProgress) -> Self {
        Self { multi_progress }
    }
}

impl LogWriter for ProgressLogWriter {
    fn write(&self, now: &mut DeferredNow, record: &log::Record<'_>) -> std::io::Result<()> {
        let mut line = Vec::new();
        default_format(&mut line, now, record)?;
        line.push(b'\n');

        self.multi_progress
            .suspend(|| std::io::stderr().lock().write_all(&line))
    }

    fn flush(&self) -> std::io::Result<()> {
        std::io::stderr().flush()
    }
}

/// Start the stderr logger
///
/// When `progress` is given, log lines are routed around its bars. The
/// returned handle must be kept alive for the life of the program.
///
/// # Errors
///
/// Returns an error if the specification is invalid or a logger is already
/// installed
pub fn init_logging(
    quiet: bool,
    verbose: bool,
    progress: Option<&MultiProgress>,
) -> Result<LoggerHandle> {
    Logger::try_with_env_or_str(log_spec(quiet, verbose))
        .map(|logger| match progress {
            Some(multi_progress) => {
                logger.log_to_writer(Box::new(ProgressLogWriter::new(multi_progress.clone())))
            }
            None => logger,
        })
        .and_then(Logger::start)
        .map_err(|e| FillError::Logging {
            reason: e.to_string(),
        })
}
