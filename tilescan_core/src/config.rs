//! Run configuration, validated before any input is touched.

use crate::{OutputMode, ZoomLevels};
use anyhow::{Result, ensure};
use std::{num::NonZeroUsize, path::PathBuf};

/// Everything a scan run needs to know.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanConfig {
	/// Input files, scanned one after another.
	pub files: Vec<PathBuf>,
	/// Zoom levels to compute tiles for.
	pub zoom_levels: ZoomLevels,
	/// Size of the worker pool.
	pub threads: NonZeroUsize,
	/// Output encoding.
	pub output_mode: OutputMode,
	/// Destination file; standard output if `None`.
	pub output_path: Option<PathBuf>,
}

impl ScanConfig {
	/// Create a single threaded configuration writing text to standard output.
	pub fn new(files: Vec<PathBuf>, zoom_levels: ZoomLevels) -> ScanConfig {
		ScanConfig {
			files,
			zoom_levels,
			threads: NonZeroUsize::MIN,
			output_mode: OutputMode::default(),
			output_path: None,
		}
	}

	#[must_use]
	pub fn with_threads(mut self, threads: NonZeroUsize) -> ScanConfig {
		self.threads = threads;
		self
	}

	#[must_use]
	pub fn with_output_mode(mut self, output_mode: OutputMode) -> ScanConfig {
		self.output_mode = output_mode;
		self
	}

	#[must_use]
	pub fn with_output_path(mut self, output_path: Option<PathBuf>) -> ScanConfig {
		self.output_path = output_path;
		self
	}

	/// Check the parts that cannot be enforced by the types.
	pub fn validate(&self) -> Result<()> {
		ensure!(!self.files.is_empty(), "at least one input file is required");
		Ok(())
	}
}
