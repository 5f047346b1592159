//! A validated list of zoom levels to scan.
//!
//! # Examples
//!
//! ```
//! use tilescan_core::ZoomLevels;
//!
//! let levels = ZoomLevels::new([12, 3, 12, 0]).unwrap();
//! assert_eq!(levels.iter().collect::<Vec<_>>(), vec![0, 3, 12]);
//!
//! // unparsable and out-of-range values are dropped with an error log
//! let levels = ZoomLevels::from_lossy(&["-1", "5", "23", "five"]).unwrap();
//! assert_eq!(levels.as_slice(), &[5]);
//! ```

use super::MAX_LEVEL;
use anyhow::{Result, ensure};
use itertools::Itertools;
use std::fmt::{self, Display};

/// Sorted, deduplicated, non-empty list of zoom levels in `0..=MAX_LEVEL`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoomLevels(Vec<u8>);

impl ZoomLevels {
	/// Build a list from levels that must all be valid.
	///
	/// # Errors
	/// Returns an error if a level exceeds [`MAX_LEVEL`] or if `levels` is empty.
	pub fn new(levels: impl IntoIterator<Item = u8>) -> Result<ZoomLevels> {
		let levels: Vec<u8> = levels.into_iter().sorted_unstable().dedup().collect();
		for level in &levels {
			ensure!(*level <= MAX_LEVEL, "zoom level ({level}) must be <= {MAX_LEVEL}");
		}
		ensure!(!levels.is_empty(), "at least one zoom level is required");
		Ok(ZoomLevels(levels))
	}

	/// Build a list from raw command line values, skipping invalid ones.
	///
	/// Every value that is not an integer in `0..=MAX_LEVEL` is reported through `log::error!`
	/// and ignored.
	///
	/// # Errors
	/// Returns an error if no valid level remains.
	pub fn from_lossy<S: AsRef<str>>(values: &[S]) -> Result<ZoomLevels> {
		let levels = values.iter().map(AsRef::as_ref).filter_map(|value| {
			match value.trim().parse::<u8>() {
				Ok(level) if level <= MAX_LEVEL => Some(level),
				_ => {
					log::error!("invalid zoom level: {value}");
					None
				}
			}
		});
		let levels: Vec<u8> = levels.collect();
		ensure!(
			!levels.is_empty(),
			"no valid zoom level given, levels must be between 0 and {MAX_LEVEL}"
		);
		ZoomLevels::new(levels)
	}

	pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
		self.0.iter().copied()
	}

	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Always `false`, construction rejects an empty list.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn contains(&self, level: u8) -> bool {
		self.0.binary_search(&level).is_ok()
	}
}

impl Display for ZoomLevels {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0.iter().join(","))
	}
}
