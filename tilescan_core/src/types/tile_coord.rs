//! Tile coordinates in a Web Mercator pyramid and their packed 64-bit form
//!
//! This module provides the [`TileCoord`] type. It includes methods for:
//! - Creating and validating tile coordinates
//! - Projecting geographic coordinates onto the tile grid
//! - Packing a coordinate into a single `u64` and unpacking it again
//!
//! The packed layout is `(level << 58) | (y << 29) | x`: the zoom level occupies bits 63–58,
//! `y` bits 57–29 and `x` bits 28–0. Every tile up to [`MAX_LEVEL`] fits without loss.
//!
//! # Examples
//!
//! ```
//! use tilescan_core::TileCoord;
//!
//! let coord = TileCoord::new(10, 511, 300).unwrap();
//! let packed = coord.packed();
//! assert_eq!(packed, (10 << 58) | (300 << 29) | 511);
//! assert_eq!(TileCoord::from_packed(packed), coord);
//!
//! // Null Island lies on the corner shared by all four tiles of level 1
//! let coord = TileCoord::from_geo(1, 0.0, 0.0);
//! assert_eq!((coord.x, coord.y), (1, 1));
//! ```

use anyhow::{Result, ensure};
use std::{
	cmp::Ordering,
	f64::consts::PI,
	fmt::{self, Debug},
	hash::{Hash, Hasher},
};

/// Highest zoom level whose coordinates fit into the packed form.
pub const MAX_LEVEL: u8 = 22;

const FIELD_BITS: u32 = 29;
const FIELD_MASK: u64 = (1 << FIELD_BITS) - 1;
const LEVEL_SHIFT: u32 = 2 * FIELD_BITS;
const LEVEL_MASK: u64 = (1 << (64 - LEVEL_SHIFT)) - 1;

/// A tile in a Web Mercator tile pyramid, with zoom level, x, and y indices.
///
/// Equality, hashing and ordering are all defined on the [packed](TileCoord::packed) value, so
/// ordering is by level, then `y`, then `x`.
#[derive(Clone, Copy)]
pub struct TileCoord {
	/// The zoom level of the tile.
	pub level: u8,
	/// The x index of the tile.
	pub x: u32,
	/// The y index of the tile.
	pub y: u32,
}

impl TileCoord {
	/// Create a new `TileCoord` at the given zoom `level` and tile indices `x`, `y`.
	///
	/// # Errors
	/// Returns an error if `level` > [`MAX_LEVEL`] or if `x` or `y` lie outside the grid.
	pub fn new(level: u8, x: u32, y: u32) -> Result<TileCoord> {
		ensure!(level <= MAX_LEVEL, "level ({level}) must be <= {MAX_LEVEL}");
		let max = 1u32 << level;
		ensure!(x < max, "x ({x}) out of bounds for level {level}");
		ensure!(y < max, "y ({y}) out of bounds for level {level}");
		Ok(TileCoord { level, x, y })
	}

	/// Project a geographic position (in degrees) onto the tile grid of `level`.
	///
	/// Uses the slippy-map formula
	/// `x = n * (lon + 180) / 360` and `y = n * (1 - ln(tan(lat) + sec(lat)) / π) / 2`
	/// with `n = 2^level`, truncating both to integers.
	///
	/// Positions outside the projectable range are not rejected. Anything the formula maps
	/// outside the grid (longitude 180°, latitudes beyond ±85.0511°, the poles, `NaN`) is
	/// clamped onto the nearest edge row or column, so the result is always a valid tile.
	///
	/// `level` must not exceed [`MAX_LEVEL`].
	///
	/// # Examples
	///
	/// ```
	/// use tilescan_core::TileCoord;
	///
	/// // Berlin at zoom 10
	/// let coord = TileCoord::from_geo(10, 52.520008, 13.404954);
	/// assert_eq!((coord.level, coord.x, coord.y), (10, 550, 335));
	/// ```
	#[must_use]
	pub fn from_geo(level: u8, lat: f64, lon: f64) -> TileCoord {
		debug_assert!(level <= MAX_LEVEL, "level ({level}) must be <= {MAX_LEVEL}");

		let n = f64::from(1u32 << level);
		let lat_rad = lat.to_radians();
		let x = n * (lon + 180.0) / 360.0;
		let y = n * (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0;

		TileCoord {
			level,
			x: grid_index(x, n),
			y: grid_index(y, n),
		}
	}

	/// Pack this coordinate into `(level << 58) | (y << 29) | x`.
	///
	/// Fields wider than their slot are masked.
	#[must_use]
	pub fn packed(&self) -> u64 {
		((u64::from(self.level) & LEVEL_MASK) << LEVEL_SHIFT)
			| ((u64::from(self.y) & FIELD_MASK) << FIELD_BITS)
			| (u64::from(self.x) & FIELD_MASK)
	}

	/// Unpack a value produced by [`packed`](Self::packed).
	///
	/// No range validation is done; use [`new`](Self::new) on the fields if the value is untrusted.
	#[must_use]
	pub fn from_packed(value: u64) -> TileCoord {
		TileCoord {
			level: (value >> LEVEL_SHIFT) as u8,
			x: (value & FIELD_MASK) as u32,
			y: ((value >> FIELD_BITS) & FIELD_MASK) as u32,
		}
	}

	/// Get the maximum valid x or y coordinate for this tile's zoom level.
	#[must_use]
	pub fn max_value(&self) -> u32 {
		(1u32 << self.level) - 1
	}
}

/// Truncate a projected grid position into `[0, size - 1]`.
///
/// `f64::min` returns the other operand for `NaN`, which puts `NaN` on the last cell.
fn grid_index(value: f64, size: f64) -> u32 {
	value.min(size - 1.0).max(0.0) as u32
}

impl PartialEq for TileCoord {
	fn eq(&self, other: &Self) -> bool {
		self.packed() == other.packed()
	}
}

impl Eq for TileCoord {}

impl Hash for TileCoord {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.packed().hash(state);
	}
}

impl Ord for TileCoord {
	fn cmp(&self, other: &Self) -> Ordering {
		self.packed().cmp(&other.packed())
	}
}

impl PartialOrd for TileCoord {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

/// Custom `Debug` format as `TileCoord(z, [x, y])` for readability.
impl Debug for TileCoord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TileCoord({}, [{}, {}])", self.level, self.x, self.y)
	}
}

impl From<TileCoord> for u64 {
	fn from(coord: TileCoord) -> Self {
		coord.packed()
	}
}
