//! # tilescan core
//!
//! Finds the map tiles that contain at least one point of a large point data set.
//!
//! - [`TileCoord`] projects latitude/longitude onto the slippy-map tile grid and packs a tile
//!   into a single `u64`.
//! - [`BlockWorker`] and [`LocalTileSet`] collect the tiles of one block of points without
//!   any locking.
//! - [`GlobalTileSet`] merges the per-block sets into the run-wide result.
//! - [`output`] writes the result as text, binary or per-level counts.
//!
//! ## Usage Example
//!
//! ```rust
//! use tilescan_core::{GeoPoint, GlobalTileSet, MemorySource, OutputMode, ZoomLevels, output, scan_source};
//!
//! let points = [GeoPoint::new(52.52, 13.40), GeoPoint::new(48.85, 2.35), GeoPoint::new(0.0, 0.0)];
//! let source = MemorySource::from_points(&points, 2);
//! let levels = ZoomLevels::new([0, 1]).unwrap();
//!
//! let global = GlobalTileSet::new();
//! scan_source(&source, &global, &levels).unwrap();
//!
//! let mut counts = Vec::new();
//! output::write_tiles(&global.into_tiles(), OutputMode::Count, &mut counts).unwrap();
//! assert_eq!(String::from_utf8(counts).unwrap(), "0: 1\n1: 2\n");
//! ```

pub mod aggregate;
pub mod config;
pub mod output;
pub mod source;
pub mod types;

pub use aggregate::*;
pub use config::ScanConfig;
pub use output::OutputMode;
pub use source::{BlockCallback, MemorySource, PointSource, ScanStats, scan_source};
pub use types::*;
