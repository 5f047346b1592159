//! Rendering the final tile set.
//!
//! Three mutually exclusive encodings are supported, see [`OutputMode`]. Tiles are always
//! written in ascending packed order (level, then `y`, then `x`), so the output of a run is
//! reproducible.
//!
//! # Examples
//!
//! ```
//! use tilescan_core::{LocalTileSet, OutputMode, TileCoord, output::write_tiles};
//!
//! let tiles: LocalTileSet = [(5, 0, 0), (5, 0, 1), (8, 3, 3)]
//! 	.into_iter()
//! 	.map(|(z, x, y)| TileCoord::new(z, x, y).unwrap())
//! 	.collect();
//! let tiles = tiles.into_tiles();
//!
//! let mut text = Vec::new();
//! write_tiles(&tiles, OutputMode::Text, &mut text).unwrap();
//! assert_eq!(String::from_utf8(text).unwrap(), "0 0 5\n0 1 5\n3 3 8\n");
//!
//! let mut counts = Vec::new();
//! write_tiles(&tiles, OutputMode::Count, &mut counts).unwrap();
//! assert_eq!(String::from_utf8(counts).unwrap(), "5: 2\n8: 1\n");
//!
//! let mut binary = Vec::new();
//! write_tiles(&tiles, OutputMode::Binary, &mut binary).unwrap();
//! assert_eq!(binary.len(), 3 * 8);
//! ```

mod binary;
mod count;
mod text;

pub use binary::*;
pub use count::*;
pub use text::*;

use crate::{TileCoord, aggregate::TileSet};
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::ValueEnum;
use itertools::Itertools;
use std::{fmt::Display, io::Write};

/// How the final tile set is written.
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
	/// `<x> <y> <zoom>` per line
	#[default]
	Text,
	/// 8 bytes per tile, little-endian `(zoom << 58) | (y << 29) | x`
	Binary,
	/// `<zoom>: <count>` per zoom level
	Count,
}

impl OutputMode {
	pub fn as_str(&self) -> &str {
		match self {
			OutputMode::Text => "text",
			OutputMode::Binary => "binary",
			OutputMode::Count => "count",
		}
	}
}

impl Display for OutputMode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Tiles of `tiles` in ascending packed order.
pub fn sorted_tiles(tiles: &TileSet) -> Vec<TileCoord> {
	tiles.iter().copied().sorted_unstable().collect()
}

/// Write `tiles` to `writer` using the encoding selected by `mode`.
pub fn write_tiles(tiles: &TileSet, mode: OutputMode, writer: &mut dyn Write) -> Result<()> {
	log::debug!("writing {} tiles as {mode}", tiles.len());
	match mode {
		OutputMode::Text => write_text(&sorted_tiles(tiles), writer),
		OutputMode::Binary => write_binary(&sorted_tiles(tiles), writer),
		OutputMode::Count => write_counts(&count_by_level(tiles.iter()), writer),
	}
}
