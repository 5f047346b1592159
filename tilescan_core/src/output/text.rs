use crate::TileCoord;
use anyhow::Result;
use std::io::Write;

/// Write one `<x> <y> <zoom>` line per tile.
pub fn write_text(tiles: &[TileCoord], writer: &mut dyn Write) -> Result<()> {
	for coord in tiles {
		writeln!(writer, "{} {} {}", coord.x, coord.y, coord.level)?;
	}
	Ok(())
}
