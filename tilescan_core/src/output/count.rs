use crate::TileCoord;
use anyhow::Result;
use std::{collections::BTreeMap, io::Write};

/// Number of distinct tiles per zoom level.
pub fn count_by_level<'a>(tiles: impl IntoIterator<Item = &'a TileCoord>) -> BTreeMap<u8, u64> {
	tiles.into_iter().fold(BTreeMap::new(), |mut counts, coord| {
		*counts.entry(coord.level).or_default() += 1;
		counts
	})
}

/// Write one `<zoom>: <count>` line per level, in ascending level order.
pub fn write_counts(counts: &BTreeMap<u8, u64>, writer: &mut dyn Write) -> Result<()> {
	for (level, count) in counts {
		writeln!(writer, "{level}: {count}")?;
	}
	Ok(())
}
