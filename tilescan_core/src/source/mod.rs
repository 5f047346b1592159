//! Input sources of geographic points and the block scan that feeds them into a [`GlobalTileSet`].
//!
//! A [`PointSource`] hands out its records in blocks. It may invoke the block callback from
//! several threads at once; [`scan_source`] gives every block its own [`BlockWorker`](crate::BlockWorker).

mod memory;
pub use memory::*;

use crate::{GeoPoint, GlobalTileSet, ZoomLevels};
use anyhow::Result;
use std::sync::atomic::{AtomicU64, Ordering};

/// Callback invoked once per block of records.
pub type BlockCallback<'a> = dyn Fn(&[GeoPoint]) -> Result<()> + Sync + 'a;

/// A source of geographic points, organised into blocks.
pub trait PointSource: Sync {
	/// Human readable name used in log messages.
	fn name(&self) -> String;

	/// Call `callback` once for every block of the source.
	///
	/// Implementations may call it concurrently and in any order. The first error stops the scan
	/// and is returned.
	fn for_each_block(&self, callback: &BlockCallback<'_>) -> Result<()>;
}

/// Counters collected while scanning one source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
	pub blocks: u64,
	pub points: u64,
}

/// Scan every block of `source` at every level of `levels` into `global`.
pub fn scan_source(source: &dyn PointSource, global: &GlobalTileSet, levels: &ZoomLevels) -> Result<ScanStats> {
	let blocks = AtomicU64::new(0);
	let points = AtomicU64::new(0);

	source.for_each_block(&|block: &[GeoPoint]| -> Result<()> {
		let mut worker = global.worker(levels);
		worker.add_points(block.iter().copied());
		let kind = worker.finish();
		log::trace!("block of {} points merged ({kind:?})", block.len());

		blocks.fetch_add(1, Ordering::Relaxed);
		points.fetch_add(block.len() as u64, Ordering::Relaxed);
		Ok(())
	})?;

	Ok(ScanStats {
		blocks: blocks.into_inner(),
		points: points.into_inner(),
	})
}
