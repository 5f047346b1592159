use super::{GlobalTileSet, LocalTileSet, MergeKind};
use crate::{GeoPoint, ZoomLevels};

/// One unit of work: a [`LocalTileSet`] bound to the [`GlobalTileSet`] it merges into.
///
/// The local tiles are merged exactly once, either by [`finish`](Self::finish) or, on any other
/// exit path (early return, `?`, unwinding), when the worker is dropped.
///
/// ```
/// use tilescan_core::{GeoPoint, GlobalTileSet, ZoomLevels};
///
/// let global = GlobalTileSet::new();
/// let levels = ZoomLevels::new([3]).unwrap();
///
/// {
/// 	let mut worker = global.worker(&levels);
/// 	worker.add_point(GeoPoint::new(48.85, 2.35));
/// } // dropped without `finish`, still merged
///
/// assert_eq!(global.len(), 1);
/// ```
#[derive(Debug)]
pub struct BlockWorker<'a> {
	global: &'a GlobalTileSet,
	levels: &'a ZoomLevels,
	local: LocalTileSet,
	merged: bool,
}

impl<'a> BlockWorker<'a> {
	pub(super) fn new(global: &'a GlobalTileSet, levels: &'a ZoomLevels) -> BlockWorker<'a> {
		BlockWorker {
			global,
			levels,
			local: LocalTileSet::new(),
			merged: false,
		}
	}

	pub fn add_point(&mut self, point: GeoPoint) {
		self.local.add_point(self.levels, point);
	}

	pub fn add_points<I>(&mut self, points: I)
	where
		I: IntoIterator<Item = GeoPoint>,
		I::IntoIter: Clone,
	{
		self.local.add_points(self.levels, points);
	}

	/// Number of distinct tiles collected so far.
	pub fn len(&self) -> usize {
		self.local.len()
	}

	pub fn is_empty(&self) -> bool {
		self.local.is_empty()
	}

	/// Merge the collected tiles into the global set and end the unit of work.
	pub fn finish(mut self) -> MergeKind {
		self.merge_once()
	}

	fn merge_once(&mut self) -> MergeKind {
		debug_assert!(!self.merged, "block worker merged twice");
		self.merged = true;
		let local = std::mem::take(&mut self.local);
		log::trace!("merging {} tiles", local.len());
		self.global.merge(local)
	}
}

impl Drop for BlockWorker<'_> {
	fn drop(&mut self) {
		if !self.merged {
			self.merge_once();
		}
	}
}
