use super::{BlockWorker, LocalTileSet, TileSet};
use crate::ZoomLevels;
use parking_lot::Mutex;

/// How a [`LocalTileSet`] was folded into the global set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MergeKind {
	/// The local set was empty, nothing changed.
	Empty,
	/// The global set was empty and took over the local set's storage.
	Moved,
	/// The local tiles were inserted one by one.
	Union,
}

/// The run-wide set of non-empty tiles.
///
/// Workers collect tiles into their own [`LocalTileSet`] and hand it over with
/// [`merge`](Self::merge) once per block. The lock is only held for the merge itself.
///
/// # Examples
///
/// ```
/// use tilescan_core::{GeoPoint, GlobalTileSet, ZoomLevels};
///
/// let global = GlobalTileSet::new();
/// let levels = ZoomLevels::new([0, 1]).unwrap();
///
/// let mut worker = global.worker(&levels);
/// worker.add_point(GeoPoint::new(0.0, 0.0));
/// worker.finish();
///
/// assert_eq!(global.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct GlobalTileSet {
	tiles: Mutex<TileSet>,
}

impl GlobalTileSet {
	pub fn new() -> GlobalTileSet {
		GlobalTileSet::default()
	}

	/// Open a unit of work that merges into this set when it finishes or is dropped.
	pub fn worker<'a>(&'a self, levels: &'a ZoomLevels) -> BlockWorker<'a> {
		BlockWorker::new(self, levels)
	}

	/// Fold `local` into the global set.
	///
	/// An empty global set takes over `local` without copying. An empty `local` never replaces
	/// tiles that are already present.
	pub fn merge(&self, local: LocalTileSet) -> MergeKind {
		if local.is_empty() {
			return MergeKind::Empty;
		}

		let mut tiles = self.tiles.lock();
		if tiles.is_empty() {
			*tiles = local.into_tiles();
			MergeKind::Moved
		} else {
			tiles.extend(local.into_tiles());
			MergeKind::Union
		}
	}

	pub fn len(&self) -> usize {
		self.tiles.lock().len()
	}

	pub fn is_empty(&self) -> bool {
		self.tiles.lock().is_empty()
	}

	/// Take the final set once all workers are done.
	pub fn into_tiles(self) -> TileSet {
		self.tiles.into_inner()
	}
}

impl From<TileSet> for GlobalTileSet {
	fn from(tiles: TileSet) -> Self {
		GlobalTileSet {
			tiles: Mutex::new(tiles),
		}
	}
}
