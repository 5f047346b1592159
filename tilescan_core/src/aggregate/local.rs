use crate::{GeoPoint, TileCoord, ZoomLevels};
use std::collections::{HashSet, hash_set};

/// Deduplicated set of tiles.
pub type TileSet = HashSet<TileCoord>;

/// Tiles found by one unit of work, before they are merged into a [`GlobalTileSet`](super::GlobalTileSet).
///
/// A `LocalTileSet` is owned by a single worker and never shared, so filling it needs no
/// synchronisation.
#[derive(Debug, Default)]
pub struct LocalTileSet {
	tiles: TileSet,
}

impl LocalTileSet {
	pub fn new() -> LocalTileSet {
		LocalTileSet::default()
	}

	/// Insert a single tile. Returns `false` if it was already present.
	pub fn insert(&mut self, coord: TileCoord) -> bool {
		self.tiles.insert(coord)
	}

	/// Insert the tile containing `point` at every level in `levels`.
	pub fn add_point(&mut self, levels: &ZoomLevels, point: GeoPoint) {
		for level in levels.iter() {
			self.tiles.insert(TileCoord::from_geo(level, point.lat, point.lon));
		}
	}

	/// Insert the tiles of all `points` at every level in `levels`.
	pub fn add_points<I>(&mut self, levels: &ZoomLevels, points: I)
	where
		I: IntoIterator<Item = GeoPoint>,
		I::IntoIter: Clone,
	{
		let points = points.into_iter();
		for level in levels.iter() {
			self
				.tiles
				.extend(points.clone().map(|point| TileCoord::from_geo(level, point.lat, point.lon)));
		}
	}

	pub fn len(&self) -> usize {
		self.tiles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tiles.is_empty()
	}

	pub fn contains(&self, coord: &TileCoord) -> bool {
		self.tiles.contains(coord)
	}

	pub fn iter(&self) -> hash_set::Iter<'_, TileCoord> {
		self.tiles.iter()
	}

	pub fn into_tiles(self) -> TileSet {
		self.tiles
	}
}

impl FromIterator<TileCoord> for LocalTileSet {
	fn from_iter<T: IntoIterator<Item = TileCoord>>(iter: T) -> Self {
		LocalTileSet {
			tiles: iter.into_iter().collect(),
		}
	}
}

impl Extend<TileCoord> for LocalTileSet {
	fn extend<T: IntoIterator<Item = TileCoord>>(&mut self, iter: T) {
		self.tiles.extend(iter);
	}
}
