use super::{BlockCallback, PointSource};
use crate::GeoPoint;
use anyhow::Result;

/// Points held in memory, already split into blocks. Blocks are delivered in order on the
/// calling thread.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
	blocks: Vec<Vec<GeoPoint>>,
}

impl MemorySource {
	pub fn new(blocks: Vec<Vec<GeoPoint>>) -> MemorySource {
		MemorySource { blocks }
	}

	/// Split `points` into blocks of at most `block_size` records.
	pub fn from_points(points: &[GeoPoint], block_size: usize) -> MemorySource {
		MemorySource {
			blocks: points.chunks(block_size.max(1)).map(<[GeoPoint]>::to_vec).collect(),
		}
	}

	pub fn block_count(&self) -> usize {
		self.blocks.len()
	}
}

impl PointSource for MemorySource {
	fn name(&self) -> String {
		format!("memory ({} blocks)", self.blocks.len())
	}

	fn for_each_block(&self, callback: &BlockCallback<'_>) -> Result<()> {
		self.blocks.iter().try_for_each(|block| callback(block.as_slice()))
	}
}
