//! Node coordinates from OpenStreetMap PBF files.
//!
//! Every `OSMData` blob of the file is one block. Blobs are decoded on the current rayon pool,
//! so the block callback runs concurrently on all of its threads.

use anyhow::{Context, Result};
use osmpbf::{BlobDecode, BlobReader, PrimitiveBlock};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tilescan_core::{BlockCallback, GeoPoint, PointSource};

/// An OpenStreetMap PBF file, read block by block.
#[derive(Clone, Debug)]
pub struct PbfSource {
	path: PathBuf,
}

impl PbfSource {
	pub fn new(path: impl Into<PathBuf>) -> PbfSource {
		PbfSource { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl PointSource for PbfSource {
	fn name(&self) -> String {
		self.path.display().to_string()
	}

	fn for_each_block(&self, callback: &BlockCallback<'_>) -> Result<()> {
		let reader = BlobReader::from_path(&self.path).with_context(|| format!("failed to open {:?}", self.path))?;

		reader.par_bridge().try_for_each(|blob| -> Result<()> {
			let blob = blob.with_context(|| format!("failed to read blob from {:?}", self.path))?;
			match blob.decode().with_context(|| format!("failed to decode blob from {:?}", self.path))? {
				BlobDecode::OsmData(block) => callback(block_points(&block).as_slice()),
				BlobDecode::OsmHeader(_) => Ok(()),
				BlobDecode::Unknown(kind) => {
					log::debug!("skipping unknown blob type {kind:?}");
					Ok(())
				}
			}
		})
	}
}

/// Coordinates of all plain and dense nodes of `block`.
pub fn block_points(block: &PrimitiveBlock) -> Vec<GeoPoint> {
	let mut points = Vec::new();
	for group in block.groups() {
		points.extend(group.nodes().map(|node| GeoPoint::new(node.lat(), node.lon())));
		points.extend(group.dense_nodes().map(|node| GeoPoint::new(node.lat(), node.lon())));
	}
	points
}
