#![allow(unused)]

use assert_cmd::{Command, cargo};
use byteorder::{BigEndian, WriteBytesExt};
use std::{
	fs,
	path::{Path, PathBuf},
};
use tempfile::{TempDir, tempdir};

/// Berlin, Null Island, Sydney, Paris and New York as `(lat, lon)`.
pub const CITIES: [(f64, f64); 5] = [(52.52, 13.40), (0.0, 0.0), (-33.86, 151.2), (48.85, 2.35), (40.71, -74.01)];

/// Helper to create a Command for the tilescan binary.
pub fn tilescan_cmd() -> Command {
	Command::new(cargo::cargo_bin!())
}

/// Helper to get a temp output file path.
pub fn get_temp_output(filename: &str) -> (TempDir, PathBuf) {
	let dir = tempdir().expect("failed to create temp dir");
	let path = dir.path().join(filename);
	(dir, path)
}

/// Minimal OpenStreetMap PBF writer for test fixtures.
///
/// Writes one `OSMHeader` blob followed by uncompressed `OSMData` blobs. Each data blob holds one
/// primitive group with either plain or dense nodes.
#[derive(Default)]
pub struct PbfBuilder {
	blocks: Vec<(Vec<(f64, f64)>, bool)>,
}

impl PbfBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a block of plain `Node` messages.
	pub fn nodes(mut self, points: &[(f64, f64)]) -> Self {
		self.blocks.push((points.to_vec(), false));
		self
	}

	/// Add a block with a single `DenseNodes` message.
	pub fn dense_nodes(mut self, points: &[(f64, f64)]) -> Self {
		self.blocks.push((points.to_vec(), true));
		self
	}

	pub fn to_bytes(&self) -> Vec<u8> {
		let mut header_block = Vec::new();
		bytes_field(&mut header_block, 4, b"OsmSchema-V0.6");
		bytes_field(&mut header_block, 4, b"DenseNodes");

		let mut file = Vec::new();
		write_blob(&mut file, "OSMHeader", &header_block);

		let mut next_id = 1;
		for (points, dense) in &self.blocks {
			let group = if *dense {
				dense_group(points, &mut next_id)
			} else {
				node_group(points, &mut next_id)
			};

			let mut string_table = Vec::new();
			bytes_field(&mut string_table, 1, b"");

			let mut block = Vec::new();
			bytes_field(&mut block, 1, &string_table);
			bytes_field(&mut block, 2, &group);
			varint_field(&mut block, 17, 100);

			write_blob(&mut file, "OSMData", &block);
		}
		file
	}

	pub fn write(&self, path: &Path) {
		fs::write(path, self.to_bytes()).expect("failed to write pbf fixture");
	}
}

fn node_group(points: &[(f64, f64)], next_id: &mut i64) -> Vec<u8> {
	let mut group = Vec::new();
	for &(lat, lon) in points {
		let mut node = Vec::new();
		varint_field(&mut node, 1, zigzag(*next_id));
		varint_field(&mut node, 8, zigzag(raw_degrees(lat)));
		varint_field(&mut node, 9, zigzag(raw_degrees(lon)));
		bytes_field(&mut group, 1, &node);
		*next_id += 1;
	}
	group
}

fn dense_group(points: &[(f64, f64)], next_id: &mut i64) -> Vec<u8> {
	let mut ids = Vec::new();
	let mut lats = Vec::new();
	let mut lons = Vec::new();
	let (mut last_id, mut last_lat, mut last_lon) = (0, 0, 0);
	for &(lat, lon) in points {
		let (lat, lon) = (raw_degrees(lat), raw_degrees(lon));
		ids.push(zigzag(*next_id - last_id));
		lats.push(zigzag(lat - last_lat));
		lons.push(zigzag(lon - last_lon));
		(last_id, last_lat, last_lon) = (*next_id, lat, lon);
		*next_id += 1;
	}

	let mut dense = Vec::new();
	packed_field(&mut dense, 1, &ids);
	packed_field(&mut dense, 8, &lats);
	packed_field(&mut dense, 9, &lons);
	// no tags: one terminating zero per node
	packed_field(&mut dense, 10, &vec![0; points.len()]);

	let mut group = Vec::new();
	bytes_field(&mut group, 2, &dense);
	group
}

fn write_blob(file: &mut Vec<u8>, kind: &str, data: &[u8]) {
	let mut blob = Vec::new();
	bytes_field(&mut blob, 1, data);
	varint_field(&mut blob, 2, data.len() as u64);

	let mut header = Vec::new();
	bytes_field(&mut header, 1, kind.as_bytes());
	varint_field(&mut header, 3, blob.len() as u64);

	file.write_u32::<BigEndian>(header.len() as u32).expect("failed to write blob header length");
	file.extend_from_slice(&header);
	file.extend_from_slice(&blob);
}

/// Degrees in units of 100 nanodegrees, the PBF default granularity.
fn raw_degrees(value: f64) -> i64 {
	(value * 1e7).round() as i64
}

fn zigzag(value: i64) -> u64 {
	((value << 1) ^ (value >> 63)) as u64
}

fn varint(buf: &mut Vec<u8>, mut value: u64) {
	while value >= 0x80 {
		buf.push((value & 0x7F) as u8 | 0x80);
		value >>= 7;
	}
	buf.push(value as u8);
}

fn varint_field(buf: &mut Vec<u8>, field: u64, value: u64) {
	varint(buf, field << 3);
	varint(buf, value);
}

fn bytes_field(buf: &mut Vec<u8>, field: u64, data: &[u8]) {
	varint(buf, (field << 3) | 2);
	varint(buf, data.len() as u64);
	buf.extend_from_slice(data);
}

fn packed_field(buf: &mut Vec<u8>, field: u64, values: &[u64]) {
	let mut inner = Vec::new();
	for &value in values {
		varint(&mut inner, value);
	}
	bytes_field(buf, field, &inner);
}
