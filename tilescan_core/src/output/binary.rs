use crate::TileCoord;
use anyhow::{Context, Result, ensure};
use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use std::io::{Read, Write};

/// Size of one encoded tile in bytes.
pub const BINARY_TILE_SIZE: usize = 8;

/// Write every tile as its packed value, 8 bytes little-endian, without any framing.
pub fn write_binary(tiles: &[TileCoord], writer: &mut dyn Write) -> Result<()> {
	for coord in tiles {
		writer.write_u64::<LittleEndian>(coord.packed())?;
	}
	Ok(())
}

/// Decode a stream written by [`write_binary`].
///
/// # Errors
/// Returns an error if reading fails or the stream length is not a multiple of 8.
pub fn read_binary(mut reader: impl Read) -> Result<Vec<TileCoord>> {
	let mut buffer = Vec::new();
	reader.read_to_end(&mut buffer).context("failed to read binary tile stream")?;
	ensure!(
		buffer.len() % BINARY_TILE_SIZE == 0,
		"binary tile stream has {} bytes, which is not a multiple of {BINARY_TILE_SIZE}",
		buffer.len()
	);
	Ok(buffer
		.chunks_exact(BINARY_TILE_SIZE)
		.map(|chunk| TileCoord::from_packed(LittleEndian::read_u64(chunk)))
		.collect())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn little_endian_packed_values() {
		let coord = TileCoord::new(10, 511, 300).unwrap();
		let mut out = Vec::new();
		write_binary(&[coord], &mut out).unwrap();

		let expected: u64 = (10 << 58) | (300 << 29) | 511;
		assert_eq!(out, expected.to_le_bytes());
	}

	#[test]
	fn stream_length_is_eight_bytes_per_tile() {
		let tiles: Vec<_> = (0..16).map(|x| TileCoord::new(4, x, 15 - x).unwrap()).collect();
		let mut out = Vec::new();
		write_binary(&tiles, &mut out).unwrap();
		assert_eq!(out.len(), 16 * BINARY_TILE_SIZE);

		assert_eq!(read_binary(out.as_slice()).unwrap(), tiles);
	}

	#[test]
	fn truncated_stream_is_rejected() {
		let mut out = Vec::new();
		write_binary(&[TileCoord::new(3, 1, 1).unwrap()], &mut out).unwrap();
		out.pop();
		assert!(read_binary(out.as_slice()).is_err());
	}
}
