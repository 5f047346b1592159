use crate::source::PbfSource;
use anyhow::{Context, Result};
use std::{
	fs::File,
	io::{self, BufWriter, Write},
	num::NonZeroUsize,
	path::PathBuf,
	time::Instant,
};
use tilescan_core::{GlobalTileSet, OutputMode, PointSource, ScanConfig, ZoomLevels, output::write_tiles, scan_source};

#[derive(clap::Args, Debug)]
pub struct Arguments {
	/// OpenStreetMap PBF files to scan
	#[arg(short, long = "files", value_name = "FILE", num_args = 1.., required = true, display_order = 1)]
	files: Vec<PathBuf>,

	/// zoom levels between 0 and 22, invalid levels are skipped
	#[arg(
		short,
		long = "zoom",
		value_name = "LEVEL",
		num_args = 1..,
		required = true,
		allow_negative_numbers = true,
		display_order = 1
	)]
	zoom: Vec<String>,

	/// number of worker threads
	#[arg(short, long, value_name = "int", default_value = "1", display_order = 2)]
	threads: NonZeroUsize,

	/// write tiles as 8 byte little-endian integers: (zoom << 58) | (y << 29) | x
	#[arg(long, conflicts_with_all = ["count", "mode"], display_order = 3)]
	binary: bool,

	/// write the number of tiles per zoom level
	#[arg(long, conflicts_with = "mode", display_order = 3)]
	count: bool,

	/// set the output mode explicitly
	#[arg(long, value_enum, value_name = "MODE", display_order = 3)]
	mode: Option<OutputMode>,

	/// write to a file instead of stdout
	#[arg(short, long, value_name = "FILE", display_order = 4)]
	output: Option<PathBuf>,
}

impl Arguments {
	fn output_mode(&self) -> OutputMode {
		if self.binary {
			OutputMode::Binary
		} else if self.count {
			OutputMode::Count
		} else {
			self.mode.unwrap_or_default()
		}
	}

	/// Validate the arguments. Invalid zoom levels are logged and skipped.
	pub fn to_config(&self) -> Result<ScanConfig> {
		let config = ScanConfig::new(self.files.clone(), ZoomLevels::from_lossy(&self.zoom)?)
			.with_threads(self.threads)
			.with_output_mode(self.output_mode())
			.with_output_path(self.output.clone());
		config.validate()?;
		Ok(config)
	}
}

/// Scan all input files and write the non-empty tiles.
pub fn run(config: &ScanConfig) -> Result<()> {
	log::info!(
		"scanning {} file(s) at zoom levels {} with {} thread(s)",
		config.files.len(),
		config.zoom_levels,
		config.threads
	);

	let pool = rayon::ThreadPoolBuilder::new()
		.num_threads(config.threads.get())
		.thread_name(|index| format!("tilescan-{index}"))
		.build()
		.context("failed to build worker pool")?;

	let global = GlobalTileSet::new();
	for path in &config.files {
		let source = PbfSource::new(path);
		let start = Instant::now();
		log::info!("scanning {}", source.name());

		let stats = pool
			.install(|| scan_source(&source, &global, &config.zoom_levels))
			.with_context(|| format!("failed to scan {:?}", source.path()))?;

		log::info!(
			"finished {}: {} blocks, {} nodes in {:.1?}",
			source.name(),
			stats.blocks,
			stats.points,
			start.elapsed()
		);
	}

	let tiles = global.into_tiles();
	log::info!("found {} non-empty tiles", tiles.len());

	match &config.output_path {
		Some(path) => {
			let file = File::create(path).with_context(|| format!("failed to create {path:?}"))?;
			write_output(&tiles, config.output_mode, BufWriter::new(file))
				.with_context(|| format!("failed to write {path:?}"))
		}
		None => write_output(&tiles, config.output_mode, BufWriter::new(io::stdout().lock()))
			.context("failed to write to stdout"),
	}
}

fn write_output(tiles: &tilescan_core::TileSet, mode: OutputMode, mut writer: impl Write) -> Result<()> {
	write_tiles(tiles, mode, &mut writer)?;
	writer.flush()?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::Parser;
	use rstest::rstest;

	#[derive(Parser, Debug)]
	struct TestCli {
		#[command(flatten)]
		arguments: Arguments,
	}

	fn parse(args: &[&str]) -> Result<Arguments> {
		let mut argv = vec!["tilescan"];
		argv.extend_from_slice(args);
		Ok(TestCli::try_parse_from(argv)?.arguments)
	}

	#[test]
	fn multiple_files_and_levels() {
		let config = parse(&["-f", "a.pbf", "b.pbf", "-z", "3", "1", "3"]).unwrap().to_config().unwrap();
		assert_eq!(config.files, vec![PathBuf::from("a.pbf"), PathBuf::from("b.pbf")]);
		assert_eq!(config.zoom_levels.as_slice(), &[1, 3]);
		assert_eq!(config.threads.get(), 1);
		assert_eq!(config.output_mode, OutputMode::Text);
		assert_eq!(config.output_path, None);
	}

	#[rstest]
	#[case(&[], OutputMode::Text)]
	#[case(&["--binary"], OutputMode::Binary)]
	#[case(&["--count"], OutputMode::Count)]
	#[case(&["--mode", "count"], OutputMode::Count)]
	#[case(&["--mode", "text"], OutputMode::Text)]
	fn output_modes(#[case] flags: &[&str], #[case] expected: OutputMode) {
		let mut args = vec!["-f", "a.pbf", "-z", "5"];
		args.extend_from_slice(flags);
		assert_eq!(parse(&args).unwrap().to_config().unwrap().output_mode, expected);
	}

	#[rstest]
	#[case(&["--binary", "--count"])]
	#[case(&["--count", "--mode", "text"])]
	#[case(&["--binary", "--mode", "binary"])]
	fn output_modes_are_exclusive(#[case] flags: &[&str]) {
		let mut args = vec!["-f", "a.pbf", "-z", "5"];
		args.extend_from_slice(flags);
		assert!(parse(&args).is_err());
	}

	#[test]
	fn invalid_levels_are_skipped() {
		let config = parse(&["-z", "-1", "4", "23", "four", "-f", "a.pbf"]).unwrap().to_config().unwrap();
		assert_eq!(config.zoom_levels.as_slice(), &[4]);
	}

	#[test]
	fn no_valid_level_is_fatal() {
		let arguments = parse(&["-f", "a.pbf", "-z", "30", "-5", "five"]).unwrap();
		assert!(arguments.to_config().is_err());
	}

	#[rstest]
	#[case(&["-z", "5"])]
	#[case(&["-f", "a.pbf"])]
	#[case(&["-f", "-z", "5"])]
	#[case(&["-f", "a.pbf", "-z", "5", "-t", "0"])]
	fn configuration_errors(#[case] args: &[&str]) {
		assert!(parse(args).is_err());
	}

	#[test]
	fn threads_and_output() {
		let config = parse(&["-f", "a.pbf", "-z", "5", "-t", "4", "-o", "tiles.bin"])
			.unwrap()
			.to_config()
			.unwrap();
		assert_eq!(config.threads.get(), 4);
		assert_eq!(config.output_path, Some(PathBuf::from("tiles.bin")));
	}
}
