//! # tilescan
//!
//! Command line front end of [`tilescan_core`]: reads OpenStreetMap PBF files and prints the
//! tiles that contain at least one node.
//!
//! ```no_run
//! use std::path::PathBuf;
//! use tilescan::scan;
//! use tilescan_core::{OutputMode, ScanConfig, ZoomLevels};
//!
//! let config = ScanConfig::new(vec![PathBuf::from("berlin.osm.pbf")], ZoomLevels::new([10, 14]).unwrap())
//! 	.with_output_mode(OutputMode::Count);
//! scan::run(&config).unwrap();
//! ```

pub mod scan;
pub mod source;

pub use tilescan_core as core;
