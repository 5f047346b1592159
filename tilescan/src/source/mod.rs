//! Readers for on-disk point data.

mod pbf;
pub use pbf::*;
