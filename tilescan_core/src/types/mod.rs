//! Contains the tile coordinate codec, geographic points and zoom level lists.

mod geo_point;
pub use geo_point::*;

mod tile_coord;
pub use tile_coord::*;

mod zoom_levels;
pub use zoom_levels::*;
