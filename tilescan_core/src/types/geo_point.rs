/// A single geographic position in degrees, as read from an input source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
	pub lat: f64,
	pub lon: f64,
}

impl GeoPoint {
	/// Create a point from latitude and longitude, both in degrees.
	pub fn new(lat: f64, lon: f64) -> GeoPoint {
		GeoPoint { lat, lon }
	}
}

impl From<(f64, f64)> for GeoPoint {
	/// Converts a `(lat, lon)` tuple.
	fn from((lat, lon): (f64, f64)) -> Self {
		GeoPoint { lat, lon }
	}
}
