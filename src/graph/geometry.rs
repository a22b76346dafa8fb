//! Conversions between on-screen distance and real-world edge weight.

/// Display pixels per metre. Shared by every caller that relates geometry to
/// weight; the geometric-weight rule only holds if everyone uses this value.
pub const METER_TO_PIXEL_RATIO: f64 = 20.0;

/// A point on the canvas, in display pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Point {
	/// Build a point from its coordinates.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Whether both coordinates are finite.
	pub fn is_finite(&self) -> bool {
		self.x.is_finite() && self.y.is_finite()
	}
}

impl From<(f64, f64)> for Point {
	fn from((x, y): (f64, f64)) -> Self {
		Self { x, y }
	}
}

/// Euclidean distance between two points.
pub fn pixel_distance(a: Point, b: Point) -> f64 {
	(b.x - a.x).hypot(b.y - a.y)
}

/// Convert a pixel distance into metres.
pub fn to_weight(pixel_distance: f64) -> f64 {
	pixel_distance / METER_TO_PIXEL_RATIO
}

/// Convert metres into a pixel distance.
pub fn to_pixels(weight: f64) -> f64 {
	weight * METER_TO_PIXEL_RATIO
}
