use glam::Vec2;

/// A point in normalized device coordinates. Each axis is nominally in `[-1, 1]`, but nothing
/// here enforces that.
pub type Coord = Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AABox {
	min: Vec2,
	max: Vec2,
}

impl AABox {
	pub fn new(min: Vec2, max: Vec2) -> Self {
		Self { min, max }
	}

	pub fn empty() -> Self {
		Self::new(Vec2::MAX, Vec2::MIN)
	}

	pub fn is_empty(&self) -> bool {
		self.min.x > self.max.x && self.min.y > self.max.y
	}

	pub fn min(&self) -> Vec2 {
		self.min
	}

	pub fn max(&self) -> Vec2 {
		self.max
	}

	pub fn expanded_to_contain(self, point: Vec2) -> Self {
		Self::new(self.min.min(point), self.max.max(point))
	}

	pub fn containing(points: impl IntoIterator<Item = Vec2>) -> Self {
		points
			.into_iter()
			.fold(Self::empty(), |b, p| b.expanded_to_contain(p))
	}

	/// Closed on both ends, so the corners of a box built by `containing` are inside it.
	pub fn contains(&self, point: Vec2) -> bool {
		!(point.x < self.min.x)
			&& !(point.y < self.min.y)
			&& !(point.x > self.max.x)
			&& !(point.y > self.max.y)
	}

	pub fn corners(&self) -> [Vec2; 4] {
		[
			self.min,
			Vec2::new(self.min[0], self.max[1]),
			self.max,
			Vec2::new(self.max[0], self.min[1]),
		]
	}
}

/// The pixel size of the surface receiving input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f32,
	pub height: f32,
}

impl Viewport {
	pub fn new(width: f32, height: f32) -> Self {
		Self { width, height }
	}

	/// Maps a pixel offset (origin at the top left, y pointing down) to normalized device
	/// coordinates (origin at the center, y pointing up).
	pub fn normalize(&self, offset: Vec2) -> Coord {
		let unit = offset / Vec2::new(self.width, self.height);
		Vec2::new(2.0, -2.0) * (unit - 0.5)
	}
}
