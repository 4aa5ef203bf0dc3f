use super::path::{Line, Path, PathError};
use crate::geom::Coord;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DrawerError {
	#[error("no active gesture")]
	NoActiveGesture,

	#[error(transparent)]
	Path(#[from] PathError),
}

static_assertions::assert_impl_all!(DrawerError: std::error::Error, Send, Sync);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerOptions {
	/// Points closer than this to the current point are dropped.
	pub min_spacing: f32,
}

impl Default for DrawerOptions {
	fn default() -> Self {
		Self { min_spacing: 0.0 }
	}
}

/// Feeds a touch or pointer gesture into a `Path`.
///
/// Each gesture starts a fresh path, so the path only ever holds the stroke currently being
/// drawn, or the last finished one.
#[derive(Clone, Debug, Default)]
pub struct PathDrawer {
	options: DrawerOptions,
	path: Path,
	active: bool,
}

impl PathDrawer {
	pub fn new(options: DrawerOptions) -> Self {
		Self {
			options,
			path: Path::new(),
			active: false,
		}
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn options(&self) -> &DrawerOptions {
		&self.options
	}

	pub fn is_active(&self) -> bool {
		self.active
	}

	pub fn touch_start(&mut self, point: Coord) {
		tracing::trace!(?point, "touch_start");
		if self.active {
			tracing::warn!("touch_start during an active gesture, discarding it");
		}
		self.path.reset();
		self.path.move_to(point);
		self.active = true;
	}

	/// Returns whether the point was recorded.
	pub fn touch_move(&mut self, point: Coord) -> Result<bool, DrawerError> {
		tracing::trace!(?point, "touch_move");
		if !self.active {
			tracing::warn!(?point, "touch_move without touch_start");
			return Err(DrawerError::NoActiveGesture);
		}
		if let Some(current) = self.path.current_point() {
			let min_spacing = self.options.min_spacing;
			if current.distance_squared(point) < min_spacing * min_spacing {
				tracing::debug!(?point, ?current, min_spacing, "dropping point");
				return Ok(false);
			}
		}
		self.path.draw_line(point)?;
		Ok(true)
	}

	/// Ends the gesture and returns the segments of the finished stroke.
	pub fn touch_end(&mut self) -> Result<Vec<Line>, DrawerError> {
		tracing::trace!("touch_end");
		if !self.active {
			tracing::warn!("touch_end without touch_start");
			return Err(DrawerError::NoActiveGesture);
		}
		self.active = false;
		Ok(self.path.lines().to_vec())
	}

	/// Draws `points` as a single gesture. An empty input leaves the drawer untouched.
	pub fn replay(
		&mut self,
		points: impl IntoIterator<Item = Coord>,
	) -> Result<Vec<Line>, DrawerError> {
		let mut points = points.into_iter();
		let Some(first) = points.next() else {
			return Ok(Vec::new());
		};
		self.touch_start(first);
		for point in points {
			self.touch_move(point)?;
		}
		self.touch_end()
	}
}
