use crate::geom::{AABox, Coord};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
	#[error("no current point to draw from")]
	InvalidState,
}

static_assertions::assert_impl_all!(PathError: std::error::Error, Send, Sync);

/// One drawn segment.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Line {
	pub from: Coord,
	pub to: Coord,
}

// `Path::vertex_data` relies on this layout.
static_assertions::assert_eq_size!(Line, [f32; 4]);

impl Line {
	pub fn new(from: Coord, to: Coord) -> Self {
		Self { from, to }
	}

	pub fn length(&self) -> f32 {
		self.from.distance(self.to)
	}
}

/// Records a pen-up/pen-down gesture as line segments.
///
/// The path is either unpositioned (freshly created or reset), in which case only `move_to`
/// has an effect and `draw_line` fails, or positioned, in which case `draw_line` appends a
/// segment starting at the current point. Segments are never edited or removed except by
/// `reset`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
	current_point: Option<Coord>,
	lines: Vec<Line>,
}

impl Path {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn reset(&mut self) {
		self.current_point = None;
		self.lines.clear();
	}

	/// Lifts the pen and places it at `point` without recording a segment.
	pub fn move_to(&mut self, point: Coord) {
		self.current_point = Some(point);
	}

	/// Records a segment from the current point to `point` and advances to it.
	///
	/// Fails without modifying the path if the pen has not been placed.
	pub fn draw_line(&mut self, point: Coord) -> Result<(), PathError> {
		let from = self.current_point.ok_or(PathError::InvalidState)?;
		self.lines.push(Line::new(from, point));
		self.current_point = Some(point);
		Ok(())
	}

	pub fn current_point(&self) -> Option<Coord> {
		self.current_point
	}

	pub fn is_positioned(&self) -> bool {
		self.current_point.is_some()
	}

	pub fn lines(&self) -> &[Line] {
		&self.lines
	}

	pub fn len(&self) -> usize {
		self.lines.len()
	}

	pub fn is_empty(&self) -> bool {
		self.lines.is_empty()
	}

	/// The segments as `[from.x, from.y, to.x, to.y, ...]`, ready for a line-list draw.
	pub fn vertex_data(&self) -> &[f32] {
		bytemuck::cast_slice(&self.lines)
	}

	pub fn bounds(&self) -> AABox {
		AABox::containing(self.lines.iter().flat_map(|line| [line.from, line.to]))
	}
}
