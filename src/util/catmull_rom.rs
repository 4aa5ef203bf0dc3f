use crate::geom::Coord;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplineOptions {
	/// Number of control points `random_controls` generates.
	pub control_points: usize,
	/// Samples taken per span between two control points.
	pub steps_per_segment: usize,
	/// Parameter increment between samples.
	pub step: f32,
}

impl Default for SplineOptions {
	fn default() -> Self {
		Self {
			control_points: 16,
			steps_per_segment: 33,
			step: 0.03,
		}
	}
}

/// Evaluates the uniform Catmull-Rom span from `p1` (at `t = 0`) to `p2` (at `t = 1`).
pub fn catmull_rom(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
	let q3 = p1;
	let q2 = 0.5 * p2 - 0.5 * p0;
	let q0 = 0.5 * p3 - 0.5 * p1 - 2.0 * p2 + q2 + 2.0 * q3;
	let q1 = 3.0 * p2 - 0.5 * p3 + 0.5 * p1 - 2.0 * q2 - 3.0 * q3;
	((q0 * t + q1) * t + q2) * t + q3
}

pub fn sample_segment(
	p0: Vec2,
	p1: Vec2,
	p2: Vec2,
	p3: Vec2,
	options: &SplineOptions,
) -> impl Iterator<Item = Coord> {
	let step = options.step;
	(0..options.steps_per_segment).map(move |i| catmull_rom(p0, p1, p2, p3, i as f32 * step))
}

/// Lazily samples a curve through a sequence of control points.
///
/// The window starts filled with the first control point and shifts one control point in per
/// span, so the curve begins exactly at the first control point. The curve ends at the
/// second-to-last control point. Spans whose endpoints coincide are skipped.
pub struct SplineSamples<I: Iterator<Item = Coord>> {
	controls: I,
	window: Option<[Vec2; 4]>,
	options: SplineOptions,
	index: usize,
}

impl<I: Iterator<Item = Coord>> SplineSamples<I> {
	pub fn new(controls: impl IntoIterator<IntoIter = I>, options: SplineOptions) -> Self {
		Self {
			controls: controls.into_iter(),
			window: None,
			options,
			// Forces a window shift before the first sample.
			index: options.steps_per_segment,
		}
	}

	fn shift(&mut self) -> Option<[Vec2; 4]> {
		let next = self.controls.next()?;
		let [_, p1, p2, p3] = self.window.unwrap_or([next; 4]);
		let window = [p1, p2, p3, next];
		self.window = Some(window);
		Some(window)
	}
}

impl<I: Iterator<Item = Coord>> Iterator for SplineSamples<I> {
	type Item = Coord;

	fn next(&mut self) -> Option<Coord> {
		if self.options.steps_per_segment == 0 {
			return None;
		}
		while self.index >= self.options.steps_per_segment {
			let window = self.shift()?;
			if window[1] != window[2] {
				self.index = 0;
			}
		}
		let [p0, p1, p2, p3] = self.window?;
		let t = self.index as f32 * self.options.step;
		self.index += 1;
		Some(catmull_rom(p0, p1, p2, p3, t))
	}
}

pub fn sample_spline(
	controls: impl IntoIterator<Item = Coord>,
	options: &SplineOptions,
) -> Vec<Coord> {
	SplineSamples::new(controls.into_iter(), *options).collect()
}

/// Uniformly distributed points in `[-1, 1]²`.
pub fn random_controls(rng: &mut fastrand::Rng, options: &SplineOptions) -> Vec<Coord> {
	(0..options.control_points)
		.map(|_| Vec2::new(rng.f32(), rng.f32()) * 2.0 - 1.0)
		.collect()
}

pub fn random_spline(rng: &mut fastrand::Rng, options: &SplineOptions) -> Vec<Coord> {
	sample_spline(random_controls(rng, options), options)
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use glam::vec2;
	use itertools::Itertools;

	const EPSILON: f32 = 1e-5;

	#[test]
	fn interpolates_inner_points() {
		let (p0, p1, p2, p3) = (vec2(-1.0, 0.0), vec2(0.0, 0.5), vec2(1.0, -0.5), vec2(2.0, 0.0));
		let start = catmull_rom(p0, p1, p2, p3, 0.0);
		let end = catmull_rom(p0, p1, p2, p3, 1.0);
		assert_abs_diff_eq!(start.x, p1.x, epsilon = EPSILON);
		assert_abs_diff_eq!(start.y, p1.y, epsilon = EPSILON);
		assert_abs_diff_eq!(end.x, p2.x, epsilon = EPSILON);
		assert_abs_diff_eq!(end.y, p2.y, epsilon = EPSILON);
	}

	#[test]
	fn collinear_controls_stay_on_line() {
		let points = [0.0, 1.0, 2.0, 3.0].map(|x| vec2(x, 2.0 * x));
		for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
			let p = catmull_rom(points[0], points[1], points[2], points[3], t);
			assert_abs_diff_eq!(p.x, 1.0 + t, epsilon = EPSILON);
			assert_abs_diff_eq!(p.y, 2.0 * (1.0 + t), epsilon = EPSILON);
		}
	}

	#[test]
	fn sample_segment_steps() {
		let options = SplineOptions::default();
		let p = [0.0, 1.0, 2.0, 3.0].map(|x| vec2(x, 0.0));
		let samples = sample_segment(p[0], p[1], p[2], p[3], &options).collect_vec();
		assert_eq!(samples.len(), 33);
		assert_abs_diff_eq!(samples[0].x, 1.0, epsilon = EPSILON);
		assert_abs_diff_eq!(samples[32].x, 1.96, epsilon = EPSILON);
	}

	#[test]
	fn spline_starts_at_first_control() {
		let options = SplineOptions::default();
		let controls = [vec2(-0.5, -0.5), vec2(0.5, 0.25), vec2(0.25, 0.75), vec2(-0.25, 0.5)];
		let samples = sample_spline(controls, &options);
		// The last control point only shapes the final span.
		assert_eq!(samples.len(), 2 * options.steps_per_segment);
		assert_eq!(samples[0], controls[0]);
		assert_abs_diff_eq!(samples[33].x, controls[1].x, epsilon = EPSILON);
		assert_abs_diff_eq!(samples[33].y, controls[1].y, epsilon = EPSILON);
	}

	#[test]
	fn repeated_controls_are_skipped() {
		let options = SplineOptions::default();
		let controls = [vec2(0.0, 0.0), vec2(0.5, 0.5), vec2(0.5, 0.5), vec2(1.0, 0.0)];
		let samples = sample_spline(controls, &options);
		assert_eq!(samples.len(), options.steps_per_segment);
		assert_eq!(samples[0], controls[0]);
	}

	#[test]
	fn too_few_controls() {
		let options = SplineOptions::default();
		assert!(sample_spline([], &options).is_empty());
		assert!(sample_spline([vec2(0.1, 0.1)], &options).is_empty());
		assert!(sample_spline([vec2(0.1, 0.1), vec2(0.2, 0.2)], &options).is_empty());
	}

	#[test]
	fn zero_steps() {
		let options = SplineOptions {
			steps_per_segment: 0,
			..Default::default()
		};
		assert!(sample_spline([vec2(0.0, 0.0), vec2(1.0, 1.0)], &options).is_empty());
	}

	#[test]
	fn random_controls_in_range() {
		let mut rng = fastrand::Rng::with_seed(0x13371337);
		let options = SplineOptions::default();
		let controls = random_controls(&mut rng, &options);
		assert_eq!(controls.len(), options.control_points);
		for c in controls {
			assert!(c.x >= -1.0 && c.x <= 1.0);
			assert!(c.y >= -1.0 && c.y <= 1.0);
		}
	}

	#[test]
	fn random_spline_is_deterministic() {
		let options = SplineOptions::default();
		let a = random_spline(&mut fastrand::Rng::with_seed(7), &options);
		let b = random_spline(&mut fastrand::Rng::with_seed(7), &options);
		assert_eq!(a, b);
		assert_eq!(a.len(), (options.control_points - 2) * options.steps_per_segment);
	}
}
