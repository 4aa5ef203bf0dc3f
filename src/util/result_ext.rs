use std::fmt::Display;

pub trait ResultExt<T, E> {
	/// Drops the error after logging it at `warn` level, tagged with what was being attempted.
	fn ok_or_warn(self, context: &str) -> Option<T>
	where
		E: Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
	fn ok_or_warn(self, context: &str) -> Option<T>
	where
		E: Display,
	{
		self
			.inspect_err(|err| tracing::warn!(context, "{}", err))
			.ok()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Path, PathError};
	use glam::vec2;

	#[test]
	fn ok_or_warn() {
		let mut path = Path::new();
		assert_eq!(path.draw_line(vec2(0.1, 0.1)).ok_or_warn("draw"), None);

		path.move_to(vec2(0.0, 0.0));
		assert_eq!(path.draw_line(vec2(0.1, 0.1)).ok_or_warn("draw"), Some(()));

		let err: Result<(), PathError> = Err(PathError::InvalidState);
		assert!(err.ok_or_warn("explicit").is_none());
	}
}
