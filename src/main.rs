use scribble::util::{random_controls, sample_spline, ResultExt, SplineOptions};
use scribble::{DrawerOptions, PathDrawer};

#[derive(thiserror::Error, Debug)]
#[error("no global tracing subscriber set")]
struct NoTracingSubscriber;

fn configure_tracing() -> anyhow::Result<()> {
	let max_level = if cfg!(debug_assertions) {
		tracing::Level::TRACE
	} else {
		tracing::Level::INFO
	};
	tracing::subscriber::set_global_default(
		tracing_subscriber::FmtSubscriber::builder()
			.with_max_level(max_level)
			.finish(),
	)
	.map_err(|_| NoTracingSubscriber)?;
	Ok(())
}

fn configure_logging() -> anyhow::Result<()> {
	configure_tracing()?;

	// Redirect `log` to `tracing`. If the subscriber above could not be installed, the "log"
	// feature on `tracing` sends our events the other way instead.
	#[cfg(feature = "log")]
	tracing_log::LogTracer::init()?;

	Ok(())
}

fn main() -> anyhow::Result<()> {
	if let Err(error) = configure_logging() {
		// We can technically continue without logging.
		eprintln!("failed to configure logging: {error}");
	}

	let options = SplineOptions::default();
	let mut rng = fastrand::Rng::new();
	let controls = random_controls(&mut rng, &options);
	tracing::debug!(?controls, "generated control points");

	let points = sample_spline(controls, &options);
	let mut drawer = PathDrawer::new(DrawerOptions { min_spacing: 0.01 });
	let Some(stroke) = drawer.replay(points.iter().copied()).ok_or_warn("replaying spline") else {
		anyhow::bail!("failed to draw the generated spline");
	};

	let bounds = drawer.path().bounds();
	tracing::info!(
		samples = points.len(),
		segments = stroke.len(),
		min = ?bounds.min(),
		max = ?bounds.max(),
		"drew spline"
	);
	Ok(())
}
