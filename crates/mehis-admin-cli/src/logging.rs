//! Log output for the admin tool.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber.
///
/// `-v` flags win over `RUST_LOG`, which wins over the configured level.
/// Logs go to standard error so listings on standard output stay clean.
pub(crate) fn init(verbosity: u8, configured: &str) {
	let filter = match verbosity {
		0 => EnvFilter::try_from_default_env()
			.or_else(|_| EnvFilter::try_new(configured))
			.unwrap_or_else(|_| EnvFilter::new("warn")),
		1 => EnvFilter::new("info"),
		2 => EnvFilter::new("debug"),
		_ => EnvFilter::new("trace"),
	};

	tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_target(false)
				.with_writer(std::io::stderr),
		)
		.init();
}
