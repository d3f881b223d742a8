use std::io;

use tracing::Level;
use tracing_subscriber::fmt::time::ChronoLocal;

/// Installs the global subscriber. Events go to stderr so stdout only carries
/// what the user asked for.
pub fn init(level: Level) {
	tracing_subscriber::fmt()
		.with_max_level(level)
		.with_timer(ChronoLocal::rfc_3339())
		.with_target(false)
		.with_writer(io::stderr)
		.init();
}
