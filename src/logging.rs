use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr log subscriber.
///
/// Stdout carries only the rewritten document, so every event goes to stderr.
/// `RUST_LOG` takes precedence over the `verbose` default.
pub fn init_cli_logger(verbose: bool) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("permfix=debug,permfix_cli=debug")
		} else {
			EnvFilter::new("permfix=warn,permfix_cli=warn")
		}
	});

	tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_writer(std::io::stderr)
				.with_ansi(std::io::stderr().is_terminal())
				.with_target(false)
				.with_thread_ids(false)
				.with_file(false)
				.with_line_number(false)
				.compact(),
		)
		.init();
}
