//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use larder_cli::CliError;
use tracing_subscriber::EnvFilter;

#[expect(
    clippy::print_stderr,
    reason = "The binary reports fatal errors on stderr before exiting"
)]
fn main() {
    init_logging();
    match larder_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("larder: {err}");
            std::process::exit(1);
        }
    }
}

/// Route `log` records to stderr, filtered by `LARDER_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_env("LARDER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
