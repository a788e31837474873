use std::process::ExitCode;

use tracing::{Level, error};

fn main() -> ExitCode {
    // Diagnostics go to stderr; stdout carries only the fixture.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::WARN)
        .init();

    match pairmax_fixture::generate() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "fixture generation failed");
            ExitCode::FAILURE
        }
    }
}
