//! `keysmith`: print one secure 32-character alphanumeric key.
//!
//! Takes no arguments. The key goes to stdout; diagnostics go to stderr.

use std::io;
use std::process::ExitCode;

use keysmith::rng::Csprng;
use tracing::{Level, error};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::WARN)
        .init();

    let result = Csprng::from_os().and_then(|rng| keysmith::run(rng, io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
