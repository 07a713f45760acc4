//! Error types for key generation.
//!
//! Entropy failures are never retried and never masked by a weaker
//! generator: they surface as [`Error::RandomnessUnavailable`] and end the
//! process with a non-zero status.

use std::io;

use thiserror::Error;

/// Errors produced while generating or emitting a key.
#[derive(Debug, Error)]
pub enum Error {
    /// The operating system's secure entropy source could not be read.
    #[error("secure randomness source unavailable: {0}")]
    RandomnessUnavailable(#[source] io::Error),

    /// The finished key could not be written to its output sink.
    #[error("failed to write key: {0}")]
    Output(#[source] io::Error),
}

impl Error {
    /// Returns `true` if this error came from the entropy source.
    pub fn is_randomness_unavailable(&self) -> bool {
        matches!(self, Error::RandomnessUnavailable(_))
    }
}
