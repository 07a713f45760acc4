//! Secure alphanumeric key generation
//!
//! This crate generates a single 32-character key over `[A-Za-z0-9]` from
//! the operating system's cryptographically secure random source.
//!
//! # Module overview
//!
//! - `os`
//!   Platform entropy (`getrandom` on Linux, `arc4random_buf` on macOS,
//!   `BCryptGenRandom` on Windows). Internal.
//!
//! - `rng`
//!   The [`EntropySource`](rng::EntropySource) capability, a direct OS
//!   source, and a ChaCha20 CSPRNG seeded from the OS.
//!
//! - `key`
//!   The 62-symbol alphabet and uniform key generation.
//!
//! - `error`
//!   The crate error type.
//!
//! An unreadable entropy source is always reported as
//! [`Error::RandomnessUnavailable`]; there is no fallback to a weaker
//! generator.

mod os;

pub mod error;
pub mod key;
pub mod rng;

use std::io::Write;

pub use error::Error;
pub use key::{ALPHABET, KEY_LEN, generate_key, generate_key_with};

use rng::EntropySource;

/// Generates one key from `source` and writes it, newline-terminated, to `out`.
///
/// Nothing is written if key generation fails.
pub fn run<S, W>(source: S, mut out: W) -> Result<(), Error>
where
    S: EntropySource,
    W: Write,
{
    let key = generate_key_with(source)?;

    writeln!(out, "{key}").map_err(Error::Output)?;
    out.flush().map_err(Error::Output)
}
