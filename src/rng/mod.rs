//! Random number generation module
//!
//! This module provides the cryptographically secure randomness used for
//! key generation.
//!
//! Two sources are available behind the [`EntropySource`] trait:
//! - [`OsEntropy`], which reads every request from the operating system
//! - [`Csprng`], a ChaCha20 DRBG seeded once from the operating system and
//!   rekeyed after every fill
pub(crate) mod chacha20;
mod csprng;
mod source;

pub use csprng::Csprng;
pub use source::{EntropySource, OsEntropy};
