//! Entropy source capability
//!
//! Key generation is written against [`EntropySource`] rather than a
//! concrete generator, so the production path can read the operating
//! system while tests substitute a seeded or deliberately failing source.

use crate::error::Error;
use crate::os::sys_random;

/// A source of cryptographically secure random bytes.
///
/// Implementations must either fill the whole buffer with secure output or
/// return an error. Falling back to a weaker generator is not allowed.
pub trait EntropySource {
    /// Fills `buf` entirely with random bytes.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), Error>;
}

impl<S: EntropySource + ?Sized> EntropySource for &mut S {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        (**self).fill(buf)
    }
}

/// Reads every request directly from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        sys_random(buf)
    }
}
