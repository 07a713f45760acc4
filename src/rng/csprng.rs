//! ChaCha20-based CSPRNG
//!
//! This module implements a cryptographically secure pseudorandom number
//! generator built on top of the ChaCha20 block function.
//!
//! It:
//! - relies on the operating system for its 256-bit seed
//! - uses ChaCha20 as a deterministic random bit generator (DRBG)
//! - avoids heap allocations
//! - provides forward secrecy by rekeying after every fill

use tracing::debug;

use crate::error::Error;
use crate::os::sys_random;
use crate::rng::chacha20;
use crate::rng::source::EntropySource;

/// Cryptographically secure pseudorandom number generator.
///
/// The generator is initialized from OS-provided entropy and then expands
/// randomness using the ChaCha20 block function. Internally, it maintains
/// a secret key, a nonce, and a block counter.
///
/// After generating output, the generator rekeys itself: compromise of the
/// internal state does not reveal past outputs.
pub struct Csprng {
    /// Internal ChaCha20 key (256-bit)
    key: [u8; 32],

    /// Nonce (96-bit, fixed to zero for DRBG usage)
    nonce: [u8; 12],

    /// Block counter
    counter: u32,
}

impl Csprng {
    /// Creates a new CSPRNG using entropy provided by the operating system.
    ///
    /// Returns [`Error::RandomnessUnavailable`] if the seed cannot be read.
    pub fn from_os() -> Result<Self, Error> {
        let mut seed = [0u8; 32];
        sys_random(&mut seed)?;
        debug!("seeded csprng from operating system entropy");

        Ok(Self::from_seed(seed))
    }

    /// Creates a new CSPRNG from a caller-provided seed.
    ///
    /// The seed must be uniformly random and unpredictable for the output to
    /// be secure. Equal seeds produce equal output streams.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let key = seed;
        seed.fill(0);

        Self {
            key,
            nonce: [0u8; 12],
            counter: 0,
        }
    }

    /// Fills the provided buffer with pseudorandom bytes.
    ///
    /// Output is produced in 64-byte ChaCha20 blocks. Once the buffer is
    /// filled, the generator rekeys itself.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        let mut offset = 0;

        while offset < out.len() {
            let block = chacha20::block(&self.key, self.counter, &self.nonce);

            self.counter = self.counter.wrapping_add(1);

            let to_copy = 64.min(out.len() - offset);
            out[offset..offset + to_copy].copy_from_slice(&block[..to_copy]);

            offset += to_copy;
        }

        self.rekey();
    }

    /// Replaces the key with the first 32 bytes of a fresh block.
    fn rekey(&mut self) {
        let block = chacha20::block(&self.key, self.counter, &self.nonce);

        self.counter = self.counter.wrapping_add(1);
        self.key.copy_from_slice(&block[..32]);
    }
}

impl EntropySource for Csprng {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(buf);
        Ok(())
    }
}

impl Drop for Csprng {
    fn drop(&mut self) {
        self.key.fill(0);
    }
}
