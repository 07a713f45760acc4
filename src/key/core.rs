//! Key generation core.
//!
//! A key is [`KEY_LEN`] symbols, each selected independently and uniformly
//! from [`ALPHABET`]. Selection uses rejection sampling on random bytes
//! (see [`symbol_for`]), so no symbol is favoured by modulo bias.

use tracing::debug;

use crate::error::Error;
use crate::key::alphabet::{ALPHABET, symbol_for};
use crate::rng::{Csprng, EntropySource};

/// Number of symbols in a generated key.
pub const KEY_LEN: usize = 32;

/// Bytes requested from the source per refill.
const BATCH: usize = 64;

/// Draws uniformly distributed alphabet symbols from an entropy source.
///
/// Random bytes are pulled in batches and consumed one at a time; rejected
/// bytes are discarded.
pub struct SymbolSampler<S> {
    source: S,
    buf: [u8; BATCH],
    pos: usize,
}

impl<S: EntropySource> SymbolSampler<S> {
    /// Wraps `source`. Nothing is read until the first symbol is requested.
    pub fn new(source: S) -> Self {
        Self {
            source,
            buf: [0u8; BATCH],
            pos: BATCH,
        }
    }

    /// Returns the next symbol, one of the bytes of [`ALPHABET`].
    pub fn next_symbol(&mut self) -> Result<u8, Error> {
        loop {
            if self.pos == BATCH {
                self.source.fill(&mut self.buf)?;
                self.pos = 0;
            }

            let byte = self.buf[self.pos];
            self.pos += 1;

            if let Some(symbol) = symbol_for(byte) {
                return Ok(symbol);
            }
        }
    }
}

impl<S> Drop for SymbolSampler<S> {
    fn drop(&mut self) {
        self.buf.fill(0);
    }
}

/// Generates a key from the given entropy source.
///
/// Fails only if the source fails; a partially built key is never returned.
pub fn generate_key_with<S: EntropySource>(source: S) -> Result<String, Error> {
    let mut sampler = SymbolSampler::new(source);
    let mut key = String::with_capacity(KEY_LEN);

    for _ in 0..KEY_LEN {
        key.push(char::from(sampler.next_symbol()?));
    }

    debug!(len = key.len(), alphabet = ALPHABET.len(), "generated key");
    Ok(key)
}

/// Generates a key using a CSPRNG freshly seeded from the operating system.
///
/// Returns [`Error::RandomnessUnavailable`] if the operating system cannot
/// supply the seed.
pub fn generate_key() -> Result<String, Error> {
    let rng = Csprng::from_os()?;
    generate_key_with(rng)
}
