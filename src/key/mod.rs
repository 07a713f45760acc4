//! Alphanumeric key generation.
//!
//! Produces 32-character keys over `[A-Za-z0-9]` from a secure entropy
//! source.

mod alphabet;
mod core;

pub use alphabet::ALPHABET;
pub use self::core::{KEY_LEN, SymbolSampler, generate_key, generate_key_with};
