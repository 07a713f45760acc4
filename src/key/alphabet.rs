//! The key alphabet and byte-to-symbol mapping.

/// The 62 symbols a key is drawn from: `A-Z`, `a-z`, `0-9`, in that order.
pub const ALPHABET: &[u8; 62] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Largest multiple of the alphabet size that fits in a byte (4 * 62).
///
/// Bytes at or above this bound are rejected so that every symbol is
/// reachable from exactly four byte values.
pub(crate) const ACCEPT_BOUND: u8 = (ALPHABET.len() * (256 / ALPHABET.len())) as u8;

/// Maps a uniformly random byte to a symbol, or `None` if it must be rejected.
#[inline]
pub(crate) fn symbol_for(byte: u8) -> Option<u8> {
    if byte < ACCEPT_BOUND {
        Some(ALPHABET[byte as usize % ALPHABET.len()])
    } else {
        None
    }
}
