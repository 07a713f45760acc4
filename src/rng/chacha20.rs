//! ChaCha20 block function
//!
//! A dependency-free implementation of the ChaCha20 block function as
//! specified in RFC 8439, used here only as the expansion step of the
//! [`Csprng`](super::Csprng).
//!
//! No stream cipher or AEAD is built on top of it in this crate; it produces
//! one 64-byte keystream block per call.

/// ChaCha20 constant words: `"expand 32-byte k"` as little-endian `u32`s.
const CHACHA20_CONSTANTS: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

/// Performs one ChaCha20 quarter round on four words of the state.
#[inline(always)]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(7);
}

/// Applies the 20-round ChaCha20 permutation (10 column/diagonal pairs).
fn rounds(state: &mut [u32; 16]) {
    for _ in 0..10 {
        // Column rounds
        quarter_round(state, 0, 4, 8, 12);
        quarter_round(state, 1, 5, 9, 13);
        quarter_round(state, 2, 6, 10, 14);
        quarter_round(state, 3, 7, 11, 15);

        // Diagonal rounds
        quarter_round(state, 0, 5, 10, 15);
        quarter_round(state, 1, 6, 11, 12);
        quarter_round(state, 2, 7, 8, 13);
        quarter_round(state, 3, 4, 9, 14);
    }
}

/// Reads four little-endian bytes into a word.
#[inline(always)]
fn le_word(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Generates a single 64-byte ChaCha20 keystream block.
///
/// Reusing the same `(key, counter, nonce)` tuple yields the same block;
/// callers are responsible for never doing so on secret material.
pub(crate) fn block(key: &[u8; 32], counter: u32, nonce: &[u8; 12]) -> [u8; 64] {
    let mut state = [0u32; 16];

    state[0..4].copy_from_slice(&CHACHA20_CONSTANTS);

    state[4..12]
        .iter_mut()
        .zip(key.chunks_exact(4))
        .for_each(|(s, k)| *s = le_word(k));

    state[12] = counter;

    state[13..16]
        .iter_mut()
        .zip(nonce.chunks_exact(4))
        .for_each(|(s, n)| *s = le_word(n));

    // Feed-forward
    let original = state;

    rounds(&mut state);

    state
        .iter_mut()
        .zip(&original)
        .for_each(|(s, o)| *s = s.wrapping_add(*o));

    let mut out = [0u8; 64];
    out.chunks_exact_mut(4)
        .zip(&state)
        .for_each(|(chunk, word)| chunk.copy_from_slice(&word.to_le_bytes()));

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 8439, section 2.3.2
    #[test]
    fn block_matches_rfc8439_vector() {
        let mut key = [0u8; 32];
        for (i, k) in key.iter_mut().enumerate() {
            *k = i as u8;
        }
        let nonce = [0x00, 0x00, 0x00, 0x09, 0x00, 0x00, 0x00, 0x4a, 0x00, 0x00, 0x00, 0x00];

        let out = block(&key, 1, &nonce);

        let expected: [u8; 64] = [
            0x10, 0xf1, 0xe7, 0xe4, 0xd1, 0x3b, 0x59, 0x15, 0x50, 0x0f, 0xdd, 0x1f, 0xa3, 0x20,
            0x71, 0xc4, 0xc7, 0xd1, 0xf4, 0xc7, 0x33, 0xc0, 0x68, 0x03, 0x04, 0x22, 0xaa, 0x9a,
            0xc3, 0xd4, 0x6c, 0x4e, 0xd2, 0x82, 0x64, 0x46, 0x07, 0x9f, 0xaa, 0x09, 0x14, 0xc2,
            0xd7, 0x05, 0xd9, 0x8b, 0x02, 0xa2, 0xb5, 0x12, 0x9c, 0xd1, 0xde, 0x16, 0x4e, 0xb9,
            0xcb, 0xd0, 0x83, 0xe8, 0xa2, 0x50, 0x3c, 0x4e,
        ];

        assert_eq!(out, expected);
    }

    #[test]
    fn counter_changes_block() {
        let key = [7u8; 32];
        let nonce = [0u8; 12];

        assert_ne!(block(&key, 0, &nonce), block(&key, 1, &nonce));
    }
}
