//! Single-block encryption and decryption pipelines.

use crate::error::Result;
use crate::key::{ExpandedKey, ROUNDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::state::{Block, State};

/// Whether a block transform runs the forward or the inverse pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Forward pipeline: plaintext to ciphertext.
    Encrypt,
    /// Inverse pipeline: ciphertext to plaintext.
    Decrypt,
}

/// Runs one state through the full 10-round pipeline in the given direction.
///
/// A deterministic map from (state, expanded key, direction) to a new state;
/// no other input is consulted.
pub fn cipher_block(state: &State, expanded: &ExpandedKey, direction: Direction) -> Result<State> {
    match direction {
        Direction::Encrypt => encrypt_state(state, expanded),
        Direction::Decrypt => decrypt_state(state, expanded),
    }
}

fn encrypt_state(state: &State, keys: &ExpandedKey) -> Result<State> {
    let mut state = add_round_key(state, keys.round_key(0))?;

    for round in 1..ROUNDS {
        state = sub_bytes(&state);
        state = shift_rows(&state);
        state = mix_columns(&state);
        state = add_round_key(&state, keys.round_key(round))?;
    }

    // The final round has no MixColumns.
    state = sub_bytes(&state);
    state = shift_rows(&state);
    add_round_key(&state, keys.round_key(ROUNDS))
}

fn decrypt_state(state: &State, keys: &ExpandedKey) -> Result<State> {
    let mut state = add_round_key(state, keys.round_key(ROUNDS))?;

    for round in (1..ROUNDS).rev() {
        state = inv_shift_rows(&state);
        state = inv_sub_bytes(&state);
        state = add_round_key(&state, keys.round_key(round))?;
        state = inv_mix_columns(&state);
    }

    state = inv_shift_rows(&state);
    state = inv_sub_bytes(&state);
    add_round_key(&state, keys.round_key(0))
}

/// Encrypts a single 16-byte block with a pre-expanded key.
pub fn encrypt_block(block: &Block, expanded: &ExpandedKey) -> Result<Block> {
    cipher_block(&State::from_block(block), expanded, Direction::Encrypt).map(|s| s.to_block())
}

/// Decrypts a single 16-byte block with a pre-expanded key.
pub fn decrypt_block(block: &Block, expanded: &ExpandedKey) -> Result<Block> {
    cipher_block(&State::from_block(block), expanded, Direction::Decrypt).map(|s| s.to_block())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::expand_key;
    use rand::RngCore;

    const NIST_KEY: [u8; 16] = [
        0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
        0x0f,
    ];
    const NIST_PLAIN: [u8; 16] = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const NIST_CIPHER: [u8; 16] = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];

    #[test]
    fn encrypt_matches_nist_vector() {
        let expanded = expand_key(&NIST_KEY).unwrap();
        let ct = encrypt_block(&NIST_PLAIN, &expanded).unwrap();
        assert_eq!(ct, NIST_CIPHER);
    }

    #[test]
    fn decrypt_matches_nist_vector() {
        let expanded = expand_key(&NIST_KEY).unwrap();
        let pt = decrypt_block(&NIST_CIPHER, &expanded).unwrap();
        assert_eq!(pt, NIST_PLAIN);
    }

    #[test]
    fn cipher_block_directions_mirror_each_other() {
        let expanded = expand_key(&NIST_KEY).unwrap();
        let state = State::from_block(&NIST_PLAIN);
        let forward = cipher_block(&state, &expanded, Direction::Encrypt).unwrap();
        let back = cipher_block(&forward, &expanded, Direction::Decrypt).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn encrypt_decrypt_round_trip_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let expanded = expand_key(&key_bytes).unwrap();
            let ct = encrypt_block(&block, &expanded).unwrap();
            let pt = decrypt_block(&ct, &expanded).unwrap();
            assert_eq!(pt, block);
        }
    }
}
