//! Key types for AES-128.

use crate::error::{Error, Result};
use crate::state::BLOCK_SIZE;

/// Key length in bytes (128 bits).
pub const KEY_SIZE: usize = 16;

/// Number of cipher rounds for a 128-bit key.
pub const ROUNDS: usize = 10;

/// Expanded key length in bytes: one round key per round plus the initial one.
pub const EXPANDED_KEY_SIZE: usize = BLOCK_SIZE * (ROUNDS + 1);

/// AES-128 key, validated to exactly 16 bytes and immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key([u8; KEY_SIZE]);

impl Aes128Key {
    /// Accepts a key of exactly [`KEY_SIZE`] bytes.
    pub fn new(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| Error::KeyLength {
            actual: bytes.len(),
        })?;
        Ok(Self(bytes))
    }

    /// Returns the raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; KEY_SIZE]> for Aes128Key {
    fn from(value: [u8; KEY_SIZE]) -> Self {
        Self(value)
    }
}

/// The full key schedule: 44 four-byte words, equivalently 11 round keys.
///
/// Computed once per key and read-only afterwards, so one schedule can be
/// shared across all blocks of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpandedKey([u8; EXPANDED_KEY_SIZE]);

impl ExpandedKey {
    pub(crate) fn from_bytes(bytes: [u8; EXPANDED_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns the 16-byte round key at offset `round * 16`, `round` in 0..=10.
    #[inline]
    pub fn round_key(&self, round: usize) -> &[u8] {
        &self.0[round * BLOCK_SIZE..(round + 1) * BLOCK_SIZE]
    }

    /// Returns the whole 176-byte schedule.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
