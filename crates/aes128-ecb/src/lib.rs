//! Message-level adapter over the AES-128 block cipher core.
//!
//! Splits an arbitrary-length message into 16-byte blocks, zero-padding the
//! final partial block, and runs every block independently through the block
//! cipher with one shared expanded key, reassembling outputs in input order.
//!
//! Two properties are inherent to this scheme and preserved deliberately:
//! - Blocks are independent (electronic-codebook usage). There is no chaining
//!   value or IV, so identical plaintext blocks under the same key produce
//!   identical ciphertext blocks.
//! - The zero padding carries no length marker. Decryption cannot distinguish
//!   genuine trailing zero bytes from padding; callers own the true plaintext
//!   length.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use aes128_core::{
    cipher_block, expand_key, Block, Direction, ExpandedKey, Result, State, BLOCK_SIZE,
};

/// An AES-128 session holding one expanded key.
///
/// The key schedule runs once in [`Aes128Ecb::new`]; afterwards it is shared
/// read-only across every block of every message, so a session can be reused
/// for any number of transforms.
pub struct Aes128Ecb {
    expanded: ExpandedKey,
}

impl Aes128Ecb {
    /// Expands a 16-byte key into a reusable session.
    ///
    /// Fails with [`aes128_core::Error::KeyLength`] for any other key length.
    pub fn new(key: &[u8]) -> Result<Self> {
        Ok(Self {
            expanded: expand_key(key)?,
        })
    }

    /// Encrypts a message of any length.
    ///
    /// The ciphertext length is the message length rounded up to the next
    /// multiple of 16.
    pub fn encrypt(&self, message: &[u8]) -> Result<Vec<u8>> {
        self.transform(message, Direction::Encrypt)
    }

    /// Decrypts a message, zero-padding non-block-multiple input first,
    /// exactly as on encryption. Output length equals the padded input length.
    pub fn decrypt(&self, message: &[u8]) -> Result<Vec<u8>> {
        self.transform(message, Direction::Decrypt)
    }

    /// Runs every block of `message` through the cipher in `direction`.
    ///
    /// The first failing block aborts the whole transform; no partial output
    /// is returned.
    pub fn transform(&self, message: &[u8], direction: Direction) -> Result<Vec<u8>> {
        let padded = pad_to_block_multiple(message);
        let mut out = Vec::with_capacity(padded.len());
        for chunk in padded.chunks_exact(BLOCK_SIZE) {
            let block: Block = chunk.try_into().expect("chunk length is sixteen");
            let transformed = cipher_block(&State::from_block(&block), &self.expanded, direction)?;
            out.extend_from_slice(&transformed.to_block());
        }
        Ok(out)
    }

    /// Returns the session's expanded key.
    pub fn expanded_key(&self) -> &ExpandedKey {
        &self.expanded
    }
}

/// Copies `message` and extends it with trailing zero bytes up to the next
/// multiple of the block size. Already-aligned input (including empty input)
/// is returned unchanged.
fn pad_to_block_multiple(message: &[u8]) -> Vec<u8> {
    let mut padded = message.to_vec();
    let remainder = padded.len() % BLOCK_SIZE;
    if remainder != 0 {
        padded.resize(padded.len() + BLOCK_SIZE - remainder, 0);
    }
    padded
}

/// One-shot transform: expands `key` once, then processes `message`.
pub fn transform(message: &[u8], key: &[u8], direction: Direction) -> Result<Vec<u8>> {
    Aes128Ecb::new(key)?.transform(message, direction)
}

/// Encrypts `message` under `key`; see [`Aes128Ecb::encrypt`].
pub fn encrypt(message: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    transform(message, key, Direction::Encrypt)
}

/// Decrypts `ciphertext` under `key`; see [`Aes128Ecb::decrypt`].
pub fn decrypt(ciphertext: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    transform(ciphertext, key, Direction::Decrypt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aes128_core::Error;
    use rand::{Rng, RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn single_block_matches_nist_vector() {
        let key = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
        let plaintext = hex::decode("00112233445566778899aabbccddeeff").unwrap();
        let ciphertext = encrypt(&plaintext, &key).unwrap();
        assert_eq!(hex::encode(&ciphertext), "69c4e0d86a7b0430d8cdb78070b4c55a");
        assert_eq!(decrypt(&ciphertext, &key).unwrap(), plaintext);
    }

    #[test]
    fn partial_final_block_is_zero_padded() {
        let key = [0x42u8; 16];
        let message = [0xaau8; 17];
        let ciphertext = encrypt(&message, &key).unwrap();
        assert_eq!(ciphertext.len(), 32);

        let decrypted = decrypt(&ciphertext, &key).unwrap();
        assert_eq!(&decrypted[..17], &message);
        assert_eq!(&decrypted[17..], &[0u8; 15]);
    }

    #[test]
    fn empty_message_produces_empty_output() {
        let key = [0u8; 16];
        assert!(encrypt(&[], &key).unwrap().is_empty());
        assert!(decrypt(&[], &key).unwrap().is_empty());
    }

    #[test]
    fn identical_plaintext_blocks_give_identical_ciphertext_blocks() {
        let key = [0x07u8; 16];
        let mut message = [0u8; 48];
        message[..16].copy_from_slice(b"same sixteen b..");
        message[16..32].copy_from_slice(b"other data here!");
        message[32..].copy_from_slice(b"same sixteen b..");

        let ciphertext = encrypt(&message, &key).unwrap();
        assert_eq!(&ciphertext[..16], &ciphertext[32..]);
        assert_ne!(&ciphertext[..16], &ciphertext[16..32]);
    }

    #[test]
    fn decrypt_pads_short_input_like_encrypt() {
        let key = [0x11u8; 16];
        let short = [0x5au8; 20];
        let mut padded = short.to_vec();
        padded.resize(32, 0);
        assert_eq!(
            decrypt(&short, &key).unwrap(),
            decrypt(&padded, &key).unwrap()
        );
    }

    #[test]
    fn rejects_bad_key_lengths_at_every_entry_point() {
        let message = [0u8; 16];
        assert_eq!(
            encrypt(&message, &[0u8; 15]).unwrap_err(),
            Error::KeyLength { actual: 15 }
        );
        assert_eq!(
            decrypt(&message, &[0u8; 24]).unwrap_err(),
            Error::KeyLength { actual: 24 }
        );
        assert!(Aes128Ecb::new(&[0u8; 0]).is_err());
    }

    #[test]
    fn session_round_trips_random_messages() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        let mut key = [0u8; 16];
        rng.fill_bytes(&mut key);
        let cipher = Aes128Ecb::new(&key).unwrap();

        for _ in 0..50 {
            let len = rng.gen_range(0..200);
            let mut message = vec![0u8; len];
            rng.fill_bytes(&mut message);

            let ciphertext = cipher.encrypt(&message).unwrap();
            assert_eq!(ciphertext.len() % 16, 0);
            assert!(ciphertext.len() >= message.len());

            let decrypted = cipher.decrypt(&ciphertext).unwrap();
            assert_eq!(&decrypted[..message.len()], &message[..]);
            assert!(decrypted[message.len()..].iter().all(|&b| b == 0));
        }
    }
}
