//! AES-128 key expansion.

use crate::error::{Error, Result};
use crate::key::{Aes128Key, ExpandedKey, EXPANDED_KEY_SIZE, KEY_SIZE};
use crate::tables::{sub_byte, RCON};

/// Key-schedule word length in bytes.
pub const WORD_SIZE: usize = 4;

const WORD_COUNT: usize = EXPANDED_KEY_SIZE / WORD_SIZE;

fn rotate_word(word: [u8; WORD_SIZE]) -> [u8; WORD_SIZE] {
    [word[1], word[2], word[3], word[0]]
}

fn substitute_word(word: [u8; WORD_SIZE]) -> [u8; WORD_SIZE] {
    word.map(sub_byte)
}

/// The rotate/substitute/round-constant composite applied to every fourth
/// word. `rcon_index` is `i / 4` for word index `i`. Rejects words that are
/// not exactly 4 bytes; callers supply 4-byte words by construction.
fn schedule_core(word: &[u8], rcon_index: usize) -> Result<[u8; WORD_SIZE]> {
    let word: [u8; WORD_SIZE] = word.try_into().map_err(|_| Error::WordLength {
        actual: word.len(),
    })?;
    let mut out = substitute_word(rotate_word(word));
    out[0] ^= RCON[rcon_index];
    Ok(out)
}

/// Expands a 16-byte key into the 176-byte schedule of 11 round keys.
///
/// The first four words are the key itself; each later word is the word four
/// positions back XORed with its predecessor, the predecessor first passing
/// through [`schedule_core`] on every fourth word. Fails with
/// [`Error::KeyLength`] for any other key length.
pub fn expand_key(key: &[u8]) -> Result<ExpandedKey> {
    let key = Aes128Key::new(key)?;
    let mut out = [0u8; EXPANDED_KEY_SIZE];
    out[..KEY_SIZE].copy_from_slice(key.as_bytes());

    for i in 4..WORD_COUNT {
        let mut temp = [0u8; WORD_SIZE];
        temp.copy_from_slice(&out[WORD_SIZE * (i - 1)..WORD_SIZE * i]);
        if i % 4 == 0 {
            temp = schedule_core(&temp, i / 4)?;
        }
        for j in 0..WORD_SIZE {
            out[WORD_SIZE * i + j] = out[WORD_SIZE * (i - 4) + j] ^ temp[j];
        }
    }

    Ok(ExpandedKey::from_bytes(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    // FIPS-197 appendix A.1 key expansion example.
    const FIPS_KEY: [u8; 16] = [
        0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f,
        0x3c,
    ];

    #[test]
    fn schedule_starts_with_the_key() {
        let expanded = expand_key(&FIPS_KEY).unwrap();
        assert_eq!(&expanded.as_bytes()[..16], &FIPS_KEY);
    }

    #[test]
    fn matches_fips_197_expansion_words() {
        let expanded = expand_key(&FIPS_KEY).unwrap();
        // w4..w7
        assert_eq!(
            expanded.round_key(1),
            &[
                0xa0, 0xfa, 0xfe, 0x17, 0x88, 0x54, 0x2c, 0xb1, 0x23, 0xa3, 0x39, 0x39, 0x2a,
                0x6c, 0x76, 0x05
            ]
        );
        // w40..w43
        assert_eq!(
            expanded.round_key(10),
            &[
                0xd0, 0x14, 0xf9, 0xa8, 0xc9, 0xee, 0x25, 0x89, 0xe1, 0x3f, 0x0c, 0xc8, 0xb6,
                0x63, 0x0c, 0xa6
            ]
        );
    }

    #[test]
    fn schedule_core_matches_worked_example() {
        // Word w3 of the FIPS key, first application of the core.
        let out = schedule_core(&[0x09, 0xcf, 0x4f, 0x3c], 1).unwrap();
        assert_eq!(out, [0x8b, 0x84, 0xeb, 0x01]);
    }

    #[test]
    fn schedule_core_rejects_malformed_words() {
        assert_eq!(
            schedule_core(&[0x00, 0x01, 0x02], 1),
            Err(Error::WordLength { actual: 3 })
        );
        assert_eq!(
            schedule_core(&[0u8; 5], 1),
            Err(Error::WordLength { actual: 5 })
        );
    }

    #[test]
    fn rejects_keys_of_any_other_length() {
        for len in [0usize, 8, 15, 17, 24, 32] {
            let key = vec![0u8; len];
            assert_eq!(expand_key(&key), Err(Error::KeyLength { actual: len }));
        }
    }
}
