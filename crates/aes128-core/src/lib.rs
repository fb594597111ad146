//! AES-128 block cipher core mirroring the FIPS-197 specification.
//!
//! This crate provides:
//! - Key schedule for AES-128 (176-byte expanded key, 11 round keys).
//! - The forward and inverse round-transformation pipelines over one block.
//! - The GF(2^8) arithmetic and fixed tables behind the diffusion step.
//!
//! Every operation is a deterministic map from immutable inputs to a new
//! value; size violations surface as explicit [`Error`] results rather than
//! cipher state. The implementation aims for clarity and testability rather
//! than constant-time guarantees; it should not be treated as side-channel
//! hardened, and it knows nothing of chaining modes or padding schemes.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod error;
mod gf;
mod key;
mod round;
mod schedule;
mod state;
mod tables;

pub use crate::cipher::{cipher_block, decrypt_block, encrypt_block, Direction};
pub use crate::error::{Error, Result};
pub use crate::key::{Aes128Key, ExpandedKey, EXPANDED_KEY_SIZE, KEY_SIZE, ROUNDS};
pub use crate::schedule::{expand_key, WORD_SIZE};
pub use crate::state::{Block, State, BLOCK_SIZE};
