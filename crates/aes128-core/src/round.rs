//! Round transformations, each a pure map from one state to the next.

use crate::error::{Error, Result};
use crate::gf::multiply;
use crate::state::{State, BLOCK_SIZE};
use crate::tables::{inv_sub_byte, sub_byte, INV_MIX_MATRIX, MIX_MATRIX};

/// Substitutes every state byte through the forward S-box.
pub(crate) fn sub_bytes(state: &State) -> State {
    State(state.0.map(|row| row.map(sub_byte)))
}

/// Substitutes every state byte through the inverse S-box.
pub(crate) fn inv_sub_bytes(state: &State) -> State {
    State(state.0.map(|row| row.map(inv_sub_byte)))
}

/// Rotates row `r` left by `r` positions; row 0 is untouched.
pub(crate) fn shift_rows(state: &State) -> State {
    let mut rows = [[0u8; 4]; 4];
    for (r, row) in rows.iter_mut().enumerate() {
        for (c, byte) in row.iter_mut().enumerate() {
            *byte = state.0[r][(c + r) % 4];
        }
    }
    State(rows)
}

/// Rotates row `r` right by `r` positions; the exact inverse of [`shift_rows`].
pub(crate) fn inv_shift_rows(state: &State) -> State {
    let mut rows = [[0u8; 4]; 4];
    for (r, row) in rows.iter_mut().enumerate() {
        for (c, byte) in row.iter_mut().enumerate() {
            *byte = state.0[r][(c + 4 - r) % 4];
        }
    }
    State(rows)
}

fn mix_with(state: &State, matrix: &[[u8; 4]; 4]) -> State {
    let mut rows = [[0u8; 4]; 4];
    for col in 0..4 {
        for row in 0..4 {
            let mut acc = 0u8;
            for k in 0..4 {
                acc ^= multiply(matrix[row][k], state.0[k][col]);
            }
            rows[row][col] = acc;
        }
    }
    State(rows)
}

/// Replaces each column with its product against the forward mixing matrix
/// in GF(2^8).
pub(crate) fn mix_columns(state: &State) -> State {
    mix_with(state, &MIX_MATRIX)
}

/// Replaces each column with its product against the inverse mixing matrix.
pub(crate) fn inv_mix_columns(state: &State) -> State {
    mix_with(state, &INV_MIX_MATRIX)
}

/// XORs a 16-byte round key into the state, column-major to match the state
/// layout. Rejects round keys of any other length; unreachable through
/// [`crate::ExpandedKey`], which only hands out 16-byte views.
pub(crate) fn add_round_key(state: &State, round_key: &[u8]) -> Result<State> {
    if round_key.len() != BLOCK_SIZE {
        return Err(Error::RoundKeyLength {
            actual: round_key.len(),
        });
    }
    let mut rows = state.0;
    for (i, &byte) in round_key.iter().enumerate() {
        rows[i % 4][i / 4] ^= byte;
    }
    Ok(State(rows))
}
