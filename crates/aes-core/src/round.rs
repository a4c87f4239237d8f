//! AES round transformations.
//!
//! The state is the 16-byte block read column-major: byte `4 * c + r` sits at
//! row `r`, column `c`.

use crate::block::{xor_in_place, Block};
use crate::sbox::{inv_sbox, sbox};

/// Source index for each output byte of ShiftRows: row `r` rotates left by `r`.
const SHIFT_ROWS: [usize; 16] = [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11];

/// Source index for each output byte of InvShiftRows: row `r` rotates right by `r`.
const INV_SHIFT_ROWS: [usize; 16] = [0, 13, 10, 7, 4, 1, 14, 11, 8, 5, 2, 15, 12, 9, 6, 3];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
}

#[inline]
fn permute(state: &mut Block, sources: &[usize; 16]) {
    let src = *state;
    for (dst, &idx) in state.iter_mut().zip(sources.iter()) {
        *dst = src[idx];
    }
}

/// Performs ShiftRows in place.
#[inline]
pub fn shift_rows(state: &mut Block) {
    permute(state, &SHIFT_ROWS);
}

/// Performs the inverse of ShiftRows in place.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    permute(state, &INV_SHIFT_ROWS);
}

/// Multiplies by `x` in GF(2^8) modulo `x^8 + x^4 + x^3 + x + 1`.
#[inline]
fn xtime(byte: u8) -> u8 {
    (byte << 1) ^ if byte & 0x80 != 0 { 0x1b } else { 0 }
}

/// General GF(2^8) multiplication.
fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// MixColumns: each column multiplied by the circulant `[02 03 01 01]`.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
        let all = a0 ^ a1 ^ a2 ^ a3;
        col[0] ^= all ^ xtime(a0 ^ a1);
        col[1] ^= all ^ xtime(a1 ^ a2);
        col[2] ^= all ^ xtime(a2 ^ a3);
        col[3] ^= all ^ xtime(a3 ^ a0);
    }
}

/// InvMixColumns: each column multiplied by the circulant `[0e 0b 0d 09]`.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
        col[0] = gmul(a0, 0x0e) ^ gmul(a1, 0x0b) ^ gmul(a2, 0x0d) ^ gmul(a3, 0x09);
        col[1] = gmul(a0, 0x09) ^ gmul(a1, 0x0e) ^ gmul(a2, 0x0b) ^ gmul(a3, 0x0d);
        col[2] = gmul(a0, 0x0d) ^ gmul(a1, 0x09) ^ gmul(a2, 0x0e) ^ gmul(a3, 0x0b);
        col[3] = gmul(a0, 0x0b) ^ gmul(a1, 0x0d) ^ gmul(a2, 0x09) ^ gmul(a3, 0x0e);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> Block {
        core::array::from_fn(|i| (i as u8).wrapping_mul(17).wrapping_add(3))
    }

    #[test]
    fn mix_columns_matches_known_column() {
        // FIPS-197 worked example column: db 13 53 45 -> 8e 4d a1 bc
        let mut state = [0u8; 16];
        state[..4].copy_from_slice(&[0xdb, 0x13, 0x53, 0x45]);
        mix_columns(&mut state);
        assert_eq!(&state[..4], &[0x8e, 0x4d, 0xa1, 0xbc]);
    }

    #[test]
    fn inverse_transforms_undo_forward() {
        let original = sample_state();

        let mut state = original;
        shift_rows(&mut state);
        inv_shift_rows(&mut state);
        assert_eq!(state, original);

        mix_columns(&mut state);
        inv_mix_columns(&mut state);
        assert_eq!(state, original);

        sub_bytes(&mut state);
        inv_sub_bytes(&mut state);
        assert_eq!(state, original);
    }

    #[test]
    fn gmul_agrees_with_xtime() {
        for b in 0u8..=255 {
            assert_eq!(gmul(b, 2), xtime(b));
            assert_eq!(gmul(b, 3), xtime(b) ^ b);
            assert_eq!(gmul(b, 1), b);
        }
    }
}
