//! Forward and inverse S-box tables, generated at compile time.

/// Forward substitution table.
pub(crate) const SBOX: [u8; 256] = build_sbox();

/// Inverse substitution table.
pub(crate) const INV_SBOX: [u8; 256] = invert(&SBOX);

/// Walks the multiplicative group of GF(2^8) with generator 3, pairing each
/// element `p` with its inverse `q`, then applies the affine transform to `q`.
const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut p: u8 = 1;
    let mut q: u8 = 1;
    loop {
        // p *= 3
        p = p ^ (p << 1) ^ if p & 0x80 != 0 { 0x1b } else { 0 };

        // q /= 3
        q ^= q << 1;
        q ^= q << 2;
        q ^= q << 4;
        if q & 0x80 != 0 {
            q ^= 0x09;
        }

        let affine =
            q ^ q.rotate_left(1) ^ q.rotate_left(2) ^ q.rotate_left(3) ^ q.rotate_left(4);
        table[p as usize] = affine ^ 0x63;

        if p == 1 {
            break;
        }
    }
    // zero has no inverse
    table[0] = 0x63;
    table
}

const fn invert(forward: &[u8; 256]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[forward[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Substitutes a byte through the AES S-box.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    SBOX[byte as usize]
}

/// Substitutes a byte through the inverse AES S-box.
#[inline]
pub fn inv_sbox(byte: u8) -> u8 {
    INV_SBOX[byte as usize]
}
