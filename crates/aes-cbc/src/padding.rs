//! PKCS#7 padding for 16-byte blocks.

use aes_core::BLOCK_SIZE;
use subtle::{Choice, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};

use crate::error::{CbcError, Result};

/// Returns `data` followed by `p` bytes of value `p`, where `1 <= p <= 16`.
///
/// Block-aligned input gains a full block of padding.
pub fn pad(data: &[u8]) -> Vec<u8> {
    let pad_len = BLOCK_SIZE - data.len() % BLOCK_SIZE;
    let mut padded = Vec::with_capacity(data.len() + pad_len);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad_len, pad_len as u8);
    padded
}

/// Strips PKCS#7 padding, returning the unpadded prefix of `data`.
///
/// Every byte of the final block is inspected regardless of the pad value, so
/// timing does not reveal where validation failed. Any defect is reported as
/// [`CbcError::InvalidPadding`].
pub fn unpad(data: &[u8]) -> Result<&[u8]> {
    let Some(&pad) = data.last() else {
        return Err(CbcError::InvalidPadding);
    };
    let window = data.len().min(BLOCK_SIZE);
    let tail = &data[data.len() - window..];

    let mut valid: Choice = !pad.ct_eq(&0) & !pad.ct_gt(&(window as u8));
    for (offset, byte) in tail.iter().rev().enumerate() {
        let in_pad = (offset as u8).ct_lt(&pad);
        valid &= !in_pad | byte.ct_eq(&pad);
    }

    if bool::from(valid) {
        Ok(&data[..data.len() - pad as usize])
    } else {
        Err(CbcError::InvalidPadding)
    }
}
