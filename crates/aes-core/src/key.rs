//! Key types for AES-128, AES-192 and AES-256.

use core::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::Block;

/// Largest number of rounds (AES-256), sizing the round key storage.
const MAX_ROUNDS: usize = 14;

/// Returned when key bytes are not 16, 24 or 32 bytes long.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("AES key must be 16, 24 or 32 bytes, got {len}")]
pub struct InvalidKeyLength {
    /// Length of the rejected key.
    pub len: usize,
}

/// Supported AES key sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    Aes256,
}

impl KeySize {
    /// Maps a key length in bytes to its key size.
    pub fn from_key_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(Self::Aes128),
            24 => Some(Self::Aes192),
            32 => Some(Self::Aes256),
            _ => None,
        }
    }

    /// Key length in bytes.
    pub fn key_len(self) -> usize {
        self.key_words() * 4
    }

    /// Key length in 32-bit words (`Nk`).
    pub fn key_words(self) -> usize {
        match self {
            Self::Aes128 => 4,
            Self::Aes192 => 6,
            Self::Aes256 => 8,
        }
    }

    /// Number of cipher rounds (`Nr`).
    pub fn rounds(self) -> usize {
        self.key_words() + 6
    }
}

/// AES key of any supported size. Key bytes are wiped on drop.
///
/// The `From<[u8; N]>` impls wipe the array they receive, but any copy the
/// caller still holds is the caller's to wipe. Build from a zeroizing buffer via
/// `TryFrom<&[u8]>` when that matters.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AesKey {
    bytes: [u8; 32],
    #[zeroize(skip)]
    size: KeySize,
}

impl AesKey {
    /// Size of this key.
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.size.key_len()]
    }

    fn from_parts(src: &[u8], size: KeySize) -> Self {
        let mut bytes = [0u8; 32];
        bytes[..src.len()].copy_from_slice(src);
        Self { bytes, size }
    }
}

impl TryFrom<&[u8]> for AesKey {
    type Error = InvalidKeyLength;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let len = value.len();
        let size = KeySize::from_key_len(len).ok_or(InvalidKeyLength { len })?;
        Ok(Self::from_parts(value, size))
    }
}

impl From<[u8; 16]> for AesKey {
    fn from(mut value: [u8; 16]) -> Self {
        let key = Self::from_parts(&value, KeySize::Aes128);
        value.zeroize();
        key
    }
}

impl From<[u8; 24]> for AesKey {
    fn from(mut value: [u8; 24]) -> Self {
        let key = Self::from_parts(&value, KeySize::Aes192);
        value.zeroize();
        key
    }
}

impl From<[u8; 32]> for AesKey {
    fn from(mut value: [u8; 32]) -> Self {
        let key = Self::from_parts(&value, KeySize::Aes256);
        value.zeroize();
        key
    }
}

impl fmt::Debug for AesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesKey").field("size", &self.size).finish_non_exhaustive()
    }
}

/// Expanded round keys. Only the first `rounds() + 1` entries are meaningful.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys {
    keys: [Block; MAX_ROUNDS + 1],
    #[zeroize(skip)]
    rounds: usize,
}

impl RoundKeys {
    pub(crate) fn new(keys: [Block; MAX_ROUNDS + 1], rounds: usize) -> Self {
        Self { keys, rounds }
    }

    /// Returns the round key at the requested index (`0..=rounds()`).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        debug_assert!(round <= self.rounds);
        &self.keys[round]
    }

    /// Number of cipher rounds these keys drive.
    #[inline]
    pub fn rounds(&self) -> usize {
        self.rounds
    }
}

impl fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoundKeys").field("rounds", &self.rounds).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_sizes_map_to_round_counts() {
        assert_eq!(KeySize::Aes128.rounds(), 10);
        assert_eq!(KeySize::Aes192.rounds(), 12);
        assert_eq!(KeySize::Aes256.rounds(), 14);
        assert_eq!(KeySize::Aes192.key_len(), 24);
    }

    #[test]
    fn rejects_unsupported_lengths() {
        for len in [0usize, 1, 15, 17, 20, 31, 33, 64] {
            let bytes = vec![0u8; len];
            let err = AesKey::try_from(bytes.as_slice()).unwrap_err();
            assert_eq!(err, InvalidKeyLength { len });
        }
    }

    #[test]
    fn accepts_supported_lengths() {
        for (len, size) in [(16, KeySize::Aes128), (24, KeySize::Aes192), (32, KeySize::Aes256)] {
            let bytes: Vec<u8> = (0..len as u8).collect();
            let key = AesKey::try_from(bytes.as_slice()).unwrap();
            assert_eq!(key.size(), size);
            assert_eq!(key.as_bytes(), bytes.as_slice());
        }
    }

    #[test]
    fn array_conversions_match_slice_conversion() {
        let bytes: [u8; 32] = core::array::from_fn(|i| i as u8 ^ 0x5c);
        let k128 = AesKey::from(<[u8; 16]>::try_from(&bytes[..16]).unwrap());
        let k192 = AesKey::from(<[u8; 24]>::try_from(&bytes[..24]).unwrap());
        let k256 = AesKey::from(bytes);
        assert_eq!(k128.size(), KeySize::Aes128);
        assert_eq!(k128.as_bytes(), &bytes[..16]);
        assert_eq!(k192.size(), KeySize::Aes192);
        assert_eq!(k192.as_bytes(), &bytes[..24]);
        assert_eq!(k256.as_bytes(), AesKey::try_from(&bytes[..]).unwrap().as_bytes());
    }

    #[test]
    fn debug_hides_key_material() {
        let key = AesKey::from([0xabu8; 16]);
        assert_eq!(format!("{key:?}"), "AesKey { size: Aes128, .. }");
        let rks = crate::expand_key(&key);
        assert_eq!(format!("{rks:?}"), "RoundKeys { rounds: 10, .. }");
    }
}
