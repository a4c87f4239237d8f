//! CBC chaining over the AES block cipher.

use core::fmt;

use aes_core::{
    decrypt_block, encrypt_block, expand_key, xor_in_place, AesKey, Block, KeySize, RoundKeys,
    BLOCK_SIZE,
};

use crate::error::{CbcError, Result};
use crate::padding::{pad, unpad};

/// AES-CBC engine bound to one key.
///
/// The key schedule is expanded once at construction and only read afterwards,
/// so a single engine can be shared across threads by reference.
pub struct Engine {
    size: KeySize,
    round_keys: RoundKeys,
}

impl Engine {
    /// Builds an engine from raw key bytes (16, 24 or 32 of them).
    pub fn new(key: &[u8]) -> Result<Self> {
        let key = AesKey::try_from(key)?;
        Ok(Self::from_key(&key))
    }

    /// Builds an engine from an already validated key.
    pub fn from_key(key: &AesKey) -> Self {
        Self {
            size: key.size(),
            round_keys: expand_key(key),
        }
    }

    /// Key size selected at construction.
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Encrypts one block with no chaining or padding.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }

    /// Decrypts one block with no chaining or padding.
    pub fn decrypt_block(&self, block: &Block) -> Block {
        decrypt_block(block, &self.round_keys)
    }

    /// Pads `plaintext` with PKCS#7 and encrypts it in CBC mode.
    ///
    /// The result is always `plaintext.len()` rounded up to the next multiple
    /// of 16, plus a full block when the input is already aligned.
    pub fn encrypt(&self, iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut prev = parse_iv(iv)?;
        let padded = pad(plaintext);

        let mut ciphertext = Vec::with_capacity(padded.len());
        for chunk in padded.chunks_exact(BLOCK_SIZE) {
            let mut block = [0u8; BLOCK_SIZE];
            block.copy_from_slice(chunk);
            xor_in_place(&mut block, &prev);
            prev = self.encrypt_block(&block);
            ciphertext.extend_from_slice(&prev);
        }
        Ok(ciphertext)
    }

    /// Decrypts CBC `ciphertext` and strips its PKCS#7 padding.
    ///
    /// Nothing is returned on failure; a bad pad is reported only as
    /// [`CbcError::InvalidPadding`].
    pub fn decrypt(&self, iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut prev = parse_iv(iv)?;
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(CbcError::InvalidInput {
                got: ciphertext.len(),
            });
        }

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        for chunk in ciphertext.chunks_exact(BLOCK_SIZE) {
            let mut current = [0u8; BLOCK_SIZE];
            current.copy_from_slice(chunk);
            let mut block = self.decrypt_block(&current);
            xor_in_place(&mut block, &prev);
            plaintext.extend_from_slice(&block);
            prev = current;
        }

        let len = unpad(&plaintext)?.len();
        plaintext.truncate(len);
        Ok(plaintext)
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("key_size", &self.size)
            .finish_non_exhaustive()
    }
}

fn parse_iv(iv: &[u8]) -> Result<Block> {
    iv.try_into()
        .map_err(|_| CbcError::InvalidIvLength { got: iv.len() })
}
