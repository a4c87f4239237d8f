//! Error type for the CBC engine.

use thiserror::Error;

/// Errors returned by [`crate::Engine`]. All of them are caused by caller input.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CbcError {
    /// Key is not 16, 24 or 32 bytes.
    #[error("invalid key length: {0}")]
    InvalidKeyLength(#[from] aes_core::InvalidKeyLength),
    /// IV is not exactly one block.
    #[error("initialization vector must be 16 bytes, got {got}")]
    InvalidIvLength {
        /// Length of the rejected IV.
        got: usize,
    },
    /// Ciphertext is empty or not a whole number of blocks.
    #[error("ciphertext length must be a non-zero multiple of 16, got {got}")]
    InvalidInput {
        /// Length of the rejected ciphertext.
        got: usize,
    },
    /// Decrypted padding is malformed.
    #[error("invalid padding")]
    InvalidPadding,
}

/// Result alias for CBC operations.
pub type Result<T> = core::result::Result<T, CbcError>;
