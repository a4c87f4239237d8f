//! AES in cipher block chaining mode with PKCS#7 padding.
//!
//! [`Engine`] owns an expanded key schedule for AES-128, AES-192 or AES-256
//! and exposes two pure operations:
//! - [`Engine::encrypt`] pads the plaintext and chains blocks from the IV.
//! - [`Engine::decrypt`] reverses the chaining and strips the padding.
//!
//! The engine performs no I/O. Textual encodings of ciphertext are left to the
//! caller.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod engine;
mod error;
pub mod padding;

pub use aes_core::{AesKey, Block, KeySize, BLOCK_SIZE};

pub use crate::engine::Engine;
pub use crate::error::{CbcError, Result};
