//! Reference AES implementation backing the CBC engine.
//!
//! This crate mirrors the FIPS-197 specification and provides:
//! - Key sizes and key schedule for AES-128, AES-192 and AES-256.
//! - Single-block encryption and decryption.
//! - Compile-time S-box tables.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; table lookups indexed by secret bytes are not side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod key;
mod round;
mod sbox;

pub use crate::block::{xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block, expand_key};
pub use crate::key::{AesKey, InvalidKeyLength, KeySize, RoundKeys};
pub use crate::sbox::{inv_sbox, sbox};
