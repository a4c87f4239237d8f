//! Encrypts a short string with AES-128-CBC and prints the ciphertext as hex.
//!
//! Key and IV are raw bytes supplied by the caller; deriving them from a
//! passphrase is outside the engine.

use aes_cbc::Engine;
use anyhow::{bail, Context, Result};

const KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const IV: &str = "000102030405060708090a0b0c0d0e0f";
const MESSAGE: &[u8] = b"1";

fn main() -> Result<()> {
    let key = hex::decode(KEY).context("decode key hex")?;
    let iv = hex::decode(IV).context("decode iv hex")?;

    let engine = Engine::new(&key).context("build engine")?;
    let ciphertext = engine.encrypt(&iv, MESSAGE).context("encrypt")?;
    println!("ciphertext: {}", hex::encode(&ciphertext));

    let decrypted = engine.decrypt(&iv, &ciphertext).context("decrypt")?;
    if decrypted != MESSAGE {
        bail!("round trip failed");
    }
    println!("decrypted: {}", String::from_utf8_lossy(&decrypted));
    Ok(())
}
