//! AES Encryption and Decryption in CTR Mode
//!
//! This module provides functionality for encrypting and decrypting data using
//! the Advanced Encryption Standard (AES) in Counter (CTR) mode.
//!
//! CTR mode turns the AES block cipher into a stream cipher: a 16-byte counter
//! block built from a nonce and an incrementing counter is encrypted under the
//! given key to produce a keystream, which is then XORed with the input. No
//! block-size alignment or padding is required, and encryption and decryption
//! are the same operation.
//!
//! # Features
//!
//! - `aes_enc_ctr`: Encrypts (or decrypts) data using AES in CTR mode.
//! - `aes_dec_ctr`: Provided separately for API symmetry with the ECB/CBC
//!   driver pairing; internally it calls the same keystream routine as
//!   `aes_enc_ctr`.
//!
//! # Usage
//!
//! The 16-byte `iv` is split into an 8-byte nonce (`iv[0..8]`) and an 8-byte
//! big-endian initial counter (`iv[8..16]`). The nonce is held fixed for the
//! whole stream; the counter is incremented by one for every 16-byte
//! keystream block produced. Callers are responsible for ensuring the
//! (key, nonce, counter) triple is never reused.
//!
//! # Example
//!
//! ```
//! use soft_aes::aes::{aes_enc_ctr, aes_dec_ctr};
//!
//! let plaintext = b"Example plaintext.";
//! let key = b"Very secret key.";
//! let iv = b"Random Init Vec."; // 8-byte nonce + 8-byte counter
//!
//! let encrypted = aes_enc_ctr(plaintext, key, iv).expect("Encryption failed");
//! let decrypted = aes_dec_ctr(&encrypted, key, iv).expect("Decryption failed");
//!
//! assert_eq!(decrypted, plaintext);
//! ```
//!
//! # Disclaimer
//!
//! - CTR mode provides no authentication or integrity checking on its own.
//!   Reusing a (key, nonce, counter) triple for two different messages
//!   completely breaks confidentiality.

use super::aes_core::*;

use std::error::Error;

/// Encrypt (or decrypt) data using AES in CTR mode.
///
/// # Parameters
/// - `data`: The plaintext to encrypt, or the ciphertext to decrypt — CTR
///           mode applies the identical transformation in both directions.
/// - `key`: The AES key.
/// - `iv`: A 16-byte value; the first 8 bytes are the nonce, the last 8 bytes
///         are the big-endian initial counter.
///
/// # Returns
/// Returns a `Result<Vec<u8>, Box<dyn Error>>` containing the transformed
/// data or an error.
pub fn aes_enc_ctr(
    data: &[u8],
    key: &[u8],
    iv: &[u8; AES_BLOCK_SIZE],
) -> Result<Vec<u8>, Box<dyn Error>> {
    let nonce = &iv[0..8];
    let mut counter = u64::from_be_bytes(iv[8..16].try_into().unwrap());

    let mut output = Vec::with_capacity(data.len());

    for chunk in data.chunks(AES_BLOCK_SIZE) {
        let mut counter_block = [0u8; AES_BLOCK_SIZE];
        counter_block[0..8].copy_from_slice(nonce);
        counter_block[8..16].copy_from_slice(&counter.to_be_bytes());

        let keystream = aes_enc_block(&counter_block, key)?;

        for (d, k) in chunk.iter().zip(keystream.iter()) {
            output.push(*d ^ *k);
        }

        counter = counter.wrapping_add(1);
    }

    Ok(output)
}

/// Decrypt data using AES in CTR mode.
///
/// CTR mode is its own inverse: this is a thin alias over [`aes_enc_ctr`],
/// kept as a separate function for API symmetry with the ECB/CBC driver
/// pairing.
pub fn aes_dec_ctr(
    data: &[u8],
    key: &[u8],
    iv: &[u8; AES_BLOCK_SIZE],
) -> Result<Vec<u8>, Box<dyn Error>> {
    aes_enc_ctr(data, key, iv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctr_round_trip() {
        let key = b"0123456789abcdef";
        let iv: [u8; 16] = *b"nonce-and-count!";
        let plaintext = b"CTR mode turns a block cipher into a stream cipher.";

        let ciphertext = aes_enc_ctr(plaintext, key, &iv).unwrap();
        assert_ne!(ciphertext, plaintext);
        let decrypted = aes_dec_ctr(&ciphertext, key, &iv).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn ctr_handles_partial_final_block() {
        let key = b"0123456789abcdef";
        let iv: [u8; 16] = [0u8; 16];
        let plaintext = b"13 bytes here";
        assert_eq!(plaintext.len(), 13);

        let ciphertext = aes_enc_ctr(plaintext, key, &iv).unwrap();
        assert_eq!(ciphertext.len(), plaintext.len());
        assert_eq!(aes_dec_ctr(&ciphertext, key, &iv).unwrap(), plaintext);
    }

    #[test]
    fn ctr_is_symmetric() {
        let key = b"0123456789abcdef";
        let iv: [u8; 16] = [1u8; 16];
        let plaintext = vec![0x42u8; 48];

        let once = aes_enc_ctr(&plaintext, key, &iv).unwrap();
        let twice = aes_enc_ctr(&once, key, &iv).unwrap();
        assert_eq!(twice, plaintext);
    }

    // NIST SP800-38A F.5.1 (AES-128 CTR)
    #[test]
    fn aes128_ctr_nist_sp800_38a() {
        let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
        let key = key.as_slice();
        let iv: [u8; 16] = hex::decode("f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff")
            .unwrap()
            .try_into()
            .unwrap();
        let plaintext = hex::decode(concat!(
            "6bc1bee22e409f96e93d7e117393172a",
            "ae2d8a571e03ac9c9eb76fac45af8e51"
        ))
        .unwrap();
        let expected = hex::decode(concat!(
            "874d6191b620e3261bef6864990db6ce",
            "9806f66b7970fdff8617187bb9fffdff"
        ))
        .unwrap();

        let ciphertext = aes_enc_ctr(&plaintext, key, &iv).unwrap();
        assert_eq!(ciphertext, expected);
        assert_eq!(aes_dec_ctr(&ciphertext, key, &iv).unwrap(), plaintext);
    }
}
