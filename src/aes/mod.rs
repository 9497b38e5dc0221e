//! AES modes of operation and crate-level convenience entry points.
//!
//! This module re-exports the core block primitives (`aes_core`) and the
//! three supported modes of operation (`aes_ecb`, `aes_cbc`, `aes_ctr`), and
//! adds a small `CipherMode`-dispatching `encrypt`/`decrypt` pair on top of
//! them for callers that want to pick a mode at runtime rather than calling
//! a specific `aes_enc_*`/`aes_dec_*` function directly.

mod aes_cbc;
mod aes_core;
mod aes_ctr;
mod aes_ecb;

pub use aes_cbc::*;
pub use aes_core::*;
pub use aes_ctr::*;
pub use aes_ecb::*;

#[cfg(test)]
mod tests;

use std::error::Error;

/// The mode of operation to use when encrypting or decrypting a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode {
    /// Electronic Codebook: independent block encryption, no chaining.
    Ecb,
    /// Cipher Block Chaining: each block is XORed with the previous
    /// ciphertext block (or the IV) before encryption.
    Cbc,
    /// Counter mode: a keystream generated from a nonce and an incrementing
    /// counter is XORed with the data. No padding is used.
    Ctr,
}

/// Encrypt `plaintext` under `key` using the given mode.
///
/// `iv` is required for CBC and CTR and ignored for ECB. `padding` is
/// forwarded to the ECB/CBC drivers and ignored for CTR, which never pads.
pub fn encrypt(
    key: &[u8],
    plaintext: &[u8],
    mode: CipherMode,
    iv: &[u8; AES_BLOCK_SIZE],
    padding: Option<&str>,
) -> Result<Vec<u8>, Box<dyn Error>> {
    match mode {
        CipherMode::Ecb => aes_enc_ecb(plaintext, key, padding),
        CipherMode::Cbc => aes_enc_cbc(plaintext, key, iv, padding),
        CipherMode::Ctr => aes_enc_ctr(plaintext, key, iv),
    }
}

/// Decrypt `ciphertext` under `key` using the given mode.
///
/// See [`encrypt`] for the meaning of `iv` and `padding`.
pub fn decrypt(
    key: &[u8],
    ciphertext: &[u8],
    mode: CipherMode,
    iv: &[u8; AES_BLOCK_SIZE],
    padding: Option<&str>,
) -> Result<Vec<u8>, Box<dyn Error>> {
    match mode {
        CipherMode::Ecb => aes_dec_ecb(ciphertext, key, padding),
        CipherMode::Cbc => aes_dec_cbc(ciphertext, key, iv, padding),
        CipherMode::Ctr => aes_dec_ctr(ciphertext, key, iv),
    }
}

#[cfg(test)]
mod dispatch_tests {
    use super::*;

    #[test]
    fn encrypt_decrypt_round_trip_all_modes() {
        let key = b"0123456789abcdef";
        let iv: [u8; 16] = *b"0123456789abcdef";
        let plaintext = b"Dispatch through CipherMode.";

        for mode in [CipherMode::Ecb, CipherMode::Cbc, CipherMode::Ctr] {
            let padding = if mode == CipherMode::Ctr {
                None
            } else {
                Some("PKCS7")
            };
            let ciphertext = encrypt(key, plaintext, mode, &iv, padding).unwrap();
            let decrypted = decrypt(key, &ciphertext, mode, &iv, padding).unwrap();
            assert_eq!(decrypted, plaintext);
        }
    }
}
