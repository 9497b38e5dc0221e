//! AES Core Implementation
//!
//! This module provides core functionalities for the AES (Advanced Encryption
//! Standard) algorithm. It includes implementations for both encryption and
//! decryption processes along with the necessary auxiliary functions.
//!
//! The implementation follows a software-based approach, primarily utilizing
//! lookup tables for operations such as S-box transformations. While the method
//! ensures accuracy, it might not be optimized for high perfomance in terms of
//! speed and memory usage.
//!
//! # Disclaimer
//!
//! This implementation is provided "as is", without warranty of any kind,
//! express or implied. The author(s) or contributor(s) are not responsible for
//! any consequences arising from the use or misuse of this code. Users are
//! encouraged to understand and evaluate the suitability of this code for
//! their purposes, especially in critical or sensitive systems.
//!
//! # Features
//!
//! - Supports AES-128, AES-192, and AES-256 key sizes.
//! - Implements key expansion routine for generating round keys from the
//!   initial cipher key.
//! - Provides functions for each step of the AES algorithm, including:
//!     - `sub_bytes` and `inv_sub_bytes` for the SubBytes and InvSubBytes
//!        steps (byte substitution).
//!     - `shift_rows` and `inv_shift_rows` for the ShiftRows and InvShiftRows
//!        steps.
//!     - `mix_columns` and `inv_mix_columns` for the MixColumns and
//!        InvMixColumns steps.
//!     - `add_round_key` for the AddRoundKey step.
//! - Contains the main functions `aes_enc_block` and `aes_dec_block` for block
//!   encryption and decryption.
//!
//! # Usage
//!
//! This module is intended to be used as part of a larger AES implementation.
//! It handles the core operations of the AES algorithm but does not include
//! modes of operation like ECB, CBC, CTR, etc. Users of this module need to
//! handle padding, chaining, and other aspects relevant to their specific use
//! case.
//!
//! # Examples
//!
//! Basic usage for encrypting and decrypting a single block for AES-128
//!
//! ```
//! use soft_aes::aes::{aes_enc_block, aes_dec_block, AES_BLOCK_SIZE, AES_128_KEY_SIZE};
//!
//! let plaintext: [u8; AES_BLOCK_SIZE] = [
//!     0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
//!     0x00, 0x00,
//! ];
//! let key: [u8; AES_128_KEY_SIZE] = [
//!     0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd,
//!     0xee, 0xff,
//! ];
//! let expected_ciphertext: [u8; AES_BLOCK_SIZE] = [
//!     0xfd, 0xe4, 0xfb, 0xae, 0x4a, 0x09, 0xe0, 0x20, 0xef, 0xf7, 0x22, 0x96, 0x9f, 0x83,
//!     0x83, 0x2b,
//! ];
//!
//! let ciphertext = aes_enc_block(&plaintext, &key).expect("Encryption failed");
//! assert_eq!(ciphertext, expected_ciphertext);
//!
//! let decrypted = aes_dec_block(&ciphertext, &key).expect("Decryption failed");
//! assert_eq!(decrypted, plaintext);
//! ```
//!
//! # Notes
//! - The test vectors used in unit tests are sourced from FIPS-197 Appendix B
//!   and NIST SP800-38A, as well as https://www.cryptool.org/en/cto/aes-step-by-step.
//! - The implementation follows the principles outlined in "The Design of
//!   Rijndael: AES - The Advanced Encryption Standard" by Joan Daemen and
//!   Vincent Rijmen, Second Edition, 2020. However, some modifications have
//!   been made to adapt the algorithm to specific requirements.
//! - Notably, the round keys are stored and managed using a fixed byte buffer
//!   instead of a multi-dimensional array as traditionally specified.

use std::error::Error;

use crate::error::AesError;

// AES block size is fixed at 16 bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// AES key size constants define the key sizes used in the AES algorithm for
/// the three standard variations of AES.
pub const AES_128_KEY_SIZE: usize = 16;
pub const AES_192_KEY_SIZE: usize = 24;
pub const AES_256_KEY_SIZE: usize = 32;

// The number of columns comprising a state in AES.
const NB: usize = 4;

/// The S-box is a substitution box used in the SubBytes step of the AES
/// encryption process.
const S_BOX: [u8; 256] = [
    0x63, 0x7c, 0x77, 0x7b, 0xf2, 0x6b, 0x6f, 0xc5, 0x30, 0x01, 0x67, 0x2b, 0xfe, 0xd7, 0xab, 0x76,
    0xca, 0x82, 0xc9, 0x7d, 0xfa, 0x59, 0x47, 0xf0, 0xad, 0xd4, 0xa2, 0xaf, 0x9c, 0xa4, 0x72, 0xc0,
    0xb7, 0xfd, 0x93, 0x26, 0x36, 0x3f, 0xf7, 0xcc, 0x34, 0xa5, 0xe5, 0xf1, 0x71, 0xd8, 0x31, 0x15,
    0x04, 0xc7, 0x23, 0xc3, 0x18, 0x96, 0x05, 0x9a, 0x07, 0x12, 0x80, 0xe2, 0xeb, 0x27, 0xb2, 0x75,
    0x09, 0x83, 0x2c, 0x1a, 0x1b, 0x6e, 0x5a, 0xa0, 0x52, 0x3b, 0xd6, 0xb3, 0x29, 0xe3, 0x2f, 0x84,
    0x53, 0xd1, 0x00, 0xed, 0x20, 0xfc, 0xb1, 0x5b, 0x6a, 0xcb, 0xbe, 0x39, 0x4a, 0x4c, 0x58, 0xcf,
    0xd0, 0xef, 0xaa, 0xfb, 0x43, 0x4d, 0x33, 0x85, 0x45, 0xf9, 0x02, 0x7f, 0x50, 0x3c, 0x9f, 0xa8,
    0x51, 0xa3, 0x40, 0x8f, 0x92, 0x9d, 0x38, 0xf5, 0xbc, 0xb6, 0xda, 0x21, 0x10, 0xff, 0xf3, 0xd2,
    0xcd, 0x0c, 0x13, 0xec, 0x5f, 0x97, 0x44, 0x17, 0xc4, 0xa7, 0x7e, 0x3d, 0x64, 0x5d, 0x19, 0x73,
    0x60, 0x81, 0x4f, 0xdc, 0x22, 0x2a, 0x90, 0x88, 0x46, 0xee, 0xb8, 0x14, 0xde, 0x5e, 0x0b, 0xdb,
    0xe0, 0x32, 0x3a, 0x0a, 0x49, 0x06, 0x24, 0x5c, 0xc2, 0xd3, 0xac, 0x62, 0x91, 0x95, 0xe4, 0x79,
    0xe7, 0xc8, 0x37, 0x6d, 0x8d, 0xd5, 0x4e, 0xa9, 0x6c, 0x56, 0xf4, 0xea, 0x65, 0x7a, 0xae, 0x08,
    0xba, 0x78, 0x25, 0x2e, 0x1c, 0xa6, 0xb4, 0xc6, 0xe8, 0xdd, 0x74, 0x1f, 0x4b, 0xbd, 0x8b, 0x8a,
    0x70, 0x3e, 0xb5, 0x66, 0x48, 0x03, 0xf6, 0x0e, 0x61, 0x35, 0x57, 0xb9, 0x86, 0xc1, 0x1d, 0x9e,
    0xe1, 0xf8, 0x98, 0x11, 0x69, 0xd9, 0x8e, 0x94, 0x9b, 0x1e, 0x87, 0xe9, 0xce, 0x55, 0x28, 0xdf,
    0x8c, 0xa1, 0x89, 0x0d, 0xbf, 0xe6, 0x42, 0x68, 0x41, 0x99, 0x2d, 0x0f, 0xb0, 0x54, 0xbb, 0x16,
];

/// The Inverse S-box used in the AES decryption algorithm.
const INV_S_BOX: [u8; 256] = [
    0x52, 0x09, 0x6a, 0xd5, 0x30, 0x36, 0xa5, 0x38, 0xbf, 0x40, 0xa3, 0x9e, 0x81, 0xf3, 0xd7, 0xfb,
    0x7c, 0xe3, 0x39, 0x82, 0x9b, 0x2f, 0xff, 0x87, 0x34, 0x8e, 0x43, 0x44, 0xc4, 0xde, 0xe9, 0xcb,
    0x54, 0x7b, 0x94, 0x32, 0xa6, 0xc2, 0x23, 0x3d, 0xee, 0x4c, 0x95, 0x0b, 0x42, 0xfa, 0xc3, 0x4e,
    0x08, 0x2e, 0xa1, 0x66, 0x28, 0xd9, 0x24, 0xb2, 0x76, 0x5b, 0xa2, 0x49, 0x6d, 0x8b, 0xd1, 0x25,
    0x72, 0xf8, 0xf6, 0x64, 0x86, 0x68, 0x98, 0x16, 0xd4, 0xa4, 0x5c, 0xcc, 0x5d, 0x65, 0xb6, 0x92,
    0x6c, 0x70, 0x48, 0x50, 0xfd, 0xed, 0xb9, 0xda, 0x5e, 0x15, 0x46, 0x57, 0xa7, 0x8d, 0x9d, 0x84,
    0x90, 0xd8, 0xab, 0x00, 0x8c, 0xbc, 0xd3, 0x0a, 0xf7, 0xe4, 0x58, 0x05, 0xb8, 0xb3, 0x45, 0x06,
    0xd0, 0x2c, 0x1e, 0x8f, 0xca, 0x3f, 0x0f, 0x02, 0xc1, 0xaf, 0xbd, 0x03, 0x01, 0x13, 0x8a, 0x6b,
    0x3a, 0x91, 0x11, 0x41, 0x4f, 0x67, 0xdc, 0xea, 0x97, 0xf2, 0xcf, 0xce, 0xf0, 0xb4, 0xe6, 0x73,
    0x96, 0xac, 0x74, 0x22, 0xe7, 0xad, 0x35, 0x85, 0xe2, 0xf9, 0x37, 0xe8, 0x1c, 0x75, 0xdf, 0x6e,
    0x47, 0xf1, 0x1a, 0x71, 0x1d, 0x29, 0xc5, 0x89, 0x6f, 0xb7, 0x62, 0x0e, 0xaa, 0x18, 0xbe, 0x1b,
    0xfc, 0x56, 0x3e, 0x4b, 0xc6, 0xd2, 0x79, 0x20, 0x9a, 0xdb, 0xc0, 0xfe, 0x78, 0xcd, 0x5a, 0xf4,
    0x1f, 0xdd, 0xa8, 0x33, 0x88, 0x07, 0xc7, 0x31, 0xb1, 0x12, 0x10, 0x59, 0x27, 0x80, 0xec, 0x5f,
    0x60, 0x51, 0x7f, 0xa9, 0x19, 0xb5, 0x4a, 0x0d, 0x2d, 0xe5, 0x7a, 0x9f, 0x93, 0xc9, 0x9c, 0xef,
    0xa0, 0xe0, 0x3b, 0x4d, 0xae, 0x2a, 0xf5, 0xb0, 0xc8, 0xeb, 0xbb, 0x3c, 0x83, 0x53, 0x99, 0x61,
    0x17, 0x2b, 0x04, 0x7e, 0xba, 0x77, 0xd6, 0x26, 0xe1, 0x69, 0x14, 0x63, 0x55, 0x21, 0x0c, 0x7d,
];

// The round constant word array, RCON[i], contains the values given by
// x to the power (i-1) being powers of x (x is denoted as {02}) in the field
// GF(2^8).
// Note that i starts at 1, not 0.
const RCON: [u8; 255] = [
    0x8D, 0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1B, 0x36, 0x6C, 0xD8, 0xAB, 0x4D, 0x9A,
    0x2F, 0x5E, 0xBC, 0x63, 0xC6, 0x97, 0x35, 0x6A, 0xD4, 0xB3, 0x7D, 0xFA, 0xEF, 0xC5, 0x91, 0x39,
    0x72, 0xE4, 0xD3, 0xBD, 0x61, 0xC2, 0x9F, 0x25, 0x4A, 0x94, 0x33, 0x66, 0xCC, 0x83, 0x1D, 0x3A,
    0x74, 0xE8, 0xCB, 0x8D, 0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1B, 0x36, 0x6C, 0xD8,
    0xAB, 0x4D, 0x9A, 0x2F, 0x5E, 0xBC, 0x63, 0xC6, 0x97, 0x35, 0x6A, 0xD4, 0xB3, 0x7D, 0xFA, 0xEF,
    0xC5, 0x91, 0x39, 0x72, 0xE4, 0xD3, 0xBD, 0x61, 0xC2, 0x9F, 0x25, 0x4A, 0x94, 0x33, 0x66, 0xCC,
    0x83, 0x1D, 0x3A, 0x74, 0xE8, 0xCB, 0x8D, 0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1B,
    0x36, 0x6C, 0xD8, 0xAB, 0x4D, 0x9A, 0x2F, 0x5E, 0xBC, 0x63, 0xC6, 0x97, 0x35, 0x6A, 0xD4, 0xB3,
    0x7D, 0xFA, 0xEF, 0xC5, 0x91, 0x39, 0x72, 0xE4, 0xD3, 0xBD, 0x61, 0xC2, 0x9F, 0x25, 0x4A, 0x94,
    0x33, 0x66, 0xCC, 0x83, 0x1D, 0x3A, 0x74, 0xE8, 0xCB, 0x8D, 0x01, 0x02, 0x04, 0x08, 0x10, 0x20,
    0x40, 0x80, 0x1B, 0x36, 0x6C, 0xD8, 0xAB, 0x4D, 0x9A, 0x2F, 0x5E, 0xBC, 0x63, 0xC6, 0x97, 0x35,
    0x6A, 0xD4, 0xB3, 0x7D, 0xFA, 0xEF, 0xC5, 0x91, 0x39, 0x72, 0xE4, 0xD3, 0xBD, 0x61, 0xC2, 0x9F,
    0x25, 0x4A, 0x94, 0x33, 0x66, 0xCC, 0x83, 0x1D, 0x3A, 0x74, 0xE8, 0xCB, 0x8D, 0x01, 0x02, 0x04,
    0x08, 0x10, 0x20, 0x40, 0x80, 0x1B, 0x36, 0x6C, 0xD8, 0xAB, 0x4D, 0x9A, 0x2F, 0x5E, 0xBC, 0x63,
    0xC6, 0x97, 0x35, 0x6A, 0xD4, 0xB3, 0x7D, 0xFA, 0xEF, 0xC5, 0x91, 0x39, 0x72, 0xE4, 0xD3, 0xBD,
    0x61, 0xC2, 0x9F, 0x25, 0x4A, 0x94, 0x33, 0x66, 0xCC, 0x83, 0x1D, 0x3A, 0x74, 0xE8, 0xCB,
];

/// `LOG_TABLE` is a lookup table used to perform multiplications in GF(256).
/// Each element in this table represents the logarithm to the base generator
/// of the index.
const LOG_TABLE: [u8; 256] = [
    0x00, 0x00, 0x19, 0x01, 0x32, 0x02, 0x1a, 0xc6, 0x4b, 0xc7, 0x1b, 0x68, 0x33, 0xee, 0xdf, 0x03,
    0x64, 0x04, 0xe0, 0x0e, 0x34, 0x8d, 0x81, 0xef, 0x4c, 0x71, 0x08, 0xc8, 0xf8, 0x69, 0x1c, 0xc1,
    0x7d, 0xc2, 0x1d, 0xb5, 0xf9, 0xb9, 0x27, 0x6a, 0x4d, 0xe4, 0xa6, 0x72, 0x9a, 0xc9, 0x09, 0x78,
    0x65, 0x2f, 0x8a, 0x05, 0x21, 0x0f, 0xe1, 0x24, 0x12, 0xf0, 0x82, 0x45, 0x35, 0x93, 0xda, 0x8e,
    0x96, 0x8f, 0xdb, 0xbd, 0x36, 0xd0, 0xce, 0x94, 0x13, 0x5c, 0xd2, 0xf1, 0x40, 0x46, 0x83, 0x38,
    0x66, 0xdd, 0xfd, 0x30, 0xbf, 0x06, 0x8b, 0x62, 0xb3, 0x25, 0xe2, 0x98, 0x22, 0x88, 0x91, 0x10,
    0x7e, 0x6e, 0x48, 0xc3, 0xa3, 0xb6, 0x1e, 0x42, 0x3a, 0x6b, 0x28, 0x54, 0xfa, 0x85, 0x3d, 0xba,
    0x2b, 0x79, 0x0a, 0x15, 0x9b, 0x9f, 0x5e, 0xca, 0x4e, 0xd4, 0xac, 0xe5, 0xf3, 0x73, 0xa7, 0x57,
    0xaf, 0x58, 0xa8, 0x50, 0xf4, 0xea, 0xd6, 0x74, 0x4f, 0xae, 0xe9, 0xd5, 0xe7, 0xe6, 0xad, 0xe8,
    0x2c, 0xd7, 0x75, 0x7a, 0xeb, 0x16, 0x0b, 0xf5, 0x59, 0xcb, 0x5f, 0xb0, 0x9c, 0xa9, 0x51, 0xa0,
    0x7f, 0x0c, 0xf6, 0x6f, 0x17, 0xc4, 0x49, 0xec, 0xd8, 0x43, 0x1f, 0x2d, 0xa4, 0x76, 0x7b, 0xb7,
    0xcc, 0xbb, 0x3e, 0x5a, 0xfb, 0x60, 0xb1, 0x86, 0x3b, 0x52, 0xa1, 0x6c, 0xaa, 0x55, 0x29, 0x9d,
    0x97, 0xb2, 0x87, 0x90, 0x61, 0xbe, 0xdc, 0xfc, 0xbc, 0x95, 0xcf, 0xcd, 0x37, 0x3f, 0x5b, 0xd1,
    0x53, 0x39, 0x84, 0x3c, 0x41, 0xa2, 0x6d, 0x47, 0x14, 0x2a, 0x9e, 0x5d, 0x56, 0xf2, 0xd3, 0xab,
    0x44, 0x11, 0x92, 0xd9, 0x23, 0x20, 0x2e, 0x89, 0xb4, 0x7c, 0xb8, 0x26, 0x77, 0x99, 0xe3, 0xa5,
    0x67, 0x4a, 0xed, 0xde, 0xc5, 0x31, 0xfe, 0x18, 0x0d, 0x63, 0x8c, 0x80, 0xc0, 0xf7, 0x70, 0x07,
];

/// `ALOG_TABLE` (antilog table) is a lookup table used for exponentiation in
/// GF(256).
const ALOG_TABLE: [u8; 256] = [
    0x01, 0x03, 0x05, 0x0f, 0x11, 0x33, 0x55, 0xff, 0x1a, 0x2e, 0x72, 0x96, 0xa1, 0xf8, 0x13, 0x35,
    0x5f, 0xe1, 0x38, 0x48, 0xd8, 0x73, 0x95, 0xa4, 0xf7, 0x02, 0x06, 0x0a, 0x1e, 0x22, 0x66, 0xaa,
    0xe5, 0x34, 0x5c, 0xe4, 0x37, 0x59, 0xeb, 0x26, 0x6a, 0xbe, 0xd9, 0x70, 0x90, 0xab, 0xe6, 0x31,
    0x53, 0xf5, 0x04, 0x0c, 0x14, 0x3c, 0x44, 0xcc, 0x4f, 0xd1, 0x68, 0xb8, 0xd3, 0x6e, 0xb2, 0xcd,
    0x4c, 0xd4, 0x67, 0xa9, 0xe0, 0x3b, 0x4d, 0xd7, 0x62, 0xa6, 0xf1, 0x08, 0x18, 0x28, 0x78, 0x88,
    0x83, 0x9e, 0xb9, 0xd0, 0x6b, 0xbd, 0xdc, 0x7f, 0x81, 0x98, 0xb3, 0xce, 0x49, 0xdb, 0x76, 0x9a,
    0xb5, 0xc4, 0x57, 0xf9, 0x10, 0x30, 0x50, 0xf0, 0x0b, 0x1d, 0x27, 0x69, 0xbb, 0xd6, 0x61, 0xa3,
    0xfe, 0x19, 0x2b, 0x7d, 0x87, 0x92, 0xad, 0xec, 0x2f, 0x71, 0x93, 0xae, 0xe9, 0x20, 0x60, 0xa0,
    0xfb, 0x16, 0x3a, 0x4e, 0xd2, 0x6d, 0xb7, 0xc2, 0x5d, 0xe7, 0x32, 0x56, 0xfa, 0x15, 0x3f, 0x41,
    0xc3, 0x5e, 0xe2, 0x3d, 0x47, 0xc9, 0x40, 0xc0, 0x5b, 0xed, 0x2c, 0x74, 0x9c, 0xbf, 0xda, 0x75,
    0x9f, 0xba, 0xd5, 0x64, 0xac, 0xef, 0x2a, 0x7e, 0x82, 0x9d, 0xbc, 0xdf, 0x7a, 0x8e, 0x89, 0x80,
    0x9b, 0xb6, 0xc1, 0x58, 0xe8, 0x23, 0x65, 0xaf, 0xea, 0x25, 0x6f, 0xb1, 0xc8, 0x43, 0xc5, 0x54,
    0xfc, 0x1f, 0x21, 0x63, 0xa5, 0xf4, 0x07, 0x09, 0x1b, 0x2d, 0x77, 0x99, 0xb0, 0xcb, 0x46, 0xca,
    0x45, 0xcf, 0x4a, 0xde, 0x79, 0x8b, 0x86, 0x91, 0xa8, 0xe3, 0x3e, 0x42, 0xc6, 0x51, 0xf3, 0x0e,
    0x12, 0x36, 0x5a, 0xee, 0x29, 0x7b, 0x8d, 0x8c, 0x8f, 0x8a, 0x85, 0x94, 0xa7, 0xf2, 0x0d, 0x17,
    0x39, 0x4b, 0xdd, 0x7c, 0x84, 0x97, 0xa2, 0xfd, 0x1c, 0x24, 0x6c, 0xb4, 0xc7, 0x52, 0xf6, 0x01,
];

/// Multiply two elements of GF(256).
///
/// This function is required for MixColumns and InvMixColumns steps in the AES
/// encryption and decryption process. It uses precomputed log and antilog
/// tables to perform the multiplication in the finite field with reducing
/// polynomial x^8 + x^4 + x^3 + x + 1 (0x11b).
fn mul(a: u8, b: u8) -> u8 {
    if a != 0 && b != 0 {
        let log_a = LOG_TABLE[a as usize] as usize;
        let log_b = LOG_TABLE[b as usize] as usize;
        let log_sum = (log_a + log_b) % 255; // Modulo 255 to keep within bounds
        ALOG_TABLE[log_sum]
    } else {
        0
    }
}

/// Expand an AES key into a buffer of round keys.
///
/// # Parameters
///
/// * `key`: A slice containing the initial AES key. Its length can be either
///          16, 24, or 32 bytes, corresponding to AES-128, AES-192, and
///          AES-256, respectively.
/// * `nk`: The number of 4-byte words in the original key. This is 4 for
///         AES-128, 6 for AES-192, and 8 for AES-256.
/// * `nr`: The number of rounds in the AES cipher, which depends on the key
///         size. This is 10 for AES-128, 12 for AES-192, and 14 for AES-256.
///
/// # Returns
///
/// A `[u8; 240]` array containing the expanded keys. This size accommodates
/// the largest key expansion (AES-256), which requires 15 round keys of 16
/// bytes each.
fn expand_key(key: &[u8], nk: usize, nr: usize) -> [u8; 240] {
    let mut expanded_key = [0u8; 240]; // Fixed buffer for expanded key
    let mut temp = [0u8; 4]; // Temporary storage for key schedule

    // Copy the initial key as the first round key
    for i in 0..nk {
        expanded_key[i * 4..(i + 1) * 4].copy_from_slice(&key[i * 4..(i + 1) * 4]);
    }

    let mut i = nk; // Initialize `i` to number of words in the original key

    while i < NB * (nr + 1) {
        // Load the last word from the previous round key into `temp`
        for j in 0..4 {
            temp[j] = expanded_key[(i - 1) * 4 + j];
        }

        if i % nk == 0 {
            // Perform the RotWord operation for the first word in each new key
            let k = temp[0];
            temp.rotate_left(1); // Rotate the 4 bytes of the word to the left
            temp[3] = k;

            // SubWord operation: Substitute each byte in `temp` using the S-Box
            for j in 0..4 {
                temp[j] = S_BOX[temp[j] as usize];
            }

            // XOR the first byte of `temp` with the round constant (RCON)
            temp[0] ^= RCON[i / nk];
        } else if nk > 6 && i % nk == 4 {
            // For AES-256, apply SubWord operation every fourth word
            for j in 0..4 {
                temp[j] = S_BOX[temp[j] as usize];
            }
        }

        // Generate the next word of the round key
        for j in 0..4 {
            expanded_key[i * 4 + j] = expanded_key[(i - nk) * 4 + j] ^ temp[j];
        }
        i += 1;
    }
    expanded_key
}

/// Add a round key to the state using an XOR operation.
///
/// The state is modified in place by applying the XOR operation with the
/// corresponding round key from the expanded key buffer.
fn add_round_key(round: usize, state: &mut [[u8; 4]; 4], expanded_key: &[u8; 240]) {
    for i in 0..4 {
        for j in 0..4 {
            state[j][i] ^= expanded_key[round * NB * 4 + i * NB + j];
        }
    }
}

/// Perform the SubBytes transformation in the AES encryption algorithm.
fn sub_bytes(state: &mut [[u8; 4]; 4]) {
    for i in 0..4 {
        for j in 0..4 {
            state[i][j] = S_BOX[state[i][j] as usize];
        }
    }
}

/// Perform the InvSubBytes (Inverse SubBytes) transformation in the AES
/// decryption algorithm.
fn inv_sub_bytes(state: &mut [[u8; 4]; 4]) {
    for i in 0..4 {
        for j in 0..4 {
            state[i][j] = INV_S_BOX[state[i][j] as usize];
        }
    }
}

/// Perform the ShiftRows transformation for AES encryption.
fn shift_rows(state: &mut [[u8; 4]; 4]) {
    // Rotate the second row 1 column to the left
    let temp = state[1][0];
    state[1][0] = state[1][1];
    state[1][1] = state[1][2];
    state[1][2] = state[1][3];
    state[1][3] = temp;

    // Rotate the third row 2 columns to the left
    let temp = state[2][0];
    state[2][0] = state[2][2];
    state[2][2] = temp;

    let temp = state[2][1];
    state[2][1] = state[2][3];
    state[2][3] = temp;

    // Rotate the fourth row 3 columns to the left
    let temp = state[3][0];
    state[3][0] = state[3][3];
    state[3][3] = state[3][2];
    state[3][2] = state[3][1];
    state[3][1] = temp;
}

/// Perform the InvShiftRows transformation for AES decryption.
fn inv_shift_rows(state: &mut [[u8; 4]; 4]) {
    // Rotate first row 1 columns to right
    let temp = state[1][3];
    state[1][3] = state[1][2];
    state[1][2] = state[1][1];
    state[1][1] = state[1][0];
    state[1][0] = temp;

    // Rotate second row 2 columns to right
    let temp = state[2][0];
    state[2][0] = state[2][2];
    state[2][2] = temp;

    let temp = state[2][1];
    state[2][1] = state[2][3];
    state[2][3] = temp;

    // Rotate third row 3 columns to right
    let temp = state[3][0];
    state[3][0] = state[3][1];
    state[3][1] = state[3][2];
    state[3][2] = state[3][3];
    state[3][3] = temp;
}

/// Perform the MixColumns transformation for AES encryption.
fn mix_columns(state: &mut [[u8; 4]; 4]) {
    for i in 0..4 {
        // Iterate over each column
        let t = state[0][i];
        let tmp = state[0][i] ^ state[1][i] ^ state[2][i] ^ state[3][i];

        let mut tm = state[0][i] ^ state[1][i];
        tm = mul(tm, 2);
        state[0][i] ^= tm ^ tmp;

        tm = state[1][i] ^ state[2][i];
        tm = mul(tm, 2);
        state[1][i] ^= tm ^ tmp;

        tm = state[2][i] ^ state[3][i];
        tm = mul(tm, 2);
        state[2][i] ^= tm ^ tmp;

        tm = state[3][i] ^ t;
        tm = mul(tm, 2);
        state[3][i] ^= tm ^ tmp;
    }
}

/// Perform the InvMixColumns transformation for the AES decryption.
fn inv_mix_columns(state: &mut [[u8; 4]; 4]) {
    for i in 0..4 {
        // Save original state for column i
        let a = state[0][i];
        let b = state[1][i];
        let c = state[2][i];
        let d = state[3][i];

        // Perform the inverse mix column operation on each element of the column
        state[0][i] = mul(a, 0x0e) ^ mul(b, 0x0b) ^ mul(c, 0x0d) ^ mul(d, 0x09);
        state[1][i] = mul(a, 0x09) ^ mul(b, 0x0e) ^ mul(c, 0x0b) ^ mul(d, 0x0d);
        state[2][i] = mul(a, 0x0d) ^ mul(b, 0x09) ^ mul(c, 0x0e) ^ mul(d, 0x0b);
        state[3][i] = mul(a, 0x0b) ^ mul(b, 0x0d) ^ mul(c, 0x09) ^ mul(d, 0x0e);
    }
}

/// Copy a 16-byte block into a 4x4 state array.
fn copy_block_to_state(block: &[u8; AES_BLOCK_SIZE]) -> [[u8; 4]; 4] {
    let mut state = [[0u8; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            state[j][i] = block[i * 4 + j];
        }
    }

    state
}

/// Copy a 4x4 state array into a 16-byte block.
fn copy_state_to_block(state: &[[u8; 4]; 4]) -> [u8; AES_BLOCK_SIZE] {
    let mut block = [0u8; AES_BLOCK_SIZE];

    for i in 0..4 {
        for j in 0..4 {
            block[i * 4 + j] = state[j][i];
        }
    }

    block
}

/// Calculate the number of 32-bit words in the key and the number of
/// encryption rounds based on the key length for AES encryption.
///
/// # Panics
///
/// Panics if the key length is not one of the valid AES key lengths (128,
/// 192, or 256 bits). This is only reachable internally after
/// `validate_key_len` has already confirmed the length, so it signals an
/// invariant violation rather than a user-input error.
fn calculate_parameters(key_length_bytes: usize) -> (usize, usize) {
    let words_in_key = key_length_bytes / 4; // 1 word = 4 bytes
    let encryption_rounds = match words_in_key {
        4 => 10, // 128-bit key
        6 => 12, // 192-bit key
        8 => 14, // 256-bit key
        _ => panic!(
            "AES CORE PANIC: Invalid AES key length: {}",
            key_length_bytes
        ),
    };

    (words_in_key, encryption_rounds)
}

/// Validate the key length for AES encryption or decryption.
fn validate_key_len(key_len: usize) -> Result<(), Box<dyn Error>> {
    match key_len {
        AES_128_KEY_SIZE | AES_192_KEY_SIZE | AES_256_KEY_SIZE => Ok(()),
        _ => Err(Box::new(AesError::InvalidKeyLength {
            expected_one_of: [AES_128_KEY_SIZE, AES_192_KEY_SIZE, AES_256_KEY_SIZE],
            got: key_len,
        })),
    }
}

/// Overwrite the expanded key buffer with zeros before it goes out of scope.
///
/// The expanded key is a sensitive resource: it encodes every round key
/// derivable from the cipher key, so it should not linger in memory longer
/// than the block operation that needs it.
fn zeroize_expanded_key(expanded_key: &mut [u8; 240]) {
    for byte in expanded_key.iter_mut() {
        *byte = 0;
    }
}

/// Encrypt a single block using the AES algorithm.
///
/// # Parameters
///
/// * `block`: A reference to a 16-byte array representing the plaintext block
///            to be encrypted.
/// * `key`: A reference to a byte slice representing the encryption key. The
///          length of this slice determines the key size: 16 bytes for AES-128,
///          24 bytes for AES-192, and 32 bytes for AES-256.
///
/// # Errors
///
/// Returns an error if the key length is not one of the valid AES key sizes
/// (16, 24, or 32 bytes).
pub fn aes_enc_block(
    block: &[u8; AES_BLOCK_SIZE],
    key: &[u8],
) -> Result<[u8; AES_BLOCK_SIZE], Box<dyn Error>> {
    let key_len = key.len();

    validate_key_len(key_len)?;

    let (nk, nr) = calculate_parameters(key_len);

    let mut state = copy_block_to_state(block);

    let mut expanded_key = expand_key(key, nk, nr);

    // Add the first round key to the state before starting the rounds
    add_round_key(0, &mut state, &expanded_key);

    // Main rounds
    for round in 1..nr {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(round, &mut state, &expanded_key);
    }

    // Final round (without mix_columns)
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(nr, &mut state, &expanded_key);

    let ciphertext = copy_state_to_block(&state);
    zeroize_expanded_key(&mut expanded_key);

    Ok(ciphertext)
}

/// Decrypt a single block using the AES algorithm.
///
/// # Parameters
///
/// * `ciphertext`: A reference to a 16-byte array representing the encrypted
///                 block to be decrypted.
/// * `key`: A reference to a byte slice representing the decryption key. The
///          length of this slice determines the key size: 16 bytes for AES-128,
///          24 bytes for AES-192, and 32 bytes for AES-256.
///
/// # Errors
///
/// Returns an error if the key length is not one of the valid AES key sizes
/// (16, 24, or 32 bytes).
pub fn aes_dec_block(
    ciphertext: &[u8; AES_BLOCK_SIZE],
    key: &[u8],
) -> Result<[u8; AES_BLOCK_SIZE], Box<dyn Error>> {
    let key_len = key.len();

    validate_key_len(key_len)?;

    let (nk, nr) = calculate_parameters(key_len);

    let mut state = copy_block_to_state(ciphertext);

    let mut expanded_key = expand_key(key, nk, nr);

    // Add the last round key to the state before starting the rounds
    add_round_key(nr, &mut state, &expanded_key);

    // Main rounds
    for round in (1..nr).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(round, &mut state, &expanded_key);
        inv_mix_columns(&mut state);
    }

    // Final round (without inv_mix_columns)
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(0, &mut state, &expanded_key);

    let plaintext = copy_state_to_block(&state);
    zeroize_expanded_key(&mut expanded_key);

    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sbox_inv_sbox_is_identity() {
        for x in 0..=255usize {
            assert_eq!(INV_S_BOX[S_BOX[x] as usize], x as u8);
        }
    }

    #[test]
    fn mul_table_matches_xtime_identities() {
        for x in 0..=255u8 {
            // T3(x) == T2(x) ^ x
            assert_eq!(mul(x, 3), mul(x, 2) ^ x);
        }
    }

    #[test]
    fn mix_columns_inv_mix_columns_is_identity() {
        let mut state = [[0u8; 4]; 4];
        for (i, row) in state.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = ((i * 4 + j) as u8).wrapping_mul(17).wrapping_add(3);
            }
        }
        let original = state;
        mix_columns(&mut state);
        inv_mix_columns(&mut state);
        assert_eq!(state, original);
    }

    #[test]
    fn expand_key_boundary_matches_input_key() {
        let key: [u8; 16] = [
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
            0x4f, 0x3c,
        ];
        let expanded = expand_key(&key, 4, 10);
        assert_eq!(&expanded[0..16], &key[..]);
    }

    // FIPS-197 Appendix B
    #[test]
    fn aes128_fips197_appendix_b() {
        let key: [u8; 16] = [
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
            0x4f, 0x3c,
        ];
        let plaintext: [u8; 16] = [
            0x32, 0x43, 0xf6, 0xa8, 0x88, 0x5a, 0x30, 0x8d, 0x31, 0x31, 0x98, 0xa2, 0xe0, 0x37,
            0x07, 0x34,
        ];
        let expected: [u8; 16] = [
            0x39, 0x25, 0x84, 0x1d, 0x02, 0xdc, 0x09, 0xfb, 0xdc, 0x11, 0x85, 0x97, 0x19, 0x6a,
            0x0b, 0x32,
        ];
        let ciphertext = aes_enc_block(&plaintext, &key).unwrap();
        assert_eq!(ciphertext, expected);
        assert_eq!(aes_dec_block(&ciphertext, &key).unwrap(), plaintext);
    }

    #[test]
    fn aes_enc_block_rejects_bad_key_length() {
        let block = [0u8; 16];
        let key = [0u8; 20];
        assert!(aes_enc_block(&block, &key).is_err());
    }
}
