//! A Rust-based software library for AES.
//!
//! This crate implements the AES (Rijndael) block cipher at key sizes 128,
//! 192, and 256 bits, together with the ECB, CBC, and CTR modes of
//! operation and PKCS#7 padding. It handles the core cryptographic
//! operations; framing concerns such as hex/Base64 codecs and CLI option
//! parsing live in the `aescli` binary that ships alongside this library.
//!
//! # Disclaimer
//!
//! This implementation is provided "as is", without warranty of any kind,
//! express or implied. It is not constant-time and makes no attempt at
//! side-channel hardening. Users are encouraged to understand and evaluate
//! the suitability of this code for their purposes, especially in critical
//! or sensitive systems.

pub mod aes;
pub mod error;
pub mod padding;
