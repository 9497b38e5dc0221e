//! Command-line front end for the `soft_aes` library.
//!
//! Encrypts or decrypts a byte stream with AES in ECB, CBC, or CTR mode. The
//! stream is read from a file or stdin, optionally Base64- or hex-decoded on
//! the way in, and written to stdout, optionally Base64- or hex-encoded on
//! the way out.

use std::fs::File;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use rand::RngCore;

use soft_aes::aes::{self, CipherMode, AES_BLOCK_SIZE};
use soft_aes::error::AesError;

/// Encrypt or decrypt data with AES in ECB, CBC, or CTR mode.
#[derive(Parser, Debug)]
#[command(name = "aescli", about = "Encrypt or decrypt a byte stream with AES.")]
struct Cli {
    /// Use a 128-bit key.
    #[arg(long = "128")]
    bits128: bool,
    /// Use a 192-bit key.
    #[arg(long = "192")]
    bits192: bool,
    /// Use a 256-bit key.
    #[arg(long = "256")]
    bits256: bool,

    /// Electronic Codebook mode.
    #[arg(long)]
    ecb: bool,
    /// Cipher Block Chaining mode.
    #[arg(long)]
    cbc: bool,
    /// Counter mode.
    #[arg(long)]
    ctr: bool,

    /// Encrypt the input.
    #[arg(long)]
    encrypt: bool,
    /// Decrypt the input.
    #[arg(long)]
    decrypt: bool,

    /// ASCII passkey, length checked against the selected key size.
    #[arg(long)]
    key: Option<String>,
    /// Hex-encoded passkey, length checked against the selected key size.
    #[arg(long)]
    hexkey: Option<String>,

    /// ASCII initialization vector, truncated/zero-padded to 16 bytes.
    #[arg(long)]
    iv: Option<String>,
    /// Hex-encoded initialization vector (32 hex characters).
    #[arg(long)]
    hexiv: Option<String>,
    /// Generate a random IV; prepend it to the output on encrypt, consume it
    /// from the front of the input on decrypt. CBC/CTR only.
    #[arg(long)]
    randiv: bool,

    /// Suppress PKCS#7 padding on encrypt, skip its removal on decrypt.
    #[arg(long)]
    nopkcs: bool,

    /// Treat input as Base64.
    #[arg(long)]
    base64: bool,
    /// Alias for `--base64`.
    #[arg(long)]
    ibase64: bool,
    /// Treat input as hex.
    #[arg(long)]
    hex: bool,
    /// Alias for `--hex`.
    #[arg(long)]
    ihex: bool,
    /// Emit output as Base64.
    #[arg(long)]
    obase64: bool,
    /// Emit output as hex.
    #[arg(long)]
    ohex: bool,

    /// Input file; `-` or omitted means stdin.
    #[arg(long)]
    file: Option<String>,

    /// Run the built-in AES-128 known-answer test and exit.
    #[arg(long)]
    test128: bool,
    /// Run the built-in AES-192 known-answer test and exit.
    #[arg(long)]
    test192: bool,
    /// Run the built-in AES-256 known-answer test and exit.
    #[arg(long)]
    test256: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("aescli: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.test128 || cli.test192 || cli.test256 {
        return run_self_tests(&cli);
    }

    let key_bits = select_one(
        &[(cli.bits128, 128), (cli.bits192, 192), (cli.bits256, 256)],
        "exactly one of --128, --192, --256 is required",
    )?;
    let mode = select_one(
        &[
            (cli.ecb, CipherMode::Ecb),
            (cli.cbc, CipherMode::Cbc),
            (cli.ctr, CipherMode::Ctr),
        ],
        "exactly one of --ecb, --cbc, --ctr is required",
    )?;
    let encrypting = select_one(
        &[(cli.encrypt, true), (cli.decrypt, false)],
        "exactly one of --encrypt, --decrypt is required",
    )?;

    let key = parse_key(&cli, key_bits)?;

    let padding = if cli.nopkcs || mode == CipherMode::Ctr {
        None
    } else {
        Some("PKCS7")
    };

    let input = read_input(&cli)?;
    let input = decode_input(&cli, &input)?;

    let uses_iv_block = cli.randiv && mode != CipherMode::Ecb;

    let output = if encrypting {
        let iv = if cli.randiv {
            random_iv()
        } else {
            parse_iv(&cli)?
        };
        let ciphertext = aes::encrypt(&key, &input, mode, &iv, padding)
            .map_err(|e| anyhow!("{e}"))
            .context("encryption failed")?;
        if uses_iv_block {
            let mut framed = Vec::with_capacity(AES_BLOCK_SIZE + ciphertext.len());
            framed.extend_from_slice(&iv);
            framed.extend_from_slice(&ciphertext);
            framed
        } else {
            ciphertext
        }
    } else {
        let (iv, body) = if uses_iv_block {
            if input.len() < AES_BLOCK_SIZE {
                bail!("input is shorter than the prepended IV block");
            }
            let mut iv = [0u8; AES_BLOCK_SIZE];
            iv.copy_from_slice(&input[..AES_BLOCK_SIZE]);
            (iv, &input[AES_BLOCK_SIZE..])
        } else {
            (parse_iv(&cli)?, input.as_slice())
        };
        aes::decrypt(&key, body, mode, &iv, padding)
            .map_err(|e| anyhow!("{e}"))
            .context("decryption failed")?
    };

    write_output(&cli, &output)
}

/// Picks the single `true`-flagged entry out of `options`, erroring if zero
/// or more than one are set.
fn select_one<T: Copy>(options: &[(bool, T)], message: &str) -> Result<T> {
    let mut chosen = None;
    for (flag, value) in options {
        if *flag {
            if chosen.is_some() {
                bail!(message.to_string());
            }
            chosen = Some(*value);
        }
    }
    chosen.ok_or_else(|| anyhow!(message.to_string()))
}

fn parse_key(cli: &Cli, key_bits: usize) -> Result<Vec<u8>> {
    let expected_len = key_bits / 8;
    match (&cli.key, &cli.hexkey) {
        (Some(_), Some(_)) => bail!("specify only one of --key, --hexkey"),
        (Some(key), None) => {
            if key.len() != expected_len {
                bail!("--{key_bits} requires a --key of length {expected_len}");
            }
            Ok(key.as_bytes().to_vec())
        }
        (None, Some(hexkey)) => {
            let key = hex::decode(hexkey).context("--hexkey is not valid hex")?;
            if key.len() != expected_len {
                bail!("--{key_bits} requires a --hexkey of length {expected_len} bytes");
            }
            Ok(key)
        }
        (None, None) => bail!("one of --key, --hexkey is required"),
    }
}

fn parse_iv(cli: &Cli) -> Result<[u8; AES_BLOCK_SIZE]> {
    match (&cli.iv, &cli.hexiv) {
        (Some(_), Some(_)) => bail!("specify only one of --iv, --hexiv"),
        (Some(iv), None) => {
            let mut block = [0u8; AES_BLOCK_SIZE];
            let bytes = iv.as_bytes();
            let n = bytes.len().min(AES_BLOCK_SIZE);
            block[..n].copy_from_slice(&bytes[..n]);
            Ok(block)
        }
        (None, Some(hexiv)) => {
            let decoded = hex::decode(hexiv).context("--hexiv is not valid hex")?;
            let got = decoded.len();
            decoded
                .try_into()
                .map_err(|_| anyhow!(AesError::InvalidIvLength { got }))
        }
        (None, None) => Ok([0u8; AES_BLOCK_SIZE]),
    }
}

fn random_iv() -> [u8; AES_BLOCK_SIZE] {
    let mut iv = [0u8; AES_BLOCK_SIZE];
    rand::thread_rng().fill_bytes(&mut iv);
    iv
}

fn read_input(cli: &Cli) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    match cli.file.as_deref() {
        None | Some("-") => {
            io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
        }
        Some(path) => {
            File::open(path)
                .with_context(|| format!("can't read file \"{path}\""))?
                .read_to_end(&mut buf)
                .with_context(|| format!("failed to read \"{path}\""))?;
        }
    }
    Ok(buf)
}

fn decode_input(cli: &Cli, raw: &[u8]) -> Result<Vec<u8>> {
    if cli.base64 || cli.ibase64 {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD
            .decode(strip_ascii_whitespace(raw))
            .context("input is not valid Base64")
    } else if cli.hex || cli.ihex {
        let text = std::str::from_utf8(raw).context("hex input is not valid UTF-8")?;
        hex::decode(text.trim()).context("input is not valid hex")
    } else {
        Ok(raw.to_vec())
    }
}

fn strip_ascii_whitespace(data: &[u8]) -> Vec<u8> {
    data.iter().copied().filter(|b| !b.is_ascii_whitespace()).collect()
}

fn write_output(cli: &Cli, data: &[u8]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.obase64 {
        use base64::Engine;
        let encoded = base64::engine::general_purpose::STANDARD.encode(data);
        for line in encoded.as_bytes().chunks(80) {
            out.write_all(line)?;
            out.write_all(b"\n")?;
        }
    } else if cli.ohex {
        writeln!(out, "{}", hex::encode(data))?;
    } else {
        out.write_all(data)?;
    }
    Ok(())
}

/// FIPS-197 Appendix C known-answer vectors, run by `--test128/192/256`.
fn run_self_tests(cli: &Cli) -> Result<()> {
    let vectors: &[(usize, &str, &str, &str)] = &[
        (
            128,
            "000102030405060708090a0b0c0d0e0f",
            "00112233445566778899aabbccddeeff",
            "69c4e0d86a7b0430d8cdb78070b4c55a",
        ),
        (
            192,
            "000102030405060708090a0b0c0d0e0f1011121314151617",
            "00112233445566778899aabbccddeeff",
            "dda97ca4864cdfe06eaf70a0ec0d7191",
        ),
        (
            256,
            "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
            "00112233445566778899aabbccddeeff",
            "8ea2b7ca516745bfeafc49904b496089",
        ),
    ];

    let selected = [
        (cli.test128, 128),
        (cli.test192, 192),
        (cli.test256, 256),
    ];

    for (run_it, bits) in selected {
        if !run_it {
            continue;
        }
        let (_, key_hex, plaintext_hex, ciphertext_hex) =
            vectors.iter().find(|(b, ..)| *b == bits).unwrap();
        let key = hex::decode(key_hex).unwrap();
        let plaintext: [u8; 16] = hex::decode(plaintext_hex).unwrap().try_into().unwrap();
        let expected: [u8; 16] = hex::decode(ciphertext_hex).unwrap().try_into().unwrap();

        let actual = soft_aes::aes::aes_enc_block(&plaintext, &key)
            .map_err(|e| anyhow!("{e}"))
            .with_context(|| format!("AES-{bits} self-test encryption failed"))?;
        if actual != expected {
            bail!("AES-{bits} self-test FAILED");
        }
        println!("AES-{bits} self-test passed");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_one_rejects_zero_and_many() {
        assert!(select_one(&[(false, 1), (false, 2)], "need one").is_err());
        assert!(select_one(&[(true, 1), (true, 2)], "need one").is_err());
        assert_eq!(select_one(&[(true, 1), (false, 2)], "need one").unwrap(), 1);
    }

    #[test]
    fn decode_input_roundtrips_hex_and_base64() {
        let mut cli = Cli::parse_from(["aescli", "--hex"]);
        assert_eq!(decode_input(&cli, b"deadbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);

        cli = Cli::parse_from(["aescli", "--base64"]);
        assert_eq!(decode_input(&cli, b"3q2+7w==").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);

        cli = Cli::parse_from(["aescli"]);
        assert_eq!(decode_input(&cli, b"\x01\x02").unwrap(), vec![0x01, 0x02]);
    }

    #[test]
    fn parse_key_checks_length() {
        let cli = Cli::parse_from(["aescli", "--key", "short"]);
        assert!(parse_key(&cli, 128).is_err());

        let cli = Cli::parse_from(["aescli", "--key", "0123456789abcdef"]);
        assert_eq!(parse_key(&cli, 128).unwrap(), b"0123456789abcdef".to_vec());
    }

    #[test]
    fn parse_iv_pads_ascii_to_block_size() {
        let cli = Cli::parse_from(["aescli", "--iv", "short"]);
        let iv = parse_iv(&cli).unwrap();
        assert_eq!(&iv[..5], b"short");
        assert_eq!(&iv[5..], &[0u8; 11]);
    }

    #[test]
    fn self_test_128_passes() {
        let cli = Cli::parse_from(["aescli", "--test128"]);
        run_self_tests(&cli).unwrap();
    }
}
